use crate::{
    api::ApiState,
    error::ApiError,
    models::{EditorRequest, Identity},
    permissions::{Role, allowed_actions},
    session::SessionStore,
};

/// AdminDashboard
///
/// View-model behind the admin dashboard: the registered-user roster (split
/// into viewers and editors), the pending elevation-request queue, and the
/// permission summary for the signed-in role. Neither list is cached beyond
/// this view's lifetime; both are refetched on load and after mutations.
pub struct AdminDashboard {
    api: ApiState,
    users: Vec<Identity>,
    requests: Vec<EditorRequest>,
    users_error: Option<String>,
}

impl AdminDashboard {
    pub fn new(api: ApiState) -> Self {
        Self {
            api,
            users: Vec::new(),
            requests: Vec::new(),
            users_error: None,
        }
    }

    /// load_users
    ///
    /// Fetches the registered-user roster. On failure the previous roster
    /// stays and an inline message is recorded.
    pub async fn load_users(&mut self) -> Result<(), ApiError> {
        match self.api.users().await {
            Ok(users) => {
                self.users = users;
                self.users_error = None;
                Ok(())
            }
            Err(err) => {
                tracing::error!("user roster fetch failed: {err}");
                self.users_error = Some("Failed to load users".to_string());
                Err(err)
            }
        }
    }

    /// load_requests
    ///
    /// Fetches the pending elevation queue through the session store.
    pub async fn load_requests(&mut self, session: &SessionStore) -> Result<(), ApiError> {
        self.requests = session.fetch_editor_requests().await?;
        Ok(())
    }

    // --- Accessors ---

    pub fn users(&self) -> &[Identity] {
        &self.users
    }

    pub fn users_error(&self) -> Option<&str> {
        self.users_error.as_deref()
    }

    pub fn requests(&self) -> &[EditorRequest] {
        &self.requests
    }

    pub fn viewers(&self) -> Vec<&Identity> {
        self.users.iter().filter(|u| u.role == Role::Viewer).collect()
    }

    pub fn editors(&self) -> Vec<&Identity> {
        self.users.iter().filter(|u| u.role == Role::Editor).collect()
    }

    /// permission_summary
    ///
    /// Human-readable labels of everything the given role may do, for the
    /// "Your Permissions" panel.
    pub fn permission_summary(role: Role) -> Vec<&'static str> {
        allowed_actions(role).iter().map(|a| a.label()).collect()
    }

    // --- Moderation ---

    /// approve
    ///
    /// Approves an elevation request, then reloads both the queue and the
    /// roster (the requester's role just changed). A roster reload failure is
    /// already surfaced inline and does not fail the approval.
    pub async fn approve(&mut self, session: &SessionStore, id: &str) -> Result<(), ApiError> {
        session.approve_editor_request(id).await?;
        let _ = self.load_users().await;
        self.load_requests(session).await
    }

    /// reject
    ///
    /// Rejects an elevation request and reloads the queue.
    pub async fn reject(&mut self, session: &SessionStore, id: &str) -> Result<(), ApiError> {
        session.reject_editor_request(id).await?;
        self.load_requests(session).await
    }
}
