use crate::{
    api::ApiState,
    credentials::CredentialState,
    error::ApiError,
    models::{
        AuthPayload, EditorRequest, EditorRequestState, EditorRequestStatus, Identity,
        LoginRequest, RegisterRequest,
    },
    permissions::Role,
};

/// AuthState
///
/// The session lifecycle. A fresh store starts in `Loading` and stays there
/// until the startup check (`check_auth`) resolves it to `Authenticated` or
/// `Anonymous`. Dependent logic (notably the route guard) must not make
/// redirect decisions while the state is still `Loading`.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthState {
    Loading,
    Authenticated(Identity),
    Anonymous,
}

/// SessionStore
///
/// The explicitly owned, injectable session context: the single holder of the
/// current identity and the orchestrator of every auth and elevation
/// operation. Views receive it by reference rather than reaching for ambient
/// global state, which keeps it substitutable in tests.
///
/// Invariant: the identity is non-null if and only if a credential is present
/// in storage and was accepted by the most recent session check. Every
/// mutation below maintains the two together.
///
/// Mutations go through `&mut self`, so the borrow checker serializes them;
/// there is no internal locking, and rapid operation sequences resolve as
/// last-writer-wins.
pub struct SessionStore {
    api: ApiState,
    credentials: CredentialState,
    state: AuthState,
}

impl SessionStore {
    /// Creates a store in the `Loading` state. Call `check_auth` to resolve it.
    pub fn new(api: ApiState, credentials: CredentialState) -> Self {
        Self {
            api,
            credentials,
            state: AuthState::Loading,
        }
    }

    // --- Lifecycle Operations ---

    /// check_auth
    ///
    /// The startup session check (initial state transition).
    ///
    /// - No stored credential: resolve to `Anonymous` without a network call.
    /// - Credential present: ask the remote API who we are.
    ///   - Success: `Authenticated(identity)`.
    ///   - 401: the credential is stale; delete it and resolve to `Anonymous`.
    ///   - Any other failure (network): resolve to `Anonymous` but keep the
    ///     credential — a transient failure does not mean the credential is bad.
    pub async fn check_auth(&mut self) {
        if self.credentials.load().is_none() {
            self.state = AuthState::Anonymous;
            return;
        }

        match self.api.me().await {
            Ok(identity) => {
                tracing::debug!(user = %identity.username, "session check resolved");
                self.state = AuthState::Authenticated(identity);
            }
            Err(err) => {
                if err.is_unauthorized() {
                    tracing::info!("stored credential rejected, clearing it");
                    self.credentials.clear();
                } else {
                    tracing::warn!("session check failed: {err}");
                }
                self.state = AuthState::Anonymous;
            }
        }
    }

    /// login
    ///
    /// On success the returned credential is persisted and the identity cached;
    /// on failure the store is left untouched and the normalized error is
    /// returned for inline rendering — it never interrupts control flow.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<AuthPayload, ApiError> {
        let payload = self
            .api
            .login(LoginRequest {
                email: email.to_string(),
                password: password.to_string(),
            })
            .await?;

        // Credential first, then identity: the two must never diverge for
        // more than one round trip.
        self.credentials.store(&payload.token);
        self.state = AuthState::Authenticated(payload.user.clone());
        Ok(payload)
    }

    /// register
    ///
    /// Same contract as `login`, against the registration endpoint. The
    /// assigned role comes back from the server.
    pub async fn register(
        &mut self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthPayload, ApiError> {
        let payload = self
            .api
            .register(RegisterRequest {
                username: username.to_string(),
                email: email.to_string(),
                password: password.to_string(),
            })
            .await?;

        self.credentials.store(&payload.token);
        self.state = AuthState::Authenticated(payload.user.clone());
        Ok(payload)
    }

    /// logout
    ///
    /// Best-effort remote invalidation followed by an unconditional local
    /// clear. The local clear must never be blocked by network failure, so a
    /// remote error is only logged.
    pub async fn logout(&mut self) {
        if let Err(err) = self.api.logout().await {
            tracing::warn!("remote logout failed (clearing locally anyway): {err}");
        }
        self.credentials.clear();
        self.state = AuthState::Anonymous;
    }

    // --- Elevation Workflow ---

    /// request_editor
    ///
    /// A Viewer's request for promotion to Editor. Conceptually valid only for
    /// Viewer identities; that is an affordance concern (`can_request_editor`),
    /// not something enforced here — the server decides.
    ///
    /// On success the cached identity's request status flips to pending so the
    /// UI can disable re-requesting without a refetch.
    pub async fn request_editor(&mut self) -> Result<(), ApiError> {
        self.api.request_editor().await?;

        if let AuthState::Authenticated(identity) = &mut self.state {
            identity.editor_request = Some(EditorRequestState {
                status: EditorRequestStatus::Pending,
            });
        }
        Ok(())
    }

    /// fetch_editor_requests
    ///
    /// Admin: the current pending elevation queue.
    pub async fn fetch_editor_requests(&self) -> Result<Vec<EditorRequest>, ApiError> {
        self.api.editor_requests().await
    }

    /// approve_editor_request
    ///
    /// Admin: promotes the requesting user to Editor.
    pub async fn approve_editor_request(&self, id: &str) -> Result<(), ApiError> {
        self.api.approve_editor_request(id).await
    }

    /// reject_editor_request
    ///
    /// Admin: declines the request; the user stays a Viewer.
    pub async fn reject_editor_request(&self, id: &str) -> Result<(), ApiError> {
        self.api.reject_editor_request(id).await
    }

    // --- Accessors ---

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    pub fn identity(&self) -> Option<&Identity> {
        match &self.state {
            AuthState::Authenticated(identity) => Some(identity),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.state == AuthState::Loading
    }

    /// Whether a credential currently exists in durable storage. Checked
    /// independently of the in-memory identity as a defense against stale
    /// state (see the route guard).
    pub fn credential_present(&self) -> bool {
        self.credentials.load().is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.identity().map(|i| i.role)
    }

    pub fn is_admin(&self) -> bool {
        self.role() == Some(Role::Admin)
    }

    pub fn is_editor(&self) -> bool {
        self.role() == Some(Role::Editor)
    }

    pub fn is_viewer(&self) -> bool {
        self.role() == Some(Role::Viewer)
    }

    /// can_request_editor
    ///
    /// Affordance check for the elevation button: only Viewers, and not while
    /// a request is already pending.
    pub fn can_request_editor(&self) -> bool {
        match self.identity() {
            Some(identity) if identity.role == Role::Viewer => {
                let status = identity
                    .editor_request
                    .as_ref()
                    .map(|r| r.status)
                    .unwrap_or(EditorRequestStatus::None);
                status != EditorRequestStatus::Pending
            }
            _ => false,
        }
    }

    /// Shared API handle for view-models that issue their own reads
    /// (post list, user roster).
    pub fn api(&self) -> ApiState {
        self.api.clone()
    }
}
