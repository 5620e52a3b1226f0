use crate::{
    api::ApiState,
    error::ApiError,
    models::{CreatePostRequest, Identity, Post, UpdatePostRequest},
    permissions::{Action, Role, has_permission},
};

/// PostBoard
///
/// View-model behind the post list. Holds a transient, refetched-on-demand
/// copy of the posts with no consistency guarantee beyond "last successful
/// fetch wins": a failed refresh keeps the previous list and records an
/// inline error message instead of clearing the screen.
pub struct PostBoard {
    api: ApiState,
    posts: Vec<Post>,
    last_error: Option<String>,
}

impl PostBoard {
    pub fn new(api: ApiState) -> Self {
        Self {
            api,
            posts: Vec::new(),
            last_error: None,
        }
    }

    /// refresh
    ///
    /// Refetches the list. On failure the previously fetched posts stay
    /// visible and the error surfaces both as the returned value and as the
    /// cached inline message.
    pub async fn refresh(&mut self) -> Result<(), ApiError> {
        match self.api.posts().await {
            Ok(posts) => {
                self.posts = posts;
                self.last_error = None;
                Ok(())
            }
            Err(err) => {
                tracing::error!("post fetch failed: {err}");
                self.last_error = Some("Failed to fetch posts".to_string());
                Err(err)
            }
        }
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    // --- Affordance Checks (advisory, never block the call) ---

    /// Whether the create-post form should be offered at all.
    pub fn can_create(identity: Option<&Identity>) -> bool {
        identity
            .map(|i| has_permission(i.role, Action::CreatePosts))
            .unwrap_or(false)
    }

    /// Whether the edit button is live for this post: edit-any privilege, or
    /// edit-own privilege combined with ownership.
    pub fn can_edit(identity: Option<&Identity>, post: &Post) -> bool {
        let Some(identity) = identity else {
            return false;
        };
        if has_permission(identity.role, Action::EditAnyPost) {
            return true;
        }
        has_permission(identity.role, Action::EditOwnPosts) && Self::owns(identity, post)
    }

    /// Whether the delete button is live. Admins may delete anything; editors
    /// may delete their own posts (the backend applies the same ownership
    /// rule, the broad `delete_posts` permission belongs to admins only).
    pub fn can_delete(identity: Option<&Identity>, post: &Post) -> bool {
        let Some(identity) = identity else {
            return false;
        };
        match identity.role {
            Role::Admin => true,
            Role::Editor => Self::owns(identity, post),
            Role::Viewer => false,
        }
    }

    fn owns(identity: &Identity, post: &Post) -> bool {
        post.author
            .as_ref()
            .map(|a| a.id == identity.id)
            .unwrap_or(false)
    }

    // --- Mutations (refetch on success) ---

    /// create
    ///
    /// Submits a new post and refetches the list. No client-side permission
    /// check: if the server disagrees with the affordance layer, its
    /// rejection comes back as the error.
    pub async fn create(&mut self, title: &str, content: &str) -> Result<(), ApiError> {
        self.api
            .create_post(CreatePostRequest {
                title: title.to_string(),
                content: content.to_string(),
            })
            .await?;
        self.refresh().await
    }

    /// save_edit
    ///
    /// Applies an edit to an existing post and refetches.
    pub async fn save_edit(&mut self, id: &str, title: &str, content: &str) -> Result<(), ApiError> {
        self.api
            .update_post(
                id,
                UpdatePostRequest {
                    title: Some(title.to_string()),
                    content: Some(content.to_string()),
                },
            )
            .await?;
        self.refresh().await
    }

    /// remove
    ///
    /// Deletes a post and refetches.
    pub async fn remove(&mut self, id: &str) -> Result<(), ApiError> {
        self.api.delete_post(id).await?;
        self.refresh().await
    }
}
