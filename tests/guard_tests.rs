use async_trait::async_trait;
use blog_portal_client::{
    api::{ApiState, RemoteApi},
    credentials::{CredentialState, CredentialStore, MemoryCredentialStore},
    error::ApiError,
    guard::{RouteDecision, RouteGuard, evaluate_route},
    models::{
        AuthPayload, CreatePostRequest, EditorRequest, Identity, LoginRequest, Post,
        RegisterRequest, UpdatePostRequest,
    },
    permissions::Role,
    session::{AuthState, SessionStore},
};
use std::sync::Arc;

// --- Minimal mock: only login matters for building guarded sessions ---

struct LoginOnlyApi {
    payload: AuthPayload,
}

#[async_trait]
impl RemoteApi for LoginOnlyApi {
    async fn me(&self) -> Result<Identity, ApiError> {
        Ok(self.payload.user.clone())
    }
    async fn login(&self, _req: LoginRequest) -> Result<AuthPayload, ApiError> {
        Ok(self.payload.clone())
    }
    async fn register(&self, _req: RegisterRequest) -> Result<AuthPayload, ApiError> {
        Ok(self.payload.clone())
    }
    async fn logout(&self) -> Result<(), ApiError> {
        Ok(())
    }
    async fn request_editor(&self) -> Result<(), ApiError> {
        Ok(())
    }
    async fn editor_requests(&self) -> Result<Vec<EditorRequest>, ApiError> {
        Ok(vec![])
    }
    async fn approve_editor_request(&self, _id: &str) -> Result<(), ApiError> {
        Ok(())
    }
    async fn reject_editor_request(&self, _id: &str) -> Result<(), ApiError> {
        Ok(())
    }
    async fn posts(&self) -> Result<Vec<Post>, ApiError> {
        Ok(vec![])
    }
    async fn create_post(&self, _req: CreatePostRequest) -> Result<Post, ApiError> {
        Ok(Post::default())
    }
    async fn update_post(&self, _id: &str, _req: UpdatePostRequest) -> Result<Post, ApiError> {
        Ok(Post::default())
    }
    async fn delete_post(&self, _id: &str) -> Result<(), ApiError> {
        Ok(())
    }
    async fn users(&self) -> Result<Vec<Identity>, ApiError> {
        Ok(vec![])
    }
}

fn identity(role: Role) -> Identity {
    Identity {
        id: "u1".to_string(),
        username: "test-user".to_string(),
        email: "test@example.com".to_string(),
        role,
        editor_request: None,
    }
}

async fn logged_in_session(role: Role) -> (SessionStore, CredentialState) {
    let api: ApiState = Arc::new(LoginOnlyApi {
        payload: AuthPayload {
            user: identity(role),
            token: "tok".to_string(),
        },
    });
    let credentials: CredentialState = Arc::new(MemoryCredentialStore::new());
    let mut session = SessionStore::new(api, credentials.clone());
    session.login("test@example.com", "pw").await.unwrap();
    (session, credentials)
}

// --- Pure decision function matrix ---

#[test]
fn test_loading_renders_waiting_and_never_redirects() {
    for credential_present in [true, false] {
        for required in [None, Some(Role::Admin)] {
            assert_eq!(
                evaluate_route(&AuthState::Loading, credential_present, required),
                RouteDecision::Pending
            );
        }
    }
}

#[test]
fn test_anonymous_redirects_to_login() {
    assert_eq!(
        evaluate_route(&AuthState::Anonymous, false, None),
        RouteDecision::RedirectToLogin
    );
    // Even a lingering credential does not make an anonymous session routable.
    assert_eq!(
        evaluate_route(&AuthState::Anonymous, true, Some(Role::Admin)),
        RouteDecision::RedirectToLogin
    );
}

#[test]
fn test_under_privileged_redirects_to_posts_not_login() {
    let state = AuthState::Authenticated(identity(Role::Viewer));
    assert_eq!(
        evaluate_route(&state, true, Some(Role::Admin)),
        RouteDecision::RedirectToPosts
    );
}

#[test]
fn test_matching_role_is_allowed() {
    let state = AuthState::Authenticated(identity(Role::Admin));
    assert_eq!(
        evaluate_route(&state, true, Some(Role::Admin)),
        RouteDecision::Allow
    );
    // No role requirement: any authenticated identity passes.
    let state = AuthState::Authenticated(identity(Role::Viewer));
    assert_eq!(evaluate_route(&state, true, None), RouteDecision::Allow);
}

#[test]
fn test_identity_without_credential_is_treated_as_unauthenticated() {
    // Defense against stale in-memory state: the credential check is
    // independent of the identity check.
    let state = AuthState::Authenticated(identity(Role::Admin));
    assert_eq!(
        evaluate_route(&state, false, None),
        RouteDecision::RedirectToLogin
    );
}

// --- Guard over a live session store ---

#[tokio::test]
async fn test_guard_allows_admin_dashboard_for_admin() {
    let (session, _creds) = logged_in_session(Role::Admin).await;
    let decision = RouteGuard::requiring(Role::Admin).evaluate(&session);
    assert_eq!(decision, RouteDecision::Allow);
}

#[tokio::test]
async fn test_guard_sends_viewer_back_to_posts() {
    let (session, _creds) = logged_in_session(Role::Viewer).await;
    let decision = RouteGuard::requiring(Role::Admin).evaluate(&session);
    assert_eq!(decision, RouteDecision::RedirectToPosts);
}

#[tokio::test]
async fn test_guard_detects_externally_cleared_credential() {
    let (session, creds) = logged_in_session(Role::Admin).await;
    // Another tab/process wiped the durable credential; the in-memory
    // identity is now stale.
    creds.clear();

    let decision = RouteGuard::authenticated().evaluate(&session);
    assert_eq!(decision, RouteDecision::RedirectToLogin);
}

#[tokio::test]
async fn test_guard_pending_while_session_loading() {
    let api: ApiState = Arc::new(LoginOnlyApi {
        payload: AuthPayload::default(),
    });
    let credentials: CredentialState = Arc::new(MemoryCredentialStore::new());
    let session = SessionStore::new(api, credentials);

    let decision = RouteGuard::requiring(Role::Admin).evaluate(&session);
    assert_eq!(decision, RouteDecision::Pending);
}
