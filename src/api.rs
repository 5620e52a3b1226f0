use async_trait::async_trait;
use reqwest::Method;
use std::sync::Arc;

use crate::{
    error::ApiError,
    http::ApiClient,
    models::{
        AuthPayload, CreatePostRequest, EditorRequest, Identity, LoginRequest, Post,
        RegisterRequest, UpdatePostRequest,
    },
};

/// RemoteApi Trait
///
/// Defines the abstract contract for the entire remote API surface the client
/// consumes. This is the seam that keeps the session store and the view-models
/// independent of the transport: production wires in `HttpRemoteApi`, tests
/// substitute a hand-written mock.
///
/// Every operation returns `Result<T, ApiError>`; no transport failure ever
/// escapes this boundary in any other shape.
///
/// **Send + Sync + async_trait** are required to make the trait object
/// (`Arc<dyn RemoteApi>`) safely shareable across async task boundaries.
#[async_trait]
pub trait RemoteApi: Send + Sync {
    // --- Auth ---
    /// GET /api/auth/me — resolves the current identity or fails with 401.
    async fn me(&self) -> Result<Identity, ApiError>;
    async fn login(&self, req: LoginRequest) -> Result<AuthPayload, ApiError>;
    async fn register(&self, req: RegisterRequest) -> Result<AuthPayload, ApiError>;
    /// Best-effort remote session invalidation.
    async fn logout(&self) -> Result<(), ApiError>;

    // --- Elevation workflow ---
    async fn request_editor(&self) -> Result<(), ApiError>;
    async fn editor_requests(&self) -> Result<Vec<EditorRequest>, ApiError>;
    async fn approve_editor_request(&self, id: &str) -> Result<(), ApiError>;
    async fn reject_editor_request(&self, id: &str) -> Result<(), ApiError>;

    // --- Posts ---
    async fn posts(&self) -> Result<Vec<Post>, ApiError>;
    async fn create_post(&self, req: CreatePostRequest) -> Result<Post, ApiError>;
    async fn update_post(&self, id: &str, req: UpdatePostRequest) -> Result<Post, ApiError>;
    async fn delete_post(&self, id: &str) -> Result<(), ApiError>;

    // --- Administration ---
    /// GET /api/users — the registered-user roster for the admin dashboard.
    async fn users(&self) -> Result<Vec<Identity>, ApiError>;
}

/// ApiState
///
/// The concrete type used to share remote-API access across the session store
/// and the view-models.
pub type ApiState = Arc<dyn RemoteApi>;

/// HttpRemoteApi
///
/// The concrete implementation of `RemoteApi`, backed by the authenticated
/// `ApiClient`. Paths are owned by the external backend collaborator.
pub struct HttpRemoteApi {
    client: ApiClient,
}

impl HttpRemoteApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RemoteApi for HttpRemoteApi {
    async fn me(&self) -> Result<Identity, ApiError> {
        let req = self.client.request(Method::GET, "/api/auth/me");
        self.client.send_json(req).await
    }

    async fn login(&self, req: LoginRequest) -> Result<AuthPayload, ApiError> {
        let builder = self
            .client
            .request(Method::POST, "/api/auth/login")
            .json(&req);
        self.client.send_json(builder).await
    }

    async fn register(&self, req: RegisterRequest) -> Result<AuthPayload, ApiError> {
        let builder = self
            .client
            .request(Method::POST, "/api/auth/register")
            .json(&req);
        self.client.send_json(builder).await
    }

    async fn logout(&self) -> Result<(), ApiError> {
        let req = self.client.request(Method::POST, "/api/auth/logout");
        self.client.send_unit(req).await
    }

    async fn request_editor(&self) -> Result<(), ApiError> {
        let req = self.client.request(Method::POST, "/api/users/request-editor");
        self.client.send_unit(req).await
    }

    async fn editor_requests(&self) -> Result<Vec<EditorRequest>, ApiError> {
        let req = self.client.request(Method::GET, "/api/users/editor-requests");
        self.client.send_json(req).await
    }

    async fn approve_editor_request(&self, id: &str) -> Result<(), ApiError> {
        let path = format!("/api/users/editor-requests/{id}/approve");
        let req = self.client.request(Method::POST, &path);
        self.client.send_unit(req).await
    }

    async fn reject_editor_request(&self, id: &str) -> Result<(), ApiError> {
        let path = format!("/api/users/editor-requests/{id}/reject");
        let req = self.client.request(Method::POST, &path);
        self.client.send_unit(req).await
    }

    async fn posts(&self) -> Result<Vec<Post>, ApiError> {
        let req = self.client.request(Method::GET, "/api/posts");
        self.client.send_json(req).await
    }

    async fn create_post(&self, req: CreatePostRequest) -> Result<Post, ApiError> {
        let builder = self.client.request(Method::POST, "/api/posts").json(&req);
        self.client.send_json(builder).await
    }

    async fn update_post(&self, id: &str, req: UpdatePostRequest) -> Result<Post, ApiError> {
        let path = format!("/api/posts/{id}");
        let builder = self.client.request(Method::PUT, &path).json(&req);
        self.client.send_json(builder).await
    }

    async fn delete_post(&self, id: &str) -> Result<(), ApiError> {
        let path = format!("/api/posts/{id}");
        let req = self.client.request(Method::DELETE, &path);
        self.client.send_unit(req).await
    }

    async fn users(&self) -> Result<Vec<Identity>, ApiError> {
        let req = self.client.request(Method::GET, "/api/users");
        self.client.send_json(req).await
    }
}
