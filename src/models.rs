use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::permissions::Role;

// --- Core Session Schemas ---

/// Identity
///
/// The authenticated user's profile and role, as known to the client.
/// Owned exclusively by the session store: set on successful login,
/// registration, or session check; cleared on logout or credential
/// invalidation. The backend serves Mongo documents, hence the `_id` alias.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    #[serde(alias = "_id")]
    pub id: String,
    pub username: String,
    pub email: String,
    /// The RBAC field. Parsed case-insensitively; see `permissions::Role`.
    pub role: Role,
    /// Present once the user has an elevation request on record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor_request: Option<EditorRequestState>,
}

/// EditorRequestState
///
/// The elevation-request marker embedded in the identity payload
/// (`editorRequest: { status }`). Kept as a struct rather than a bare enum so
/// the wire shape survives round trips unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct EditorRequestState {
    pub status: EditorRequestStatus,
}

/// EditorRequestStatus
///
/// Lifecycle of a Viewer's request to be promoted to Editor.
/// The backend has historically emitted both "pending" and "requested" for the
/// in-flight state; the alias folds them into one variant.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EditorRequestStatus {
    #[default]
    None,
    #[serde(alias = "requested")]
    Pending,
    Approved,
    Rejected,
}

/// AuthPayload
///
/// Response body of the login and registration endpoints: the resolved
/// identity plus the opaque bearer credential to persist.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AuthPayload {
    pub user: Identity,
    pub token: String,
}

// --- Request Payloads (Input Schemas) ---

/// LoginRequest
///
/// Input payload for POST /api/auth/login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// RegisterRequest
///
/// Input payload for POST /api/auth/register.
/// Note: role assignment is decided server-side; the client never sends one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

// --- Post Schemas ---

/// Post
///
/// A blog post as served by the remote system. The client holds a transient,
/// refetched-on-demand copy with no consistency guarantee beyond "last
/// successful fetch wins". The `authorId` field arrives populated (joined)
/// with the author's id and username.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(rename = "authorId", default, skip_serializing_if = "Option::is_none")]
    pub author: Option<PostAuthor>,
    pub created_at: DateTime<Utc>,
}

/// PostAuthor
///
/// The populated author reference embedded in a post. Username may be absent
/// when the author account was deleted.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PostAuthor {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

/// CreatePostRequest
///
/// Input payload for POST /api/posts.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
}

/// UpdatePostRequest
///
/// Partial update payload for PUT /api/posts/{id}. Uses `Option<T>` with
/// `skip_serializing_if` so only the provided fields appear in the JSON body.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdatePostRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

// --- Administration Schemas ---

/// EditorRequest
///
/// A pending elevation request as listed on the admin dashboard. Created
/// server-side when a Viewer requests elevation; queried and mutated
/// (approve/reject) only by Admin-role sessions. Not cached beyond the
/// current admin view's lifetime.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct EditorRequest {
    #[serde(alias = "_id")]
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub status: EditorRequestStatus,
}

// --- Error Body Schema ---

/// ApiErrorBody
///
/// Minimal struct to deserialize a structured error response from the backend.
/// Both field spellings occur in the wild, so both are optional and the
/// normalization layer picks `error` over `message`.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ApiErrorBody {
    pub error: Option<String>,
    pub message: Option<String>,
}
