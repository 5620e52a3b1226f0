use blog_portal_client::{
    error::ApiError,
    models::{
        AuthPayload, EditorRequest, EditorRequestStatus, Identity, Post, UpdatePostRequest,
    },
    permissions::Role,
};
use reqwest::StatusCode;

// --- Identity / Auth Wire Shapes ---

#[test]
fn test_identity_accepts_mongo_id_and_lowercase_role() {
    let json = r#"{
        "_id": "64f1a2b3c4d5e6f7a8b9c0d1",
        "username": "alice",
        "email": "alice@example.com",
        "role": "admin"
    }"#;

    let identity: Identity = serde_json::from_str(json).unwrap();
    assert_eq!(identity.id, "64f1a2b3c4d5e6f7a8b9c0d1");
    assert_eq!(identity.role, Role::Admin);
    assert!(identity.editor_request.is_none());
}

#[test]
fn test_identity_with_editor_request_status() {
    let json = r#"{
        "id": "u1",
        "username": "vic",
        "email": "vic@example.com",
        "role": "Viewer",
        "editorRequest": { "status": "pending" }
    }"#;

    let identity: Identity = serde_json::from_str(json).unwrap();
    assert_eq!(
        identity.editor_request.unwrap().status,
        EditorRequestStatus::Pending
    );
}

#[test]
fn test_legacy_requested_status_maps_to_pending() {
    // Older backends emitted "requested" for the in-flight state.
    let json = r#"{ "status": "requested" }"#;
    let state: blog_portal_client::models::EditorRequestState =
        serde_json::from_str(json).unwrap();
    assert_eq!(state.status, EditorRequestStatus::Pending);
}

#[test]
fn test_unknown_role_is_a_deserialization_error() {
    let json = r#"{
        "id": "u1",
        "username": "x",
        "email": "x@example.com",
        "role": "superuser"
    }"#;
    assert!(serde_json::from_str::<Identity>(json).is_err());
}

#[test]
fn test_auth_payload_shape() {
    let json = r#"{
        "user": { "_id": "u1", "username": "alice", "email": "a@example.com", "role": "Editor" },
        "token": "opaque.bearer.token"
    }"#;

    let payload: AuthPayload = serde_json::from_str(json).unwrap();
    assert_eq!(payload.token, "opaque.bearer.token");
    assert_eq!(payload.user.role, Role::Editor);
}

// --- Post Wire Shapes ---

#[test]
fn test_post_with_populated_author() {
    let json = r#"{
        "_id": "p1",
        "title": "Hello",
        "content": "World",
        "authorId": { "_id": "u1", "username": "alice" },
        "createdAt": "2024-05-01T12:00:00Z"
    }"#;

    let post: Post = serde_json::from_str(json).unwrap();
    let author = post.author.unwrap();
    assert_eq!(author.id, "u1");
    assert_eq!(author.username.as_deref(), Some("alice"));
}

#[test]
fn test_post_without_author_attribution() {
    // Deleted accounts leave posts with no populated author.
    let json = r#"{
        "_id": "p2",
        "title": "Orphan",
        "content": "No author",
        "createdAt": "2024-05-01T12:00:00Z"
    }"#;

    let post: Post = serde_json::from_str(json).unwrap();
    assert!(post.author.is_none());
}

#[test]
fn test_update_post_request_omits_absent_fields() {
    let partial = UpdatePostRequest {
        title: Some("New Title Only".to_string()),
        content: None,
    };

    let json = serde_json::to_string(&partial).unwrap();
    assert!(json.contains(r#""title":"New Title Only""#));
    assert!(!json.contains("content"));
}

#[test]
fn test_editor_request_defaults_status() {
    let json = r#"{ "_id": "r1", "username": "vic", "email": "vic@example.com" }"#;
    let request: EditorRequest = serde_json::from_str(json).unwrap();
    assert_eq!(request.status, EditorRequestStatus::None);
}

// --- Error Normalization Priority ---

#[test]
fn test_structured_error_field_wins() {
    let err = ApiError::from_status(
        StatusCode::BAD_REQUEST,
        r#"{ "error": "Email already registered", "message": "ignored" }"#,
    );
    assert_eq!(err.to_string(), "Email already registered");
}

#[test]
fn test_message_field_is_second_choice() {
    let err = ApiError::from_status(
        StatusCode::BAD_REQUEST,
        r#"{ "message": "Password too short" }"#,
    );
    assert_eq!(err.to_string(), "Password too short");
}

#[test]
fn test_status_line_is_the_fallback() {
    let err = ApiError::from_status(StatusCode::BAD_REQUEST, "<html>not json</html>");
    assert_eq!(err.to_string(), "HTTP 400: Bad Request");

    let err = ApiError::from_status(StatusCode::INTERNAL_SERVER_ERROR, "");
    assert_eq!(err.to_string(), "HTTP 500: Internal Server Error");
}

#[test]
fn test_401_maps_to_unauthorized_variant() {
    let err = ApiError::from_status(StatusCode::UNAUTHORIZED, r#"{ "error": "Token expired" }"#);
    assert!(err.is_unauthorized());
    assert_eq!(err.to_string(), "Token expired");

    // Other statuses are business rejections, not credential failures.
    let err = ApiError::from_status(StatusCode::FORBIDDEN, "{}");
    assert!(!err.is_unauthorized());
}

#[test]
fn test_network_error_has_a_generic_display() {
    let err = ApiError::Network {
        detail: "connection refused".to_string(),
    };
    assert!(err.is_network());
    assert_eq!(
        err.to_string(),
        "Network error. Check the API base URL and connectivity."
    );
}
