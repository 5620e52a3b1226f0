use blog_portal_client::{
    config::ClientConfig,
    credentials::{CredentialState, MemoryCredentialStore},
    http::ApiClient,
};
use reqwest::{Method, header};
use std::sync::Arc;

fn client_with(base: Option<&str>, credentials: MemoryCredentialStore) -> ApiClient {
    let config = ClientConfig {
        api_base_url: base.map(str::to_string),
        ..ClientConfig::default()
    };
    let credentials: CredentialState = Arc::new(credentials);
    ApiClient::new(&config, credentials)
}

// --- Base-URL Resolution ---

#[test]
fn test_endpoint_joins_base_and_path() {
    let client = client_with(Some("http://api.example.com"), MemoryCredentialStore::new());
    assert_eq!(
        client.endpoint("/api/posts"),
        "http://api.example.com/api/posts"
    );
}

#[test]
fn test_endpoint_handles_slash_variants() {
    // Trailing slash on the base.
    let client = client_with(Some("http://api.example.com/"), MemoryCredentialStore::new());
    assert_eq!(
        client.endpoint("/api/posts"),
        "http://api.example.com/api/posts"
    );

    // Missing leading slash on the path.
    assert_eq!(
        client.endpoint("api/posts"),
        "http://api.example.com/api/posts"
    );
}

#[test]
fn test_endpoint_without_base_passes_path_through() {
    let client = client_with(None, MemoryCredentialStore::new());
    assert_eq!(client.endpoint("/api/posts"), "/api/posts");
}

#[test]
fn test_endpoint_full_url_passes_through() {
    let client = client_with(Some("http://api.example.com"), MemoryCredentialStore::new());
    assert_eq!(
        client.endpoint("https://other.example.com/api/posts"),
        "https://other.example.com/api/posts"
    );
}

// --- Credential Attachment ---

#[test]
fn test_stored_credential_is_attached_as_bearer() {
    let client = client_with(
        Some("http://api.example.com"),
        MemoryCredentialStore::with_token("tok-1"),
    );

    let request = client
        .request(Method::GET, "/api/auth/me")
        .build()
        .unwrap();

    let auth = request.headers().get(header::AUTHORIZATION).unwrap();
    assert_eq!(auth.to_str().unwrap(), "Bearer tok-1");
}

#[test]
fn test_no_credential_means_no_header() {
    let client = client_with(Some("http://api.example.com"), MemoryCredentialStore::new());

    let request = client.request(Method::GET, "/api/posts").build().unwrap();

    assert!(request.headers().get(header::AUTHORIZATION).is_none());
}

#[test]
fn test_explicit_token_wins_over_stored_credential() {
    let client = client_with(
        Some("http://api.example.com"),
        MemoryCredentialStore::with_token("stored"),
    );

    let request = client
        .request_with_token(Method::GET, "/api/auth/me", Some("explicit"))
        .build()
        .unwrap();

    let auth = request.headers().get(header::AUTHORIZATION).unwrap();
    assert_eq!(auth.to_str().unwrap(), "Bearer explicit");
}

#[test]
fn test_unreadable_storage_means_no_header() {
    // Storage failures are swallowed, never propagated: the request simply
    // goes out unauthenticated.
    let client = client_with(
        Some("http://api.example.com"),
        MemoryCredentialStore::new_unreadable(),
    );

    let request = client.request(Method::GET, "/api/posts").build().unwrap();

    assert!(request.headers().get(header::AUTHORIZATION).is_none());
}
