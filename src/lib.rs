use std::sync::Arc;

// --- Module Structure ---

// Core client services and components.
pub mod api;
pub mod config;
pub mod credentials;
pub mod error;
pub mod guard;
pub mod http;
pub mod models;
pub mod permissions;
pub mod session;

// Module for view-model segregation (Posts, Admin).
pub mod views;

// --- Public Re-exports ---

// Makes the core types easily accessible to the binary entry point and to
// downstream consumers embedding the client.
pub use api::{ApiState, HttpRemoteApi, RemoteApi};
pub use config::{ClientConfig, Env};
pub use credentials::{CredentialState, CredentialStore, FileCredentialStore};
pub use error::ApiError;
pub use guard::{RouteDecision, RouteGuard};
pub use permissions::{Action, Role};
pub use session::{AuthState, SessionStore};

/// build_session
///
/// Assembles the production wiring from a loaded configuration: the durable
/// file-backed credential store, the authenticated HTTP client sharing it,
/// the concrete remote API, and the session store on top. The returned store
/// is in the `Loading` state; run `check_auth` to resolve it.
pub fn build_session(config: &ClientConfig) -> SessionStore {
    let credentials: CredentialState =
        Arc::new(FileCredentialStore::new(config.credentials_path.clone()));
    let client = http::ApiClient::new(config, credentials.clone());
    let api: ApiState = Arc::new(HttpRemoteApi::new(client));
    SessionStore::new(api, credentials)
}
