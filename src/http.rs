use reqwest::{Method, RequestBuilder, header};
use serde::de::DeserializeOwned;

use crate::{config::ClientConfig, credentials::CredentialState, error::ApiError};

/// ApiClient
///
/// The authenticated HTTP client every remote call flows through. It owns two
/// cross-cutting concerns of the session lifecycle:
///
/// 1. **Base-URL resolution** — when a base URL is configured, absolute-path
///    requests are rewritten relative to it; otherwise paths pass through
///    unmodified. This supports both same-origin (dev proxy) and cross-origin
///    deployments without code changes.
/// 2. **Credential attachment** — if a credential is present in storage, it is
///    attached as `Authorization: Bearer <token>` unless the caller supplied
///    an explicit token. Storage read failures are swallowed by the store and
///    surface here as "no credential", never as an error.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Option<String>,
    credentials: CredentialState,
}

impl ApiClient {
    /// Constructs the client from the loaded configuration and the shared
    /// credential store.
    pub fn new(config: &ClientConfig, credentials: CredentialState) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.api_base_url.clone(),
            credentials,
        }
    }

    /// endpoint
    ///
    /// Resolves an API path against the configured base URL. Full URLs pass
    /// through untouched; with no base URL configured the path itself is
    /// returned (same-origin fallback).
    pub fn endpoint(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        match &self.base_url {
            Some(base) => {
                let base = base.trim_end_matches('/');
                if path.starts_with('/') {
                    format!("{base}{path}")
                } else {
                    format!("{base}/{path}")
                }
            }
            None => path.to_string(),
        }
    }

    /// request
    ///
    /// Builds a request with the stored credential attached (when present).
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.request_with_token(method, path, None)
    }

    /// request_with_token
    ///
    /// Builds a request with an explicit bearer token. An explicitly supplied
    /// token always wins over the stored credential; passing None falls back
    /// to whatever the credential store currently holds.
    pub fn request_with_token(
        &self,
        method: Method,
        path: &str,
        explicit: Option<&str>,
    ) -> RequestBuilder {
        let builder = self.http.request(method, self.endpoint(path));

        match explicit {
            Some(token) => builder.header(header::AUTHORIZATION, format!("Bearer {token}")),
            None => match self.credentials.load() {
                Some(token) => {
                    builder.header(header::AUTHORIZATION, format!("Bearer {token}"))
                }
                None => builder,
            },
        }
    }

    /// send_json
    ///
    /// Executes a request and normalizes the outcome: transport failures to
    /// `ApiError::Network`, non-success statuses to
    /// `ApiError::Unauthorized`/`Rejected` (message derived from the body),
    /// and undecodable bodies to `ApiError::Unexpected`.
    pub async fn send_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = builder.send().await.map_err(ApiError::from_transport)?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_status(status, &body));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Unexpected(format!("Response decode failed: {e}")))
    }

    /// send_unit
    ///
    /// Executes a request where only success/failure matters; any success body
    /// is discarded.
    pub async fn send_unit(&self, builder: RequestBuilder) -> Result<(), ApiError> {
        let response = builder.send().await.map_err(ApiError::from_transport)?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_status(status, &body));
        }

        Ok(())
    }
}
