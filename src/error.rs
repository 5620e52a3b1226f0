use thiserror::Error;

use crate::models::ApiErrorBody;

/// ApiError
///
/// The single failure type every remote operation normalizes into. Nothing in
/// this crate lets a transport error propagate as a panic or an opaque
/// exception into view code: each call site catches the failure and returns
/// one of these variants, whose `Display` form is the human-readable message
/// a view can render inline.
///
/// Taxonomy: transport failure (`Network`), authorization failure
/// (`Unauthorized`, 401), validation/business failure (`Rejected`, any other
/// non-success status), and everything else (`Unexpected`).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApiError {
    /// The credential was rejected (HTTP 401). Only the startup session check
    /// converts this into local credential invalidation; everywhere else it is
    /// surfaced inline, not escalated to a forced logout.
    #[error("{message}")]
    Unauthorized { message: String },

    /// The server responded with a non-success status other than 401.
    /// `message` is derived with the standard priority: structured body
    /// `error` field, else body `message` field, else the HTTP status line.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// The request never produced a response (DNS, refused connection,
    /// timeout). The credential is not assumed bad in this case.
    #[error("Network error. Check the API base URL and connectivity.")]
    Network { detail: String },

    /// A response arrived but could not be understood (body decode failure,
    /// malformed payload).
    #[error("{0}")]
    Unexpected(String),
}

impl ApiError {
    /// from_status
    ///
    /// Normalizes a non-success HTTP response into the tagged form, applying
    /// the message-derivation priority over the raw body text.
    pub fn from_status(status: reqwest::StatusCode, body: &str) -> Self {
        let structured: Option<String> = serde_json::from_str::<ApiErrorBody>(body)
            .ok()
            .and_then(|b| b.error.or(b.message));

        let message = structured.unwrap_or_else(|| {
            format!(
                "HTTP {}: {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown Status")
            )
        });

        if status == reqwest::StatusCode::UNAUTHORIZED {
            ApiError::Unauthorized { message }
        } else {
            ApiError::Rejected {
                status: status.as_u16(),
                message,
            }
        }
    }

    /// from_transport
    ///
    /// Normalizes a reqwest error raised before any response was received.
    pub fn from_transport(err: reqwest::Error) -> Self {
        ApiError::Network {
            detail: err.to_string(),
        }
    }

    /// True when the failure means the credential itself is invalid.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }

    /// True when the request never reached the server (transient-failure
    /// policy applies: keep the stored credential).
    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network { .. })
    }
}
