use std::env;
use std::path::PathBuf;

/// ClientConfig
///
/// Holds the client's entire configuration state. This struct is designed to be
/// immutable once loaded, ensuring every component (HTTP client, credential store,
/// session store) observes the same settings for the lifetime of the process.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Remote API origin. When present, absolute-path requests are rewritten
    /// relative to it; when absent, paths pass through unmodified (same-origin
    /// deployments behind a dev proxy).
    pub api_base_url: Option<String>,
    /// Durable location of the bearer credential. A single file holding the
    /// raw token string, shared (unsynchronized) with any concurrent process.
    pub credentials_path: PathBuf,
    /// Runtime environment marker. Controls log formatting and fail-fast policy.
    pub env: Env,
}

/// Env
///
/// Defines the runtime context, used to switch between development conveniences
/// (pretty logs, implicit localhost backend) and production requirements
/// (JSON logs, mandatory explicit API origin).
#[derive(Clone, PartialEq, Debug)]
pub enum Env {
    Local,
    Production,
}

impl Default for ClientConfig {
    /// default
    ///
    /// Provides a safe, non-panicking ClientConfig instance primarily used for
    /// test setup. This allows tests to build the full client wiring without
    /// touching environment variables.
    fn default() -> Self {
        Self {
            api_base_url: Some("http://localhost:5000".to_string()),
            credentials_path: env::temp_dir().join("blog-portal-test-credentials"),
            env: Env::Local,
        }
    }
}

impl ClientConfig {
    /// load
    ///
    /// The canonical function for initializing the client configuration at startup.
    /// It reads all parameters from environment variables and implements the
    /// **fail-fast** principle for production-mandatory values.
    ///
    /// # Panics
    /// Panics if `API_BASE_URL` is not set while `APP_ENV=production`. A client
    /// started in production without a remote origin cannot reach anything, so
    /// refusing to start is preferable to failing on the first request.
    pub fn load() -> Self {
        let env_str = env::var("APP_ENV").unwrap_or_else(|_| "local".to_string());
        let env = match env_str.as_str() {
            "production" => Env::Production,
            _ => Env::Local,
        };

        // Base-URL resolution. Production demands an explicit origin; local
        // falls back to the conventional dev backend when unset. An explicitly
        // empty value means "same-origin" (paths pass through unmodified).
        let api_base_url = match env {
            Env::Production => Some(
                env::var("API_BASE_URL").expect("FATAL: API_BASE_URL must be set in production."),
            ),
            Env::Local => match env::var("API_BASE_URL") {
                Ok(url) if url.is_empty() => None,
                Ok(url) => Some(url),
                Err(_) => Some("http://localhost:5000".to_string()),
            },
        };

        // Credential storage location. Defaults to a dotfile under the user's
        // home directory so the session survives process restarts.
        let credentials_path = env::var("CREDENTIALS_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| {
                let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
                PathBuf::from(home).join(".blog-portal").join("credentials")
            });

        Self {
            api_base_url,
            credentials_path,
            env,
        }
    }
}
