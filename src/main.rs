use blog_portal_client::{
    AuthState, ClientConfig, Env, Role, RouteGuard, build_session,
    permissions::allowed_actions,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// main
///
/// The asynchronous entry point: initializes configuration and logging, wires
/// the client, runs the startup session check, and reports the resolved
/// session state. Serves as the smoke-test surface for a deployment's
/// environment (API origin reachable, stored credential still valid).
#[tokio::main]
async fn main() {
    // 1. Configuration & Environment Loading (Fail-Fast)
    // Loads .env file settings before configuration can be read.
    dotenv::dotenv().ok();
    // ClientConfig::load() implements the fail-fast principle for missing
    // production values (API_BASE_URL).
    let config = ClientConfig::load();

    // 2. Logging Filter Setup
    // Prioritizes the RUST_LOG environment variable, falling back to sensible
    // defaults for local development.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "blog_portal_client=debug,reqwest=info".into());

    // 3. Initialize Logging based on Environment
    // Pretty output for humans locally, JSON for log aggregators in production.
    match config.env {
        Env::Local => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
        Env::Production => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
    }

    tracing::info!("Client starting in {:?} mode", config.env);
    match &config.api_base_url {
        Some(base) => tracing::info!("Remote API origin: {base}"),
        None => tracing::info!("No API base URL configured; requests stay same-origin"),
    }

    // 4. Client Assembly & Startup Session Check
    let mut session = build_session(&config);
    session.check_auth().await;

    // 5. Session State Report
    match session.state() {
        AuthState::Authenticated(identity) => {
            tracing::info!(
                user = %identity.username,
                role = %identity.role,
                "session resolved: authenticated"
            );
            for action in allowed_actions(identity.role) {
                tracing::info!("  allowed: {}", action.label());
            }
            let admin_gate = RouteGuard::requiring(Role::Admin).evaluate(&session);
            tracing::info!("admin dashboard access: {admin_gate:?}");
        }
        AuthState::Anonymous => {
            tracing::info!("session resolved: anonymous (login required)");
        }
        AuthState::Loading => {
            // check_auth always resolves; reaching this would be a logic bug.
            tracing::warn!("session still loading after startup check");
        }
    }
}
