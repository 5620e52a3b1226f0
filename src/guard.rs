use crate::{permissions::Role, session::{AuthState, SessionStore}};

/// RouteDecision
///
/// The four possible outcomes of gating a navigation target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// Session state is still resolving: render a neutral waiting state,
    /// permit nothing yet.
    Pending,
    /// Not authenticated: send the user to the login entry point.
    RedirectToLogin,
    /// Authenticated but under-privileged for this target: send the user to
    /// the default authenticated landing page, not back to login.
    RedirectToPosts,
    /// Render the guarded content.
    Allow,
}

/// RouteGuard
///
/// The declarative gate for one navigation target: optionally requires a
/// specific role. Evaluation is a pure, synchronous decision over current
/// session state; it performs no network calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct RouteGuard {
    pub required_role: Option<Role>,
}

impl RouteGuard {
    /// A guard that only requires authentication.
    pub fn authenticated() -> Self {
        Self { required_role: None }
    }

    /// A guard that requires authentication with a specific role.
    pub fn requiring(role: Role) -> Self {
        Self {
            required_role: Some(role),
        }
    }

    /// Evaluates against the live session store. The stored credential is
    /// checked independently of the in-memory identity, so stale in-memory
    /// state (identity present, credential gone) still redirects to login.
    pub fn evaluate(&self, session: &SessionStore) -> RouteDecision {
        evaluate_route(session.state(), session.credential_present(), self.required_role)
    }
}

/// evaluate_route
///
/// The underlying pure decision function, separated from the store so tests
/// can drive every (state, credential, requirement) combination directly.
pub fn evaluate_route(
    state: &AuthState,
    credential_present: bool,
    required_role: Option<Role>,
) -> RouteDecision {
    match state {
        AuthState::Loading => RouteDecision::Pending,
        AuthState::Anonymous => RouteDecision::RedirectToLogin,
        AuthState::Authenticated(identity) => {
            if !credential_present {
                return RouteDecision::RedirectToLogin;
            }
            match required_role {
                Some(required) if identity.role != required => RouteDecision::RedirectToPosts,
                _ => RouteDecision::Allow,
            }
        }
    }
}
