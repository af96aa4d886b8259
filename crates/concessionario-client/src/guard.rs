//! Route guard: maps the requested path and the session state to what the
//! router should do.

use concessionario_types::Route;

/// Session state as seen by the router.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    /// Durable storage not read yet
    Restoring,
    Anonymous,
    Authenticated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Show a placeholder; no decision can be made yet.
    Loading,
    Render(Route),
    Redirect(Route),
}

/// Decision for a raw path. Unknown paths go to the dashboard, which in turn
/// sends anonymous users to the login screen.
pub fn decide(path: &str, auth: AuthState) -> GuardDecision {
    match Route::from_path(path) {
        Some(route) => decide_route(route, auth),
        None => GuardDecision::Redirect(Route::Dashboard),
    }
}

pub fn decide_route(route: Route, auth: AuthState) -> GuardDecision {
    match (route.is_protected(), auth) {
        (false, AuthState::Authenticated) => GuardDecision::Redirect(Route::Dashboard),
        (false, _) => GuardDecision::Render(route),
        (true, AuthState::Restoring) => GuardDecision::Loading,
        (true, AuthState::Authenticated) => GuardDecision::Render(route),
        (true, AuthState::Anonymous) => GuardDecision::Redirect(Route::Login),
    }
}
