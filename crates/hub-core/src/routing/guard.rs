//! Route guard.
//!
//! The guard is a pure function of the session state and the requested path.
//! It never fails: every request resolves to a render, a redirect, or the
//! terminal not-found view.

use serde::Serialize;

use super::table::{Access, LOGIN_PATH, ROUTES, Route, View, normalize_path};
use crate::identity::{Identity, Role};

/// Session state as seen by the guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GuardState {
    Unauthenticated,
    AuthenticatedAsSeller,
    AuthenticatedAsPlanner,
}

impl GuardState {
    pub fn from_identity(identity: Option<&Identity>) -> Self {
        match identity.map(|i| i.role) {
            None => Self::Unauthenticated,
            Some(Role::Seller) => Self::AuthenticatedAsSeller,
            Some(Role::Planner) => Self::AuthenticatedAsPlanner,
        }
    }

    pub fn role(self) -> Option<Role> {
        match self {
            Self::Unauthenticated => None,
            Self::AuthenticatedAsSeller => Some(Role::Seller),
            Self::AuthenticatedAsPlanner => Some(Role::Planner),
        }
    }

    pub fn is_authenticated(self) -> bool {
        self.role().is_some()
    }
}

/// Outcome of a guard check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Decision {
    /// Render the view.
    Render(View),
    /// Navigate to another path instead.
    Redirect(&'static str),
    /// No route matches; render the not-found view and stop.
    NotFound,
}

/// Decides what a navigation request renders.
#[derive(Debug, Clone, Copy)]
pub struct RouteGuard {
    routes: &'static [Route],
}

impl Default for RouteGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl RouteGuard {
    pub fn new() -> Self {
        Self { routes: ROUTES }
    }

    pub fn decide(&self, state: GuardState, path: &str) -> Decision {
        let path = normalize_path(path);
        let Some(route) = self.routes.iter().find(|route| route.path == path) else {
            tracing::debug!(path, "no route matched");
            return Decision::NotFound;
        };

        let decision = match (route.access, state.role()) {
            (Access::Guest, None) => Decision::Render(route.view),
            (Access::Guest, Some(role)) => Decision::Redirect(role.default_path()),
            (_, None) => Decision::Redirect(LOGIN_PATH),
            (Access::Landing, Some(role)) => Decision::Redirect(role.default_path()),
            (Access::Authenticated, Some(_)) => Decision::Render(route.view),
            (Access::Role(required), Some(role)) if required == role => {
                Decision::Render(route.view)
            }
            (Access::Role(_), Some(role)) => Decision::Redirect(role.default_path()),
        };

        tracing::debug!(path, ?state, ?decision, "route guard decision");
        decision
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn guard() -> RouteGuard {
        RouteGuard::new()
    }

    #[test]
    fn test_unauthenticated_is_sent_to_login() {
        for route in ROUTES.iter().filter(|r| r.path != LOGIN_PATH) {
            assert_eq!(
                guard().decide(GuardState::Unauthenticated, route.path),
                Decision::Redirect(LOGIN_PATH),
                "path {}",
                route.path
            );
        }
    }

    #[test]
    fn test_login_renders_without_identity() {
        assert_eq!(
            guard().decide(GuardState::Unauthenticated, "/login"),
            Decision::Render(View::Login)
        );
    }

    #[test]
    fn test_login_forwards_authenticated_sessions() {
        assert_eq!(
            guard().decide(GuardState::AuthenticatedAsSeller, "/login"),
            Decision::Redirect("/vendedor")
        );
        assert_eq!(
            guard().decide(GuardState::AuthenticatedAsPlanner, "/login"),
            Decision::Redirect("/dashboard")
        );
    }

    #[test]
    fn test_root_forwards_to_default_view() {
        assert_eq!(
            guard().decide(GuardState::AuthenticatedAsSeller, "/"),
            Decision::Redirect("/vendedor")
        );
        assert_eq!(
            guard().decide(GuardState::AuthenticatedAsPlanner, ""),
            Decision::Redirect("/dashboard")
        );
    }

    #[test]
    fn test_role_mismatch_never_renders() {
        for route in ROUTES {
            let Some(required) = route.required_role() else {
                continue;
            };
            for role in Role::iter().filter(|r| *r != required) {
                let state = GuardState::from_identity(Some(&Identity::new(
                    "x",
                    "x",
                    "x@x.com",
                    role,
                )));
                assert_eq!(
                    guard().decide(state, route.path),
                    Decision::Redirect(role.default_path())
                );
            }
        }
    }

    #[test]
    fn test_seller_requesting_dashboard() {
        assert_eq!(
            guard().decide(GuardState::AuthenticatedAsSeller, "/dashboard"),
            Decision::Redirect("/vendedor")
        );
    }

    #[test]
    fn test_shared_views_render_for_both_roles() {
        for state in [
            GuardState::AuthenticatedAsSeller,
            GuardState::AuthenticatedAsPlanner,
        ] {
            assert_eq!(
                guard().decide(state, "/clients"),
                Decision::Render(View::Clients)
            );
            assert_eq!(
                guard().decide(state, "/settings/"),
                Decision::Render(View::Settings)
            );
        }
    }

    #[test]
    fn test_unknown_path_is_not_found_in_every_state() {
        for state in [
            GuardState::Unauthenticated,
            GuardState::AuthenticatedAsSeller,
            GuardState::AuthenticatedAsPlanner,
        ] {
            assert_eq!(guard().decide(state, "/nowhere"), Decision::NotFound);
        }
    }

    #[test]
    fn test_guard_state_from_identity() {
        assert_eq!(GuardState::from_identity(None), GuardState::Unauthenticated);
        let planner = Identity::new("2", "Maria", "m@x.com", Role::Planner);
        let state = GuardState::from_identity(Some(&planner));
        assert_eq!(state, GuardState::AuthenticatedAsPlanner);
        assert!(state.is_authenticated());
        assert_eq!(state.role(), Some(Role::Planner));
    }
}
