//! Navigation over the route guard.
//!
//! The navigator owns the current location. Every request is evaluated against
//! a single snapshot of the session state, and redirects are followed until a
//! view renders.

use std::sync::Arc;

use hub_core::routing::{
    Decision, GuardState, LOGIN_PATH, Route, RouteGuard, View, entries_for, normalize_path,
};
use serde::Serialize;

use crate::session::SessionStore;

/// Upper bound on redirects followed for one request.
const MAX_REDIRECTS: usize = 4;

/// What a navigation request ended up rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Navigation {
    /// Path as requested.
    pub requested: String,
    /// Paths redirected to, in order.
    pub redirects: Vec<&'static str>,
    /// The rendered view.
    pub view: View,
    /// Location after the request settles.
    pub location: String,
}

impl Navigation {
    pub fn was_redirected(&self) -> bool {
        !self.redirects.is_empty()
    }
}

pub struct Navigator {
    store: Arc<SessionStore>,
    guard: RouteGuard,
    location: String,
}

impl Navigator {
    /// Creates a navigator positioned on the login path.
    pub fn new(store: Arc<SessionStore>) -> Self {
        Self {
            store,
            guard: RouteGuard::new(),
            location: LOGIN_PATH.to_string(),
        }
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn store(&self) -> &Arc<SessionStore> {
        &self.store
    }

    /// Navigates to `path` and returns what was rendered.
    pub async fn navigate(&mut self, path: &str) -> Navigation {
        let state = self.store.guard_state().await;
        let navigation = self.resolve(state, path);
        self.location = navigation.location.clone();

        tracing::debug!(
            requested = %navigation.requested,
            location = %navigation.location,
            view = %navigation.view,
            redirects = navigation.redirects.len(),
            "Navigated"
        );
        navigation
    }

    /// Re-evaluates the current location, e.g. after login or logout.
    pub async fn refresh(&mut self) -> Navigation {
        let location = self.location.clone();
        self.navigate(&location).await
    }

    /// Navigation entries for the current session; empty when logged out.
    pub async fn menu(&self) -> Vec<&'static Route> {
        match self.store.guard_state().await.role() {
            Some(role) => entries_for(role),
            None => Vec::new(),
        }
    }

    fn resolve(&self, state: GuardState, requested: &str) -> Navigation {
        let mut redirects = Vec::new();
        let mut path = normalize_path(requested).to_string();

        loop {
            match self.guard.decide(state, &path) {
                Decision::Render(view) => {
                    return Navigation {
                        requested: requested.to_string(),
                        redirects,
                        view,
                        location: path,
                    };
                }
                Decision::NotFound => {
                    return Navigation {
                        requested: requested.to_string(),
                        redirects,
                        view: View::NotFound,
                        location: path,
                    };
                }
                Decision::Redirect(target) => {
                    if redirects.len() == MAX_REDIRECTS {
                        tracing::warn!(requested, ?redirects, "Redirect limit reached");
                        return Navigation {
                            requested: requested.to_string(),
                            redirects,
                            view: View::NotFound,
                            location: path,
                        };
                    }
                    redirects.push(target);
                    path = target.to_string();
                }
            }
        }
    }
}
