//! Role-filtered navigation menu.

use serde::{Deserialize, Serialize};

use super::table::{Access, ROOT_PATH, ROUTES, Route};
use crate::identity::Role;

/// Menu area a route is listed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavSection {
    Main,
    Bottom,
}

/// Menu entries reachable by `role`, in table order.
pub fn entries_for(role: Role) -> Vec<&'static Route> {
    ROUTES
        .iter()
        .filter(|route| route.section.is_some())
        .filter(|route| match route.access {
            Access::Role(required) => required == role,
            _ => true,
        })
        .collect()
}

/// Whether `route` is the active entry for the current `location`.
///
/// The root entry is only active on the root itself; every other entry is
/// active for its own path and anything below it.
pub fn is_active(route: &Route, location: &str) -> bool {
    if route.path == ROOT_PATH {
        location == ROOT_PATH
    } else {
        location.starts_with(route.path)
    }
}
