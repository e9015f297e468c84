//! Routing domain module.
//!
//! # Module Structure
//!
//! - `table`: The ordered route/capability table
//! - `guard`: Access decisions for a requested path
//! - `navigation`: Role-filtered navigation entries

mod guard;
mod navigation;
mod table;

pub use guard::{Decision, GuardState, RouteGuard};
pub use navigation::{NavSection, entries_for, is_active};
pub use table::{Access, LOGIN_PATH, ROOT_PATH, ROUTES, Route, View, find_route, normalize_path};
