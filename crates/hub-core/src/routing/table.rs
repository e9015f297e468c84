//! Route table.
//!
//! One ordered list drives both access control and the navigation menu. Adding
//! a view means adding one row here.

use serde::{Deserialize, Serialize};
use strum::Display;

use super::navigation::NavSection;
use crate::identity::Role;

pub const LOGIN_PATH: &str = "/login";
pub const ROOT_PATH: &str = "/";

/// A renderable view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum View {
    Login,
    Home,
    Dashboard,
    SellerDashboard,
    Clients,
    Geographic,
    Reports,
    Goals,
    Performance,
    Proposals,
    Settings,
    NotFound,
}

/// Who may see a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Shown only without an identity; authenticated sessions are forwarded
    /// to their default view.
    Guest,
    /// Requires an identity and always forwards to the role's default view.
    Landing,
    /// Requires any identity.
    Authenticated,
    /// Requires an identity with exactly this role.
    Role(Role),
}

/// One row of the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub view: View,
    pub access: Access,
    pub label: &'static str,
    pub description: &'static str,
    /// Where the route appears in the navigation menu, if at all.
    pub section: Option<NavSection>,
}

impl Route {
    /// Role the route is restricted to, if any.
    pub fn required_role(&self) -> Option<Role> {
        match self.access {
            Access::Role(role) => Some(role),
            _ => None,
        }
    }
}

pub static ROUTES: &[Route] = &[
    Route {
        path: LOGIN_PATH,
        view: View::Login,
        access: Access::Guest,
        label: "Login",
        description: "Acesse sua conta para continuar",
        section: None,
    },
    Route {
        path: ROOT_PATH,
        view: View::Home,
        access: Access::Landing,
        label: "Início",
        description: "Página inicial",
        section: None,
    },
    Route {
        path: "/dashboard",
        view: View::Dashboard,
        access: Access::Role(Role::Planner),
        label: "Dashboard",
        description: "Visão geral dos KPIs",
        section: Some(NavSection::Main),
    },
    Route {
        path: "/vendedor",
        view: View::SellerDashboard,
        access: Access::Role(Role::Seller),
        label: "Meu Painel",
        description: "Resumo da sua carteira",
        section: Some(NavSection::Main),
    },
    Route {
        path: "/clients",
        view: View::Clients,
        access: Access::Authenticated,
        label: "Clientes",
        description: "Gestão da carteira",
        section: Some(NavSection::Main),
    },
    Route {
        path: "/geographic",
        view: View::Geographic,
        access: Access::Role(Role::Planner),
        label: "Análise Geográfica",
        description: "Performance por região",
        section: Some(NavSection::Main),
    },
    Route {
        path: "/reports",
        view: View::Reports,
        access: Access::Authenticated,
        label: "Relatórios",
        description: "Analytics avançados",
        section: Some(NavSection::Main),
    },
    Route {
        path: "/goals",
        view: View::Goals,
        access: Access::Role(Role::Planner),
        label: "Metas",
        description: "Acompanhamento de objetivos",
        section: Some(NavSection::Main),
    },
    Route {
        path: "/performance",
        view: View::Performance,
        access: Access::Authenticated,
        label: "Performance",
        description: "Indicadores de vendas",
        section: Some(NavSection::Main),
    },
    Route {
        path: "/proposals",
        view: View::Proposals,
        access: Access::Authenticated,
        label: "Propostas Comerciais",
        description: "Gestão de propostas",
        section: Some(NavSection::Main),
    },
    Route {
        path: "/settings",
        view: View::Settings,
        access: Access::Authenticated,
        label: "Configurações",
        description: "Preferências da conta",
        section: Some(NavSection::Bottom),
    },
];

/// Strips the query string and fragment, and a trailing slash except on the
/// root path. An empty path is the root.
pub fn normalize_path(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = path[..end].trim();
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { ROOT_PATH } else { trimmed }
}

/// Looks up the route for `path` after normalization.
pub fn find_route(path: &str) -> Option<&'static Route> {
    let path = normalize_path(path);
    ROUTES.iter().find(|route| route.path == path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_paths_are_unique() {
        let paths: HashSet<&str> = ROUTES.iter().map(|r| r.path).collect();
        assert_eq!(paths.len(), ROUTES.len());
    }

    #[test]
    fn test_role_requirements() {
        let restricted: Vec<(&str, Option<Role>)> = ROUTES
            .iter()
            .map(|r| (r.path, r.required_role()))
            .filter(|(_, role)| role.is_some())
            .collect();
        assert_eq!(
            restricted,
            vec![
                ("/dashboard", Some(Role::Planner)),
                ("/vendedor", Some(Role::Seller)),
                ("/geographic", Some(Role::Planner)),
                ("/goals", Some(Role::Planner)),
            ]
        );
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path("/goals/"), "/goals");
        assert_eq!(normalize_path("/clients?segment=Ouro"), "/clients");
        assert_eq!(normalize_path("/reports#top"), "/reports");
    }

    #[test]
    fn test_find_route_is_exact() {
        assert_eq!(find_route("/goals").map(|r| r.view), Some(View::Goals));
        assert!(find_route("/goals/2024").is_none());
        assert!(find_route("/Goals").is_none());
    }
}
