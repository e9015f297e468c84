//! Directory of known identities.
//!
//! The directory answers "who is this identifier" and "does this secret
//! unlock it". The bundled [`StaticDirectory`] is a demo directory: it accepts
//! any non-empty secret for a known identifier. A deployment with real
//! credentials replaces it with another [`IdentityDirectory`] implementation.

use super::model::{Identity, Role};

/// Lookup of known identities.
pub trait IdentityDirectory: Send + Sync {
    /// Returns the identity registered under `identifier`, if any.
    fn find(&self, identifier: &str) -> Option<Identity>;

    /// Returns the identity when `secret` is accepted for `identifier`.
    ///
    /// The default rule only requires a non-empty secret.
    fn verify(&self, identifier: &str, secret: &str) -> Option<Identity> {
        if secret.is_empty() {
            return None;
        }
        self.find(identifier)
    }

    /// All identities, in directory order.
    fn list(&self) -> Vec<Identity>;
}

/// A fixed, in-memory identity directory keyed by email.
#[derive(Debug, Clone, Default)]
pub struct StaticDirectory {
    identities: Vec<Identity>,
}

impl StaticDirectory {
    pub fn new(identities: Vec<Identity>) -> Self {
        Self { identities }
    }

    /// The two demo accounts shipped with the application.
    pub fn demo() -> Self {
        Self::new(vec![
            Identity::new("1", "João Vendedor", "vendedor@hering.com", Role::Seller)
                .with_region("Sul"),
            Identity::new(
                "2",
                "Maria Planejamento",
                "planejamento@hering.com",
                Role::Planner,
            ),
        ])
    }
}

impl IdentityDirectory for StaticDirectory {
    fn find(&self, identifier: &str) -> Option<Identity> {
        self.identities
            .iter()
            .find(|identity| identity.email == identifier)
            .cloned()
    }

    fn list(&self) -> Vec<Identity> {
        self.identities.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_directory_contains_both_roles() {
        let directory = StaticDirectory::demo();
        let roles: Vec<Role> = directory.list().iter().map(|i| i.role).collect();
        assert_eq!(roles, vec![Role::Seller, Role::Planner]);
    }

    #[test]
    fn test_verify_accepts_any_non_empty_secret() {
        let directory = StaticDirectory::demo();
        let identity = directory.verify("vendedor@hering.com", "x").unwrap();
        assert_eq!(identity.name, "João Vendedor");
        assert_eq!(identity.region.as_deref(), Some("Sul"));
    }

    #[test]
    fn test_verify_rejects_empty_secret() {
        let directory = StaticDirectory::demo();
        assert!(directory.verify("vendedor@hering.com", "").is_none());
    }

    #[test]
    fn test_verify_rejects_unknown_identifier() {
        let directory = StaticDirectory::demo();
        assert!(directory.verify("unknown@x.com", "x").is_none());
    }

    #[test]
    fn test_lookup_is_exact_match() {
        let directory = StaticDirectory::demo();
        assert!(directory.find("VENDEDOR@hering.com").is_none());
        assert!(directory.find(" vendedor@hering.com").is_none());
    }
}
