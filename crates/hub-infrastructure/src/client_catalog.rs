//! Bundled client portfolio.

use hub_core::client::Client;
use hub_core::error::Result;

const CLIENTS_JSON: &str = include_str!("../data/clients.json");

/// Static client list shipped with the application.
#[derive(Debug, Clone)]
pub struct ClientCatalog {
    clients: Vec<Client>,
}

impl ClientCatalog {
    /// Parses the bundled portfolio.
    pub fn bundled() -> Result<Self> {
        Self::from_json(CLIENTS_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let clients: Vec<Client> = serde_json::from_str(json)?;
        Ok(Self { clients })
    }

    pub fn clients(&self) -> &[Client] {
        &self.clients
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hub_core::client::{ClientFilter, EventType, Segment};

    #[test]
    fn test_bundled_catalog_parses() {
        let catalog = ClientCatalog::bundled().unwrap();
        assert!(!catalog.clients().is_empty());
    }

    #[test]
    fn test_bundled_keys_are_unique() {
        let catalog = ClientCatalog::bundled().unwrap();
        let mut keys: Vec<&str> = catalog.clients().iter().map(|c| c.key.as_str()).collect();
        let total = keys.len();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), total);
    }

    #[test]
    fn test_filter_over_bundled_catalog() {
        let catalog = ClientCatalog::bundled().unwrap();
        let filter = ClientFilter::new()
            .with_segment(Segment::Ouro)
            .with_event_type(EventType::Showroom);
        let result = filter.apply(catalog.clients());
        assert!(
            result
                .iter()
                .all(|c| c.segment == Segment::Ouro && c.event_type == EventType::Showroom)
        );
        assert!(!result.is_empty());
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(ClientCatalog::from_json("[{\"key\": 1}]").is_err());
    }
}
