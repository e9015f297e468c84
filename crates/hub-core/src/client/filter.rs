//! Client list filtering.

use serde::{Deserialize, Serialize};

use super::model::{Client, EventType, Segment, ServiceStatus};

/// Filter over a client list. Unset categorical filters match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientFilter {
    /// Free text matched against name, CNPJ and city.
    pub search: String,
    pub segment: Option<Segment>,
    pub service_status: Option<ServiceStatus>,
    pub event_type: Option<EventType>,
}

impl ClientFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_segment(mut self, segment: Segment) -> Self {
        self.segment = Some(segment);
        self
    }

    pub fn with_service_status(mut self, status: ServiceStatus) -> Self {
        self.service_status = Some(status);
        self
    }

    pub fn with_event_type(mut self, event_type: EventType) -> Self {
        self.event_type = Some(event_type);
        self
    }

    pub fn matches(&self, client: &Client) -> bool {
        self.matches_search(client)
            && self.segment.is_none_or(|s| s == client.segment)
            && self.service_status.is_none_or(|s| s == client.service_status)
            && self.event_type.is_none_or(|t| t == client.event_type)
    }

    /// Clients matching the filter, in their original order.
    pub fn apply<'a>(&self, clients: &'a [Client]) -> Vec<&'a Client> {
        clients.iter().filter(|c| self.matches(c)).collect()
    }

    // CNPJ is matched verbatim; name and city ignore case.
    fn matches_search(&self, client: &Client) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        client.name.to_lowercase().contains(&needle)
            || client.cnpj.contains(&self.search)
            || client.city.to_lowercase().contains(&needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{ClientStatus, TrafficLight};

    fn client(key: &str, name: &str, cnpj: &str, city: &str, segment: Segment) -> Client {
        Client {
            key: key.to_string(),
            cnpj: cnpj.to_string(),
            name: name.to_string(),
            state: "SC".to_string(),
            city: city.to_string(),
            subchannel: "Multimarcas".to_string(),
            segment,
            service_status: ServiceStatus::Served,
            client_status: ClientStatus::Active,
            light: TrafficLight::Green,
            revenue_last_year: 100_000.0,
            revenue_current: 90_000.0,
            attainment: 90.0,
            gap: 10_000.0,
            event_type: EventType::Showroom,
            last_contact: None,
            next_follow_up: None,
        }
    }

    fn catalog() -> Vec<Client> {
        let mut pending = client(
            "C3",
            "Moda Sul",
            "33.444.555/0001-66",
            "Porto Alegre",
            Segment::Bronze,
        );
        pending.service_status = ServiceStatus::NotServed;
        pending.event_type = EventType::Carteira;
        vec![
            client(
                "C1",
                "Loja Blumenau",
                "11.222.333/0001-44",
                "Blumenau",
                Segment::Ouro,
            ),
            client(
                "C2",
                "Boutique Central",
                "22.333.444/0001-55",
                "Joinville",
                Segment::Prata,
            ),
            pending,
        ]
    }

    fn keys(result: Vec<&Client>) -> Vec<&str> {
        result.into_iter().map(|c| c.key.as_str()).collect()
    }

    #[test]
    fn test_empty_filter_keeps_everything_in_order() {
        let clients = catalog();
        assert_eq!(keys(ClientFilter::new().apply(&clients)), vec!["C1", "C2", "C3"]);
    }

    #[test]
    fn test_search_is_case_insensitive_on_name_and_city() {
        let clients = catalog();
        let by_name = ClientFilter::new().with_search("BOUTIQUE");
        let by_city = ClientFilter::new().with_search("porto");
        assert_eq!(keys(by_name.apply(&clients)), vec!["C2"]);
        assert_eq!(keys(by_city.apply(&clients)), vec!["C3"]);
    }

    #[test]
    fn test_search_matches_cnpj_substring() {
        let clients = catalog();
        let one = ClientFilter::new().with_search("222.333");
        assert_eq!(keys(one.apply(&clients)), vec!["C1"]);

        let shared = ClientFilter::new().with_search("/0001-");
        assert_eq!(keys(shared.apply(&clients)), vec!["C1", "C2", "C3"]);
    }

    #[test]
    fn test_categorical_filters_combine() {
        let clients = catalog();
        let filter = ClientFilter::new()
            .with_service_status(ServiceStatus::NotServed)
            .with_event_type(EventType::Carteira);
        assert_eq!(keys(filter.apply(&clients)), vec!["C3"]);

        let none = ClientFilter::new()
            .with_segment(Segment::Ouro)
            .with_event_type(EventType::Carteira);
        assert!(none.apply(&clients).is_empty());
    }
}
