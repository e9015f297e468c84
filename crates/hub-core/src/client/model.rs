//! Client domain model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Commercial tier of a client.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Segment {
    Bronze,
    Prata,
    Ouro,
}

/// Whether the client was served in the current cycle.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum ServiceStatus {
    #[serde(rename = "Atendido")]
    #[strum(serialize = "Atendido")]
    Served,
    #[serde(rename = "Não Atendido")]
    #[strum(to_string = "Não Atendido", serialize = "nao-atendido")]
    NotServed,
    #[serde(rename = "Em Andamento")]
    #[strum(to_string = "Em Andamento", serialize = "em-andamento")]
    InProgress,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum ClientStatus {
    #[serde(rename = "Ativo")]
    #[strum(serialize = "Ativo")]
    Active,
    #[serde(rename = "Inativo")]
    #[strum(serialize = "Inativo")]
    Inactive,
    #[serde(rename = "Novo")]
    #[strum(serialize = "Novo")]
    New,
}

/// Attainment indicator shown next to each client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum TrafficLight {
    #[serde(rename = "Verde")]
    #[strum(serialize = "Verde")]
    Green,
    #[serde(rename = "Amarelo")]
    #[strum(serialize = "Amarelo")]
    Yellow,
    #[serde(rename = "Vermelho")]
    #[strum(serialize = "Vermelho")]
    Red,
}

/// Sales channel the client's revenue comes through.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum EventType {
    Showroom,
    ProntaEntrega,
    Carteira,
}

/// A client in the sales portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub key: String,
    pub cnpj: String,
    pub name: String,
    /// Two-letter Brazilian state code.
    pub state: String,
    pub city: String,
    pub subchannel: String,
    pub segment: Segment,
    pub service_status: ServiceStatus,
    pub client_status: ClientStatus,
    pub light: TrafficLight,
    pub revenue_last_year: f64,
    pub revenue_current: f64,
    /// Attainment against target, in percent.
    pub attainment: f64,
    pub gap: f64,
    pub event_type: EventType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_contact: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_follow_up: Option<NaiveDate>,
}
