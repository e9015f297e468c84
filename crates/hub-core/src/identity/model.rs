//! Identity domain model.
//!
//! The identity record is exactly what the session slot persists, so its
//! serialized form is a compatibility surface.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Role of an authenticated user.
///
/// Sellers see a restricted set of views; planners see everything except the
/// seller's own dashboard.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Role {
    /// Field sales representative.
    #[serde(alias = "vendedor")]
    Seller,
    /// Commercial planning team member.
    #[serde(alias = "planejamento")]
    Planner,
}

impl Role {
    /// Path of the view a user with this role lands on.
    pub fn default_path(self) -> &'static str {
        match self {
            Role::Seller => "/vendedor",
            Role::Planner => "/dashboard",
        }
    }
}

/// An authenticated user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

impl Identity {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            role,
            region: None,
        }
    }

    /// Sets the sales region this identity covers.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }
}
