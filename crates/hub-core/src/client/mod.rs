//! Client portfolio domain module.
//!
//! # Module Structure
//!
//! - `model`: Client record and its categorical attributes
//! - `filter`: Search and categorical filtering of a client list

mod filter;
mod model;

pub use filter::ClientFilter;
pub use model::{Client, ClientStatus, EventType, Segment, ServiceStatus, TrafficLight};
