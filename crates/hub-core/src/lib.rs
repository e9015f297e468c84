//! Domain layer of Sales Hub: identities, the durable session slot contract,
//! route access rules, navigation and the client portfolio.

pub mod client;
pub mod config;
pub mod error;
pub mod identity;
pub mod routing;
pub mod session;

// Re-export common error type
pub use error::HubError;
