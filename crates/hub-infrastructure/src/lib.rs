pub mod client_catalog;
pub mod config_service;
pub mod paths;
pub mod session_slot;
pub mod storage;

pub use crate::client_catalog::ClientCatalog;
pub use crate::config_service::ConfigService;
pub use crate::session_slot::{FileSessionSlot, MemorySessionSlot};
