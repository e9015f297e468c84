pub mod bootstrap;
pub mod navigator;
pub mod session;

pub use bootstrap::HubContext;
pub use navigator::{Navigation, Navigator};
pub use session::{AuthOutcome, SessionStore};
