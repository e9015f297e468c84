//! Session lifecycle: restore, authenticate and clear.

mod outcome;
mod store;

pub use outcome::{AuthOutcome, INVALID_CREDENTIALS};
pub use store::SessionStore;
