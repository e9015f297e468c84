//! Identity domain module.
//!
//! # Module Structure
//!
//! - `model`: Identity record and role
//! - `directory`: Lookup of known identities and the credential rule
//!
//! # Usage
//!
//! ```ignore
//! use hub_core::identity::{Identity, IdentityDirectory, Role, StaticDirectory};
//! ```

mod directory;
mod model;

// Re-export public API
pub use directory::{IdentityDirectory, StaticDirectory};
pub use model::{Identity, Role};
