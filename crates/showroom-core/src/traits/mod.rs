//! Core traits defined in `showroom-core` and implemented by other crates.

pub mod identity;
pub mod store;

pub use identity::IdentityProvider;
pub use store::{DataStore, Record};
