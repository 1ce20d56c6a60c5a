//! Project creation, deletion, and listing.

pub mod service;

pub use service::ProjectService;
