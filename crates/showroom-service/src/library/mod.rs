//! Library lifecycle operations.

pub mod service;

pub use service::LibraryService;
