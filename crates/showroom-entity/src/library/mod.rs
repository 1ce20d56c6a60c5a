//! Library domain entities.

pub mod model;

pub use model::{CreateLibrary, Library};
