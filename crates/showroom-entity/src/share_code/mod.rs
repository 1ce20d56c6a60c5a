//! Share code domain entities.

pub mod model;

pub use model::{CreateShareCode, ShareCode};
