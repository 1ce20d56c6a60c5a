//! Core type definitions used across the Showroom workspace.

pub mod filter;
pub mod id;

pub use filter::{Filter, FilterField};
pub use id::*;
