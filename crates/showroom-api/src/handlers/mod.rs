//! Request handlers, one module per resource.

pub mod company;
pub mod copy;
pub mod health;
pub mod library;
pub mod project;
