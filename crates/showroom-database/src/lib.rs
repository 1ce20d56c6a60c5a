//! # showroom-database
//!
//! PostgreSQL connection management, the data store gateway
//! implementations, and one repository per record collection.

pub mod connection;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use repositories::Repositories;
pub use store::{MemoryStore, PgStore};
