//! # showroom-entity
//!
//! Domain entity models for Showroom. Every struct in this crate is a row
//! of one data store collection, or the payload used to create one. Rows
//! use the store's column names: the primary key column is `uuid`.

pub mod company;
pub mod library;
pub mod project;
pub mod share_code;
pub mod user;
