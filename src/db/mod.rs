//! Database module: the SQLite-backed record store.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL for bootstrapping the database (SQLite-first)
//! - `actor.rs`: actor owning the pool, and the `RecordStore` impl on its handle

pub mod actor;
pub mod models;
pub mod schema;

pub use models::{DbCommit, DbRepository};
pub use schema::SQLITE_INIT;

pub use actor::{DbActorHandle, apply_schema, connect, spawn};
