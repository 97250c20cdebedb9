//! Database module: the record store and its schema.
//!
//! Layout:
//! - `schema.rs`: SQL DDL for initializing the database
//! - `sqlite.rs`: `RecordStore`, the only owner of the connection pool

pub mod schema;
pub mod sqlite;

pub use schema::SQLITE_INIT;
pub use sqlite::{RecordStore, SqlitePool};
