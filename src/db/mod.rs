//! Database module: models and schema for persistent storage.
//!
//! Layout:
//! - `models.rs`: API-facing structs and the list column codec
//! - `schema.rs`: SQL DDL for initializing the database
//! - `sqlite.rs`: `Store`, the only owner of persisted state

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::{DbUser, Tool, ToolFields, decode_list, encode_list};
pub use schema::SQLITE_INIT;
pub use sqlite::{SqlitePool, Store};
