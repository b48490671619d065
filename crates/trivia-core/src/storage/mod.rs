//! Storage layer
//!
//! Backends for [`crate::QuestionStore`]:
//!
//! - **SQLite**: durable store used by the server
//! - **Memory**: store used by tests and tools that need no persistence

pub mod error;
pub mod memory;
pub mod schema;
pub mod sqlite;

pub use error::{StorageError, StorageResult};
pub use memory::MemoryStore;
pub use schema::{init_schema, needs_init, SCHEMA_VERSION};
pub use sqlite::SqliteStore;
