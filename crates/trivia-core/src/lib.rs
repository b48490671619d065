//! Trivia Core Library
//!
//! This crate provides the core functionality for the trivia service:
//! questions grouped into categories, paginated listing, search, and
//! quiz play that never repeats a question.
//!
//! # Architecture
//!
//! - **Store**: `QuestionStore` is the only owner of questions and categories.
//!   SQLite backs it in production, an in-memory store backs it in tests.
//! - **Queries**: pagination, search, category filtering and quiz selection
//!   are pure functions over slices of questions.
//! - **Service**: one function per operation, wiring store, query and
//!   response payload together.
//!
//! # Quick Start
//!
//! ```text
//! let mut store = SqliteStore::open(&Config::load()?)?;
//!
//! let payload = service::list_questions(&store, Some("2"))?;
//! let next = service::next_quiz_question(&store, &request, &mut rand::thread_rng())?;
//! ```
//!
//! # Modules
//!
//! - `store`: Store adapter trait (main entry point)
//! - `storage`: SQLite and in-memory backends, schema, storage errors
//! - `models`: Questions and categories
//! - `query`: Pagination, search, category filter, quiz selector
//! - `request` / `response`: Inbound and outbound payloads
//! - `service`: Operations exposed over HTTP
//! - `config`: Application configuration

pub mod config;
pub mod error;
pub mod models;
pub mod query;
pub mod request;
pub mod response;
pub mod service;
pub mod storage;
pub mod store;

pub use config::Config;
pub use error::{ErrorKind, TriviaError, TriviaResult};
pub use models::{Category, CategoryId, NewQuestion, Question, QuestionId};
pub use storage::{MemoryStore, SqliteStore, StorageError};
pub use store::QuestionStore;
