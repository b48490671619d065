//! Import command handler

use std::path::Path;

use anyhow::{Context, Result};

use trivia_core::request::CreateQuestionRequest;
use trivia_core::{service, Config, SqliteStore};

/// Read a JSON array of questions from `file` and store them
///
/// Nothing is stored if any entry is invalid.
pub fn run(config: &Config, file: &Path) -> Result<()> {
    let requests = read_requests(file)?;

    let mut store = SqliteStore::open(config).with_context(|| {
        format!("Failed to open question store at {:?}", config.sqlite_path())
    })?;
    let imported = service::import_questions(&mut store, requests)
        .with_context(|| format!("Failed to import {:?}", file))?;

    println!("✓ Imported {} question(s) into {}", imported, config.sqlite_path().display());
    Ok(())
}

fn read_requests(file: &Path) -> Result<Vec<CreateQuestionRequest>> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {:?}", file))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Expected a JSON array of questions in {:?}", file))
}
