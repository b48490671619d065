//! SQLite question store
//!
//! The durable backend used by the server. Categories are seeded when the
//! schema is first created.
//!
//! ## Tables
//!
//! - `categories` - Seeded category labels
//! - `questions` - Question records, ids from `AUTOINCREMENT`
//! - `schema_info` - Schema version

use rusqlite::{params, Connection, OptionalExtension, Row};
use tracing::{debug, info};

use crate::config::Config;
use crate::models::{Category, CategoryId, NewQuestion, Question, QuestionId};
use crate::storage::error::{StorageError, StorageResult};
use crate::storage::schema::{init_schema, needs_init};
use crate::store::QuestionStore;

const QUESTION_COLUMNS: &str = "id, question, answer, category, difficulty";

/// SQLite-backed implementation of [`QuestionStore`]
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open or create the SQLite database
    pub fn open(config: &Config) -> StorageResult<Self> {
        let path = config.sqlite_path();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| StorageError::from_io(e, parent.to_path_buf()))?;
        }

        let conn = Connection::open(&path).map_err(|source| StorageError::Open {
            path: path.clone(),
            source,
        })?;

        conn.execute_batch("PRAGMA foreign_keys = ON;")?;

        if needs_init(&conn) {
            init_schema(&conn)?;
            info!("Initialized question database at {:?}", path);
        }

        Ok(Self { conn })
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> StorageResult<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        init_schema(&conn)?;
        Ok(Self { conn })
    }

    fn query_questions(&self, sql: &str, args: impl rusqlite::Params) -> StorageResult<Vec<Question>> {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt.query_map(args, QuestionRow::from_row)?;

        let mut questions = Vec::new();
        for row in rows {
            questions.push(row?.into_question()?);
        }
        Ok(questions)
    }
}

impl QuestionStore for SqliteStore {
    fn categories(&self) -> StorageResult<Vec<Category>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, type FROM categories ORDER BY id")?;
        let rows = stmt.query_map([], |row| Ok(Category::new(row.get(0)?, row.get::<_, String>(1)?)))?;

        let mut categories = Vec::new();
        for row in rows {
            categories.push(row?);
        }
        Ok(categories)
    }

    fn category(&self, id: CategoryId) -> StorageResult<Option<Category>> {
        let category = self
            .conn
            .query_row(
                "SELECT id, type FROM categories WHERE id = ?",
                params![id],
                |row| Ok(Category::new(row.get(0)?, row.get::<_, String>(1)?)),
            )
            .optional()?;
        Ok(category)
    }

    fn questions(&self) -> StorageResult<Vec<Question>> {
        self.query_questions(
            &format!("SELECT {} FROM questions ORDER BY id", QUESTION_COLUMNS),
            params![],
        )
    }

    fn question(&self, id: QuestionId) -> StorageResult<Option<Question>> {
        let row = self
            .conn
            .query_row(
                &format!("SELECT {} FROM questions WHERE id = ?", QUESTION_COLUMNS),
                params![id],
                QuestionRow::from_row,
            )
            .optional()?;
        row.map(QuestionRow::into_question).transpose()
    }

    fn insert_question(&mut self, question: &NewQuestion) -> StorageResult<Question> {
        self.conn.execute(
            "INSERT INTO questions (question, answer, category, difficulty) VALUES (?, ?, ?, ?)",
            params![
                question.question,
                question.answer,
                question.category,
                question.difficulty
            ],
        )?;
        let id = self.conn.last_insert_rowid();
        debug!("Inserted question {}", id);
        Ok(question.clone().into_question(id))
    }

    fn delete_question(&mut self, id: QuestionId) -> StorageResult<bool> {
        let deleted = self
            .conn
            .execute("DELETE FROM questions WHERE id = ?", params![id])?;
        debug!("Deleted question {}: {}", id, deleted > 0);
        Ok(deleted > 0)
    }

    fn question_count(&self) -> StorageResult<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM questions", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

/// Raw question row before difficulty is range-checked
struct QuestionRow {
    id: QuestionId,
    question: String,
    answer: String,
    category: CategoryId,
    difficulty: i64,
}

impl QuestionRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            question: row.get(1)?,
            answer: row.get(2)?,
            category: row.get(3)?,
            difficulty: row.get(4)?,
        })
    }

    fn into_question(self) -> StorageResult<Question> {
        let difficulty = u8::try_from(self.difficulty).map_err(|_| StorageError::InvalidValue {
            column: "difficulty",
            details: format!("{} does not fit in 0..=255", self.difficulty),
        })?;
        Ok(Question {
            id: self.id,
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty,
        })
    }
}
