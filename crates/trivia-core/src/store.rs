//! Store adapter
//!
//! `QuestionStore` is the capability boundary over the question and category
//! collections. Every operation in [`crate::service`] receives a store
//! explicitly, so tests can hand in a [`crate::MemoryStore`] while the server
//! uses a [`crate::SqliteStore`].
//!
//! Each method is atomic on its own; nothing here spans several calls.
//!
//! ## Usage
//!
//! ```ignore
//! let mut store = SqliteStore::open(&config)?;
//!
//! let question = store.insert_question(&new_question)?;
//! let science = store.questions_where(&|q| q.category == 1)?;
//! ```

use crate::models::{Category, CategoryId, NewQuestion, Question, QuestionId};
use crate::storage::StorageResult;

/// Durable collection of questions and categories
pub trait QuestionStore {
    /// All categories, ordered by id
    fn categories(&self) -> StorageResult<Vec<Category>>;

    /// Get a category by id
    fn category(&self, id: CategoryId) -> StorageResult<Option<Category>>;

    /// All questions in natural (ascending id) order
    fn questions(&self) -> StorageResult<Vec<Question>>;

    /// Get a question by id
    fn question(&self, id: QuestionId) -> StorageResult<Option<Question>>;

    /// Questions matching `predicate`, in natural order
    fn questions_where(&self, predicate: &dyn Fn(&Question) -> bool) -> StorageResult<Vec<Question>> {
        Ok(self
            .questions()?
            .into_iter()
            .filter(|question| predicate(question))
            .collect())
    }

    /// Store a new question and return it with its assigned id
    ///
    /// The caller is responsible for checking that the category exists.
    fn insert_question(&mut self, question: &NewQuestion) -> StorageResult<Question>;

    /// Delete a question, returning whether it existed
    fn delete_question(&mut self, id: QuestionId) -> StorageResult<bool>;

    /// Number of stored questions
    fn question_count(&self) -> StorageResult<usize> {
        Ok(self.questions()?.len())
    }
}
