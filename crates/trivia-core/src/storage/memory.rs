//! In-memory question store for tests

use std::collections::BTreeMap;

use crate::models::{Category, CategoryId, NewQuestion, Question, QuestionId, DEFAULT_CATEGORIES};
use crate::storage::error::StorageResult;
use crate::store::QuestionStore;

/// [`QuestionStore`] kept entirely in memory
///
/// Ids come from a counter that only moves forward, so deleted ids are
/// never handed out again.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    categories: BTreeMap<CategoryId, Category>,
    questions: BTreeMap<QuestionId, Question>,
    next_id: QuestionId,
}

impl MemoryStore {
    /// Empty store seeded with the default categories
    pub fn new() -> Self {
        Self::with_categories(
            DEFAULT_CATEGORIES
                .iter()
                .map(|(id, kind)| Category::new(*id, *kind)),
        )
    }

    /// Empty store with the given categories
    pub fn with_categories(categories: impl IntoIterator<Item = Category>) -> Self {
        Self {
            categories: categories.into_iter().map(|c| (c.id, c)).collect(),
            questions: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl QuestionStore for MemoryStore {
    fn categories(&self) -> StorageResult<Vec<Category>> {
        Ok(self.categories.values().cloned().collect())
    }

    fn category(&self, id: CategoryId) -> StorageResult<Option<Category>> {
        Ok(self.categories.get(&id).cloned())
    }

    fn questions(&self) -> StorageResult<Vec<Question>> {
        Ok(self.questions.values().cloned().collect())
    }

    fn question(&self, id: QuestionId) -> StorageResult<Option<Question>> {
        Ok(self.questions.get(&id).cloned())
    }

    fn insert_question(&mut self, question: &NewQuestion) -> StorageResult<Question> {
        let id = self.next_id;
        self.next_id += 1;
        let stored = question.clone().into_question(id);
        self.questions.insert(id, stored.clone());
        Ok(stored)
    }

    fn delete_question(&mut self, id: QuestionId) -> StorageResult<bool> {
        Ok(self.questions.remove(&id).is_some())
    }
}
