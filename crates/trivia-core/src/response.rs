//! Response payloads
//!
//! Shapes returned to clients. Field names here are the wire names and must
//! not change.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{Category, CategoryId, Question};

/// Category id to label, serialized as a JSON object keyed by id
pub type CategoryMap = BTreeMap<CategoryId, String>;

pub fn category_map(categories: &[Category]) -> CategoryMap {
    categories
        .iter()
        .map(|c| (c.id, c.kind.clone()))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoriesPayload {
    pub categories: CategoryMap,
}

/// One page of the full question listing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionPagePayload {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: CategoryMap,
    pub current_category: Option<CategoryId>,
}

/// Search results or the questions of one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionListPayload {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: Option<CategoryId>,
}

impl QuestionListPayload {
    pub fn new(questions: Vec<Question>, current_category: Option<CategoryId>) -> Self {
        Self {
            total_questions: questions.len(),
            questions,
            current_category,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuizPayload {
    /// `null` once the quiz has run out of questions
    pub question: Option<Question>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SuccessPayload {
    pub success: bool,
}

impl SuccessPayload {
    pub fn ok() -> Self {
        Self { success: true }
    }
}
