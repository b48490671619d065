//! Data models for the trivia service
//!
//! Defines the core data structures: Question, NewQuestion and Category.

use serde::{Deserialize, Serialize};

/// Store-assigned question identifier
pub type QuestionId = i64;

/// Category identifier
pub type CategoryId = i64;

/// A stored trivia question
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Question {
    /// Unique identifier, never reused
    pub id: QuestionId,
    /// The question text
    pub question: String,
    /// The expected answer
    pub answer: String,
    /// Category this question belongs to
    pub category: CategoryId,
    /// Difficulty score, usually 1 to 5
    pub difficulty: u8,
}

/// A validated question that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: CategoryId,
    pub difficulty: u8,
}

impl NewQuestion {
    /// Attach the identifier assigned by the store
    pub fn into_question(self, id: QuestionId) -> Question {
        Question {
            id,
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}

/// A question category
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    /// Human-readable label
    #[serde(rename = "type")]
    pub kind: String,
}

impl Category {
    pub fn new(id: CategoryId, kind: impl Into<String>) -> Self {
        Self {
            id,
            kind: kind.into(),
        }
    }
}

/// Categories seeded into a fresh store
pub const DEFAULT_CATEGORIES: &[(CategoryId, &str)] = &[
    (1, "Science"),
    (2, "Art"),
    (3, "Geography"),
    (4, "History"),
    (5, "Entertainment"),
    (6, "Sports"),
];
