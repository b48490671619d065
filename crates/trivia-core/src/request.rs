//! Inbound request payloads
//!
//! Browser forms often post ids and scores as strings, so numeric fields
//! accept either a JSON number or a numeric string.

use std::collections::HashSet;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::{TriviaError, TriviaResult};
use crate::models::{CategoryId, NewQuestion, QuestionId};

/// Body of the create question operation
///
/// Every field is optional at the wire level so that a missing field is
/// reported as `InvalidArgument` by [`CreateQuestionRequest::validate`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateQuestionRequest {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub category: Option<Value>,
    #[serde(default)]
    pub difficulty: Option<Value>,
}

impl CreateQuestionRequest {
    /// Check that every field is present and well-formed
    ///
    /// Category existence is checked against the store by the caller.
    pub fn validate(self) -> TriviaResult<NewQuestion> {
        let question = required_text("question", self.question)?;
        let answer = required_text("answer", self.answer)?;
        let category = required_int("category", self.category.as_ref())?;
        let difficulty = required_int("difficulty", self.difficulty.as_ref())?;

        let difficulty = u8::try_from(difficulty)
            .ok()
            .filter(|d| *d > 0)
            .ok_or_else(|| {
                TriviaError::invalid(format!(
                    "difficulty must be a positive integer, got {}",
                    difficulty
                ))
            })?;

        Ok(NewQuestion {
            question,
            answer,
            category,
            difficulty,
        })
    }
}

/// Body of the search operation
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm", default)]
    pub search_term: Option<String>,
}

/// Body of the next quiz question operation
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuizRequest {
    /// Ids already asked in this quiz
    #[serde(default)]
    pub previous_questions: Vec<QuestionId>,
    /// Category to draw from; absent or null means every category
    #[serde(default)]
    pub quiz_category: Option<QuizCategory>,
}

impl QuizRequest {
    pub fn previous_ids(&self) -> HashSet<QuestionId> {
        self.previous_questions.iter().copied().collect()
    }

    pub fn category_id(&self) -> Option<CategoryId> {
        self.quiz_category.as_ref().map(|c| c.id)
    }
}

/// Category reference sent by the quiz client
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuizCategory {
    #[serde(deserialize_with = "lenient_id")]
    pub id: CategoryId,
}

fn required_text(field: &str, value: Option<String>) -> TriviaResult<String> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text),
        Some(_) => Err(TriviaError::invalid(format!("{} must not be empty", field))),
        None => Err(TriviaError::invalid(format!("missing field '{}'", field))),
    }
}

fn required_int(field: &str, value: Option<&Value>) -> TriviaResult<i64> {
    match value {
        None | Some(Value::Null) => Err(TriviaError::invalid(format!("missing field '{}'", field))),
        Some(value) => as_int(value)
            .ok_or_else(|| TriviaError::invalid(format!("{} must be an integer, got {}", field, value))),
    }
}

fn as_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn lenient_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    as_int(&value)
        .ok_or_else(|| serde::de::Error::custom(format!("expected an integer id, got {}", value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    fn create(value: Value) -> CreateQuestionRequest {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_validate_complete_request() {
        let new = create(json!({
            "question": "Who painted the Mona Lisa?",
            "answer": "Leonardo da Vinci",
            "category": 2,
            "difficulty": 3
        }))
        .validate()
        .unwrap();

        assert_eq!(new.category, 2);
        assert_eq!(new.difficulty, 3);
        assert_eq!(new.answer, "Leonardo da Vinci");
    }

    #[test]
    fn test_numeric_strings_accepted() {
        let new = create(json!({
            "question": "Q",
            "answer": "A",
            "category": "4",
            "difficulty": "1"
        }))
        .validate()
        .unwrap();

        assert_eq!((new.category, new.difficulty), (4, 1));
    }

    #[test]
    fn test_missing_difficulty() {
        let err = create(json!({"question": "Q", "answer": "A", "category": 1}))
            .validate()
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(err.to_string().contains("difficulty"));
    }

    #[test]
    fn test_null_counts_as_missing() {
        let err = create(json!({"question": null, "answer": "A", "category": 1, "difficulty": 1}))
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("missing field 'question'"));
    }

    #[test]
    fn test_rejects_blank_text_and_bad_numbers() {
        let cases = [
            json!({"question": "  ", "answer": "A", "category": 1, "difficulty": 1}),
            json!({"question": "Q", "answer": "A", "category": "science", "difficulty": 1}),
            json!({"question": "Q", "answer": "A", "category": 1, "difficulty": 0}),
            json!({"question": "Q", "answer": "A", "category": 1, "difficulty": 1000}),
            json!({"question": "Q", "answer": "A", "category": 1, "difficulty": 2.5}),
        ];

        for case in cases {
            let err = create(case.clone()).validate().unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidArgument, "case = {}", case);
        }
    }

    #[test]
    fn test_search_term_key() {
        let request: SearchRequest = serde_json::from_value(json!({"searchTerm": "title"})).unwrap();
        assert_eq!(request.search_term.as_deref(), Some("title"));

        let request: SearchRequest = serde_json::from_value(json!({})).unwrap();
        assert!(request.search_term.is_none());
    }

    #[test]
    fn test_quiz_request_shapes() {
        let request: QuizRequest = serde_json::from_value(json!({
            "previous_questions": [4, 9],
            "quiz_category": {"type": "Science", "id": "1"}
        }))
        .unwrap();
        assert_eq!(request.category_id(), Some(1));
        assert_eq!(request.previous_ids(), HashSet::from([4, 9]));

        let request: QuizRequest =
            serde_json::from_value(json!({"previous_questions": [], "quiz_category": null})).unwrap();
        assert_eq!(request.category_id(), None);

        let request: QuizRequest = serde_json::from_value(json!({})).unwrap();
        assert!(request.previous_questions.is_empty());
        assert_eq!(request.category_id(), None);
    }
}
