//! Case-insensitive substring search over question text

use crate::models::Question;

/// Questions whose text contains `term`, ignoring case
///
/// An absent or empty term matches every question. Answers are not searched.
pub fn search(questions: &[Question], term: Option<&str>) -> Vec<Question> {
    let needle = term.unwrap_or_default().to_lowercase();
    questions
        .iter()
        .filter(|q| q.question.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: i64, text: &str, answer: &str) -> Question {
        Question {
            id,
            question: text.to_string(),
            answer: answer.to_string(),
            category: 1,
            difficulty: 1,
        }
    }

    fn sample() -> Vec<Question> {
        vec![
            question(1, "What is the title of the 1990 fantasy film?", "Edward Scissorhands"),
            question(2, "Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?", "Maya Angelou"),
            question(3, "Which country won the first World Cup?", "Uruguay"),
        ]
    }

    #[test]
    fn test_empty_term_matches_everything() {
        assert_eq!(search(&sample(), Some("")).len(), 3);
        assert_eq!(search(&sample(), None).len(), 3);
    }

    #[test]
    fn test_case_insensitive() {
        let ids: Vec<_> = search(&sample(), Some("what")).iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![1]);

        let ids: Vec<_> = search(&sample(), Some("TITLE")).iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_answers_are_not_searched() {
        assert!(search(&sample(), Some("Uruguay")).is_empty());
    }

    #[test]
    fn test_preserves_natural_order() {
        let ids: Vec<_> = search(&sample(), Some("w")).iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
