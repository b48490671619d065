//! Quiz question selection
//!
//! The selector is stateless: the caller keeps the ids it has already asked
//! and sends them back on every call. Once every question in the pool has
//! been asked the selector returns `None`, which ends the quiz.
//!
//! A category that does not exist is not an error here. It produces an
//! empty pool, so the quiz ends immediately. Listing by category, in
//! contrast, reports an unknown category as `NotFound`.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{CategoryId, Question, QuestionId};

/// Questions still eligible: not yet asked and in `category` when given
pub fn candidate_pool<'a>(
    questions: &'a [Question],
    previous_ids: &HashSet<QuestionId>,
    category: Option<CategoryId>,
) -> Vec<&'a Question> {
    questions
        .iter()
        .filter(|q| !previous_ids.contains(&q.id))
        .filter(|q| category.map_or(true, |id| q.category == id))
        .collect()
}

/// Pick one unseen question uniformly at random, or `None` when exhausted
pub fn next_question<R: Rng + ?Sized>(
    questions: &[Question],
    previous_ids: &HashSet<QuestionId>,
    category: Option<CategoryId>,
    rng: &mut R,
) -> Option<Question> {
    candidate_pool(questions, previous_ids, category)
        .choose(rng)
        .map(|q| (*q).clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    fn question(id: i64, category: CategoryId) -> Question {
        Question {
            id,
            question: format!("Question {}", id),
            answer: "answer".to_string(),
            category,
            difficulty: 2,
        }
    }

    #[test]
    fn test_exhausts_pool_without_repeats() {
        let questions: Vec<_> = (1..=12).map(|id| question(id, id % 3)).collect();
        let mut rng = StdRng::seed_from_u64(7);
        let mut previous = HashSet::new();

        for _ in 0..questions.len() {
            let picked = next_question(&questions, &previous, None, &mut rng).unwrap();
            assert!(previous.insert(picked.id), "question {} repeated", picked.id);
        }

        assert!(next_question(&questions, &previous, None, &mut rng).is_none());
        assert_eq!(previous.len(), questions.len());
    }

    #[test]
    fn test_category_restricts_pool() {
        let questions = vec![question(1, 5), question(2, 1), question(3, 5), question(4, 2)];
        let mut rng = StdRng::seed_from_u64(1);
        let mut previous = HashSet::new();

        while let Some(picked) = next_question(&questions, &previous, Some(5), &mut rng) {
            assert_eq!(picked.category, 5);
            previous.insert(picked.id);
        }

        assert_eq!(previous, HashSet::from([1, 3]));
    }

    #[test]
    fn test_three_questions_in_one_category() {
        let questions = vec![question(1, 5), question(2, 5), question(3, 5)];
        let mut rng = StdRng::seed_from_u64(42);
        let mut previous = HashSet::new();

        let first = next_question(&questions, &previous, Some(5), &mut rng).unwrap();
        assert!([1, 2, 3].contains(&first.id));

        previous.extend([1, 2, 3]);
        assert!(next_question(&questions, &previous, Some(5), &mut rng).is_none());
    }

    #[test]
    fn test_unknown_category_is_empty_pool() {
        let questions = vec![question(1, 1), question(2, 2)];
        let mut rng = StdRng::seed_from_u64(3);

        assert!(next_question(&questions, &HashSet::new(), Some(99), &mut rng).is_none());
    }

    #[test]
    fn test_previous_ids_outside_store_are_ignored() {
        let questions = vec![question(1, 1)];
        let previous = HashSet::from([100, 200]);
        let mut rng = StdRng::seed_from_u64(3);

        assert_eq!(
            next_question(&questions, &previous, None, &mut rng).map(|q| q.id),
            Some(1)
        );
    }

    #[test]
    fn test_selection_is_roughly_uniform() {
        let questions: Vec<_> = (1..=4).map(|id| question(id, 1)).collect();
        let mut rng = StdRng::seed_from_u64(2024);
        let mut counts: HashMap<QuestionId, usize> = HashMap::new();

        for _ in 0..4000 {
            let picked = next_question(&questions, &HashSet::new(), None, &mut rng).unwrap();
            *counts.entry(picked.id).or_default() += 1;
        }

        assert_eq!(counts.len(), 4);
        for (id, count) in counts {
            assert!((800..=1200).contains(&count), "question {} picked {} times", id, count);
        }
    }
}
