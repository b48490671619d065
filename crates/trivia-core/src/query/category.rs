//! Filtering questions by category

use crate::models::{Category, CategoryId, Question};

/// Whether `id` names one of `categories`
pub fn category_exists(categories: &[Category], id: CategoryId) -> bool {
    categories.iter().any(|c| c.id == id)
}

/// Predicate selecting questions stored under category `id`
pub fn in_category(id: CategoryId) -> impl Fn(&Question) -> bool {
    move |q: &Question| q.category == id
}

/// Questions stored under category `id`, in natural order
pub fn by_category(questions: &[Question], id: CategoryId) -> Vec<Question> {
    let matches = in_category(id);
    questions.iter().filter(|q| matches(*q)).cloned().collect()
}
