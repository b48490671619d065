//! Query engines
//!
//! Pure functions over slices of questions. None of them touch the store;
//! [`crate::service`] reads the data and passes it in.

pub mod category;
pub mod pagination;
pub mod quiz;
pub mod search;

pub use category::{by_category, category_exists, in_category};
pub use pagination::{paginate, parse_page, Page, QUESTIONS_PER_PAGE};
pub use quiz::{candidate_pool, next_question};
pub use search::search;
