//! Trivia operations
//!
//! One function per operation exposed to clients. Each reads through the
//! store it is given, runs a query engine, and returns a response payload or
//! a typed [`TriviaError`].

use rand::Rng;
use tracing::{debug, info};

use crate::error::{TriviaError, TriviaResult};
use crate::models::{CategoryId, QuestionId};
use crate::query::{self, QUESTIONS_PER_PAGE};
use crate::request::{CreateQuestionRequest, QuizRequest, SearchRequest};
use crate::response::{
    category_map, CategoriesPayload, QuestionListPayload, QuestionPagePayload, QuizPayload,
    SuccessPayload,
};
use crate::store::QuestionStore;

/// All categories as an id to label map
pub fn list_categories<S: QuestionStore + ?Sized>(store: &S) -> TriviaResult<CategoriesPayload> {
    Ok(CategoriesPayload {
        categories: category_map(&store.categories()?),
    })
}

/// One page of all questions; `page` is the raw query value
pub fn list_questions<S: QuestionStore + ?Sized>(
    store: &S,
    page: Option<&str>,
) -> TriviaResult<QuestionPagePayload> {
    let page = query::parse_page(page)?;
    let questions = store.questions()?;
    let page = query::paginate(&questions, page, QUESTIONS_PER_PAGE)?;

    Ok(QuestionPagePayload {
        questions: page.items,
        total_questions: page.total,
        categories: category_map(&store.categories()?),
        current_category: None,
    })
}

/// Delete a question by id
pub fn delete_question<S: QuestionStore + ?Sized>(
    store: &mut S,
    id: QuestionId,
) -> TriviaResult<SuccessPayload> {
    if !store.delete_question(id)? {
        return Err(TriviaError::NotFound {
            entity: "Question",
            id,
        });
    }
    Ok(SuccessPayload::ok())
}

/// Validate and store a new question
///
/// Nothing is written unless every field is valid and the category exists.
pub fn create_question<S: QuestionStore + ?Sized>(
    store: &mut S,
    request: CreateQuestionRequest,
) -> TriviaResult<SuccessPayload> {
    let new = request.validate()?;
    if store.category(new.category)?.is_none() {
        return Err(TriviaError::invalid(format!(
            "category {} does not exist",
            new.category
        )));
    }

    let question = store.insert_question(&new)?;
    debug!("Created question {} in category {}", question.id, question.category);
    Ok(SuccessPayload::ok())
}

/// Validate a batch of questions and store them all, or none
///
/// Returns the number of questions stored. The first invalid entry is
/// reported with its position in the batch.
pub fn import_questions<S: QuestionStore + ?Sized>(
    store: &mut S,
    requests: Vec<CreateQuestionRequest>,
) -> TriviaResult<usize> {
    let categories = store.categories()?;

    let mut batch = Vec::with_capacity(requests.len());
    for (index, request) in requests.into_iter().enumerate() {
        let new = request.validate().map_err(|e| match e {
            TriviaError::InvalidArgument(msg) => {
                TriviaError::invalid(format!("entry {}: {}", index, msg))
            }
            other => other,
        })?;
        if !query::category_exists(&categories, new.category) {
            return Err(TriviaError::invalid(format!(
                "entry {}: category {} does not exist",
                index, new.category
            )));
        }
        batch.push(new);
    }

    for new in &batch {
        store.insert_question(new)?;
    }
    info!("Imported {} questions", batch.len());
    Ok(batch.len())
}

/// Questions whose text contains the search term
pub fn search_questions<S: QuestionStore + ?Sized>(
    store: &S,
    request: &SearchRequest,
) -> TriviaResult<QuestionListPayload> {
    let questions = store.questions()?;
    let matches = query::search(&questions, request.search_term.as_deref());
    Ok(QuestionListPayload::new(matches, None))
}

/// All questions in one category; unknown categories are `NotFound`
pub fn questions_by_category<S: QuestionStore + ?Sized>(
    store: &S,
    category: CategoryId,
) -> TriviaResult<QuestionListPayload> {
    if !query::category_exists(&store.categories()?, category) {
        return Err(TriviaError::NotFound {
            entity: "Category",
            id: category,
        });
    }

    let questions = store.questions_where(&query::in_category(category))?;
    Ok(QuestionListPayload::new(questions, Some(category)))
}

/// A random question not yet asked, or `null` when the quiz is over
pub fn next_quiz_question<S, R>(
    store: &S,
    request: &QuizRequest,
    rng: &mut R,
) -> TriviaResult<QuizPayload>
where
    S: QuestionStore + ?Sized,
    R: Rng + ?Sized,
{
    let questions = store.questions()?;
    let question = query::next_question(
        &questions,
        &request.previous_ids(),
        request.category_id(),
        rng,
    );
    Ok(QuizPayload { question })
}
