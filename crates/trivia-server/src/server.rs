//! HTTP routes
//!
//! Thin axum handlers over [`trivia_core::service`]. Each handler parses its
//! input, runs one operation against the shared store and returns the
//! payload as JSON, or an [`ApiError`].

use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::{header, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tower_http::cors::{Any, CorsLayer};
use tracing::{debug, info};

use trivia_core::request::{CreateQuestionRequest, QuizRequest, SearchRequest};
use trivia_core::{service, Config, QuestionStore, SqliteStore, StorageError, TriviaError, TriviaResult};

use crate::error::{error_response, ApiError};

/// Store shared by all requests; each operation holds the lock for its duration
pub type SharedStore = Arc<Mutex<dyn QuestionStore + Send>>;

#[derive(Clone)]
struct AppState {
    store: SharedStore,
}

impl AppState {
    /// Run one operation with exclusive access to the store
    ///
    /// Store calls block on SQLite, so they run on tokio's blocking pool
    /// rather than on a runtime worker.
    async fn with_store<T, F>(&self, op: F) -> Result<T, ApiError>
    where
        T: Send + 'static,
        F: FnOnce(&mut (dyn QuestionStore + Send)) -> TriviaResult<T> + Send + 'static,
    {
        let store = Arc::clone(&self.store);
        let result = tokio::task::spawn_blocking(move || {
            let mut store = store
                .lock()
                .map_err(|_| TriviaError::from(StorageError::Poisoned))?;
            op(&mut *store)
        })
        .await
        .map_err(|e| TriviaError::from(StorageError::Task(e.to_string())))?;

        Ok(result?)
    }
}

/// Cross-origin policy: any origin may call the API from a browser
pub fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::PATCH,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

/// Build the application router over `store`
pub fn router(store: SharedStore) -> Router {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/categories/:id/questions", get(questions_by_category))
        .route("/questions", get(list_questions).post(create_or_search))
        .route("/questions/search", post(search_questions))
        .route("/questions/:id", delete(delete_question))
        .route("/quizzes", post(next_quiz_question))
        .fallback(not_found)
        .layer(cors())
        .with_state(AppState { store })
}

/// Open the configured store and serve until interrupted
pub async fn serve(config: &Config, bind_addr: &str) -> Result<()> {
    let store = SqliteStore::open(config).with_context(|| {
        format!("Failed to open question store at {:?}", config.sqlite_path())
    })?;
    let store: SharedStore = Arc::new(Mutex::new(store));

    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", bind_addr))?;
    info!("Trivia API listening on {}", listener.local_addr()?);

    axum::serve(listener, router(store))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown requested");
    }
}

// ==================== Handlers ====================

#[derive(Debug, Deserialize)]
struct PageQuery {
    page: Option<String>,
}

async fn list_categories(State(state): State<AppState>) -> Result<Response, ApiError> {
    let payload = state
        .with_store(|store| service::list_categories(&*store))
        .await?;
    Ok(Json(payload).into_response())
}

async fn list_questions(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Response, ApiError> {
    debug!("Listing questions, page={:?}", query.page);
    let payload = state
        .with_store(move |store| service::list_questions(&*store, query.page.as_deref()))
        .await?;
    Ok(Json(payload).into_response())
}

async fn delete_question(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let id = parse_id("question", &id)?;
    debug!("Deleting question {}", id);
    let payload = state
        .with_store(move |store| service::delete_question(store, id))
        .await?;
    Ok(Json(payload).into_response())
}

/// `POST /questions` searches when the body carries `searchTerm`, and
/// creates a question otherwise
async fn create_or_search(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let value: Value = parse_body(&body)?;

    if value.get("searchTerm").is_some() {
        let request: SearchRequest = from_value(value)?;
        debug!("Searching questions for {:?}", request.search_term);
        let payload = state
            .with_store(move |store| service::search_questions(&*store, &request))
            .await?;
        return Ok(Json(payload).into_response());
    }

    let request: CreateQuestionRequest = if value.is_null() {
        CreateQuestionRequest::default()
    } else {
        from_value(value)?
    };
    let payload = state
        .with_store(move |store| service::create_question(store, request))
        .await?;
    Ok(Json(payload).into_response())
}

async fn search_questions(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let request: SearchRequest = parse_body(&body)?;
    debug!("Searching questions for {:?}", request.search_term);
    let payload = state
        .with_store(move |store| service::search_questions(&*store, &request))
        .await?;
    Ok(Json(payload).into_response())
}

async fn questions_by_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let id = parse_id("category", &id)?;
    let payload = state
        .with_store(move |store| service::questions_by_category(&*store, id))
        .await?;
    Ok(Json(payload).into_response())
}

async fn next_quiz_question(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let request: QuizRequest = parse_body(&body)?;
    debug!(
        "Quiz: {} previous questions, category {:?}",
        request.previous_questions.len(),
        request.category_id()
    );
    let payload = state
        .with_store(move |store| {
            service::next_quiz_question(&*store, &request, &mut rand::thread_rng())
        })
        .await?;
    Ok(Json(payload).into_response())
}

async fn not_found() -> Response {
    error_response(StatusCode::NOT_FOUND, "Resource not found")
}

// ==================== Input parsing ====================

fn parse_id(entity: &str, raw: &str) -> Result<i64, ApiError> {
    raw.parse().map_err(|_| {
        ApiError(TriviaError::invalid(format!(
            "{} id must be an integer, got '{}'",
            entity, raw
        )))
    })
}

/// Parse a JSON body, treating an empty body as the default value
fn parse_body<T: DeserializeOwned + Default>(body: &[u8]) -> Result<T, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(body)
        .map_err(|e| ApiError(TriviaError::invalid(format!("malformed JSON body: {}", e))))
}

fn from_value<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value)
        .map_err(|e| ApiError(TriviaError::invalid(format!("unexpected request body: {}", e))))
}
