use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::Response,
    routing::get,
    Router,
};
use bookshelf_http::{error::AppError, extract::JsonBody, response};
use bookshelf_kernel::settings::NotFoundPolicy;

use super::models::{Book, BookInput};
use super::store::BookStore;

/// Shared state handed to every Books handler.
#[derive(Clone)]
pub struct BooksState {
    pub store: Arc<BookStore>,
    pub not_found: NotFoundPolicy,
}

/// Build the Books router; mounted by the HTTP layer under `/api/books`.
pub fn router(state: BooksState) -> Router {
    tracing::debug!(not_found = ?state.not_found, "registering books routes");

    Router::new()
        .route("/", get(list_books).post(create_book))
        .route(
            "/{id}",
            get(get_book).put(update_book).delete(delete_book),
        )
        .with_state(state)
}

async fn list_books(State(state): State<BooksState>) -> Result<Response, AppError> {
    response::json(&state.store.list().await)
}

async fn get_book(
    State(state): State<BooksState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    if let Some(book) = state.store.find_by_id(&id).await {
        return response::json(&book);
    }

    tracing::debug!(book_id = %id, "book not found");
    match state.not_found {
        NotFoundPolicy::Strict => Err(missing(&id)),
        NotFoundPolicy::Lenient => response::json(&Book::default()),
    }
}

async fn create_book(
    State(state): State<BooksState>,
    JsonBody(input): JsonBody<BookInput>,
) -> Result<Response, AppError> {
    let book = state.store.create(input).await;
    tracing::info!(book_id = %book.id, "book created");
    response::json(&book)
}

/// The body is decoded before the store is touched, so a malformed payload
/// is rejected the same way whether or not `id` exists.
async fn update_book(
    State(state): State<BooksState>,
    Path(id): Path<String>,
    JsonBody(input): JsonBody<BookInput>,
) -> Result<Response, AppError> {
    if let Some(book) = state.store.replace(&id, input).await {
        tracing::info!(book_id = %book.id, "book updated");
        return response::json(&book);
    }

    tracing::debug!(book_id = %id, "update target not found");
    match state.not_found {
        NotFoundPolicy::Strict => Err(missing(&id)),
        NotFoundPolicy::Lenient => response::json(&state.store.list().await),
    }
}

/// Always answers with the remaining collection, removed or not.
async fn delete_book(
    State(state): State<BooksState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let (removed, remaining) = state.store.delete(&id).await;
    if removed {
        tracing::info!(book_id = %id, "book deleted");
    }
    response::json(&remaining)
}

fn missing(id: &str) -> AppError {
    AppError::not_found(format!("book '{}' not found", id))
}
