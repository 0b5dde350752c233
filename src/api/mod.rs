//! API handlers and router for Shelf REST endpoints

pub mod books;
pub mod health;
pub mod openapi;
pub mod persons;

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    routing::get,
    Router,
};
use serde::de::DeserializeOwned;
use tower_http::trace::TraceLayer;

use crate::{error::AppError, AppState};

/// Integer id parsed from everything after the collection prefix.
///
/// Anything that is not an integer, including a missing segment or extra
/// segments (`/books/1/x`), is rejected with 400 before the method is looked at.
pub struct RecordId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for RecordId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(segment) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| invalid_id())?;

        segment.parse().map(RecordId).map_err(|_| invalid_id())
    }
}

fn invalid_id() -> AppError {
    AppError::BadRequest("Invalid ID".to_string())
}

/// JSON body decoded regardless of the request `Content-Type`.
///
/// Decode failures become a 400 `Invalid body` instead of axum's
/// 415/422 rejections.
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|_| invalid_body())?;

        serde_json::from_slice(&bytes).map(JsonBody).map_err(|e| {
            tracing::debug!("Rejected request body: {}", e);
            invalid_body()
        })
    }
}

fn invalid_body() -> AppError {
    AppError::BadRequest("Invalid body".to_string())
}

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

/// Item routes check the id before the method.
async fn item_method_not_allowed(RecordId(_): RecordId) -> AppError {
    AppError::MethodNotAllowed
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let book_item = get(books::get_book)
        .put(books::replace_book)
        .patch(books::patch_book)
        .delete(books::delete_book)
        .head(item_method_not_allowed)
        .fallback(item_method_not_allowed);

    let person_item = get(persons::get_person)
        .put(persons::replace_person)
        .patch(persons::patch_person)
        .delete(persons::delete_person)
        .head(item_method_not_allowed)
        .fallback(item_method_not_allowed);

    let routes = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Books
        .route(
            "/books",
            get(books::list_books)
                .post(books::create_book)
                .head(method_not_allowed)
                .fallback(method_not_allowed),
        )
        // `*id` doesn't match an empty tail
        .route("/books/", book_item.clone())
        .route("/books/*id", book_item)
        // Persons
        .route(
            "/persons",
            get(persons::list_persons)
                .post(persons::create_person)
                .head(method_not_allowed)
                .fallback(method_not_allowed),
        )
        .route("/persons/", person_item.clone())
        .route("/persons/*id", person_item)
        .with_state(state);

    Router::new()
        .merge(routes)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
}
