use crate::{auth::Claims, error::ApiError, params, AppState};
use axum::{
    extract::{Path, State},
    Extension, Json,
};
use core_types::Book;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Serialize)]
pub struct BooksResponse {
    pub books: Vec<Book>,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
    #[serde(rename = "deletedCount")]
    pub deleted_count: u64,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// # GET /books/get_by_rating/:rating
///
/// Returns every book whose rating average floors to the given value.
/// A well-formed rating that matches nothing is a 404, not an empty list.
pub async fn get_by_rating(
    State(state): State<Arc<AppState>>,
    Path(rating): Path<String>,
) -> Result<Json<BooksResponse>, ApiError> {
    let rating = params::parse_rating(&rating)?;

    let records = state.store.get_by_rating(rating).await?;
    if records.is_empty() {
        return Err(ApiError::NotFound(
            "No books found with that rating.".to_string(),
        ));
    }

    let books = records.into_iter().map(Book::from).collect();
    Ok(Json(BooksResponse { books }))
}

/// # DELETE /books/delete_by_range/:min/:max
///
/// Deletes every book published in `[min, max]` inclusive. Deleting zero
/// rows is still a success; the caller sees it in `deletedCount`.
pub async fn delete_by_range(
    State(state): State<Arc<AppState>>,
    Path((min, max)): Path<(String, String)>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let (min, max) = params::parse_year_range(&min, &max)?;

    let deleted_count = state.store.delete_by_range(min, max).await?;
    Ok(Json(DeleteResponse {
        message: "Books deleted.".to_string(),
        deleted_count,
    }))
}

/// # GET /jwt_test
///
/// Only reachable through the bearer middleware, which inserts the decoded
/// claims into the request extensions.
pub async fn jwt_test(Extension(claims): Extension<Claims>) -> Json<MessageResponse> {
    tracing::debug!(subject = %claims.sub, "JWT test route hit.");
    Json(MessageResponse {
        message: "Your token is valid.".to_string(),
    })
}
