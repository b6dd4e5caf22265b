//! Bearer-token gate for the protected routes.

use crate::{error::ApiError, AppState};
use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};
use jsonwebtoken::{decode, Algorithm, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// The claims we require in a token. `exp` is enforced by the decoder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: usize,
}

/// Middleware that rejects the request unless it carries a valid HS256
/// bearer token. On success the decoded claims are stored in the request
/// extensions for the handler.
pub async fn require_bearer(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = bearer_token(request.headers())
        .ok_or_else(|| ApiError::Unauthorized("Missing bearer token.".to_string()))?;

    let token_data = decode::<Claims>(
        token,
        &state.decoding_key,
        &Validation::new(Algorithm::HS256),
    )
    .map_err(|e| {
        tracing::debug!(error = %e, "Rejected bearer token.");
        ApiError::Unauthorized("Invalid bearer token.".to_string())
    })?;

    request.extensions_mut().insert(token_data.claims);
    Ok(next.run(request).await)
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}
