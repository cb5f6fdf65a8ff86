//! Access-token middleware.
//!
//! Extracts the `Authorization: Bearer <token>` header, verifies it against
//! the session service, and stores the `Claims` in request extensions for
//! downstream handlers.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::{error::AppError, state::AppState};

pub async fn require_session(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = request
        .headers()
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or(AppError::Unauthorized)?;

    let claims = state.sessions.verify(token)?;
    request.extensions_mut().insert(claims);

    Ok(next.run(request).await)
}
