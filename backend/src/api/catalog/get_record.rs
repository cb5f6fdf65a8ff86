//! Single-record lookup by slug or id.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::{Value, json};

use crate::{error::AppError, state::AppState};

pub async fn get_record(
    State(state): State<Arc<AppState>>,
    Path((collection, identifier)): Path<(String, String)>,
) -> Result<Json<Value>, AppError> {
    match state.store.single(&collection, &identifier) {
        Some(record) => Ok(Json(json!({ "success": true, "data": record }))),
        None => Err(AppError::NotFound {
            collection,
            identifier,
        }),
    }
}
