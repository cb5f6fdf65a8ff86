//! Account and token endpoints.

use std::sync::Arc;

use axum::{Json, extract::State};
use common::auth::{LoginRequest, RefreshRequest, RegisterRequest};
use serde_json::{Value, json};

use crate::{error::AppError, state::AppState};

pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(body): Json<RegisterRequest>,
) -> Result<Json<Value>, AppError> {
    let profile = state.sessions.register(&body)?;
    Ok(Json(json!({ "success": true, "data": profile })))
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<Value>, AppError> {
    let pair = state.sessions.login(&body.email, &body.password)?;
    Ok(Json(json!({ "success": true, "data": pair })))
}

pub async fn refresh(
    State(state): State<Arc<AppState>>,
    Json(body): Json<RefreshRequest>,
) -> Result<Json<Value>, AppError> {
    let pair = state.sessions.refresh(&body.refresh_token)?;
    Ok(Json(json!({ "success": true, "data": pair })))
}

pub async fn logout(
    State(state): State<Arc<AppState>>,
    Json(body): Json<RefreshRequest>,
) -> Result<Json<Value>, AppError> {
    state.sessions.logout(&body.refresh_token)?;
    Ok(Json(json!({ "success": true, "message": "Logged out" })))
}
