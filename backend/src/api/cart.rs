//! Cart endpoints. All of them require a verified session.

use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::{session::Claims, state::AppState};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageParams {
    #[serde(default)]
    pub page: Option<u64>,
    #[serde(default)]
    pub page_size: Option<u64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartBody {
    pub product_id: String,
    pub quantity: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateQuantityBody {
    pub product_id: String,
    pub quantity: u32,
}

pub async fn get_cart(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Query(params): Query<PageParams>,
) -> Json<Value> {
    let view = state.carts.view(
        &claims.sub,
        params.page.unwrap_or(1),
        params.page_size.unwrap_or(10),
        &state.store,
    );
    Json(json!({ "success": true, "data": view }))
}

pub async fn add_to_cart(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Json(body): Json<AddToCartBody>,
) -> Json<Value> {
    let message = state
        .carts
        .add(&claims.sub, &body.product_id, body.quantity.unwrap_or(1));
    Json(json!({ "success": true, "message": message }))
}

pub async fn update_quantity(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Json(body): Json<UpdateQuantityBody>,
) -> Json<Value> {
    let message = state
        .carts
        .update_quantity(&claims.sub, &body.product_id, body.quantity);
    Json(json!({ "success": true, "message": message }))
}

pub async fn remove_from_cart(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(product_id): Path<String>,
) -> Json<Value> {
    let message = state.carts.remove(&claims.sub, &product_id);
    Json(json!({ "success": true, "message": message }))
}

pub async fn clear_cart(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Json<Value> {
    let message = state.carts.clear(&claims.sub);
    Json(json!({ "success": true, "message": message }))
}
