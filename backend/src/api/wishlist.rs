//! Wishlist endpoints. All of them require a verified session.

use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::{session::Claims, state::AppState};

use super::cart::PageParams;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToWishlistBody {
    pub product_id: String,
}

pub async fn get_wishlist(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Query(params): Query<PageParams>,
) -> Json<Value> {
    let view = state.wishlists.view(
        &claims.sub,
        params.page.unwrap_or(1),
        params.page_size.unwrap_or(10),
        &state.store,
    );
    Json(json!({ "success": true, "data": view }))
}

pub async fn add_to_wishlist(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Json(body): Json<AddToWishlistBody>,
) -> Json<Value> {
    let message = state.wishlists.add(&claims.sub, &body.product_id);
    Json(json!({ "success": true, "message": message }))
}

pub async fn remove_from_wishlist(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(product_id): Path<String>,
) -> Json<Value> {
    let message = state.wishlists.remove(&claims.sub, &product_id);
    Json(json!({ "success": true, "message": message }))
}

pub async fn clear_wishlist(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Json<Value> {
    let message = state.wishlists.clear(&claims.sub);
    Json(json!({ "success": true, "message": message }))
}
