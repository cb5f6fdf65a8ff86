//! HTTP route handlers and router assembly.

pub mod auth;
pub mod auth_middleware;
pub mod cart;
pub mod catalog;
pub mod wishlist;

use std::sync::Arc;

use axum::{
    Router, middleware,
    routing::{delete, get, post},
};

use crate::state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    // Cart and wishlist require a valid access token; the catalog is public.
    let protected = Router::new()
        .route(
            "/api/cart",
            get(cart::get_cart)
                .post(cart::add_to_cart)
                .put(cart::update_quantity)
                .delete(cart::clear_cart),
        )
        .route("/api/cart/{product_id}", delete(cart::remove_from_cart))
        .route(
            "/api/wishlist",
            get(wishlist::get_wishlist)
                .post(wishlist::add_to_wishlist)
                .delete(wishlist::clear_wishlist),
        )
        .route(
            "/api/wishlist/{product_id}",
            delete(wishlist::remove_from_wishlist),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware::require_session,
        ));

    Router::new()
        .route("/health", get(health))
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/refresh", post(auth::refresh))
        .route("/auth/logout", post(auth::logout))
        .route("/api/{collection}", get(catalog::list_records))
        .route("/api/{collection}/{identifier}", get(catalog::get_record))
        .merge(protected)
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
