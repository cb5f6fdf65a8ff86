//! Storefront backend: record store, query engine, sessions, cart and
//! wishlist, all behind an axum HTTP API.

pub mod api;
pub mod cart;
pub mod config;
pub mod engine;
pub mod error;
pub mod session;
pub mod state;
pub mod store;
pub mod wishlist;
