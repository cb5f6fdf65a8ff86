//! Common library exports shared between the storefront server and its clients.

extern crate serde;


pub mod auth;
pub mod cart;
pub mod catalog_query;
pub mod catalog_result;
pub mod collection_schema;
pub mod wishlist;
