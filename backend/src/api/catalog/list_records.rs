//! Generic collection listing endpoint: search, filter, sort, paginate,
//! facet — one query string in, one envelope out.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use common::{catalog_query::CatalogQuery, catalog_result::CatalogResponse};
use tracing::error;

use crate::{engine, state::AppState};

pub async fn list_records(
    State(state): State<Arc<AppState>>,
    Path(collection): Path<String>,
    pairs: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Response {
    let Query(pairs) = match pairs {
        Ok(pairs) => pairs,
        Err(rejection) => {
            // Bad query shape collapses to the generic failure envelope,
            // never partial results.
            error!("rejected catalog query for {collection}: {rejection}");
            return failure();
        }
    };

    let query = CatalogQuery::from_pairs(pairs);
    let outcome = engine::run(&collection, state.store.list(&collection), &query);
    Json(CatalogResponse::ok(outcome)).into_response()
}

fn failure() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(CatalogResponse::failure("Failed to fetch data.")),
    )
        .into_response()
}
