use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::catalog_query::DEFAULT_PAGE_LIMIT;


/// One facet option: a distinct value of a filterable field and how many
/// records in the current filtered view carry it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacetValue {
    pub value: String,
    pub count: u64,
}

/// Facet options per filterable field.
pub type FacetMap = BTreeMap<String, Vec<FacetValue>>;


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageMeta {
    pub total: u64,
    pub page: u64,
    pub limit: u64,
    #[serde(rename = "totalPages")]
    pub total_pages: u64,
}

impl PageMeta {
    pub fn empty() -> Self {
        Self {
            total: 0,
            page: 1,
            limit: DEFAULT_PAGE_LIMIT,
            total_pages: 0,
        }
    }
}


/// What the query engine hands back: one page of records, facet options,
/// and paging metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryOutcome {
    pub data: Vec<Value>,
    pub filters: FacetMap,
    pub meta: PageMeta,
}


/// Wire envelope for the collection listing endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub data: Vec<Value>,
    pub filters: FacetMap,
    pub meta: PageMeta,
}

impl CatalogResponse {
    pub fn ok(outcome: QueryOutcome) -> Self {
        Self {
            success: true,
            error: None,
            data: outcome.data,
            filters: outcome.filters,
            meta: outcome.meta,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(message.into()),
            data: Vec::new(),
            filters: FacetMap::new(),
            meta: PageMeta::empty(),
        }
    }
}
