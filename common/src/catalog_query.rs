//! Shared catalog query models and query-string helpers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_LIMIT: u64 = 10;
pub const MAX_PAGE_LIMIT: u64 = 100;


/// A parsed catalog query: free-text search, filter clauses, sort, and paging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogQuery {
    pub q: String,
    pub page: u64,
    pub limit: u64,
    pub sort: Option<SortSpec>,
    pub filters: BTreeMap<String, String>,
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self {
            q: String::new(),
            page: 1,
            limit: DEFAULT_PAGE_LIMIT,
            sort: None,
            filters: BTreeMap::new(),
        }
    }
}

impl CatalogQuery {
    /// Build a query from decoded query-string pairs.
    ///
    /// Values are trimmed and empty ones dropped. Repeated keys are merged by
    /// comma-joining, so `?tags=a&tags=b` filters the same as `?tags=a,b`.
    /// A malformed `sort` parses to `None` and the engine falls back to the
    /// collection default.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            let value = value.trim();
            if value.is_empty() {
                continue;
            }
            match key.as_str() {
                "q" => query.q = value.to_string(),
                "page" => query.page = value.parse().unwrap_or(1).max(1),
                "limit" => {
                    query.limit = value
                        .parse()
                        .unwrap_or(DEFAULT_PAGE_LIMIT)
                        .clamp(1, MAX_PAGE_LIMIT)
                }
                "sort" => query.sort = SortSpec::parse(value),
                _ => {
                    query
                        .filters
                        .entry(key)
                        .and_modify(|joined| {
                            joined.push(',');
                            joined.push_str(value);
                        })
                        .or_insert_with(|| value.to_string());
                }
            }
        }
        query
    }
}


#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

impl SortSpec {
    /// Parse a `field:direction` pair. Anything malformed is `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        let (field, direction) = raw.split_once(':')?;
        let field = field.trim();
        if field.is_empty() {
            return None;
        }
        let direction = match direction.trim() {
            "asc" => SortDirection::Asc,
            "desc" => SortDirection::Desc,
            _ => return None,
        };
        Some(Self {
            field: field.to_string(),
            direction,
        })
    }
}
