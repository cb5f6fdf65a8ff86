//! Per-collection search and filter declarations.
//!
//! Numeric range filters are declared here as an explicit key → field
//! mapping, so an invalid range key is a config-time concern instead of
//! request-time string surgery on `min*`/`max*` prefixes.

pub const GLOBAL_DEFAULT_SORT: &str = "createdAt:desc";


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeBound {
    Min,
    Max,
}

#[derive(Debug, Clone, Copy)]
pub struct RangeFilter {
    pub key: &'static str,
    pub field: &'static str,
    pub bound: RangeBound,
}

#[derive(Debug, Clone, Copy)]
pub struct CollectionSchema {
    pub searchable: &'static [&'static str],
    pub filterable: &'static [&'static str],
    pub range_filters: &'static [RangeFilter],
    pub default_sort: &'static str,
}

/// Unknown collections search and filter over nothing, by design.
const UNKNOWN: CollectionSchema = CollectionSchema {
    searchable: &[],
    filterable: &[],
    range_filters: &[],
    default_sort: GLOBAL_DEFAULT_SORT,
};

pub fn schema_for(collection: &str) -> CollectionSchema {
    match collection {
        "users" => CollectionSchema {
            searchable: &["name", "email"],
            filterable: &["role"],
            range_filters: &[],
            default_sort: GLOBAL_DEFAULT_SORT,
        },
        "products" => CollectionSchema {
            searchable: &["productName", "category", "slug", "tags"],
            filterable: &[
                "availability",
                "category",
                "tags",
                "featured",
                "isOnSale",
                "price",
            ],
            range_filters: &[
                RangeFilter {
                    key: "minPrice",
                    field: "price",
                    bound: RangeBound::Min,
                },
                RangeFilter {
                    key: "maxPrice",
                    field: "price",
                    bound: RangeBound::Max,
                },
                RangeFilter {
                    key: "minRating",
                    field: "rating",
                    bound: RangeBound::Min,
                },
                RangeFilter {
                    key: "maxRating",
                    field: "rating",
                    bound: RangeBound::Max,
                },
            ],
            default_sort: GLOBAL_DEFAULT_SORT,
        },
        "blogs" => CollectionSchema {
            searchable: &["title", "content", "slug", "tags"],
            filterable: &["category", "tags"],
            range_filters: &[],
            default_sort: GLOBAL_DEFAULT_SORT,
        },
        "reviews" => CollectionSchema {
            searchable: &[],
            filterable: &["rating", "verified"],
            range_filters: &[
                RangeFilter {
                    key: "minRating",
                    field: "rating",
                    bound: RangeBound::Min,
                },
                RangeFilter {
                    key: "maxRating",
                    field: "rating",
                    bound: RangeBound::Max,
                },
            ],
            default_sort: GLOBAL_DEFAULT_SORT,
        },
        _ => UNKNOWN,
    }
}

impl CollectionSchema {
    pub fn range_filter(&self, key: &str) -> Option<&RangeFilter> {
        self.range_filters.iter().find(|filter| filter.key == key)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_collections_declare_nothing() {
        let schema = schema_for("orders");
        assert!(schema.searchable.is_empty());
        assert!(schema.filterable.is_empty());
        assert!(schema.range_filters.is_empty());
    }

    #[test]
    fn product_range_keys_target_declared_fields() {
        let schema = schema_for("products");
        let min_price = schema.range_filter("minPrice").unwrap();
        assert_eq!(min_price.field, "price");
        assert_eq!(min_price.bound, RangeBound::Min);
        assert!(schema.range_filter("minWeight").is_none());
    }
}
