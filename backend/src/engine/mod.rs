//! Generic filter/sort/paginate/facet engine over one record collection.
//!
//! A single pass: search → filter → sort → paginate, with facets computed
//! from the pre-sort filter output. Pure over its inputs; callers may run
//! any number of queries concurrently against the read-only store.

mod facets;

use std::cmp::Ordering;

use common::{
    catalog_query::{CatalogQuery, MAX_PAGE_LIMIT, SortDirection, SortSpec},
    catalog_result::{FacetMap, PageMeta, QueryOutcome},
    collection_schema::{CollectionSchema, RangeBound, schema_for},
};
use serde_json::Value;

pub fn run(collection: &str, records: &[Value], query: &CatalogQuery) -> QueryOutcome {
    let schema = schema_for(collection);

    let searched = search_stage(records, &query.q, &schema);
    let filtered = filter_stage(searched, query, &schema);
    let facet_map = facets::collect(records, &filtered, &schema);
    let sorted = sort_stage(filtered, query.sort.as_ref(), &schema);
    paginate(sorted, facet_map, query)
}


fn search_stage<'a>(records: &'a [Value], q: &str, schema: &CollectionSchema) -> Vec<&'a Value> {
    let needle = q.trim().to_lowercase();
    if needle.is_empty() || schema.searchable.is_empty() {
        return records.iter().collect();
    }
    records
        .iter()
        .filter(|record| {
            schema.searchable.iter().any(|field| {
                text_values(record.get(*field))
                    .iter()
                    .any(|text| text.contains(&needle))
            })
        })
        .collect()
}

fn filter_stage<'a>(
    records: Vec<&'a Value>,
    query: &CatalogQuery,
    schema: &CollectionSchema,
) -> Vec<&'a Value> {
    let mut kept = records;
    for (key, raw) in &query.filters {
        if raw.is_empty() {
            continue;
        }
        if let Some(range) = schema.range_filter(key) {
            let bound: Option<f64> = raw.parse().ok();
            kept.retain(|record| {
                // An unparseable bound matches nothing, as does a
                // non-numeric target field.
                match (bound, number_field(record, range.field)) {
                    (Some(bound), Some(actual)) => match range.bound {
                        RangeBound::Min => actual >= bound,
                        RangeBound::Max => actual <= bound,
                    },
                    _ => false,
                }
            });
            continue;
        }

        let numeric: Option<f64> = raw.parse().ok();
        let tokens: Vec<String> = raw
            .split(',')
            .map(|token| token.trim().to_lowercase())
            .collect();
        kept.retain(|record| {
            if let (Some(wanted), Some(actual)) = (numeric, number_field(record, key)) {
                return actual == wanted;
            }
            text_values(record.get(key.as_str()))
                .iter()
                .any(|text| tokens.contains(text))
        });
    }
    kept
}

fn sort_stage<'a>(
    records: Vec<&'a Value>,
    sort: Option<&SortSpec>,
    schema: &CollectionSchema,
) -> Vec<&'a Value> {
    // Malformed or missing sort fails closed to the collection default.
    let spec = match sort.cloned().or_else(|| SortSpec::parse(schema.default_sort)) {
        Some(spec) => spec,
        None => return records,
    };

    let mut keyed: Vec<(Option<SortKey>, &Value)> = records
        .into_iter()
        .map(|record| (SortKey::of(record.get(&spec.field)), record))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| match (a, b) {
        // Records without the sort field go last regardless of direction.
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => match spec.direction {
            SortDirection::Asc => a.compare(b),
            SortDirection::Desc => a.compare(b).reverse(),
        },
    });
    keyed.into_iter().map(|(_, record)| record).collect()
}

fn paginate(records: Vec<&Value>, facet_map: FacetMap, query: &CatalogQuery) -> QueryOutcome {
    let limit = query.limit.clamp(1, MAX_PAGE_LIMIT);
    let page = query.page.max(1);
    let total = records.len() as u64;
    let total_pages = total.div_ceil(limit);
    let start = ((page - 1) * limit) as usize;

    let data = records
        .into_iter()
        .skip(start)
        .take(limit as usize)
        .cloned()
        .collect();

    QueryOutcome {
        data,
        filters: facet_map,
        meta: PageMeta {
            total,
            page,
            limit,
            total_pages,
        },
    }
}


/// Lowercased text renderings of a field value. Arrays contribute one entry
/// per element, null and objects contribute none.
pub(crate) fn text_values(value: Option<&Value>) -> Vec<String> {
    let mut out = Vec::new();
    if let Some(value) = value {
        push_text(value, &mut out);
    }
    out
}

fn push_text(value: &Value, out: &mut Vec<String>) {
    match value {
        Value::String(text) => out.push(text.to_lowercase()),
        Value::Number(number) => out.push(number.to_string()),
        Value::Bool(flag) => out.push(flag.to_string()),
        Value::Array(items) => {
            for item in items {
                push_text(item, out);
            }
        }
        _ => {}
    }
}

fn number_field(record: &Value, field: &str) -> Option<f64> {
    record.get(field).and_then(Value::as_f64)
}


enum SortKey {
    Number(f64),
    Text { folded: String, raw: String },
    Flag(bool),
}

impl SortKey {
    fn of(value: Option<&Value>) -> Option<Self> {
        match value? {
            Value::Number(number) => number.as_f64().map(SortKey::Number),
            Value::String(text) => Some(SortKey::Text {
                folded: text.to_lowercase(),
                raw: text.clone(),
            }),
            Value::Bool(flag) => Some(SortKey::Flag(*flag)),
            _ => None,
        }
    }

    fn rank(&self) -> u8 {
        match self {
            SortKey::Number(_) => 0,
            SortKey::Text { .. } => 1,
            SortKey::Flag(_) => 2,
        }
    }

    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Number(a), SortKey::Number(b)) => {
                a.partial_cmp(b).unwrap_or(Ordering::Equal)
            }
            (SortKey::Text { folded: a, raw: ra }, SortKey::Text { folded: b, raw: rb }) => {
                a.cmp(b).then_with(|| ra.cmp(rb))
            }
            (SortKey::Flag(a), SortKey::Flag(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn products() -> Vec<Value> {
        vec![
            json!({"id": 1, "productName": "Wildflower", "price": 100, "category": "a",
                   "availability": "in-stock", "tags": ["raw"], "createdAt": "2024-03-01T00:00:00Z"}),
            json!({"id": 2, "productName": "Forest", "price": 50, "category": "b",
                   "availability": "out-of-stock", "tags": ["raw", "dark"], "createdAt": "2024-01-01T00:00:00Z"}),
            json!({"id": 3, "productName": "Clover", "price": 75, "category": "a",
                   "availability": "in-stock", "tags": ["mild"], "createdAt": "2024-02-01T00:00:00Z"}),
        ]
    }

    fn query(pairs: &[(&str, &str)]) -> CatalogQuery {
        CatalogQuery::from_pairs(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<Vec<_>>(),
        )
    }

    fn ids(outcome: &QueryOutcome) -> Vec<i64> {
        outcome
            .data
            .iter()
            .map(|record| record["id"].as_i64().unwrap())
            .collect()
    }

    #[test]
    fn sorts_by_price_and_slices_the_first_page() {
        let records = products();
        let outcome = run("products", &records, &query(&[("sort", "price:asc"), ("limit", "2"), ("page", "1")]));
        assert_eq!(ids(&outcome), vec![2, 3]);
        assert_eq!(outcome.meta.total, 3);
        assert_eq!(outcome.meta.page, 1);
        assert_eq!(outcome.meta.limit, 2);
        assert_eq!(outcome.meta.total_pages, 2);
    }

    #[test]
    fn total_is_independent_of_paging() {
        let records = products();
        let first = run("products", &records, &query(&[("limit", "1"), ("page", "1")]));
        let second = run("products", &records, &query(&[("limit", "1"), ("page", "3")]));
        assert_eq!(first.meta.total, 3);
        assert_eq!(second.meta.total, 3);
        assert_eq!(second.data.len(), 1);
    }

    #[test]
    fn out_of_range_page_is_empty_with_accurate_meta() {
        let records = products();
        let outcome = run("products", &records, &query(&[("limit", "2"), ("page", "9")]));
        assert!(outcome.data.is_empty());
        assert_eq!(outcome.meta.total, 3);
        assert_eq!(outcome.meta.page, 9);
        assert_eq!(outcome.meta.total_pages, 2);
    }

    #[test]
    fn filtered_facets_keep_unselected_values() {
        let records = products();
        let outcome = run("products", &records, &query(&[("category", "a")]));
        assert_eq!(ids(&outcome).len(), 2);
        assert!(ids(&outcome).contains(&1) && ids(&outcome).contains(&3));

        let category = &outcome.filters["category"];
        assert_eq!(category.len(), 2);
        let count_of = |value: &str| {
            category
                .iter()
                .find(|facet| facet.value == value)
                .map(|facet| facet.count)
                .unwrap()
        };
        assert_eq!(count_of("a"), 2);
        assert_eq!(count_of("b"), 0);
    }

    #[test]
    fn availability_filters_partition_the_collection() {
        let records = products();
        let in_stock = run("products", &records, &query(&[("availability", "in-stock")]));
        let out_of_stock = run("products", &records, &query(&[("availability", "out-of-stock")]));
        let mut combined = ids(&in_stock);
        combined.extend(ids(&out_of_stock));
        combined.sort();
        assert_eq!(combined, vec![1, 2, 3]);
    }

    #[test]
    fn price_sort_desc_is_non_increasing() {
        let records = products();
        let outcome = run("products", &records, &query(&[("sort", "price:desc"), ("limit", "100")]));
        let prices: Vec<f64> = outcome
            .data
            .iter()
            .map(|record| record["price"].as_f64().unwrap())
            .collect();
        assert!(prices.windows(2).all(|pair| pair[0] >= pair[1]));
    }

    #[test]
    fn search_matches_searchable_fields_case_insensitively() {
        let records = products();
        let outcome = run("products", &records, &query(&[("q", "WILD")]));
        assert_eq!(ids(&outcome), vec![1]);

        // Array-valued searchable field, element-wise.
        let outcome = run("products", &records, &query(&[("q", "dark")]));
        assert_eq!(ids(&outcome), vec![2]);
    }

    #[test]
    fn search_input_is_not_a_regex() {
        let records = vec![json!({"id": 1, "productName": "a.c", "createdAt": "2024-01-01T00:00:00Z"})];
        let matched = run("products", &records, &query(&[("q", "a.c")]));
        assert_eq!(matched.meta.total, 1);
        // "." must not match an arbitrary character.
        let unmatched = run(
            "products",
            &[json!({"id": 2, "productName": "abc", "createdAt": "2024-01-01T00:00:00Z"})],
            &query(&[("q", "a.c")]),
        );
        assert_eq!(unmatched.meta.total, 0);
    }

    #[test]
    fn declared_range_filters_bound_numeric_fields() {
        let records = products();
        let outcome = run("products", &records, &query(&[("minPrice", "60"), ("maxPrice", "90")]));
        assert_eq!(ids(&outcome), vec![3]);

        // Unparseable bound matches nothing.
        let outcome = run("products", &records, &query(&[("minPrice", "abc")]));
        assert_eq!(outcome.meta.total, 0);
    }

    #[test]
    fn numeric_filter_values_compare_numerically() {
        let records = products();
        let outcome = run("products", &records, &query(&[("price", "75")]));
        assert_eq!(ids(&outcome), vec![3]);
    }

    #[test]
    fn multi_value_filters_are_disjunctive_within_a_key() {
        let records = products();
        let outcome = run("products", &records, &query(&[("category", "a,b"), ("limit", "100")]));
        assert_eq!(outcome.meta.total, 3);

        let outcome = run("products", &records, &query(&[("category", "a"), ("availability", "out-of-stock")]));
        assert_eq!(outcome.meta.total, 0); // conjunctive across keys
    }

    #[test]
    fn missing_sort_field_orders_last_in_both_directions() {
        let records = vec![
            json!({"id": 1, "rating": 2, "createdAt": "2024-01-01T00:00:00Z"}),
            json!({"id": 2, "createdAt": "2024-01-02T00:00:00Z"}),
            json!({"id": 3, "rating": 5, "createdAt": "2024-01-03T00:00:00Z"}),
        ];
        let asc = run("products", &records, &query(&[("sort", "rating:asc")]));
        assert_eq!(ids(&asc), vec![1, 3, 2]);
        let desc = run("products", &records, &query(&[("sort", "rating:desc")]));
        assert_eq!(ids(&desc), vec![3, 1, 2]);
    }

    #[test]
    fn malformed_sort_falls_back_to_default() {
        let records = products();
        let malformed = run("products", &records, &query(&[("sort", "price")]));
        let defaulted = run("products", &records, &query(&[]));
        // Default sort is createdAt:desc.
        assert_eq!(ids(&malformed), vec![1, 3, 2]);
        assert_eq!(ids(&malformed), ids(&defaulted));
    }

    #[test]
    fn unknown_collection_yields_empty_result_not_error() {
        let outcome = run("orders", &[], &query(&[("q", "anything")]));
        assert!(outcome.data.is_empty());
        assert!(outcome.filters.is_empty());
        assert_eq!(outcome.meta.total, 0);
        assert_eq!(outcome.meta.total_pages, 0);
    }
}
