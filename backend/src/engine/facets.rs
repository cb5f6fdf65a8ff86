//! Facet enumeration and counting.
//!
//! Candidate values are enumerated over the unfiltered collection so that
//! selecting a filter never removes its own option from the list; counts
//! come from the filtered rows only.

use std::collections::{BTreeMap, BTreeSet};

use common::{
    catalog_result::{FacetMap, FacetValue},
    collection_schema::CollectionSchema,
};
use serde_json::Value;

use super::text_values;

pub(crate) fn collect(
    unfiltered: &[Value],
    filtered: &[&Value],
    schema: &CollectionSchema,
) -> FacetMap {
    let mut map = FacetMap::new();
    for field in schema.filterable {
        let mut counts: BTreeMap<String, u64> = BTreeMap::new();
        for record in unfiltered {
            for value in record_values(record, field) {
                counts.entry(value).or_insert(0);
            }
        }
        // A field no record carries has no facet at all.
        if counts.is_empty() {
            continue;
        }

        for record in filtered {
            for value in record_values(record, field) {
                if let Some(slot) = counts.get_mut(&value) {
                    *slot += 1;
                }
            }
        }

        map.insert(
            field.to_string(),
            counts
                .into_iter()
                .map(|(value, count)| FacetValue { value, count })
                .collect(),
        );
    }
    map
}

/// Distinct facet values one record contributes for a field. Deduplicated so
/// an array with repeated elements still counts the record once per value.
fn record_values(record: &Value, field: &str) -> BTreeSet<String> {
    text_values(record.get(field)).into_iter().collect()
}


#[cfg(test)]
mod tests {
    use common::collection_schema::schema_for;
    use serde_json::json;

    use super::*;

    #[test]
    fn values_come_from_unfiltered_counts_from_filtered() {
        let records = vec![
            json!({"id": 1, "category": "a"}),
            json!({"id": 2, "category": "b"}),
        ];
        let filtered = vec![&records[0]];
        let map = collect(&records, &filtered, &schema_for("blogs"));

        let category = &map["category"];
        assert_eq!(category.len(), 2);
        assert_eq!(category[0].value, "a");
        assert_eq!(category[0].count, 1);
        assert_eq!(category[1].value, "b");
        assert_eq!(category[1].count, 0);
    }

    #[test]
    fn array_fields_contribute_one_candidate_per_element() {
        let records = vec![json!({"id": 1, "tags": ["Raw", "raw", "Dark"]})];
        let filtered: Vec<&Value> = records.iter().collect();
        let map = collect(&records, &filtered, &schema_for("blogs"));

        let tags = &map["tags"];
        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0].value, "dark");
        assert_eq!(tags[0].count, 1);
        assert_eq!(tags[1].value, "raw");
        assert_eq!(tags[1].count, 1);
    }

    #[test]
    fn all_null_fields_are_omitted() {
        let records = vec![json!({"id": 1, "tags": null}), json!({"id": 2})];
        let filtered: Vec<&Value> = records.iter().collect();
        let map = collect(&records, &filtered, &schema_for("blogs"));
        assert!(!map.contains_key("tags"));
        assert!(!map.contains_key("category"));
    }
}
