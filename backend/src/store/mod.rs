//! In-memory record store: named collections of untyped JSON records.
//!
//! The query engine treats collections as read-only; a live deployment
//! would swap this for an external find/aggregate store behind the same
//! two calls.

mod seed;

use std::collections::HashMap;

use serde_json::Value;

pub struct RecordStore {
    collections: HashMap<String, Vec<Value>>,
}

impl RecordStore {
    /// Store preloaded with the storefront catalog fixtures.
    pub fn seeded() -> Self {
        Self {
            collections: seed::collections(),
        }
    }

    pub fn with_collections(collections: HashMap<String, Vec<Value>>) -> Self {
        Self { collections }
    }

    /// All records of a collection. Unknown names are an empty collection,
    /// not an error.
    pub fn list(&self, collection: &str) -> &[Value] {
        self.collections
            .get(collection)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Look a record up by `slug` or `id`. `None` is "not found", which is
    /// a distinct outcome from a store failure.
    pub fn single(&self, collection: &str, identifier: &str) -> Option<&Value> {
        self.list(collection).iter().find(|record| {
            field_matches(record, "slug", identifier) || field_matches(record, "id", identifier)
        })
    }
}

fn field_matches(record: &Value, field: &str, wanted: &str) -> bool {
    match record.get(field) {
        Some(Value::String(text)) => text == wanted,
        Some(Value::Number(number)) => number.to_string() == wanted,
        _ => false,
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn store() -> RecordStore {
        let mut collections = HashMap::new();
        collections.insert(
            "products".to_string(),
            vec![
                json!({"id": 1, "slug": "wildflower-honey", "productName": "Wildflower"}),
                json!({"id": 2, "slug": "acacia-honey", "productName": "Acacia"}),
            ],
        );
        RecordStore::with_collections(collections)
    }

    #[test]
    fn single_finds_by_slug_or_id() {
        let store = store();
        assert_eq!(
            store.single("products", "acacia-honey").unwrap()["id"],
            json!(2)
        );
        assert_eq!(
            store.single("products", "1").unwrap()["slug"],
            json!("wildflower-honey")
        );
        assert!(store.single("products", "missing").is_none());
    }

    #[test]
    fn unknown_collection_lists_empty() {
        assert!(store().list("orders").is_empty());
    }

    #[test]
    fn seeded_store_has_catalog_collections() {
        let store = RecordStore::seeded();
        for collection in ["products", "blogs", "users", "reviews"] {
            assert!(!store.list(collection).is_empty(), "{collection} is empty");
        }
    }
}
