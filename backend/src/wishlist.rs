//! Per-user wishlist: a product id set ordered newest-first.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use common::wishlist::{WishlistItem, WishlistView};
use serde_json::Value;

use crate::store::RecordStore;

#[derive(Debug, Clone)]
struct WishlistEntry {
    product_id: String,
    added_at: DateTime<Utc>,
}

#[derive(Default)]
pub struct WishlistService {
    wishlists: Mutex<HashMap<String, Vec<WishlistEntry>>>,
}

impl WishlistService {
    /// Idempotent: adding an already-wishlisted product changes nothing.
    pub fn add(&self, user_id: &str, product_id: &str) -> &'static str {
        let mut wishlists = self.lock();
        let entries = wishlists.entry(user_id.to_string()).or_default();
        if entries.iter().any(|entry| entry.product_id == product_id) {
            return "Already in wishlist";
        }
        entries.push(WishlistEntry {
            product_id: product_id.to_string(),
            added_at: Utc::now(),
        });
        "Added to wishlist"
    }

    pub fn remove(&self, user_id: &str, product_id: &str) -> &'static str {
        if let Some(entries) = self.lock().get_mut(user_id) {
            entries.retain(|entry| entry.product_id != product_id);
        }
        "Removed from wishlist"
    }

    pub fn clear(&self, user_id: &str) -> &'static str {
        self.lock().remove(user_id);
        "Wishlist cleared"
    }

    pub fn ids(&self, user_id: &str) -> Vec<String> {
        self.lock()
            .get(user_id)
            .map(|entries| {
                entries
                    .iter()
                    .map(|entry| entry.product_id.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn contains(&self, user_id: &str, product_id: &str) -> bool {
        self.lock()
            .get(user_id)
            .is_some_and(|entries| entries.iter().any(|entry| entry.product_id == product_id))
    }

    /// One page of wishlist items, newest first, joined against products.
    pub fn view(&self, user_id: &str, page: u64, page_size: u64, store: &RecordStore) -> WishlistView {
        let wishlists = self.lock();
        let mut entries = wishlists.get(user_id).cloned().unwrap_or_default();
        drop(wishlists);
        entries.reverse();

        let page = page.max(1);
        let page_size = page_size.max(1);
        let total_items = entries.len() as u64;
        let start = ((page - 1) * page_size) as usize;

        let items = entries
            .iter()
            .skip(start)
            .take(page_size as usize)
            .filter_map(|entry| join_product(entry, store))
            .collect();

        WishlistView {
            items,
            page,
            page_size,
            total_items,
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, Vec<WishlistEntry>>> {
        self.wishlists.lock().expect("wishlist table poisoned")
    }
}

fn join_product(entry: &WishlistEntry, store: &RecordStore) -> Option<WishlistItem> {
    let product = store.single("products", &entry.product_id)?;
    Some(WishlistItem {
        id: entry.product_id.clone(),
        product_name: string_field(product, "productName"),
        price: product.get("price").and_then(Value::as_f64)?,
        original_price: product.get("originalPrice").and_then(Value::as_f64),
        image: product
            .get("images")
            .and_then(Value::as_array)
            .and_then(|images| images.first())
            .and_then(Value::as_str)
            .map(str::to_string),
        weight: string_field(product, "weight"),
        availability: string_field(product, "availability"),
        created_at: entry.added_at.to_rfc3339(),
    })
}

fn string_field(record: &Value, field: &str) -> String {
    record
        .get(field)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}


#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use serde_json::json;

    use super::*;

    fn store() -> RecordStore {
        let mut collections = HashMap::new();
        collections.insert(
            "products".to_string(),
            vec![
                json!({"id": 1, "productName": "Wildflower", "price": 850.0,
                       "weight": "500g", "availability": "in-stock", "images": ["/wf.jpg"]}),
                json!({"id": 2, "productName": "Forest", "price": 2800.0,
                       "weight": "2kg", "availability": "in-stock", "images": []}),
            ],
        );
        RecordStore::with_collections(collections)
    }

    #[test]
    fn add_is_idempotent() {
        let wishlists = WishlistService::default();
        assert_eq!(wishlists.add("u1", "1"), "Added to wishlist");
        assert_eq!(wishlists.add("u1", "1"), "Already in wishlist");
        assert_eq!(wishlists.ids("u1"), vec!["1".to_string()]);
    }

    #[test]
    fn view_orders_newest_first() {
        let wishlists = WishlistService::default();
        wishlists.add("u1", "1");
        wishlists.add("u1", "2");
        let view = wishlists.view("u1", 1, 10, &store());
        assert_eq!(view.total_items, 2);
        assert_eq!(view.items[0].id, "2");
        assert_eq!(view.items[1].id, "1");
    }

    #[test]
    fn membership_remove_and_clear() {
        let wishlists = WishlistService::default();
        wishlists.add("u1", "1");
        assert!(wishlists.contains("u1", "1"));
        assert!(!wishlists.contains("u1", "2"));

        wishlists.remove("u1", "1");
        assert!(!wishlists.contains("u1", "1"));

        wishlists.add("u1", "1");
        wishlists.add("u1", "2");
        wishlists.clear("u1");
        assert!(wishlists.ids("u1").is_empty());
    }
}
