//! Per-user cart lines and the derived pricing over them.
//!
//! Lines reference products by id; the view joins them against the product
//! store and derives subtotal, total cart weight, and a weight-based
//! delivery charge.

use std::collections::HashMap;
use std::sync::Mutex;

use common::cart::{CartLine, CartView, DeliveryPolicy};
use serde_json::Value;

use crate::store::RecordStore;

/// Store-wide delivery base when no product in the cart declares one.
const DEFAULT_DELIVERY_CHARGE: f64 = 130.0;
/// Added per started kilogram beyond the first.
const EXTRA_KG_CHARGE: f64 = 20.0;

#[derive(Debug, Clone)]
struct CartEntry {
    product_id: String,
    quantity: u32,
}

#[derive(Default)]
pub struct CartService {
    carts: Mutex<HashMap<String, Vec<CartEntry>>>,
}

impl CartService {
    /// Insert a line or bump the quantity of an existing one.
    pub fn add(&self, user_id: &str, product_id: &str, quantity: u32) -> &'static str {
        let mut carts = self.lock();
        let entries = carts.entry(user_id.to_string()).or_default();
        match entries
            .iter_mut()
            .find(|entry| entry.product_id == product_id)
        {
            Some(entry) => {
                entry.quantity += quantity.max(1);
                "Quantity updated"
            }
            None => {
                entries.push(CartEntry {
                    product_id: product_id.to_string(),
                    quantity: quantity.max(1),
                });
                "Added to cart"
            }
        }
    }

    /// Set a line's quantity outright; zero removes the line.
    pub fn update_quantity(&self, user_id: &str, product_id: &str, quantity: u32) -> &'static str {
        let mut carts = self.lock();
        let entries = carts.entry(user_id.to_string()).or_default();
        if quantity == 0 {
            entries.retain(|entry| entry.product_id != product_id);
            return "Cart updated";
        }
        match entries
            .iter_mut()
            .find(|entry| entry.product_id == product_id)
        {
            Some(entry) => {
                entry.quantity = quantity;
                "Cart updated"
            }
            None => "Item not found",
        }
    }

    pub fn remove(&self, user_id: &str, product_id: &str) -> &'static str {
        let mut carts = self.lock();
        if let Some(entries) = carts.get_mut(user_id) {
            entries.retain(|entry| entry.product_id != product_id);
        }
        "Item removed"
    }

    pub fn clear(&self, user_id: &str) -> &'static str {
        self.lock().remove(user_id);
        "Cart cleared"
    }

    /// One page of cart lines joined against the product store, with totals
    /// derived over the whole cart. Lines whose product no longer exists
    /// are skipped.
    pub fn view(&self, user_id: &str, page: u64, page_size: u64, store: &RecordStore) -> CartView {
        let carts = self.lock();
        let entries = carts.get(user_id).cloned().unwrap_or_default();
        drop(carts);

        let lines: Vec<CartLine> = entries
            .iter()
            .filter_map(|entry| join_product(entry, store))
            .collect();

        let mut subtotal = 0.0;
        let mut total_weight_kg = 0.0;
        let mut base_charge = DEFAULT_DELIVERY_CHARGE;
        for line in &lines {
            subtotal += line.subtotal;
            total_weight_kg += parse_weight_kg(&line.weight) * f64::from(line.quantity);
            // A product-defined charge overrides the store default.
            if let Some(charge) = line.delivery.charge {
                base_charge = charge;
            }
        }
        let delivery_charge = delivery_charge(total_weight_kg, base_charge);

        let page = page.max(1);
        let page_size = page_size.max(1);
        let total_items = lines.len() as u64;
        let start = ((page - 1) * page_size) as usize;
        let items = lines
            .into_iter()
            .skip(start)
            .take(page_size as usize)
            .collect();

        CartView {
            items,
            weight: round2(total_weight_kg),
            delivery_charge,
            subtotal,
            total: subtotal + delivery_charge,
            page,
            page_size,
            total_items,
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, Vec<CartEntry>>> {
        self.carts.lock().expect("cart table poisoned")
    }
}

fn join_product(entry: &CartEntry, store: &RecordStore) -> Option<CartLine> {
    let product = store.single("products", &entry.product_id)?;
    let price = product.get("price").and_then(Value::as_f64)?;
    let delivery: DeliveryPolicy = product
        .get("delivery")
        .cloned()
        .and_then(|raw| serde_json::from_value(raw).ok())
        .unwrap_or_default();

    Some(CartLine {
        id: entry.product_id.clone(),
        slug: string_field(product, "slug"),
        sku: string_field(product, "sku"),
        quantity: entry.quantity,
        product_name: string_field(product, "productName"),
        price,
        original_price: product.get("originalPrice").and_then(Value::as_f64),
        image: product
            .get("images")
            .and_then(Value::as_array)
            .and_then(|images| images.first())
            .and_then(Value::as_str)
            .map(str::to_string),
        weight: string_field(product, "weight"),
        delivery,
        subtotal: f64::from(entry.quantity) * price,
        in_stock: product.get("availability").and_then(Value::as_str) == Some("in-stock"),
    })
}

fn string_field(record: &Value, field: &str) -> String {
    record
        .get(field)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Convert a weight label like `"500G"`, `"1kg"`, `"1000g"` to kilograms.
/// Unknown units weigh nothing.
fn parse_weight_kg(raw: &str) -> f64 {
    let normalized = raw.trim().to_lowercase();
    let numeric: f64 = normalized
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect::<String>()
        .parse()
        .unwrap_or(0.0);

    if normalized.contains("kg") {
        numeric
    } else if normalized.contains('g') {
        numeric / 1000.0
    } else {
        0.0
    }
}

/// Base charge covers the first kilogram; every further started kilogram
/// adds a flat surcharge.
fn delivery_charge(total_weight_kg: f64, base_charge: f64) -> f64 {
    let rounded_kg = total_weight_kg.max(0.0).ceil();
    if rounded_kg <= 1.0 {
        base_charge
    } else {
        base_charge + (rounded_kg - 1.0) * EXTRA_KG_CHARGE
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
