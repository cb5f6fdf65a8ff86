use serde::{Deserialize, Serialize};


/// Delivery terms a product may carry; absent fields fall back to the
/// store-wide defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct DeliveryPolicy {
    pub charge: Option<f64>,
    pub estimated_days: Option<u32>,
    pub free_delivery: Option<bool>,
}

/// One cart row joined against the product it references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub id: String,
    pub slug: String,
    pub sku: String,
    pub quantity: u32,
    pub product_name: String,
    pub price: f64,
    pub original_price: Option<f64>,
    pub image: Option<String>,
    pub weight: String,
    pub delivery: DeliveryPolicy,
    pub subtotal: f64,
    pub in_stock: bool,
}

/// A page of cart lines plus totals derived over the whole cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub items: Vec<CartLine>,
    /// Total cart weight in kilograms, rounded to two decimals.
    pub weight: f64,
    pub delivery_charge: f64,
    pub subtotal: f64,
    pub total: f64,
    pub page: u64,
    pub page_size: u64,
    pub total_items: u64,
}
