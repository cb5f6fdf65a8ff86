use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistItem {
    pub id: String,
    pub product_name: String,
    pub price: f64,
    pub original_price: Option<f64>,
    pub image: Option<String>,
    pub weight: String,
    pub availability: String,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistView {
    pub items: Vec<WishlistItem>,
    pub page: u64,
    pub page_size: u64,
    pub total_items: u64,
}
