//! Storefront catalog fixtures.

use std::collections::HashMap;

use serde_json::{Value, json};

pub fn collections() -> HashMap<String, Vec<Value>> {
    let mut collections = HashMap::new();
    collections.insert("products".to_string(), products());
    collections.insert("blogs".to_string(), blogs());
    collections.insert("users".to_string(), users());
    collections.insert("reviews".to_string(), reviews());
    collections
}

fn products() -> Vec<Value> {
    vec![
        json!({
            "id": 1,
            "productName": "Premium Wildflower Honey",
            "slug": "premium-wildflower-honey",
            "sku": "HNY-WF-500",
            "category": "wildflower",
            "tags": ["raw", "unprocessed", "bestseller"],
            "badge": "Bestseller",
            "shortDescription": "Raw wildflower honey from pristine meadows, rich in natural enzymes.",
            "images": ["/wildflower-honey-jar-500g.jpg", "/honey-jar-side-view.jpg"],
            "weight": "500g",
            "price": 850,
            "originalPrice": 950,
            "availability": "in-stock",
            "stock": 42,
            "featured": true,
            "isOnSale": true,
            "rating": 4.8,
            "totalReviews": 127,
            "delivery": {"charge": 100, "estimatedDays": 3},
            "createdAt": "2024-01-05T00:00:00Z"
        }),
        json!({
            "id": 2,
            "productName": "Pure Acacia Honey",
            "slug": "pure-acacia-honey",
            "sku": "HNY-AC-250",
            "category": "acacia",
            "tags": ["mild", "premium"],
            "badge": "Premium",
            "shortDescription": "Light colored honey with delicate floral taste from acacia flowers.",
            "images": ["/acacia-honey-jar-250g.jpg"],
            "weight": "250g",
            "price": 450,
            "originalPrice": null,
            "availability": "in-stock",
            "stock": 18,
            "featured": false,
            "isOnSale": false,
            "rating": 4.9,
            "totalReviews": 89,
            "delivery": {},
            "createdAt": "2024-01-12T00:00:00Z"
        }),
        json!({
            "id": 3,
            "productName": "Sundarban Mangrove Honey",
            "slug": "sundarban-mangrove-honey",
            "sku": "HNY-SB-1000",
            "category": "sundarban",
            "tags": ["rare", "forest"],
            "badge": "Limited",
            "shortDescription": "Rare honey from the world's largest mangrove forest.",
            "images": ["/sundarban-honey-jar-1kg.jpg"],
            "weight": "1kg",
            "price": 1650,
            "originalPrice": 1800,
            "availability": "low-stock",
            "stock": 4,
            "featured": true,
            "isOnSale": true,
            "rating": 4.7,
            "totalReviews": 56,
            "delivery": {"charge": 130, "estimatedDays": 5},
            "createdAt": "2024-01-20T00:00:00Z"
        }),
        json!({
            "id": 4,
            "productName": "Mustard Flower Honey",
            "slug": "mustard-flower-honey",
            "sku": "HNY-MS-500",
            "category": "mustard",
            "tags": ["golden"],
            "badge": null,
            "shortDescription": "Golden honey with distinctive mustard flower essence.",
            "images": ["/mustard-honey-jar-500g.jpg"],
            "weight": "500g",
            "price": 750,
            "originalPrice": null,
            "availability": "in-stock",
            "stock": 31,
            "featured": false,
            "isOnSale": false,
            "rating": 4.6,
            "totalReviews": 73,
            "delivery": {},
            "createdAt": "2024-02-02T00:00:00Z"
        }),
        json!({
            "id": 5,
            "productName": "Litchi Blossom Honey",
            "slug": "litchi-blossom-honey",
            "sku": "HNY-LC-250",
            "category": "litchi",
            "tags": ["fruity", "new"],
            "badge": "New",
            "shortDescription": "Sweet honey with subtle litchi fruit notes.",
            "images": ["/litchi-honey-jar-250g.jpg"],
            "weight": "250g",
            "price": 550,
            "originalPrice": 600,
            "availability": "out-of-stock",
            "stock": 0,
            "featured": false,
            "isOnSale": true,
            "rating": 4.8,
            "totalReviews": 42,
            "delivery": {},
            "createdAt": "2024-02-14T00:00:00Z"
        }),
        json!({
            "id": 6,
            "productName": "Raw Forest Honey",
            "slug": "raw-forest-honey",
            "sku": "HNY-FR-2000",
            "category": "forest",
            "tags": ["raw", "unprocessed"],
            "badge": "Premium",
            "shortDescription": "Unprocessed honey from deep forest sources.",
            "images": ["/forest-honey-jar-2kg.jpg"],
            "weight": "2kg",
            "price": 2800,
            "originalPrice": 3200,
            "availability": "in-stock",
            "stock": 9,
            "featured": true,
            "isOnSale": true,
            "rating": 4.9,
            "totalReviews": 31,
            "delivery": {"charge": 150, "estimatedDays": 4, "freeDelivery": false},
            "createdAt": "2024-03-01T00:00:00Z"
        }),
        json!({
            "id": 7,
            "productName": "Clover Honey",
            "slug": "clover-honey",
            "sku": "HNY-CL-500",
            "category": "clover",
            "tags": ["mild"],
            "badge": null,
            "shortDescription": "Mild and sweet honey from clover fields.",
            "images": ["/clover-honey-jar-500g.jpg"],
            "weight": "500g",
            "price": 720,
            "originalPrice": null,
            "availability": "in-stock",
            "stock": 25,
            "featured": false,
            "isOnSale": false,
            "rating": 4.5,
            "totalReviews": 95,
            "delivery": {},
            "createdAt": "2024-03-09T00:00:00Z"
        }),
        json!({
            "id": 8,
            "productName": "Black Seed Honey",
            "slug": "black-seed-honey",
            "sku": "HNY-BS-250",
            "category": "black-seed",
            "tags": ["medicinal"],
            "badge": "Medicinal",
            "shortDescription": "Powerful honey infused with black seed benefits.",
            "images": ["/blackseed-honey-jar-250g.jpg"],
            "weight": "250g",
            "price": 620,
            "originalPrice": 680,
            "availability": "in-stock",
            "stock": 14,
            "featured": false,
            "isOnSale": true,
            "rating": 4.8,
            "totalReviews": 47,
            "delivery": {},
            "createdAt": "2024-03-18T00:00:00Z"
        }),
    ]
}

fn blogs() -> Vec<Value> {
    vec![
        json!({
            "id": 1,
            "title": "Health Benefits of Honey",
            "slug": "health-benefits-of-honey",
            "category": "health",
            "tags": ["health", "nutrition"],
            "content": "Honey is rich in antioxidants and natural enzymes that support immune health.",
            "createdAt": "2024-01-15T00:00:00Z"
        }),
        json!({
            "id": 2,
            "title": "How Bees Make Honey",
            "slug": "how-bees-make-honey",
            "category": "education",
            "tags": ["bees", "process"],
            "content": "Bees collect nectar from flowers and transform it through enzymatic activity.",
            "createdAt": "2024-02-10T00:00:00Z"
        }),
        json!({
            "id": 3,
            "title": "Best Honey Recipes",
            "slug": "best-honey-recipes",
            "category": "recipes",
            "tags": ["recipes", "cooking"],
            "content": "Try honey lemon tea, honey cake, and glazed roasted vegetables.",
            "createdAt": "2024-03-05T00:00:00Z"
        }),
    ]
}

fn users() -> Vec<Value> {
    vec![
        json!({
            "id": 1,
            "name": "Fatima Rahman",
            "email": "fatima@example.com",
            "avatar": "/woman-profile.png",
            "role": "admin",
            "createdAt": "2023-11-02T00:00:00Z"
        }),
        json!({
            "id": 2,
            "name": "Ahmed Hassan",
            "email": "ahmed@example.com",
            "avatar": "/man-profile.png",
            "role": "user",
            "createdAt": "2023-12-18T00:00:00Z"
        }),
        json!({
            "id": 3,
            "name": "Rashida Begum",
            "email": "rashida@example.com",
            "avatar": "/elderly-woman-profile-photo.jpg",
            "role": "editor",
            "createdAt": "2024-01-25T00:00:00Z"
        }),
    ]
}

fn reviews() -> Vec<Value> {
    vec![
        json!({
            "id": 1,
            "productId": 1,
            "userId": 1,
            "userName": "Fatima Rahman",
            "rating": 5,
            "title": "Excellent quality honey!",
            "comment": "My family loves the taste and we use it daily. Fast delivery and great packaging.",
            "date": "2024-01-15",
            "verified": true,
            "helpful": 12,
            "createdAt": "2024-01-15T00:00:00Z"
        }),
        json!({
            "id": 2,
            "productId": 1,
            "userId": 2,
            "userName": "Ahmed Hassan",
            "rating": 5,
            "title": "Pure and natural as promised",
            "comment": "I can taste the difference compared to store-bought honey. Highly recommended!",
            "date": "2024-01-10",
            "verified": true,
            "helpful": 8,
            "createdAt": "2024-01-10T00:00:00Z"
        }),
        json!({
            "id": 3,
            "productId": 3,
            "userId": 3,
            "userName": "Rashida Begum",
            "rating": 4,
            "title": "Good quality honey",
            "comment": "My children love it. Good value for money.",
            "date": "2024-01-05",
            "verified": false,
            "helpful": 5,
            "createdAt": "2024-01-05T00:00:00Z"
        }),
    ]
}
