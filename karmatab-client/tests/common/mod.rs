// Seed data shared by the integration tests
#![allow(dead_code)]

use karmatab_client::{Collection, Gateway, InMemoryStore};
use serde_json::{Value, json};
use std::sync::Arc;

pub fn menu_rows() -> Vec<Value> {
    vec![
        json!({"id": 1, "name": "Flat White", "price": 4.5, "category": "Coffee"}),
        json!({"id": 2, "name": "Croissant", "price": 3.25, "category": "Bakery"}),
        json!({"id": 3, "name": "Daily Special", "category": "Kitchen"}),
    ]
}

pub fn table_rows() -> Vec<Value> {
    vec![
        json!({"id": 1, "name": "Table 1", "status": "free"}),
        json!({"id": 2, "name": "Table 2", "status": "Occupied"}),
        json!({"id": 3, "name": "Table 3", "status": "reserved"}),
        json!({"id": 4, "name": "Table 4", "status": "free"}),
    ]
}

pub fn order_rows() -> Vec<Value> {
    vec![
        json!({"id": 1024, "table_number": 2, "total": 42.5, "status": "Paid", "created_at": "2025-11-28T14:45:00Z"}),
        json!({"id": 1023, "table_number": 5, "total": 87.8, "status": "pending", "created_at": "2025-11-28T14:30:00Z"}),
        json!({"id": 1022, "table_number": 1, "total": 28.99, "status": "paid", "created_at": "2025-11-28T14:15:00Z"}),
        json!({"id": 1025, "table_number": 3, "total": 91.2, "status": "PENDING", "created_at": "2025-11-28T15:05:00Z"}),
    ]
}

pub fn customer_rows() -> Vec<Value> {
    vec![
        json!({"id": 1, "name": "Sarah Johnson", "phone": "(595) 123-4567", "last_order_date": "2025-11-28", "loyalty_points": 460}),
        json!({"id": 2, "name": "Michael Chen", "phone": "(595) 234-5678", "last_order_date": "2025-11-27", "loyalty_points": null}),
        json!({"id": 3, "name": "Emily Rodriguez", "phone": "(595) 456-8709"}),
    ]
}

pub fn receipt_rows() -> Vec<Value> {
    vec![
        json!({"id": 501, "amount": 42.5, "created_at": "2025-11-28T14:50:00Z"}),
        json!({"id": 502, "total": 87.8, "created_at": "2025-11-28T15:10:00Z"}),
    ]
}

pub fn seeded_store() -> Arc<InMemoryStore> {
    Arc::new(
        InMemoryStore::new()
            .with_rows(Collection::MenuItems, menu_rows())
            .with_rows(Collection::Tables, table_rows())
            .with_rows(Collection::Orders, order_rows())
            .with_rows(Collection::Customers, customer_rows())
            .with_rows(Collection::Receipts, receipt_rows())
            .with_rows(
                Collection::Settings,
                vec![json!({"key": "passcode", "value": "1234"})],
            ),
    )
}

pub fn gateway_over(store: &Arc<InMemoryStore>) -> Gateway {
    Gateway::new(store.clone())
}
