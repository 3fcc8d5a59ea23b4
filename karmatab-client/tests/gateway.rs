// Gateway behaviour over the in-memory store

mod common;

use common::{gateway_over, seeded_store};
use karmatab_client::{
    Collection, Gateway, InMemoryStore, OrderStatus, QueryRequest, RecordId, TableStatus,
};
use serde_json::json;
use shared::models::{Customer, DiningTable, MenuItem, Order, Receipt};
use std::sync::Arc;

#[tokio::test]
async fn test_list_decodes_rows() {
    let store = seeded_store();
    let gateway = gateway_over(&store);

    let menu = gateway.menu_items().await;
    assert_eq!(menu.len(), 3);
    assert_eq!(menu[2].price, None);

    let customers = gateway.customers().await;
    assert_eq!(customers[1].loyalty_points, 0);
    assert_eq!(customers[2].loyalty_points, 0);
}

#[tokio::test]
async fn test_list_returns_empty_when_offline() {
    let store = seeded_store();
    store.set_offline(true);
    let gateway = gateway_over(&store);

    assert!(gateway.menu_items().await.is_empty());
    assert!(gateway.tables().await.is_empty());
    assert!(gateway.orders(None).await.is_empty());
    assert!(gateway.customers().await.is_empty());
    assert!(gateway.receipts().await.is_empty());
}

#[tokio::test]
async fn test_list_returns_empty_for_every_missing_collection() {
    let store = seeded_store();
    let gateway = gateway_over(&store);

    for collection in Collection::ALL {
        store.remove_collection(collection);
    }

    assert!(gateway.list::<MenuItem>(&QueryRequest::all(Collection::MenuItems)).await.is_empty());
    assert!(gateway.list::<DiningTable>(&QueryRequest::all(Collection::Tables)).await.is_empty());
    assert!(gateway.list::<Order>(&QueryRequest::all(Collection::Orders)).await.is_empty());
    assert!(gateway.list::<Customer>(&QueryRequest::all(Collection::Customers)).await.is_empty());
    assert!(gateway.list::<Receipt>(&QueryRequest::all(Collection::Receipts)).await.is_empty());
}

#[tokio::test]
async fn test_malformed_row_fails_closed() {
    let store = Arc::new(InMemoryStore::new().with_rows(
        Collection::Tables,
        vec![
            json!({"id": 1, "name": "Table 1", "status": "free"}),
            json!({"name": "no id"}),
        ],
    ));
    let gateway = gateway_over(&store);

    assert!(gateway.tables().await.is_empty());
    assert!(
        gateway
            .try_list::<DiningTable>(&QueryRequest::all(Collection::Tables))
            .await
            .is_err()
    );
}

#[tokio::test]
async fn test_orders_filtered_by_status_ignore_case() {
    let store = seeded_store();
    let gateway = gateway_over(&store);

    let paid = gateway.orders(Some(OrderStatus::Paid)).await;
    let ids: Vec<String> = paid.iter().map(|o| o.id.to_string()).collect();
    assert_eq!(ids, vec!["1024", "1022"]);
    assert!(paid.iter().all(|o| o.status == OrderStatus::Paid));

    let pending = gateway.orders(Some(OrderStatus::Pending)).await;
    assert_eq!(pending.len(), 2);
    assert!(pending.iter().all(|o| o.status == OrderStatus::Pending));
}

#[tokio::test]
async fn test_orders_and_receipts_newest_first() {
    let store = seeded_store();
    let gateway = gateway_over(&store);

    let orders = gateway.orders(None).await;
    let ids: Vec<String> = orders.iter().map(|o| o.id.to_string()).collect();
    assert_eq!(ids, vec!["1025", "1024", "1023", "1022"]);

    let receipts = gateway.receipts().await;
    assert_eq!(receipts[0].id, RecordId::Int(502));
}

#[tokio::test]
async fn test_update_field_reports_success_and_failure() {
    let store = seeded_store();
    let gateway = gateway_over(&store);

    assert!(
        gateway
            .update_field(Collection::Tables, &RecordId::Int(1), &json!({"status": "reserved"}))
            .await
    );
    assert_eq!(store.rows(Collection::Tables)[0]["status"], "reserved");

    assert!(
        !gateway
            .update_field(Collection::Tables, &RecordId::Int(99), &json!({"status": "free"}))
            .await
    );
    assert!(
        !gateway
            .update_field(Collection::Tables, &RecordId::Int(1), &json!("free"))
            .await
    );

    store.set_offline(true);
    assert!(
        !gateway
            .update_field(Collection::Tables, &RecordId::Int(1), &json!({"status": "free"}))
            .await
    );
}

#[tokio::test]
async fn test_update_table_status_rejects_unknown() {
    let store = seeded_store();
    let gateway = gateway_over(&store);

    assert!(!gateway.update_table_status(&RecordId::Int(1), TableStatus::Unknown).await);
    assert_eq!(store.update_count(), 0);
    assert!(gateway.update_table_status(&RecordId::Int(1), TableStatus::Occupied).await);
    assert_eq!(store.rows(Collection::Tables)[0]["status"], "occupied");
}

#[tokio::test]
async fn test_validate_credential_against_stored_passcode() {
    let store = Arc::new(InMemoryStore::new().with_rows(
        Collection::Settings,
        vec![json!({"key": "passcode", "value": "4321"})],
    ));
    let gateway = gateway_over(&store);

    assert!(gateway.validate_credential("4321").await);
    assert!(!gateway.validate_credential("1234").await);
    assert!(!gateway.validate_credential("0000").await);
}

#[tokio::test]
async fn test_numeric_passcode_value() {
    let store = Arc::new(InMemoryStore::new().with_rows(
        Collection::Settings,
        vec![json!({"key": "passcode", "value": 2580})],
    ));
    let gateway = gateway_over(&store);

    assert!(gateway.validate_credential("2580").await);
}

#[tokio::test]
async fn test_validate_credential_falls_back_when_unreachable() {
    let store = seeded_store();
    store.set_offline(true);
    let gateway = gateway_over(&store);

    assert!(gateway.validate_credential("1234").await);
    assert!(!gateway.validate_credential("0000").await);
}

#[tokio::test]
async fn test_fallback_when_row_missing_or_ambiguous() {
    let missing = Arc::new(InMemoryStore::new());
    let gateway = gateway_over(&missing);
    assert_eq!(gateway.fetch_passcode().await, "1234");

    let ambiguous = Arc::new(InMemoryStore::new().with_rows(
        Collection::Settings,
        vec![
            json!({"key": "passcode", "value": "1111"}),
            json!({"key": "passcode", "value": "2222"}),
        ],
    ));
    assert_eq!(gateway_over(&ambiguous).fetch_passcode().await, "1234");

    let blank = Arc::new(InMemoryStore::new().with_rows(
        Collection::Settings,
        vec![json!({"key": "passcode", "value": ""})],
    ));
    assert_eq!(gateway_over(&blank).fetch_passcode().await, "1234");
}

#[tokio::test]
async fn test_configured_fallback_passcode() {
    let store = Arc::new(InMemoryStore::new());
    store.set_offline(true);
    let gateway = Gateway::new(store.clone()).with_fallback_passcode("8642");

    assert!(gateway.validate_credential("8642").await);
    assert!(!gateway.validate_credential("1234").await);
}

#[tokio::test]
async fn test_rows_with_both_column_spellings_still_load() {
    let store = Arc::new(
        InMemoryStore::new()
            .with_rows(
                Collection::Orders,
                vec![json!({
                    "id": 1030,
                    "table_number": 4,
                    "table_id": 17,
                    "total": 18.0,
                    "status": "paid",
                    "created_at": "2025-11-28T16:00:00Z"
                })],
            )
            .with_rows(
                Collection::Receipts,
                vec![json!({"id": 601, "amount": 10.0, "total": 10.0, "created_at": "2025-11-28T16:05:00Z"})],
            )
            .with_rows(
                Collection::Customers,
                vec![json!({"id": 9, "name": "Ana", "loyalty_points": 5, "points": 5})],
            ),
    );
    let gateway = gateway_over(&store);

    let orders = gateway
        .try_list::<Order>(&QueryRequest::all(Collection::Orders))
        .await
        .unwrap();
    assert_eq!(orders[0].table_number, Some(RecordId::Int(4)));

    let receipts = gateway.receipts().await;
    assert_eq!(receipts.len(), 1);
    assert_eq!(receipts[0].amount_label(), "$10.00");

    assert_eq!(gateway.customers().await[0].loyalty_points, 5);
}
