//! In-process store
//!
//! Holds collections in memory and evaluates the same query clauses the REST
//! store sends to the server. Used for tests and offline demos; it can be
//! switched offline or read-only to exercise the fail-closed paths.

use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::Value;
use shared::query::ilike_matches;
use shared::{Collection, FilterOp, QueryRequest, RecordId};
use std::cmp::Ordering;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering as AtomicOrdering};

use super::{RemoteStore, value_text};
use crate::{ClientError, ClientResult};

#[derive(Debug, Default)]
pub struct InMemoryStore {
    collections: DashMap<Collection, Vec<Value>>,
    offline: AtomicBool,
    read_only: AtomicBool,
    selects: AtomicUsize,
    updates: AtomicUsize,
}

impl InMemoryStore {
    /// Empty store with every collection present
    pub fn new() -> Self {
        let store = Self::default();
        for collection in Collection::ALL {
            store.collections.insert(collection, Vec::new());
        }
        store
    }

    /// Replace the rows of a collection
    pub fn with_rows(self, collection: Collection, rows: impl IntoIterator<Item = Value>) -> Self {
        self.collections.insert(collection, rows.into_iter().collect());
        self
    }

    /// Append a row
    pub fn insert(&self, collection: Collection, row: Value) {
        self.collections.entry(collection).or_default().push(row);
    }

    /// Drop a collection entirely, as if it was never created
    pub fn remove_collection(&self, collection: Collection) {
        self.collections.remove(&collection);
    }

    /// Simulate an unreachable store
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, AtomicOrdering::SeqCst);
    }

    /// Reject every write
    pub fn set_read_only(&self, read_only: bool) {
        self.read_only.store(read_only, AtomicOrdering::SeqCst);
    }

    /// Current rows of a collection
    pub fn rows(&self, collection: Collection) -> Vec<Value> {
        self.collections
            .get(&collection)
            .map(|rows| rows.clone())
            .unwrap_or_default()
    }

    /// Number of select calls received
    pub fn select_count(&self) -> usize {
        self.selects.load(AtomicOrdering::SeqCst)
    }

    /// Number of update calls received
    pub fn update_count(&self) -> usize {
        self.updates.load(AtomicOrdering::SeqCst)
    }

    fn ensure_online(&self) -> ClientResult<()> {
        if self.offline.load(AtomicOrdering::SeqCst) {
            return Err(ClientError::Offline("in-memory store is offline".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl RemoteStore for InMemoryStore {
    async fn select(&self, request: &QueryRequest) -> ClientResult<Vec<Value>> {
        self.selects.fetch_add(1, AtomicOrdering::SeqCst);
        self.ensure_online()?;

        let rows = self
            .collections
            .get(&request.collection)
            .ok_or_else(|| ClientError::NotFound(format!("collection {}", request.collection)))?;

        let mut selected: Vec<Value> = rows
            .iter()
            .filter(|row| {
                request.filters.iter().all(|filter| {
                    let Some(value) = row.get(&filter.column) else {
                        return false;
                    };
                    let text = value_text(value);
                    match filter.op {
                        FilterOp::Eq => text == filter.value,
                        FilterOp::ILike => ilike_matches(&filter.value, &text),
                    }
                })
            })
            .cloned()
            .collect();
        drop(rows);

        if let Some(order) = &request.order {
            selected.sort_by(|a, b| {
                let ordering = compare_values(a.get(&order.column), b.get(&order.column));
                if order.ascending {
                    ordering
                } else {
                    ordering.reverse()
                }
            });
        }
        if let Some(limit) = request.limit {
            selected.truncate(limit as usize);
        }
        Ok(selected)
    }

    async fn update(&self, collection: Collection, id: &RecordId, patch: &Value) -> ClientResult<()> {
        self.updates.fetch_add(1, AtomicOrdering::SeqCst);
        self.ensure_online()?;
        if self.read_only.load(AtomicOrdering::SeqCst) {
            return Err(ClientError::Forbidden(format!("{} is read-only", collection)));
        }
        let Value::Object(fields) = patch else {
            return Err(ClientError::Validation("patch must be a JSON object".into()));
        };

        let mut rows = self
            .collections
            .get_mut(&collection)
            .ok_or_else(|| ClientError::NotFound(format!("collection {}", collection)))?;

        let wanted = id.as_filter_value();
        let mut matched = 0;
        for row in rows.iter_mut() {
            let is_target = row.get("id").map(value_text).as_deref() == Some(wanted.as_str());
            if !is_target {
                continue;
            }
            if let Value::Object(target) = row {
                for (key, value) in fields {
                    target.insert(key.clone(), value.clone());
                }
                matched += 1;
            }
        }

        if matched == 0 {
            return Err(ClientError::NotFound(format!("{} row {}", collection, id)));
        }
        Ok(())
    }
}

/// Nulls and missing values sort first; numbers numerically; everything else as text
fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    let a = a.filter(|v| !v.is_null());
    let b = b.filter(|v| !v.is_null());
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(Value::Number(x)), Some(Value::Number(y))) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        (Some(x), Some(y)) => value_text(x).cmp(&value_text(y)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn orders() -> InMemoryStore {
        InMemoryStore::new().with_rows(
            Collection::Orders,
            vec![
                json!({"id": 1, "status": "Paid", "created_at": "2025-11-28T10:00:00Z"}),
                json!({"id": 2, "status": "pending", "created_at": "2025-11-28T12:00:00Z"}),
                json!({"id": 3, "status": "paid", "created_at": "2025-11-28T11:00:00Z"}),
            ],
        )
    }

    fn ids(rows: &[Value]) -> Vec<i64> {
        rows.iter().filter_map(|r| r["id"].as_i64()).collect()
    }

    #[tokio::test]
    async fn test_select_filters_and_sorts() {
        let store = orders();
        let request = QueryRequest::all(Collection::Orders)
            .ilike("status", "paid")
            .order_desc("created_at");

        let rows = store.select(&request).await.unwrap();
        assert_eq!(ids(&rows), vec![3, 1]);
    }

    #[tokio::test]
    async fn test_select_eq_is_exact_and_limit_applies() {
        let store = orders();
        let exact = QueryRequest::all(Collection::Orders).eq("status", "paid");
        assert_eq!(ids(&store.select(&exact).await.unwrap()), vec![3]);

        let limited = QueryRequest::all(Collection::Orders).order_asc("id").limit(2);
        assert_eq!(ids(&store.select(&limited).await.unwrap()), vec![1, 2]);
    }

    #[tokio::test]
    async fn test_missing_collection_and_offline() {
        let store = orders();
        store.remove_collection(Collection::Receipts);
        let missing = store.select(&QueryRequest::all(Collection::Receipts)).await;
        assert!(matches!(missing, Err(ClientError::NotFound(_))));

        store.set_offline(true);
        let offline = store.select(&QueryRequest::all(Collection::Orders)).await;
        assert!(matches!(offline, Err(ClientError::Offline(_))));
        assert_eq!(store.select_count(), 2);
    }

    #[tokio::test]
    async fn test_update_merges_patch_into_matching_row() {
        let store = InMemoryStore::new().with_rows(
            Collection::Tables,
            vec![
                json!({"id": 1, "name": "Table 1", "status": "free"}),
                json!({"id": 2, "name": "Table 2", "status": "free"}),
            ],
        );

        store
            .update(Collection::Tables, &RecordId::Int(2), &json!({"status": "occupied"}))
            .await
            .unwrap();

        let rows = store.rows(Collection::Tables);
        assert_eq!(rows[0]["status"], "free");
        assert_eq!(rows[1]["status"], "occupied");

        let missing = store
            .update(Collection::Tables, &RecordId::Int(9), &json!({"status": "free"}))
            .await;
        assert!(matches!(missing, Err(ClientError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_read_only_rejects_writes() {
        let store = InMemoryStore::new()
            .with_rows(Collection::Tables, vec![json!({"id": 1, "status": "free"})]);
        store.set_read_only(true);

        let result = store
            .update(Collection::Tables, &RecordId::Int(1), &json!({"status": "reserved"}))
            .await;
        assert!(matches!(result, Err(ClientError::Forbidden(_))));
        assert_eq!(store.rows(Collection::Tables)[0]["status"], "free");
    }
}
