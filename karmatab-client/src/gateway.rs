//! Remote Data Gateway
//!
//! Translates domain requests ("orders with status paid", "set table 3 to
//! occupied") into store queries. The fail-closed entry points never return
//! an error: reads degrade to an empty list, writes to `false`, the passcode
//! to the configured fallback. The `try_*` variants keep the error for
//! callers that need to tell "no rows" apart from "request failed".

use serde_json::Value;
use shared::models::{
    Customer, DiningTable, MenuItem, Order, OrderStatus, PASSCODE_KEY, Receipt, Record, Setting,
    TableStatus, TableStatusUpdate,
};
use shared::{Collection, QueryRequest, RecordId};
use std::sync::Arc;

use crate::config::DEFAULT_FALLBACK_PASSCODE;
use crate::store::RemoteStore;
use crate::{ClientError, ClientResult};

/// Gateway over an injected store handle
///
/// Cheap to clone; every clone shares the same store.
#[derive(Clone)]
pub struct Gateway {
    store: Arc<dyn RemoteStore>,
    fallback_passcode: String,
}

impl std::fmt::Debug for Gateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gateway").finish_non_exhaustive()
    }
}

impl Gateway {
    pub fn new(store: Arc<dyn RemoteStore>) -> Self {
        Self {
            store,
            fallback_passcode: DEFAULT_FALLBACK_PASSCODE.to_string(),
        }
    }

    /// Passcode compared against when the settings row cannot be read
    pub fn with_fallback_passcode(mut self, passcode: impl Into<String>) -> Self {
        self.fallback_passcode = passcode.into();
        self
    }

    // ========== Generic reads and writes ==========

    /// Read and decode rows; a single malformed row fails the whole read
    pub async fn try_list<T: Record>(&self, request: &QueryRequest) -> ClientResult<Vec<T>> {
        let rows = self.store.select(request).await?;
        let items = rows
            .into_iter()
            .map(serde_json::from_value::<T>)
            .collect::<Result<Vec<_>, _>>()?;
        tracing::debug!(collection = %request.collection, count = items.len(), "Rows loaded");
        Ok(items)
    }

    /// Read and decode rows, yielding an empty list on any failure
    pub async fn list<T: Record>(&self, request: &QueryRequest) -> Vec<T> {
        match self.try_list(request).await {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!(collection = %request.collection, error = %e, "List failed, using empty result");
                Vec::new()
            }
        }
    }

    /// Patch a single row
    pub async fn try_update_field(
        &self,
        collection: Collection,
        id: &RecordId,
        patch: &Value,
    ) -> ClientResult<()> {
        if !patch.is_object() {
            return Err(ClientError::Validation("patch must be a JSON object".into()));
        }
        self.store.update(collection, id, patch).await?;
        tracing::debug!(collection = %collection, id = %id, "Row updated");
        Ok(())
    }

    /// Patch a single row, `false` on any failure
    pub async fn update_field(&self, collection: Collection, id: &RecordId, patch: &Value) -> bool {
        match self.try_update_field(collection, id, patch).await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(collection = %collection, id = %id, error = %e, "Update failed");
                false
            }
        }
    }

    // ========== Passcode ==========

    /// Stored passcode, read as a single settings row
    ///
    /// Exactly one row must match; zero or several rows, an empty value, or
    /// any store failure all fall back to the configured passcode.
    pub async fn fetch_passcode(&self) -> String {
        let request = QueryRequest::all(Collection::Settings)
            .eq("key", PASSCODE_KEY)
            .limit(2);

        let rows = match self.store.select(&request).await {
            Ok(rows) => rows,
            Err(e) => {
                tracing::info!(error = %e, "Settings unreachable, using default passcode");
                return self.fallback_passcode.clone();
            }
        };
        if rows.len() != 1 {
            tracing::info!(rows = rows.len(), "Passcode row not found, using default passcode");
            return self.fallback_passcode.clone();
        }

        let stored = rows
            .into_iter()
            .next()
            .and_then(|row| serde_json::from_value::<Setting>(row).ok())
            .and_then(|setting| setting.value_text());
        match stored {
            Some(passcode) => passcode,
            None => {
                tracing::info!("Passcode row has no value, using default passcode");
                self.fallback_passcode.clone()
            }
        }
    }

    /// Compare a typed code with the stored (or fallback) passcode
    pub async fn validate_credential(&self, code: &str) -> bool {
        self.fetch_passcode().await == code
    }

    // ========== Screen reads ==========

    pub async fn menu_items(&self) -> Vec<MenuItem> {
        self.list(&MenuItem::default_query()).await
    }

    pub async fn tables(&self) -> Vec<DiningTable> {
        self.list(&DiningTable::default_query()).await
    }

    /// Orders, newest first, optionally narrowed to one status (ignoring case)
    pub async fn orders(&self, status: Option<OrderStatus>) -> Vec<Order> {
        self.list(&orders_query(status)).await
    }

    pub async fn customers(&self) -> Vec<Customer> {
        self.list(&Customer::default_query()).await
    }

    /// Receipts, newest first
    pub async fn receipts(&self) -> Vec<Receipt> {
        self.list(&Receipt::default_query()).await
    }

    // ========== Screen writes ==========

    pub async fn try_update_table_status(&self, id: &RecordId, status: TableStatus) -> ClientResult<()> {
        if !status.is_assignable() {
            return Err(ClientError::Validation(format!(
                "table status '{}' cannot be assigned",
                status
            )));
        }
        let patch = serde_json::to_value(TableStatusUpdate { status })?;
        self.try_update_field(Collection::Tables, id, &patch).await
    }

    pub async fn update_table_status(&self, id: &RecordId, status: TableStatus) -> bool {
        match self.try_update_table_status(id, status).await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(id = %id, status = %status, error = %e, "Table status update failed");
                false
            }
        }
    }
}

/// Order list query for an optional status filter
pub fn orders_query(status: Option<OrderStatus>) -> QueryRequest {
    let request = Order::default_query();
    match status {
        Some(status) => request.ilike("status", status.as_str()),
        None => request,
    }
}
