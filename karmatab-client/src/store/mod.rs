//! Remote store boundary
//!
//! The store owns every row; this crate only reads collections and patches
//! single rows. [`RemoteStore`] is the seam the gateway is written against,
//! so screens can run over the hosted REST store or an in-process one.

mod memory;
mod rest;

pub use memory::InMemoryStore;
pub use rest::{RestStore, query_pairs};

use async_trait::async_trait;
use serde_json::Value;
use shared::{Collection, QueryRequest, RecordId};

use crate::ClientResult;

/// Read/write access to named collections
#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// Rows of `request.collection` matching the request, as raw JSON objects
    async fn select(&self, request: &QueryRequest) -> ClientResult<Vec<Value>>;

    /// Merge `patch` into the row with `id`; a patch that matches no row is `NotFound`
    async fn update(&self, collection: Collection, id: &RecordId, patch: &Value) -> ClientResult<()>;
}

/// Text form of a JSON scalar as used in filters
pub(crate) fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
