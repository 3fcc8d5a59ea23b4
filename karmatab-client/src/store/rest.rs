//! REST store (PostgREST dialect)

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde_json::Value;
use shared::{Collection, QueryRequest, RecordId};
use std::time::Duration;

use super::RemoteStore;
use crate::{ClientConfig, ClientError, ClientResult};

/// Error body returned by the store
#[derive(serde::Deserialize)]
struct StoreErrorResponse {
    message: String,
    #[serde(default)]
    code: Option<String>,
}

/// Store client speaking the PostgREST query dialect
#[derive(Debug, Clone)]
pub struct RestStore {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl RestStore {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;
        Ok(Self {
            client,
            base_url: config.store_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    /// Base URL without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self, collection: Collection) -> String {
        format!("{}/rest/v1/{}", self.base_url, collection)
    }

    fn authorize(&self, req: RequestBuilder) -> RequestBuilder {
        match &self.api_key {
            Some(key) => req
                .header("apikey", key)
                .header(reqwest::header::AUTHORIZATION, format!("Bearer {}", key)),
            None => req,
        }
    }

    async fn handle_response(response: reqwest::Response) -> ClientResult<Vec<Value>> {
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await?;
            let message = match serde_json::from_str::<StoreErrorResponse>(&text) {
                Ok(err) => match err.code {
                    Some(code) => format!("{} ({})", err.message, code),
                    None => err.message,
                },
                Err(_) => text,
            };
            return match status {
                StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized),
                StatusCode::FORBIDDEN => Err(ClientError::Forbidden(message)),
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(message)),
                StatusCode::BAD_REQUEST => Err(ClientError::Validation(message)),
                _ => Err(ClientError::Internal(message)),
            };
        }

        match response.json::<Value>().await? {
            Value::Array(rows) => Ok(rows),
            other => Err(ClientError::InvalidResponse(format!(
                "expected a row array, got {}",
                other
            ))),
        }
    }
}

#[async_trait]
impl RemoteStore for RestStore {
    async fn select(&self, request: &QueryRequest) -> ClientResult<Vec<Value>> {
        let url = self.collection_url(request.collection);
        let req = self.client.get(&url).query(&query_pairs(request));
        let response = self.authorize(req).send().await?;
        Self::handle_response(response).await
    }

    async fn update(&self, collection: Collection, id: &RecordId, patch: &Value) -> ClientResult<()> {
        let url = self.collection_url(collection);
        let req = self
            .client
            .patch(&url)
            .query(&[("id", format!("eq.{}", id.as_filter_value()))])
            .header("Prefer", "return=representation")
            .json(patch);
        let response = self.authorize(req).send().await?;
        let rows = Self::handle_response(response).await?;
        if rows.is_empty() {
            return Err(ClientError::NotFound(format!("{} row {}", collection, id)));
        }
        Ok(())
    }
}

/// Query-string pairs for a read request
pub fn query_pairs(request: &QueryRequest) -> Vec<(String, String)> {
    let mut pairs = vec![("select".to_string(), "*".to_string())];
    for filter in &request.filters {
        pairs.push((
            filter.column.clone(),
            format!("{}.{}", filter.op.as_str(), filter.value),
        ));
    }
    if let Some(order) = &request.order {
        let direction = if order.ascending { "asc" } else { "desc" };
        pairs.push(("order".to_string(), format!("{}.{}", order.column, direction)));
    }
    if let Some(limit) = request.limit {
        pairs.push(("limit".to_string(), limit.to_string()));
    }
    pairs
}
