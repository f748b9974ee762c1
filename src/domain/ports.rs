use crate::domain::model::{ApiRequest, HttpMethod};
use crate::utils::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// 共用的 HTTP request helper。每次 `send` 恰好發出一個請求，
/// 成功或失敗都原樣交回呼叫端。
#[async_trait]
pub trait RequestHelper: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<Value>;

    async fn get(&self, path: &str, query: Option<Value>) -> Result<Value> {
        self.send(ApiRequest::new(HttpMethod::Get, path).with_query(query))
            .await
    }

    async fn post(&self, path: &str, body: Option<Value>) -> Result<Value> {
        self.send(ApiRequest::new(HttpMethod::Post, path).with_body(body))
            .await
    }

    async fn put(&self, path: &str, body: Option<Value>) -> Result<Value> {
        self.send(ApiRequest::new(HttpMethod::Put, path).with_body(body))
            .await
    }

    async fn delete(&self, path: &str) -> Result<Value> {
        self.send(ApiRequest::new(HttpMethod::Delete, path)).await
    }
}

pub trait ClientSettings: Send + Sync {
    fn base_url(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
    fn user_agent(&self) -> &str;
    fn headers(&self) -> Vec<(String, String)>;
}
