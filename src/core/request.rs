use crate::domain::model::{ApiRequest, HttpMethod};
use crate::domain::ports::{ClientSettings, RequestHelper};
use crate::utils::error::{EscortError, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT};
use reqwest::{Client, Method};
use serde_json::Value;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
pub const DEFAULT_USER_AGENT: &str = concat!("medical-escort-client/", env!("CARGO_PKG_VERSION"));

/// 基於 reqwest 的 request helper：組合 base URL、預設標頭與逾時，
/// 每個請求只送一次。
#[derive(Debug, Clone)]
pub struct HttpRequestHelper {
    client: Client,
    base_url: String,
}

impl HttpRequestHelper {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECONDS))
            .user_agent(DEFAULT_USER_AGENT)
            .default_headers(json_accept())
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_settings<C: ClientSettings + ?Sized>(settings: &C) -> Result<Self> {
        let mut headers = json_accept();
        for (key, value) in settings.headers() {
            let name = HeaderName::from_bytes(key.as_bytes()).map_err(|e| {
                EscortError::InvalidConfigValue {
                    field: "client.headers".to_string(),
                    value: key.clone(),
                    reason: format!("Invalid header name: {}", e),
                }
            })?;
            let value = HeaderValue::from_str(&value).map_err(|e| EscortError::InvalidConfigValue {
                field: format!("client.headers.{}", key),
                value: value.clone(),
                reason: format!("Invalid header value: {}", e),
            })?;
            headers.insert(name, value);
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_seconds()))
            .user_agent(settings.user_agent())
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: settings.base_url().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

fn json_accept() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers
}

fn to_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Delete => Method::DELETE,
    }
}

/// 把查詢物件攤平成 key/value 對。
///
/// 字串原樣送出，數字與布林用 JSON 文字，`null` 略過，陣列重複 key。
/// 巢狀物件無法放進查詢字串，直接回報錯誤。
pub fn encode_query(query: &Value) -> Result<Vec<(String, String)>> {
    let map = match query {
        Value::Object(map) => map,
        Value::Null => return Ok(Vec::new()),
        other => {
            return Err(EscortError::InvalidQuery {
                message: format!("expected an object, got {}", other),
            })
        }
    };

    let mut pairs = Vec::with_capacity(map.len());
    for (key, value) in map {
        match value {
            Value::Array(items) => {
                for item in items {
                    if let Some(text) = scalar_text(key, item)? {
                        pairs.push((key.clone(), text));
                    }
                }
            }
            other => {
                if let Some(text) = scalar_text(key, other)? {
                    pairs.push((key.clone(), text));
                }
            }
        }
    }
    Ok(pairs)
}

fn scalar_text(key: &str, value: &Value) -> Result<Option<String>> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        Value::Array(_) | Value::Object(_) => Err(EscortError::InvalidQuery {
            message: format!("parameter '{}' is nested", key),
        }),
    }
}

/// FastAPI 錯誤主體的 `detail` 欄位
fn error_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[async_trait]
impl RequestHelper for HttpRequestHelper {
    async fn send(&self, request: ApiRequest) -> Result<Value> {
        let url = self.url(&request.path);
        let mut builder = self.client.request(to_method(request.method), &url);

        if let Some(query) = &request.query {
            builder = builder.query(&encode_query(query)?);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        tracing::debug!("📡 {} {}", request.method, url);
        let response = builder.send().await?;
        let status = response.status();
        tracing::debug!("📡 {} {} -> {}", request.method, request.path, status);

        let text = response.text().await?;

        if status.is_success() {
            if text.trim().is_empty() {
                return Ok(Value::Null);
            }
            return Ok(serde_json::from_str(&text)?);
        }

        let message = error_detail(&text).unwrap_or_else(|| {
            status
                .canonical_reason()
                .map(str::to_string)
                .unwrap_or_else(|| format!("HTTP {}", status.as_u16()))
        });
        tracing::warn!(
            "⚠️ {} {} failed with {}: {}",
            request.method,
            request.path,
            status.as_u16(),
            message
        );

        Err(EscortError::Status {
            status: status.as_u16(),
            message,
            body: text,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_url_joins_base_and_path() {
        let helper = HttpRequestHelper::new("http://localhost:8000/api/").unwrap();
        assert_eq!(helper.base_url(), "http://localhost:8000/api");
        assert_eq!(helper.url("/users/"), "http://localhost:8000/api/users/");
        assert_eq!(helper.url("users/1"), "http://localhost:8000/api/users/1");
    }

    #[test]
    fn test_encode_query_scalars() {
        let pairs = encode_query(&json!({
            "keyword": "张",
            "limit": 20,
            "active": true,
            "gender": null
        }))
        .unwrap();

        assert!(pairs.contains(&("keyword".to_string(), "张".to_string())));
        assert!(pairs.contains(&("limit".to_string(), "20".to_string())));
        assert!(pairs.contains(&("active".to_string(), "true".to_string())));
        assert_eq!(pairs.len(), 3);
    }

    #[test]
    fn test_encode_query_repeats_array_keys() {
        let pairs = encode_query(&json!({ "status": ["pending", "confirmed"] })).unwrap();
        assert_eq!(
            pairs,
            vec![
                ("status".to_string(), "pending".to_string()),
                ("status".to_string(), "confirmed".to_string()),
            ]
        );
    }

    #[test]
    fn test_encode_query_rejects_nested() {
        assert!(matches!(
            encode_query(&json!({ "filter": { "age": 70 } })),
            Err(EscortError::InvalidQuery { .. })
        ));
        assert!(matches!(
            encode_query(&json!("skip=0")),
            Err(EscortError::InvalidQuery { .. })
        ));
        assert!(encode_query(&Value::Null).unwrap().is_empty());
    }

    #[test]
    fn test_error_detail() {
        assert_eq!(
            error_detail(r#"{"detail":"该手机号已注册"}"#),
            Some("该手机号已注册".to_string())
        );
        assert_eq!(
            error_detail(r#"{"detail":[{"loc":["body","phone"]}]}"#),
            Some(r#"[{"loc":["body","phone"]}]"#.to_string())
        );
        assert_eq!(error_detail("Internal Server Error"), None);
    }
}
