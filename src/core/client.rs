use crate::api::{self, AppointmentsApi, Endpoint, GuidanceApi, MedicationsApi, UsersApi};
use crate::core::request::HttpRequestHelper;
use crate::domain::ports::{ClientSettings, RequestHelper};
use crate::utils::error::Result;
use serde_json::Value;
use std::fmt::Display;

/// 醫療陪診後端的客戶端，四個資源模組共用同一個 request helper。
pub struct EscortClient<H: RequestHelper = HttpRequestHelper> {
    helper: H,
}

impl EscortClient<HttpRequestHelper> {
    pub fn from_settings<C: ClientSettings + ?Sized>(settings: &C) -> Result<Self> {
        Ok(Self::new(HttpRequestHelper::from_settings(settings)?))
    }
}

impl<H: RequestHelper> EscortClient<H> {
    pub fn new(helper: H) -> Self {
        Self { helper }
    }

    pub fn helper(&self) -> &H {
        &self.helper
    }

    pub fn users(&self) -> UsersApi<'_, H> {
        UsersApi::new(&self.helper)
    }

    pub fn appointments(&self) -> AppointmentsApi<'_, H> {
        AppointmentsApi::new(&self.helper)
    }

    pub fn guidance(&self) -> GuidanceApi<'_, H> {
        GuidanceApi::new(&self.helper)
    }

    pub fn medications(&self) -> MedicationsApi<'_, H> {
        MedicationsApi::new(&self.helper)
    }

    /// 以資源與操作名稱呼叫任一端點，供 CLI 等泛用呼叫端使用
    pub async fn call(
        &self,
        resource: &str,
        operation: &str,
        ids: &[String],
        payload: Option<Value>,
    ) -> Result<Value> {
        let endpoint = api::find(resource, operation)?;
        self.call_endpoint(endpoint, ids, payload).await
    }

    /// 呼叫已查好的端點
    pub async fn call_endpoint(
        &self,
        endpoint: &Endpoint,
        ids: &[String],
        payload: Option<Value>,
    ) -> Result<Value> {
        let request = {
            let params: Vec<&dyn Display> = ids.iter().map(|id| id as &dyn Display).collect();
            endpoint.request(&params, payload)?
        };

        tracing::debug!(
            "🔧 {} {} -> {}",
            endpoint.resource,
            endpoint.operation,
            request.path
        );
        self.helper.send(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{ApiRequest, HttpMethod};
    use crate::utils::error::EscortError;
    use async_trait::async_trait;
    use serde_json::json;

    struct EchoHelper;

    #[async_trait]
    impl RequestHelper for EchoHelper {
        async fn send(&self, request: ApiRequest) -> Result<Value> {
            Ok(json!({
                "method": request.method.as_str(),
                "path": request.path,
                "body": request.body,
                "query": request.query,
            }))
        }
    }

    #[tokio::test]
    async fn test_call_dispatches_by_name() {
        let client = EscortClient::new(EchoHelper);

        let echoed = client
            .call("appointments", "cancel", &["12".to_string()], None)
            .await
            .unwrap();
        assert_eq!(echoed["method"], json!("PUT"));
        assert_eq!(echoed["path"], json!("/appointments/12/cancel"));

        let body = json!({ "symptoms": "咳嗽" });
        let echoed = client
            .call("guidance", "symptom-analysis", &[], Some(body.clone()))
            .await
            .unwrap();
        assert_eq!(echoed["body"], body);
    }

    #[tokio::test]
    async fn test_call_rejects_bad_arity_before_sending() {
        let client = EscortClient::new(EchoHelper);
        let err = client.call("users", "get", &[], None).await.unwrap_err();
        assert!(matches!(err, EscortError::Template { .. }));
    }

    #[tokio::test]
    async fn test_call_endpoint_uses_given_endpoint() {
        let client = EscortClient::new(EchoHelper);
        let endpoint = api::find("medications", "records-by-user").unwrap();

        let echoed = client
            .call_endpoint(endpoint, &["8".to_string()], None)
            .await
            .unwrap();
        assert_eq!(echoed["method"], json!("GET"));
        assert_eq!(echoed["path"], json!("/medications/records/8"));
    }

    #[tokio::test]
    async fn test_default_helper_methods() {
        let helper = EchoHelper;
        let echoed = helper.delete("/users/3").await.unwrap();
        assert_eq!(echoed["method"], json!(HttpMethod::Delete.as_str()));
        assert_eq!(echoed["path"], json!("/users/3"));
    }
}
