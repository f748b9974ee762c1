use anyhow::Result;
use httpmock::prelude::*;
use medical_escort_client::domain::model::{ApiRequest, HttpMethod};
use medical_escort_client::domain::ports::RequestHelper;
use medical_escort_client::{ClientConfig, EscortClient, EscortError, HttpRequestHelper};
use serde_json::json;

/// 設定檔的標頭與 User-Agent 會帶在每個請求上
#[tokio::test]
async fn test_configured_headers_are_sent() -> Result<()> {
    let server = MockServer::start_async().await;

    let toml_content = format!(
        r#"
[client]
base_url = "{}"
timeout_seconds = 5
user_agent = "escort-desk/1.0"

[client.headers]
X-Escort-Station = "front-desk"

[logging]
format = "compact"
"#,
        server.url("/api")
    );
    let config = ClientConfig::from_toml_str(&toml_content)?;
    let client = EscortClient::from_settings(&config)?;

    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/guidance/steps")
                .header("x-escort-station", "front-desk")
                .header("user-agent", "escort-desk/1.0")
                .header("accept", "application/json");
            then.status(200)
                .json_body(json!({ "steps": [{ "key": "arrival", "name": "到达医院" }] }));
        })
        .await;

    let steps = client.guidance().steps().await?;

    mock.assert_hits_async(1).await;
    assert_eq!(steps["steps"][0]["key"], json!("arrival"));
    Ok(())
}

/// 後端回 4xx 時錯誤帶著狀態碼與 detail，而且不重試
#[tokio::test]
async fn test_error_status_carries_detail() -> Result<()> {
    let server = MockServer::start_async().await;
    let helper = HttpRequestHelper::new(&server.url("/api"))?;
    let client = EscortClient::new(helper);

    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/users/404");
            then.status(404).json_body(json!({ "detail": "用户不存在" }));
        })
        .await;

    let err = client.users().get(404).await.unwrap_err();

    mock.assert_hits_async(1).await;
    match err {
        EscortError::Status { status, message, .. } => {
            assert_eq!(status, 404);
            assert_eq!(message, "用户不存在");
        }
        other => panic!("unexpected error: {:?}", other),
    }
    Ok(())
}

#[tokio::test]
async fn test_server_error_without_detail() -> Result<()> {
    let server = MockServer::start_async().await;
    let client = EscortClient::new(HttpRequestHelper::new(&server.url("/api"))?);

    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/medications/interactions");
            then.status(500).body("upstream exploded");
        })
        .await;

    let err = client
        .medications()
        .check_interactions(&json!({ "medications": ["阿司匹林"] }))
        .await
        .unwrap_err();

    mock.assert_hits_async(1).await;
    match err {
        EscortError::Status { status, message, body } => {
            assert_eq!(status, 500);
            assert_eq!(message, "Internal Server Error");
            assert_eq!(body, "upstream exploded");
        }
        other => panic!("unexpected error: {:?}", other),
    }
    Ok(())
}

#[tokio::test]
async fn test_empty_success_body_is_null() -> Result<()> {
    let server = MockServer::start_async().await;
    let helper = HttpRequestHelper::new(&server.url("/api"))?;

    let mock = server
        .mock_async(|when, then| {
            when.method(PUT).path("/api/guidance/log/3/complete");
            then.status(204);
        })
        .await;

    let value = helper
        .send(ApiRequest::new(HttpMethod::Put, "/guidance/log/3/complete"))
        .await?;

    mock.assert_hits_async(1).await;
    assert!(value.is_null());
    Ok(())
}

#[tokio::test]
async fn test_unreachable_backend_is_http_error() -> Result<()> {
    // 沒有人在聽的埠
    let helper = HttpRequestHelper::new("http://127.0.0.1:9/api")?;
    let client = EscortClient::new(helper);

    let err = client.users().get(1).await.unwrap_err();
    assert!(matches!(err, EscortError::Http(_)));
    Ok(())
}

/// `.` 與 `..` 會被 URL 解析收掉而打到別的端點，送出前就要擋下
#[tokio::test]
async fn test_dot_segment_ids_never_leave_the_client() -> Result<()> {
    let server = MockServer::start_async().await;
    let client = EscortClient::new(HttpRequestHelper::new(&server.url("/api"))?);

    let any_request = server
        .mock_async(|_when, then| {
            then.status(200).json_body(json!({ "success": true }));
        })
        .await;

    let err = client.users().delete("..").await.unwrap_err();
    assert!(matches!(err, EscortError::Template { .. }));
    let err = client.users().get(".").await.unwrap_err();
    assert!(matches!(err, EscortError::Template { .. }));

    any_request.assert_hits_async(0).await;
    Ok(())
}
