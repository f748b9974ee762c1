use crate::domain::model::{ApiRequest, HttpMethod, PayloadKind};
use crate::utils::error::{EscortError, Result};
use regex::{Captures, Regex};
use serde_json::Value;
use std::fmt;
use std::sync::LazyLock;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([^}/]+)\}").expect("placeholder pattern is valid"));

/// 一個 REST 操作：方法、路徑模板與負載種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub resource: &'static str,
    pub operation: &'static str,
    pub method: HttpMethod,
    /// 例如 `/users/{id}`，佔位符依序代入
    pub template: &'static str,
    pub payload: PayloadKind,
}

impl Endpoint {
    pub const fn new(
        resource: &'static str,
        operation: &'static str,
        method: HttpMethod,
        template: &'static str,
        payload: PayloadKind,
    ) -> Self {
        Self {
            resource,
            operation,
            method,
            template,
            payload,
        }
    }

    pub fn placeholders(&self) -> Vec<&'static str> {
        PLACEHOLDER
            .captures_iter(self.template)
            .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
            .collect()
    }

    /// 依序代入路徑參數；每個值都編碼成單一路徑片段。
    pub fn render(&self, params: &[&dyn fmt::Display]) -> Result<String> {
        let expected = PLACEHOLDER.find_iter(self.template).count();
        if expected != params.len() {
            return Err(EscortError::Template {
                template: self.template.to_string(),
                message: format!(
                    "expected {} path parameter(s), got {}",
                    expected,
                    params.len()
                ),
            });
        }

        let mut values = params.iter();
        let mut rejected = None;
        let rendered = PLACEHOLDER.replace_all(self.template, |caps: &Captures| {
            let value = values.next().map(|v| v.to_string()).unwrap_or_default();
            if rejected.is_none() {
                rejected = match value.as_str() {
                    "" => Some(format!("path parameter '{}' is empty", &caps[1])),
                    // URL 解析會把 . 與 .. 當成相對路徑收掉，編碼後也一樣
                    "." | ".." => Some(format!(
                        "path parameter '{}' cannot be '{}'",
                        &caps[1], value
                    )),
                    _ => None,
                };
            }
            urlencoding::encode(&value).into_owned()
        });

        if let Some(message) = rejected {
            return Err(EscortError::Template {
                template: self.template.to_string(),
                message,
            });
        }

        Ok(rendered.into_owned())
    }

    /// 組出交給 request helper 的請求，負載依種類放進 body 或 query。
    pub fn request(&self, params: &[&dyn fmt::Display], payload: Option<Value>) -> Result<ApiRequest> {
        let path = self.render(params)?;
        let request = ApiRequest::new(self.method, path);

        match (self.payload, payload) {
            (PayloadKind::Body, payload) => Ok(request.with_body(payload)),
            (PayloadKind::Query, payload) => Ok(request.with_query(payload)),
            (PayloadKind::None, None) => Ok(request),
            (PayloadKind::None, Some(_)) => Err(EscortError::UnexpectedPayload {
                operation: format!("{} {}", self.resource, self.operation),
            }),
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<6} {}", self.method, self.template)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const USER: Endpoint = Endpoint::new(
        "users",
        "get",
        HttpMethod::Get,
        "/users/{id}",
        PayloadKind::None,
    );

    const SLOTS: Endpoint = Endpoint::new(
        "appointments",
        "available-slots",
        HttpMethod::Get,
        "/appointments/hospitals/{hospital_id}/slots",
        PayloadKind::Query,
    );

    #[test]
    fn test_render_substitutes_identifier() {
        assert_eq!(USER.render(&[&42]).unwrap(), "/users/42");
        assert_eq!(USER.placeholders(), vec!["id"]);
    }

    #[test]
    fn test_render_encodes_segment() {
        assert_eq!(USER.render(&[&"a/b c"]).unwrap(), "/users/a%2Fb%20c");
        assert_eq!(
            USER.render(&[&"协和"]).unwrap(),
            "/users/%E5%8D%8F%E5%92%8C"
        );
    }

    #[test]
    fn test_render_rejects_wrong_arity() {
        assert!(matches!(
            USER.render(&[]),
            Err(EscortError::Template { .. })
        ));
        assert!(matches!(
            USER.render(&[&1, &2]),
            Err(EscortError::Template { .. })
        ));
    }

    #[test]
    fn test_render_rejects_empty_identifier() {
        let err = USER.render(&[&""]).unwrap_err();
        assert!(err.to_string().contains("'id' is empty"));
    }

    #[test]
    fn test_render_rejects_dot_segments() {
        for id in [".", ".."] {
            let err = USER.render(&[&id]).unwrap_err();
            assert!(matches!(err, EscortError::Template { .. }));
            assert!(err.to_string().contains("cannot be"));
        }
        // 只有整段是點才算相對路徑
        assert_eq!(USER.render(&[&"v1.2"]).unwrap(), "/users/v1.2");
        assert_eq!(USER.render(&[&"..."]).unwrap(), "/users/...");
    }

    #[test]
    fn test_template_without_placeholders() {
        let list = Endpoint::new("users", "list", HttpMethod::Get, "/users/", PayloadKind::Query);
        assert_eq!(list.render(&[]).unwrap(), "/users/");
        assert!(list.placeholders().is_empty());
    }

    #[test]
    fn test_request_places_payload_by_kind() {
        let query = json!({ "department": "心内科", "date": "2024-05-01" });
        let request = SLOTS.request(&[&"H001"], Some(query.clone())).unwrap();

        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.path, "/appointments/hospitals/H001/slots");
        assert_eq!(request.query, Some(query));
        assert_eq!(request.body, None);
    }

    #[test]
    fn test_request_rejects_payload_for_plain_operation() {
        let err = USER.request(&[&1], Some(json!({}))).unwrap_err();
        assert!(matches!(err, EscortError::UnexpectedPayload { .. }));
    }
}
