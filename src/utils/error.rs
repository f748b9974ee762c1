use thiserror::Error;

#[derive(Error, Debug)]
pub enum EscortError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API returned status {status}: {message}")]
    Status {
        status: u16,
        message: String,
        body: String,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfig { field: String },

    #[error("Cannot render path template '{template}': {message}")]
    Template { template: String, message: String },

    #[error("Operation '{operation}' does not accept a body or query parameters")]
    UnexpectedPayload { operation: String },

    #[error("Invalid query parameters: {message}")]
    InvalidQuery { message: String },

    #[error("Unknown endpoint: {resource} {operation}")]
    UnknownEndpoint { resource: String, operation: String },

    #[error("No route matches path '{path}'")]
    RouteNotFound { path: String },

    #[error("No route named '{name}'")]
    UnknownRouteName { name: String },

    #[error("Redirect loop detected while resolving '{path}'")]
    RedirectLoop { path: String },
}

/// 錯誤嚴重程度，CLI 依此決定退出碼
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl EscortError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            EscortError::RouteNotFound { .. } | EscortError::UnknownRouteName { .. } => {
                ErrorSeverity::Low
            }
            EscortError::Http(_) => ErrorSeverity::Medium,
            EscortError::Status { status, .. } if *status >= 500 => ErrorSeverity::Medium,
            EscortError::Status { .. }
            | EscortError::Template { .. }
            | EscortError::InvalidQuery { .. }
            | EscortError::UnexpectedPayload { .. }
            | EscortError::UnknownEndpoint { .. }
            | EscortError::Serialization(_)
            | EscortError::RedirectLoop { .. } => ErrorSeverity::High,
            EscortError::Io(_)
            | EscortError::Config { .. }
            | EscortError::InvalidConfigValue { .. }
            | EscortError::MissingConfig { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            EscortError::Http(e) if e.is_timeout() => "The server did not respond in time".to_string(),
            EscortError::Http(e) if e.is_connect() => "Could not connect to the server".to_string(),
            EscortError::Status { status: 404, message, .. } => format!("Not found: {}", message),
            EscortError::Status { status, message, .. } => {
                format!("The server rejected the request ({}): {}", status, message)
            }
            EscortError::MissingConfig { field } => format!("Missing setting '{}'", field),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            EscortError::Http(_) => "Check that the backend is running and base_url is correct",
            EscortError::Status { status, .. } if *status >= 500 => {
                "The backend failed; check its logs and try again later"
            }
            EscortError::Status { .. } => "Check the identifiers and request body you sent",
            EscortError::Serialization(_) => "Make sure --data is valid JSON",
            EscortError::Io(_) => "Check that the file exists and is readable",
            EscortError::Config { .. }
            | EscortError::InvalidConfigValue { .. }
            | EscortError::MissingConfig { .. } => "Fix the configuration file or CLI flags",
            EscortError::Template { .. } => "Pass one identifier per path placeholder",
            EscortError::InvalidQuery { .. } => "Query parameters must be a flat key/value object",
            EscortError::UnexpectedPayload { .. } => "Drop --data and --param for this operation",
            EscortError::UnknownEndpoint { .. } => "Run `endpoints` to list available operations",
            EscortError::RouteNotFound { .. }
            | EscortError::UnknownRouteName { .. }
            | EscortError::RedirectLoop { .. } => "Run `routes` to list the route table",
        }
    }
}

pub type Result<T> = std::result::Result<T, EscortError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_by_status_class() {
        let server = EscortError::Status {
            status: 503,
            message: "down".to_string(),
            body: String::new(),
        };
        let client = EscortError::Status {
            status: 400,
            message: "该手机号已注册".to_string(),
            body: String::new(),
        };
        assert_eq!(server.severity(), ErrorSeverity::Medium);
        assert_eq!(client.severity(), ErrorSeverity::High);
    }

    #[test]
    fn test_user_friendly_message_for_not_found() {
        let err = EscortError::Status {
            status: 404,
            message: "用户不存在".to_string(),
            body: r#"{"detail":"用户不存在"}"#.to_string(),
        };
        assert_eq!(err.user_friendly_message(), "Not found: 用户不存在");
    }

    #[test]
    fn test_config_errors_are_critical() {
        let err = EscortError::MissingConfig {
            field: "client.base_url".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert!(err.to_string().contains("client.base_url"));
    }
}
