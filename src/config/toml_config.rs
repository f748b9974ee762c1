use crate::core::request::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECONDS, DEFAULT_USER_AGENT};
use crate::core::ClientSettings;
use crate::utils::error::{EscortError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

pub const ENV_API_URL: &str = "ESCORT_API_URL";
pub const ENV_TIMEOUT: &str = "ESCORT_TIMEOUT";

pub const LOG_FORMATS: &[&str] = &["compact", "json"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub client: ClientSection,
    #[serde(default)]
    pub logging: LoggingSection,
}

/// `base_url` 與 `timeout_seconds` 未設定時依序退回環境變數、內建預設值
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_seconds: Option<u64>,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSection {
    pub level: Option<String>,
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_log_format() -> String {
    "compact".to_string()
}

impl Default for ClientSection {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout_seconds: None,
            user_agent: default_user_agent(),
            headers: HashMap::new(),
        }
    }
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: None,
            format: default_log_format(),
        }
    }
}

impl ClientConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| EscortError::Config {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${ESCORT_TOKEN})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    /// 檔案沒指定時，退回 ESCORT_API_URL / ESCORT_TIMEOUT
    pub fn apply_env_fallbacks(&mut self) -> Result<()> {
        self.apply_fallbacks(|name| std::env::var(name).ok())
    }

    /// 同 `apply_env_fallbacks`，但由 `lookup` 提供變數值
    pub fn apply_fallbacks<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if self.client.base_url.is_none() {
            if let Some(url) = lookup(ENV_API_URL).filter(|url| !url.is_empty()) {
                self.client.base_url = Some(url);
            }
        }

        if self.client.timeout_seconds.is_none() {
            if let Some(timeout) = lookup(ENV_TIMEOUT) {
                let seconds = timeout
                    .trim()
                    .parse()
                    .map_err(|_| EscortError::InvalidConfigValue {
                        field: ENV_TIMEOUT.to_string(),
                        value: timeout.clone(),
                        reason: "Expected a whole number of seconds".to_string(),
                    })?;
                self.client.timeout_seconds = Some(seconds);
            }
        }

        Ok(())
    }

    pub fn is_json_logging(&self) -> bool {
        self.logging.format == "json"
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.level.as_deref()
    }

    fn validate_config(&self) -> Result<()> {
        if self.base_url().trim().is_empty() {
            return Err(EscortError::MissingConfig {
                field: "client.base_url".to_string(),
            });
        }
        crate::utils::validation::validate_url("client.base_url", self.base_url())?;
        crate::utils::validation::validate_positive_number(
            "client.timeout_seconds",
            self.timeout_seconds(),
            1,
        )?;
        crate::utils::validation::validate_non_empty_string(
            "client.user_agent",
            &self.client.user_agent,
        )?;
        crate::utils::validation::validate_one_of("logging.format", &self.logging.format, LOG_FORMATS)?;

        if let Some(level) = &self.logging.level {
            crate::utils::validation::validate_one_of(
                "logging.level",
                level,
                &["trace", "debug", "info", "warn", "error"],
            )?;
        }

        Ok(())
    }
}

impl ClientSettings for ClientConfig {
    fn base_url(&self) -> &str {
        self.client.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    fn timeout_seconds(&self) -> u64 {
        self.client.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS)
    }

    fn user_agent(&self) -> &str {
        &self.client.user_agent
    }

    fn headers(&self) -> Vec<(String, String)> {
        self.client
            .headers
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
