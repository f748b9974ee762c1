use crate::api::Endpoint;
use crate::config::toml_config::ClientConfig;
use crate::domain::model::PayloadKind;
use crate::utils::error::{EscortError, Result};
use clap::{Parser, Subcommand};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Parser)]
#[command(name = "medical-escort-client")]
#[command(about = "Command-line client for the medical escort backend")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override client.base_url
    #[arg(long)]
    pub base_url: Option<String>,

    /// Override client.timeout_seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Call one backend operation, e.g. `call users get 42`
    Call {
        resource: String,
        operation: String,
        /// Path identifiers, in template order
        ids: Vec<String>,
        /// JSON body, or JSON query object for query operations
        #[arg(long)]
        data: Option<String>,
        /// Query parameter as key=value, repeatable
        #[arg(long = "param", value_parser = parse_key_val)]
        params: Vec<(String, String)>,
    },
    /// List every known operation
    Endpoints,
    /// Print the page route table
    Routes,
    /// Resolve a page path against the route table
    Resolve { path: String },
}

fn parse_key_val(s: &str) -> std::result::Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{}'", s))?;
    if key.is_empty() {
        return Err(format!("empty key in '{}'", s));
    }
    Ok((key.to_string(), value.to_string()))
}

impl CliConfig {
    /// 依序套用：檔案 → 環境變數 → 命令列
    pub fn load_client_config(&self) -> Result<ClientConfig> {
        self.load_client_config_with(|name| std::env::var(name).ok())
    }

    pub fn load_client_config_with<F>(&self, lookup: F) -> Result<ClientConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match &self.config {
            Some(path) => ClientConfig::from_file(path)?,
            None => ClientConfig::default(),
        };
        config.apply_fallbacks(lookup)?;

        if let Some(base_url) = &self.base_url {
            config.client.base_url = Some(base_url.clone());
        }
        if let Some(timeout) = self.timeout {
            config.client.timeout_seconds = Some(timeout);
        }
        if self.json_logs {
            config.logging.format = "json".to_string();
        }

        Ok(config)
    }
}

/// 把 `--data` 與 `--param` 轉成端點要的負載
pub fn build_payload(
    endpoint: &Endpoint,
    data: Option<&str>,
    params: &[(String, String)],
) -> Result<Option<Value>> {
    let data = data.map(serde_json::from_str::<Value>).transpose()?;

    match endpoint.payload {
        PayloadKind::Body => {
            if !params.is_empty() {
                return Err(EscortError::UnexpectedPayload {
                    operation: format!("{} {} (query)", endpoint.resource, endpoint.operation),
                });
            }
            Ok(data)
        }
        PayloadKind::Query => {
            if data.is_none() && params.is_empty() {
                return Ok(None);
            }
            let mut query = match data {
                Some(Value::Object(map)) => map,
                Some(other) => {
                    return Err(EscortError::InvalidQuery {
                        message: format!("--data must be a JSON object, got {}", other),
                    })
                }
                None => Map::new(),
            };
            for (key, value) in params {
                query.insert(key.clone(), Value::String(value.clone()));
            }
            Ok(Some(Value::Object(query)))
        }
        PayloadKind::None => {
            if data.is_some() || !params.is_empty() {
                return Err(EscortError::UnexpectedPayload {
                    operation: format!("{} {}", endpoint.resource, endpoint.operation),
                });
            }
            Ok(None)
        }
    }
}
