use clap::Parser;
use medical_escort_client::api;
use medical_escort_client::domain::ports::ClientSettings;
use medical_escort_client::config::cli::{build_payload, Command};
use medical_escort_client::utils::error::ErrorSeverity;
use medical_escort_client::utils::{logger, validation::Validate};
use medical_escort_client::{CliConfig, EscortClient, EscortError, Router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    let config = match cli.load_client_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load configuration: {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 初始化日誌
    if config.is_json_logging() {
        logger::init_json_logger(cli.verbose, config.log_level());
    } else {
        logger::init_cli_logger(cli.verbose, config.log_level());
    }

    tracing::debug!("CLI config: {:?}", cli);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if let Err(e) = run(&cli, &config).await {
        tracing::error!("❌ Command failed: {} (Severity: {:?})", e, e.severity());
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        // 根據錯誤嚴重程度決定退出碼
        let exit_code = match e.severity() {
            ErrorSeverity::Low => 4,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }

    Ok(())
}

async fn run(
    cli: &CliConfig,
    config: &medical_escort_client::ClientConfig,
) -> Result<(), EscortError> {
    match &cli.command {
        Command::Call {
            resource,
            operation,
            ids,
            data,
            params,
        } => {
            let endpoint = api::find(resource, operation)?;
            let payload = build_payload(endpoint, data.as_deref(), params)?;

            let client = EscortClient::from_settings(config)?;
            tracing::info!("📡 Calling {} {} on {}", resource, operation, config.base_url());

            let response = client.call_endpoint(endpoint, ids, payload).await?;
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        Command::Endpoints => {
            for resource in api::RESOURCES {
                println!("{}", resource);
                for endpoint in api::catalog().filter(|e| e.resource == *resource) {
                    println!("  {:<24} {}", endpoint.operation, endpoint);
                }
            }
        }
        Command::Routes => {
            let router = Router::new();
            for item in router.menu() {
                println!(
                    "{:<14} {:<14} {} ({})",
                    item.path,
                    item.name.unwrap_or("-"),
                    item.title,
                    item.icon
                );
            }
        }
        Command::Resolve { path } => {
            let router = Router::new();
            let mut navigator = medical_escort_client::Navigator::new(&router);
            let resolved = navigator.push(path)?;

            if let Some(from) = &resolved.redirected_from {
                println!("↪️  {} -> {}", from, resolved.full_path);
            }
            let chain: Vec<_> = resolved
                .component_chain()
                .iter()
                .map(|page| page.module)
                .collect();
            println!("{}  [{}]", resolved.full_path, chain.join(" > "));
            if let Some(meta) = resolved.meta {
                println!("{} ({})", meta.title, meta.icon);
            }
        }
    }

    Ok(())
}
