use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;

use intervu_api::{ReqwestTransport, SessionClient};
use intervu_app::{parse_cli_flags, resolve_config};
use intervu_config::ConfigError;
use intervu_ui::Ui;

#[tokio::main]
async fn main() -> Result<()> {
    let flags = parse_cli_flags(std::env::args().skip(1))?;
    let config = resolve_config(&flags)?;
    init_file_logging(&config.log_path)?;

    tracing::info!(
        base_url = %config.api.base_url,
        "starting intervu against the practice backend"
    );

    let transport = ReqwestTransport::new(config.api.base_url.clone())
        .map_err(|err| anyhow::anyhow!("failed to build the practice API transport: {err}"))?;
    let client = Arc::new(SessionClient::new(Arc::new(transport)));

    let mut ui = Ui::init()?
        .with_session_backend(client)
        .with_analyzing_delay(config.analyzing_delay());
    ui.run("ready")?;

    Ok(())
}

fn init_file_logging(log_path: &str) -> Result<(), ConfigError> {
    let log_path: PathBuf = Path::new(log_path).to_path_buf();
    if let Some(parent) = log_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|error| {
                ConfigError::Message(format!(
                    "failed to create intervu log directory '{}': {error}",
                    parent.display()
                ))
            })?;
        }
    }

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .map_err(|error| {
            ConfigError::Message(format!(
                "failed to open intervu log file '{}': {error}",
                log_path.display()
            ))
        })?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_ansi(false)
        .with_writer(std::sync::Mutex::new(log_file))
        .init();

    Ok(())
}
