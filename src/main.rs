use connector_manager::bridge::{self, Command, JsonLinesView};
use connector_manager::{Config, ConnectorManager, ConnectorsClient, ManagerError};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), ManagerError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load().await;
    let client = ConnectorsClient::new(&config)?;
    info!(api = client.base_url(), "Connector manager starting");

    let manager = ConnectorManager::builder(
        client.clone(),
        client,
        JsonLinesView::new(std::io::stdout()),
    )
        .config(&config)
        .on_close(|| info!("Dialog closed, host state should be re-rendered"))
        .build();

    if let Err(err) = manager.open().await {
        warn!(error = ?err, "Failed to open connectors dialog");
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                if line.trim().is_empty() {
                    continue;
                }
                let command = match line.parse::<Command>() {
                    Ok(command) => command,
                    Err(err) => {
                        warn!(error = %err, "Ignoring command");
                        continue;
                    }
                };
                match bridge::dispatch(&manager, command).await {
                    Ok(true) => {}
                    Ok(false) => break,
                    Err(err) => warn!(error = %err, "Command failed"),
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupted");
                break;
            }
        }
    }

    if manager.is_visible().await {
        manager.close().await;
    }
    Ok(())
}
