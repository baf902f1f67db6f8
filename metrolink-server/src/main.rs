use std::process::ExitCode;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use metrolink_server::config::{FeedSource, ServerConfig};
use metrolink_server::tfgm::{FixtureGateway, TfgmClient};
use metrolink_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env()?;

    let state = match &config.feed {
        FeedSource::Live(tfgm) => {
            info!(endpoint = %tfgm.endpoint, "Using live TfGM feed");
            AppState::new(TfgmClient::new(tfgm.clone())?)
        }
        FeedSource::Fixture { path, reload_every } => {
            let gateway = FixtureGateway::from_file(path)?;
            info!(
                path = %path.display(),
                rows = gateway.len().await,
                "Using fixture feed"
            );

            if let Some(period) = *reload_every {
                let reloading = gateway.clone();
                let path = path.clone();
                tokio::spawn(async move {
                    let mut interval = tokio::time::interval(period);
                    interval.tick().await; // First tick is immediate, skip it
                    loop {
                        interval.tick().await;
                        match reloading.reload(&path).await {
                            Ok(rows) => info!(rows, "Reloaded fixture feed"),
                            Err(e) => warn!(error = %e, "Failed to reload fixture feed"),
                        }
                    }
                });
            }

            AppState::new(gateway)
        }
    };

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!(addr = %config.bind_addr, "Metrolink boards listening");
    info!("  GET /health            - Health check");
    info!("  GET /api/stops         - All stops");
    info!("  GET /api/stops/{{slug}}  - Resolve a stop slug");
    info!("  GET /api/stop/{{stop}}   - Departure board for a stop");

    axum::serve(listener, app).await?;
    Ok(())
}
