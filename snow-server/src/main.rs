use std::process::ExitCode;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use snow_server::awdb::{AwdbClient, AwdbSource, MockAwdbClient};
use snow_server::config::AppConfig;
use snow_server::snow::SnowDepthEstimator;
use snow_server::stations::StationDirectory;
use snow_server::web::{AppState, create_router};

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
    let config = AppConfig::from_env()?;

    // Mock mode serves fixture files instead of calling AWDB
    let source = match &config.mock_dir {
        Some(dir) => {
            info!(dir = %dir.display(), "using mock AWDB data");
            AwdbSource::Mock(MockAwdbClient::new(dir)?)
        }
        None => AwdbSource::Live(AwdbClient::new(config.awdb_config())?),
    };

    // Station names are cosmetic; carry on without them
    let directory = match StationDirectory::fetch(&source, &config.stations).await {
        Ok(directory) => {
            info!(stations = directory.len(), "loaded station metadata");
            directory
        }
        Err(e) => {
            warn!(error = %e, "failed to fetch station metadata, showing triplets");
            StationDirectory::empty()
        }
    };

    info!(
        source = source.kind(),
        stations = ?config.stations.iter().map(|s| s.as_str()).collect::<Vec<_>>(),
        lookback_days = config.lookback_days,
        "starting snow depth server"
    );

    let estimator = SnowDepthEstimator::new(source, config.estimator_config());
    let state = AppState::new(estimator, directory);
    let app = create_router(state, &config.static_dir);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("listening on http://{}", config.bind_addr);
    info!("  GET  /              - Snow depth page");
    info!("  GET  /health        - Health check");
    info!("  GET  /api/depth     - Depth range as JSON");
    info!("  GET  /api/stations  - Station metadata as JSON");

    axum::serve(listener, app).await?;
    Ok(())
}
