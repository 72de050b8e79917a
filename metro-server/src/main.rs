use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use metro_server::config::ServerConfig;
use metro_server::dataset::{DatasetConfig, load_network};
use metro_server::planner::{PathFinder, PlannerConfig};
use metro_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    let network = match load_network(&DatasetConfig::new(&config.data_dir)) {
        Ok(network) => network,
        Err(e) => {
            error!(error = %e, "Failed to load network");
            return ExitCode::FAILURE;
        }
    };

    let mut planner_config = PlannerConfig::default();
    if let Some(weight) = config.transfer_weight {
        planner_config = planner_config.with_transfer_weight(weight);
    }

    let finder = PathFinder::new(network, planner_config);
    info!(
        nodes = finder.graph().node_count(),
        edges = finder.graph().edge_count(),
        "Planner ready"
    );

    let app = create_router(AppState::new(finder));

    let listener = match tokio::net::TcpListener::bind(config.listen_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %config.listen_addr, error = %e, "Failed to bind");
            return ExitCode::FAILURE;
        }
    };

    info!(addr = %config.listen_addr, "Metro trip planner listening");
    info!("API endpoints: GET /health, /api/lines, /api/stations/search, /api/route");

    if let Err(e) = axum::serve(listener, app).await {
        error!(error = %e, "Server error");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
