//! # GoREST Proxy Server
//!
//! Main entry point for the GoREST proxy.

use gorest_config::ConfigLoader;
use gorest_core::{init_telemetry, GorestResult, TelemetryConfig};
use gorest_server::{
    app::AppBuilder,
    startup::{print_banner, print_startup_info},
};
use tokio::signal;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> GorestResult<()> {
    let config_loader = match ConfigLoader::from_default_location() {
        Ok(loader) => loader,
        Err(e) => {
            // Logging is configured from the file that failed to load.
            let _ = init_telemetry(&TelemetryConfig::default());
            return Err(e);
        }
    };
    let config = config_loader.get().await;

    if let Err(e) = init_telemetry(&config.observability) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    print_banner();
    info!("Version: {}", env!("CARGO_PKG_VERSION"));
    info!("Environment: {}", config.app.environment);
    if config.remote.access_token.is_none() {
        warn!("No GoREST access token configured; imports use anonymous requests");
    }
    print_startup_info(&config);

    let app = AppBuilder::new().with_config(config).build().await?;
    app.run_until(shutdown_signal()).await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}
