//! # plantillad — plantilla daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (config file, env vars)
//! - Initialize logging
//! - Select and construct the repository implementation (adapter)
//! - Construct the application service, injecting the repository via its port trait
//! - Build the axum router, injecting the service
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use plantilla_adapter_http_axum::router;
use plantilla_adapter_http_axum::state::AppState;
use plantilla_adapter_storage_memory::MemoryEmployeeRepository;
use plantilla_adapter_storage_sqlite_sqlx::SqliteEmployeeRepository;
use plantilla_app::ports::EmployeeRepository;
use plantilla_app::services::employee_service::EmployeeService;
use tracing_subscriber::EnvFilter;

use crate::config::{Config, StorageBackend};

type BoxError = Box<dyn std::error::Error>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .init();

    tracing::info!(backend = %config.storage.backend, "starting plantillad");

    match config.storage.backend {
        StorageBackend::Memory => serve(&config, MemoryEmployeeRepository::new()).await,
        StorageBackend::Sqlite => {
            let db = plantilla_adapter_storage_sqlite_sqlx::Config {
                database_url: config.database_url().to_string(),
            }
            .build()
            .await?;
            serve(&config, SqliteEmployeeRepository::new(db.pool().clone())).await
        }
    }
}

async fn serve<R>(config: &Config, repo: R) -> Result<(), BoxError>
where
    R: EmployeeRepository + Send + Sync + 'static,
{
    let state = AppState::new(EmployeeService::new(repo));
    let app = router::build(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!(addr = %listener.local_addr()?, "plantillad listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("shutdown complete");
    Ok(())
}

/// Resolve once Ctrl+C or SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(%err, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(%err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("received Ctrl+C, shutting down"),
        () = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
