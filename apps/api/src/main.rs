use std::sync::Arc;

use restaurants_api::api::{self, AppState};
use restaurants_api::config::{Config, Storage};
use restaurants_api::domain::repositories::RestaurantRepository;
use restaurants_api::infrastructure::database;
use restaurants_api::infrastructure::repositories::{
    InMemoryRestaurantRepository, PostgresRestaurantRepository,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "Server failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;

    let restaurants: Arc<dyn RestaurantRepository> = match config.storage {
        Storage::Postgres => {
            let pool = database::connect(&config.database_url, config.max_connections).await?;
            Arc::new(PostgresRestaurantRepository::new(pool))
        }
        Storage::Memory => {
            tracing::warn!("Using in-memory storage, data is lost on exit");
            Arc::new(InMemoryRestaurantRepository::new())
        }
    };

    let app = api::router(AppState::new(restaurants));

    // Start server
    let addr = config.bind_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
