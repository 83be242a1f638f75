pub mod api;
pub mod config;
pub mod error;
pub mod openapi;
pub mod state;

use std::net::SocketAddr;

use tower_http::cors::CorsLayer;
use utoipa_scalar::{Scalar, Servable};

pub use api::create_router;
pub use config::{Config, Environment};
pub use error::{AppError, AppResult};
pub use state::AppState;

pub async fn run_server(
    addr: SocketAddr,
    env: Environment,
    data_path: &str,
    harvard_api_key: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::new(env, data_path, harvard_api_key.to_string());

    // Ensure the data directory exists
    std::fs::create_dir_all(&config.data_path)?;

    let state = AppState::new(config);
    let (router, api) = create_router(state);

    // The API is consumed by a browser UI served elsewhere.
    let app = router
        .layer(CorsLayer::permissive())
        .merge(Scalar::with_url("/docs", api));

    tracing::info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
