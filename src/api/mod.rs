mod handlers;
mod types;
mod state;
pub use handlers::*;
pub use types::*;
pub use state::*;

use tokio::net::TcpListener;
use axum::{
    Router,
    routing::get
};
use tower_http::cors::{Any, CorsLayer};
use std::sync::Arc;
use std::net::SocketAddr;
use tracing::info;
use anyhow::Result;
use std::time::Duration;
use crate::ServerConfig;

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([axum::http::Method::GET, axum::http::Method::OPTIONS])
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .route("/health", get(health_check))
        .route("/random/mean", get(get_random_mean))
        .layer(cors)
        .with_state(Arc::new(state))
}

pub async fn serve(config: &ServerConfig, state: AppState) -> Result<()> {
    let app = router(state);

    let addr = format!("{}:{}", config.host, config.port)
        .parse::<SocketAddr>()?;

    let listener = TcpListener::bind(&addr).await?;

    info!("You can see your responses at http://{}/random/mean", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}
