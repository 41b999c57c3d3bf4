pub mod handlers;
pub mod origin;
mod types;

pub use handlers::AppState;
pub use origin::AllowedOrigins;
pub use types::*;

use crate::{Result, config::Config, relay::ChatRelay};
use axum::{Router, middleware, routing::post};
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::info;

/// The origin filter runs ahead of CORS so disallowed origins never reach
/// preflight handling or the chat handler.
pub fn router(state: AppState) -> Router {
    let cors = state.allowed_origins.cors_layer();

    Router::new()
        .route("/api/chat", post(handlers::chat))
        .layer(cors)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            origin::origin_filter,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    let relay = ChatRelay::from_config(&config.llm)?;
    let allowed_origins = AllowedOrigins::new(config.server.allowed_origins.clone())?;

    info!("Allowing {} browser origins", allowed_origins.len());

    let app_state = AppState {
        relay: Arc::new(relay),
        allowed_origins: Arc::new(allowed_origins),
    };

    let app = router(app_state);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
