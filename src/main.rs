mod error;
mod fetcher;
mod handlers;
mod models;
mod orchestrator;
mod state;
mod theme;
mod view;

use std::sync::Arc;

use anyhow::Context as _;
use axum::{
    routing::{get, post},
    Router,
};
use tera::Tera;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::fetcher::IdentityClient;
use crate::state::{AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("ipscope=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env();

    let tera = Tera::new("templates/**/*.html").context("failed to parse templates")?;
    let client = IdentityClient::new(config.endpoint.clone())?;
    let state = Arc::new(AppState::new(tera, client));

    // The first page view shows the loading layout while this call is
    // still in flight, same as a user-triggered refresh.
    handlers::start_fetch(&state).await;

    let app = Router::new()
        .route("/", get(handlers::index))
        .route("/refresh", post(handlers::refresh))
        .route("/theme/toggle", post(handlers::toggle_theme))
        .route("/api/identity", get(handlers::api_identity))
        .nest_service("/static", ServeDir::new("static"))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_address)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_address))?;
    info!("Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
