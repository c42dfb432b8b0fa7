//! Storyline social API server entry point.

use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::http::HeaderValue;
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use storyline_api::config::Config;
use storyline_api::routes;
use storyline_api::state::AppState;
use storyline_api::token::TokenSigner;
use storyline_core::clock::SystemClock;
use storyline_store::{PgAboutMeRepository, PgStoryRepository};
use storyline_upstream::HttpPlayerDirectory;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting Storyline social API server");

    // Read configuration from environment.
    let config = Config::from_env()?;

    // Create database connection pool.
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&config.database_url)
        .await?;

    // Build application state.
    let app_state = AppState::new(
        Arc::new(PgStoryRepository::new(pool.clone())),
        Arc::new(PgAboutMeRepository::new(pool)),
        Arc::new(HttpPlayerDirectory::new(&config.upstream_base_url)),
        Arc::new(SystemClock),
        TokenSigner::new(&config.token_secret, config.token_ttl_days),
    );

    // CORS is restricted to the configured frontend origin; credentials are
    // allowed, so methods and headers mirror the request.
    let origin: HeaderValue = config
        .allowed_origin
        .parse()
        .map_err(|e| format!("ALLOWED_ORIGIN is not a valid origin: {e}"))?;
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request());

    // Build router.
    let app = Router::new()
        .merge(routes::health::router())
        .merge(routes::authenticate::router())
        .merge(routes::profile::router())
        .merge(routes::react::router())
        .merge(routes::about::router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state);

    // Start server.
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .map_err(|e| format!("invalid HOST:PORT combination: {e}"))?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
