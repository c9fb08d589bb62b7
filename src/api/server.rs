//! HTTP API server

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::auth::{self, TokenIssuer};
use crate::config::Config;
use crate::error::Result;
use crate::store::Store;

use super::routes;

/// Application state shared across handlers, read-only after startup
pub struct AppState {
    pub store: Store,
    pub tokens: TokenIssuer,
}

pub type SharedState = Arc<AppState>;

/// Run the HTTP API server
pub async fn run_server(config: Config) -> Result<()> {
    config.validate()?;

    let store = Store::connect(&config.database).await?;
    store.migrate().await?;

    let tokens = TokenIssuer::new(&config.auth.jwt_secret, config.auth.token_ttl_secs)?;

    let state = Arc::new(AppState { store, tokens });

    spawn_revocation_sweep(state.clone(), config.auth.revoked_sweep_interval_secs);

    let app = create_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the router with all routes
pub fn create_router(state: SharedState) -> Router {
    // get_me and get_logs sit behind the session validator; logout does its
    // own header checks and must accept tokens the validator would reject
    let protected = Router::new()
        .route("/api/me", get(routes::get_me))
        .route("/api/logs", get(routes::get_logs))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_auth,
        ));

    Router::new()
        .route("/", get(routes::root))
        .route("/api/health", get(routes::health))
        .route("/api/auth/signup", post(routes::signup))
        .route("/api/auth/login", post(routes::login))
        .route("/api/auth/logout", post(routes::logout))
        .merge(protected)
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Periodically drop revoked-token rows past their natural expiry. The
/// sweep never changes accept/reject behavior: a swept token is expired,
/// so the validator already rejects it before consulting the registry.
fn spawn_revocation_sweep(state: SharedState, interval_secs: u64) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(interval_secs));
        // the first tick fires immediately; skip it
        interval.tick().await;

        loop {
            interval.tick().await;
            match state.store.purge_expired_tokens().await {
                Ok(0) => {}
                Ok(purged) => tracing::info!("Purged {} expired revoked tokens", purged),
                Err(e) => tracing::warn!("Revoked-token sweep failed: {}", e),
            }
        }
    });
}
