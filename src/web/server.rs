//! HTTP server implementation

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

use super::handlers::{delete_value, get_value, home_handler, upsert_value};
use crate::store::AgentStore;

/// Version prefix for the value routes
pub const API_VERSION: &str = "/v1";

/// Build the application router
///
/// The store is passed in explicitly so tests can drive the routes against an
/// isolated instance.
pub fn app_router(store: Arc<AgentStore>) -> Router {
    Router::new()
        .route("/", get(home_handler))
        .route(
            &format!("{API_VERSION}/value"),
            get(get_value).post(upsert_value).delete(delete_value),
        )
        .layer(CorsLayer::permissive())
        .with_state(store)
}

/// Run the web server
pub async fn run_web_server(addr: &str, store: Arc<AgentStore>) -> anyhow::Result<()> {
    let app = app_router(store);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Value store API available at http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
