use agentstore::{web, AgentStore};
use std::sync::Arc;
use tracing::{error, info};

/// Bind address used when AGENTSTORE_ADDR is not set
const DEFAULT_ADDR: &str = "127.0.0.1:8080";

#[tokio::main]
async fn main() {
    // Initialize logging (DEBUG level for detailed request tracing)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::DEBUG.into()),
        )
        .init();

    info!("AgentStore starting...");

    let addr = std::env::var("AGENTSTORE_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());

    // One explicit store instance owns every entry for the process lifetime
    let store = Arc::new(AgentStore::new());

    if let Err(e) = web::run_web_server(&addr, store).await {
        error!("Web server error: {}", e);
        std::process::exit(1);
    }
}
