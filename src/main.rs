use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use hoplink::api;
use hoplink::config::{Config, ValidationMode};
use hoplink::registry::{MemoryStore, UrlRegistry};
use hoplink::resolver::{DnsResolver, HostResolver, StaticResolver};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = Config::from_env()?;
    info!("Loaded configuration");

    // Hostname validation oracle
    let resolver: Arc<dyn HostResolver> = match config.validation.mode {
        ValidationMode::Dns => {
            let lookup_timeout = Duration::from_millis(config.validation.lookup_timeout_ms);
            info!("🔍 Validating hostnames via DNS (lookup timeout: {:?})", lookup_timeout);
            Arc::new(DnsResolver::new(lookup_timeout))
        }
        ValidationMode::Off => {
            info!("🔓 Hostname validation is disabled - every parseable URL is accepted");
            Arc::new(StaticResolver::accepting())
        }
    };

    // In-memory registry; entries do not survive a restart
    let store = Arc::new(MemoryStore::new());
    let registry = UrlRegistry::new(store, resolver);

    let app = api::create_router(registry);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("🚀 Server listening on http://{}", addr);
    info!("   - API endpoints available at http://{}/api/...", addr);
    info!("   - Landing page available at http://{}/", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
