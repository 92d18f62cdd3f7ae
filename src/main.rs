use dotenvy::dotenv;
use std::net::SocketAddr;
use std::sync::Arc;
use summarize_relay::hosting::server;
use summarize_relay::{Config, Summarizer};
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).compact().init();

    let config = Config::from_env()?;

    // Keep serving without a credential; every request reports the configuration error.
    if let Err(e) = config.provider.credential() {
        warn!("{e}. Summarization requests will fail until it is set.");
    }

    let summarizer = Arc::new(Summarizer::new(config.provider));
    let app = server::router(summarizer);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    server::serve(listener, app).await?;
    Ok(())
}
