//! Document comparison server binary
//!
//! Run with: cargo run --bin doc-compare-server [config.toml]

use std::path::PathBuf;

use doc_compare::{config::AppConfig, server::Server};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "doc_compare=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration (optional TOML path as first argument)
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = AppConfig::load(config_path.as_deref())?;

    tracing::info!("configuration loaded");
    tracing::info!("  - LLM model: {}", config.llm.model);
    tracing::info!("  - LLM temperature: {}", config.llm.temperature);
    tracing::info!("  - SMTP relay: {}:{}", config.smtp.host, config.smtp.port);
    tracing::info!("  - audit recipient: {}", config.audit.recipient);

    if config.llm.api_key.is_empty() {
        tracing::warn!("OPENAI_API_KEY is not set; comparisons will fail");
    }
    if config.smtp.address.is_empty() || config.smtp.password.is_empty() {
        tracing::warn!("SMTP_ADDRESS / SMTP_PASSWORD not set; audit emails will fail");
    }

    // Create and start server
    let server = Server::new(config).await?;

    println!("\nDocument comparison server starting...");
    println!("  UI:     http://{}/", server.address());
    println!("  Health: http://{}/health", server.address());
    println!("  API:    http://{}/api/info", server.address());
    println!("\nPress Ctrl+C to stop\n");

    server.start().await?;

    Ok(())
}
