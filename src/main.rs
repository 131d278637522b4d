//! Guni MCP Server - Main entry point
//!
//! This is the main executable for the Guni MCP Server, which provides a Model Context
//! Protocol (MCP) interface to the Guni SMS gateway.

use anyhow::Result;
use guni_mcp_server::client::{AsyncGuniClient, AsyncGuniClientImpl};
use guni_mcp_server::repositories::{
    CampaignRepository, GuniCampaignRepository, GuniSenderRepository, SenderRepository,
};
use guni_mcp_server::services::DispatchSettings;
use guni_mcp_server::{Config, GuniClient, GuniMcpServer, Metrics};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Configuration first: LOG_LEVEL from it drives the subscriber
    let loaded = Config::from_env();

    // Initialize logging (stderr only to avoid polluting stdout/MCP communication)
    let filter = match &loaded {
        Ok(cfg) => cfg.log_filter(),
        Err(_) => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match loaded {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Starting Guni MCP Server with API URL: {}",
        config.guni_api_url
    );

    let metrics = Metrics::new();

    // Initialize Guni client
    let sync_client = GuniClient::new(&config).with_metrics(metrics.clone());
    let client = Arc::new(AsyncGuniClientImpl::new(sync_client)) as Arc<dyn AsyncGuniClient>;

    // Initialize repositories
    let sender_repo = Arc::new(GuniSenderRepository::new(
        client.clone(),
        config.sender_cache_ttl_secs,
    )) as Arc<dyn SenderRepository>;
    let campaign_repo =
        Arc::new(GuniCampaignRepository::new(client)) as Arc<dyn CampaignRepository>;

    let server = GuniMcpServer::new(
        sender_repo,
        campaign_repo,
        DispatchSettings::from_config(&config),
        metrics.clone(),
    );

    info!("Guni MCP Server initialized");
    info!(
        "Sender cache TTL: {} seconds, footer placement: {:?}",
        config.sender_cache_ttl_secs, config.footer_placement
    );

    // Run the server (this will block until the server exits)
    info!("Starting MCP server with stdio transport");
    guni_mcp_server::server::run_server(server).await?;

    let summary = metrics.summary();
    info!(
        "Session summary: {} campaigns, {} contacts sent, {} contacts rejected, {} items failed, {} HTTP requests ({} errors, avg {:.1} ms)",
        summary.campaigns_submitted_total,
        summary.contacts_sent_total,
        summary.contacts_rejected_total,
        summary.items_failed_total,
        summary.http_requests_total,
        summary.http_errors_total,
        summary.http_duration_avg_ms
    );

    info!("Guni MCP Server shutdown complete");
    Ok(())
}
