//! Server wiring tests.

mod mocks;

use guni_mcp_server::repositories::{CampaignRepository, SenderRepository};
use guni_mcp_server::services::DispatchSettings;
use guni_mcp_server::{GuniMcpServer, Metrics};
use mocks::{MockCampaignRepository, MockSenderRepository};
use rmcp::ServerHandler;
use std::sync::Arc;

fn server() -> GuniMcpServer {
    GuniMcpServer::new(
        Arc::new(MockSenderRepository::with_account()) as Arc<dyn SenderRepository>,
        Arc::new(MockCampaignRepository::new()) as Arc<dyn CampaignRepository>,
        DispatchSettings::default(),
        Metrics::new(),
    )
}

#[test]
fn test_server_info() {
    let info = server().get_info();

    assert_eq!(info.server_info.name, "guni-mcp-server");
    assert_eq!(info.server_info.version, env!("CARGO_PKG_VERSION"));
    assert!(info.capabilities.tools.is_some());
    assert!(info.instructions.unwrap().contains("SMS"));
}
