//! MCP tool handlers for the Guni server.
//!
//! This module implements all the MCP tools using the rmcp SDK's tool_router pattern.

use crate::domain::{CampaignType, SenderSelection};
use crate::metrics::Metrics;
use crate::models::{BatchItem, MmsParameters, SmsParameters};
use crate::repositories::{CampaignRepository, SenderRepository};
use crate::services::{
    DispatchSettings, MmsService, MmsServiceImpl, SenderService, SenderServiceImpl, SmsService,
    SmsServiceImpl,
};
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use schemars::JsonSchema;
use serde::Deserialize;
use std::borrow::Cow;
use std::sync::Arc;

/// The Guni MCP server that exposes SMS and MMS sending tools.
#[derive(Clone)]
pub struct GuniMcpServer {
    sender_service: Arc<dyn SenderService>,
    sms_service: Arc<dyn SmsService>,
    mms_service: Arc<dyn MmsService>,
    tool_router: ToolRouter<Self>,
}

#[tool_handler]
impl ServerHandler for GuniMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: "guni-mcp-server".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some("MCP server for the Guni SMS gateway - lists sender IDs, previews SMS compliance footers and part counts, and sends SMS and MMS campaigns to batches of contacts.".into()),
        }
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
struct ListSenderIdsParams {
    /// Only return shared and dedicated numbers, the senders that can send MMS
    #[serde(default)]
    mms_only: Option<bool>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct SendSmsToolParams {
    /// Sender id, or the packed {"value", "display"} JSON from list_sender_ids
    sender_id: String,
    #[serde(default)]
    campaign_type: Option<CampaignType>,
    /// Used for items without their own message
    #[serde(default)]
    message: Option<String>,
    /// Keep non-ASCII characters (sends as Unicode SMS)
    #[serde(default)]
    allow_unicode: Option<bool>,
    /// Input records; contacts are read from body.contacts
    items: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct SendMmsToolParams {
    sender_id: String,
    #[serde(default)]
    campaign_type: Option<CampaignType>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    media_url: Option<String>,
    items: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct PreviewSmsToolParams {
    message: String,
    #[serde(default)]
    sender_id: Option<String>,
    #[serde(default)]
    campaign_type: Option<CampaignType>,
    #[serde(default)]
    allow_unicode: Option<bool>,
    #[serde(default)]
    contacts: Option<Vec<String>>,
}

// Helper function to convert errors to MCP errors
fn to_mcp_error(e: impl std::fmt::Display) -> McpError {
    McpError {
        code: ErrorCode::INTERNAL_ERROR,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

fn invalid_params(e: impl std::fmt::Display) -> McpError {
    McpError {
        code: ErrorCode::INVALID_PARAMS,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

fn parse_sender(sender_id: &str) -> Result<SenderSelection, McpError> {
    sender_id.parse().map_err(invalid_params)
}

fn json_result(value: &impl serde::Serialize) -> Result<CallToolResult, McpError> {
    let json_response = serde_json::to_string_pretty(value).map_err(to_mcp_error)?;
    Ok(CallToolResult::success(vec![Content::text(json_response)]))
}

#[tool_router]
impl GuniMcpServer {
    /// Create a new Guni MCP server.
    pub fn new(
        sender_repo: Arc<dyn SenderRepository>,
        campaign_repo: Arc<dyn CampaignRepository>,
        settings: DispatchSettings,
        metrics: Metrics,
    ) -> Self {
        let sender_service = Arc::new(SenderServiceImpl::new(sender_repo.clone()))
            as Arc<dyn SenderService>;

        let sms_service = Arc::new(SmsServiceImpl::new(
            sender_repo,
            campaign_repo.clone(),
            settings.clone(),
            metrics.clone(),
        )) as Arc<dyn SmsService>;

        let mms_service = Arc::new(MmsServiceImpl::new(campaign_repo, settings, metrics))
            as Arc<dyn MmsService>;

        Self {
            sender_service,
            sms_service,
            mms_service,
            tool_router: Self::tool_router(),
        }
    }

    /// List the sender identities available on the account.
    #[tool(
        description = "List the sender IDs on the Guni account with their display labels and sender category. Set mms_only to list only shared and dedicated numbers, which are the senders that can send MMS."
    )]
    async fn list_sender_ids(
        &self,
        params: Parameters<ListSenderIdsParams>,
    ) -> Result<CallToolResult, McpError> {
        let mms_only = params.0.mms_only.unwrap_or(false);

        tracing::info!("MCP Handler: list_sender_ids called (mms_only={})", mms_only);

        let senders = self
            .sender_service
            .list_senders(mms_only)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list senders: {:?}", e);
                to_mcp_error(e)
            })?;

        json_result(&serde_json::json!({
            "count": senders.len(),
            "senders": senders.iter().map(|s| {
                serde_json::json!({
                    "value": s.value,
                    "display": s.display,
                    "category": s.category().as_str(),
                })
            }).collect::<Vec<_>>(),
        }))
    }

    /// Send an SMS campaign for every item in the batch.
    #[tool(
        description = "Send SMS to the contacts in each item (item.body.contacts). Each item is sent as its own campaign; the message comes from item.message, then item.body.message, then the message parameter. Contacts are normalized to Australian mobile format 61XXXXXXXXX. Promotional campaigns get an opt-out footer chosen by sender type. Returns one result per item; failed items carry success=false and an error."
    )]
    async fn send_sms(
        &self,
        params: Parameters<SendSmsToolParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        tracing::info!("MCP Handler: send_sms called with {} items", params.items.len());

        let sms_params = SmsParameters {
            sender: parse_sender(&params.sender_id)?,
            campaign_type: params.campaign_type.unwrap_or_default(),
            message: params.message.unwrap_or_default(),
            allow_unicode: params.allow_unicode.unwrap_or(false),
        };
        let items = params.items.into_iter().map(BatchItem::from).collect();

        let results = self.sms_service.send_batch(items, &sms_params).await;
        json_result(&results)
    }

    /// Send an MMS campaign for every item in the batch.
    #[tool(
        description = "Send MMS to the contacts in each item (item.body.contacts). The message comes from item.mmsMessage, then item.body.message, then the message parameter; the media URL from item.mediaUrl, then item.body.media, then media_url. Promotional campaigns get a Reply STOP footer. Returns one result per item."
    )]
    async fn send_mms(
        &self,
        params: Parameters<SendMmsToolParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        tracing::info!("MCP Handler: send_mms called with {} items", params.items.len());

        let mms_params = MmsParameters {
            sender: parse_sender(&params.sender_id)?,
            campaign_type: params.campaign_type.unwrap_or_default(),
            message: params.message.unwrap_or_default(),
            media_url: params.media_url.unwrap_or_default(),
        };
        let items = params.items.into_iter().map(BatchItem::from).collect();

        let results = self.mms_service.send_batch(items, &mms_params).await;
        json_result(&results)
    }

    /// Show what an SMS would look like without sending it.
    #[tool(
        description = "Preview an SMS without sending: the message as submitted, the message with its opt-out footer, billed length, part count, encoding, and which of the given contacts are valid."
    )]
    async fn preview_sms(
        &self,
        params: Parameters<PreviewSmsToolParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        tracing::info!("MCP Handler: preview_sms called");

        let sender = match params.sender_id.as_deref() {
            Some(id) => parse_sender(id)?,
            None => SenderSelection {
                id: String::new(),
                display: None,
            },
        };
        let sms_params = SmsParameters {
            sender,
            campaign_type: params.campaign_type.unwrap_or_default(),
            message: params.message,
            allow_unicode: params.allow_unicode.unwrap_or(false),
        };
        let contacts = params.contacts.unwrap_or_default();

        let preview = self
            .sms_service
            .preview(&sms_params, &contacts)
            .await
            .map_err(to_mcp_error)?;

        json_result(&preview)
    }
}
