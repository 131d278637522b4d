//! SMS batch processing against mock repositories.

mod mocks;

use guni_mcp_server::domain::{CampaignType, SenderSelection};
use guni_mcp_server::models::{BatchItem, SendResult, SmsParameters};
use guni_mcp_server::repositories::{CampaignRepository, SenderRepository};
use guni_mcp_server::services::{DispatchSettings, SmsService, SmsServiceImpl};
use guni_mcp_server::{FooterPlacement, Metrics};
use mocks::{MockCampaignRepository, MockSenderRepository};
use serde_json::{json, Value};
use std::sync::Arc;

struct Fixture {
    senders: MockSenderRepository,
    campaigns: MockCampaignRepository,
    metrics: Metrics,
    service: SmsServiceImpl,
}

fn fixture_with(placement: FooterPlacement) -> Fixture {
    let senders = MockSenderRepository::with_account();
    let campaigns = MockCampaignRepository::new();
    let metrics = Metrics::new();
    let settings = DispatchSettings {
        campaign_name_prefix: "n8n".to_string(),
        footer_placement: placement,
    };
    let service = SmsServiceImpl::new(
        Arc::new(senders.clone()) as Arc<dyn SenderRepository>,
        Arc::new(campaigns.clone()) as Arc<dyn CampaignRepository>,
        settings,
        metrics.clone(),
    );
    Fixture {
        senders,
        campaigns,
        metrics,
        service,
    }
}

fn fixture() -> Fixture {
    fixture_with(FooterPlacement::Preview)
}

fn params(sender: &str, campaign_type: CampaignType) -> SmsParameters {
    SmsParameters {
        sender: sender.parse::<SenderSelection>().unwrap(),
        campaign_type,
        message: "Static message".to_string(),
        allow_unicode: false,
    }
}

fn item(json: Value) -> BatchItem {
    BatchItem::new(json)
}

fn as_json(result: &SendResult) -> Value {
    serde_json::to_value(result).unwrap()
}

#[tokio::test]
async fn test_sends_each_item_as_its_own_campaign() {
    let f = fixture();
    let items = vec![
        item(json!({"message": "Hello A", "body": {"contacts": ["0412345678", "abc"]}})),
        item(json!({"body": {"message": "Hello B", "contacts": ["61412345679"]}})),
    ];

    let results = f
        .service
        .send_batch(items, &params("#SharedNum#", CampaignType::Promotional))
        .await;

    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|r| r.is_success()));

    let first = as_json(&results[0]);
    assert_eq!(first["sentTo"], json!(["61412345678"]));
    assert_eq!(first["invalidContacts"], json!(["abc"]));
    assert_eq!(first["message"], "Hello A");
    assert_eq!(first["senderType"], "shared");
    assert_eq!(first["selectedSenderDisplay"], "Shared Number");
    assert_eq!(first["previewMessage"], "Hello A   Reply STOP to optout");
    assert_eq!(first["replyStopToOptOut"], true);
    assert_eq!(first["optout"], false);
    assert_eq!(first["messageLength"], 7 + 23);
    assert_eq!(first["parts"], 1);
    assert_eq!(first["encoding"], "GSM-7 SMS");
    assert_eq!(first["response"]["campaignId"], 1);

    let requests = f.campaigns.sms_requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].message, "Hello A");
    assert_eq!(requests[1].message, "Hello B");
    assert_eq!(requests[1].contacts, vec!["61412345679"]);
    assert!(requests[0].name.starts_with("n8n "));

    // Sender list fetched once for the whole batch
    assert_eq!(f.senders.call_count(), 1);
    assert_eq!(f.metrics.contacts_rejected_total(), 1);
}

#[tokio::test]
async fn test_empty_contacts_do_not_affect_siblings() {
    let f = fixture();
    let items = vec![
        item(json!({"body": {"contacts": ["0412345678"]}})),
        item(json!({"body": {"contacts": []}})),
        item(json!({"body": {"contacts": ["0412345679"]}})),
    ];

    let results = f
        .service
        .send_batch(items, &params("ACME", CampaignType::Notification))
        .await;

    assert!(results[0].is_success());
    assert!(!results[1].is_success());
    assert!(results[2].is_success());
    assert_eq!(
        as_json(&results[1]),
        json!({"success": false, "error": "No contacts found in input [item 1]"})
    );
    assert_eq!(f.campaigns.sms_requests().len(), 2);
    assert_eq!(f.metrics.items_failed_total(), 1);
}

#[tokio::test]
async fn test_no_valid_contacts() {
    let f = fixture();
    let items = vec![item(json!({"body": {"contacts": ["abc", "123"]}}))];

    let results = f
        .service
        .send_batch(items, &params("ACME", CampaignType::Promotional))
        .await;

    assert_eq!(results[0].error(), Some("No valid contacts found [item 0]"));
    // Nothing valid, so the sender category was never needed
    assert_eq!(f.senders.call_count(), 0);
    assert!(f.campaigns.sms_requests().is_empty());
}

#[tokio::test]
async fn test_missing_sender() {
    let f = fixture();
    let items = vec![item(json!({"body": {"contacts": ["0412345678"]}}))];

    let results = f
        .service
        .send_batch(items, &params("", CampaignType::Promotional))
        .await;

    assert_eq!(results[0].error(), Some("Sender ID is required for item 0"));
}

#[tokio::test]
async fn test_provider_failure_is_isolated() {
    let f = fixture();
    f.campaigns.fail_submission(0, 400, "Insufficient credit");
    let items = vec![
        item(json!({"body": {"contacts": ["0412345678"]}})),
        item(json!({"body": {"contacts": ["0412345679"]}})),
    ];

    let results = f
        .service
        .send_batch(items, &params("ACME", CampaignType::Promotional))
        .await;

    assert_eq!(
        results[0].error(),
        Some("Guni API Request Failed: Insufficient credit")
    );
    assert!(results[1].is_success());
}

#[tokio::test]
async fn test_sender_list_failure_fails_items_once() {
    let f = fixture();
    f.senders.fail_with(503, "Service unavailable");
    let items = vec![
        item(json!({"body": {"contacts": ["0412345678"]}})),
        item(json!({"body": {"contacts": ["0412345679"]}})),
    ];

    let results = f
        .service
        .send_batch(items, &params("ACME", CampaignType::Promotional))
        .await;

    for result in &results {
        assert_eq!(
            result.error(),
            Some("Guni API Request Failed: Service unavailable")
        );
    }
    assert_eq!(f.senders.call_count(), 1);
}

#[tokio::test]
async fn test_business_sender_gets_unsubscribe_link() {
    let f = fixture();
    let items = vec![item(json!({"body": {"contacts": ["0412345678"]}}))];

    let results = f
        .service
        .send_batch(items, &params("ACME", CampaignType::Promotional))
        .await;

    let json = as_json(&results[0]);
    assert_eq!(json["senderType"], "business");
    assert_eq!(json["optout"], true);
    assert_eq!(json["replyStopToOptOut"], false);
    assert_eq!(json["previewMessage"], "Static message  stopsms.co/u######");
    assert_eq!(json["messageLength"], 14 + 20);

    let request = &f.campaigns.sms_requests()[0];
    assert!(request.optout);
    assert_eq!(request.message, "Static message");
}

#[tokio::test]
async fn test_packed_sender_selection_skips_lookup() {
    let f = fixture();
    let items = vec![item(json!({"body": {"contacts": ["0412345678"]}}))];
    let params = params(
        r#"{"value":"61412345678","display":"0412 345 678 (Dedicated)"}"#,
        CampaignType::Promotional,
    );

    let results = f.service.send_batch(items, &params).await;

    let json = as_json(&results[0]);
    assert_eq!(json["senderType"], "dedicated");
    assert_eq!(f.senders.call_count(), 0);
    assert_eq!(f.campaigns.sms_requests()[0].sender, "61412345678");
}

#[tokio::test]
async fn test_unicode_stripped_unless_allowed() {
    let f = fixture();
    let items = vec![item(json!({
        "message": "Café ☕ time",
        "body": {"contacts": ["0412345678"]}
    }))];

    let results = f
        .service
        .send_batch(items.clone(), &params("ACME", CampaignType::Notification))
        .await;
    let json = as_json(&results[0]);
    assert_eq!(json["message"], "Caf  time");
    assert_eq!(json["encoding"], "GSM-7 SMS");
    assert_eq!(json["unicodeDetected"], false);
    assert_eq!(json["unicodeAllowed"], false);

    let mut unicode = params("ACME", CampaignType::Notification);
    unicode.allow_unicode = true;
    let results = f.service.send_batch(items, &unicode).await;
    let json = as_json(&results[0]);
    assert_eq!(json["message"], "Café ☕ time");
    assert_eq!(json["encoding"], "Unicode SMS");
    assert_eq!(json["unicodeDetected"], true);
}

#[tokio::test]
async fn test_blank_static_message_is_rejected() {
    let f = fixture();
    let items = vec![item(json!({"body": {"contacts": ["0412345678"]}}))];
    let mut blank = params("ACME", CampaignType::Notification);
    blank.message = String::new();

    let results = f.service.send_batch(items, &blank).await;

    assert_eq!(
        as_json(&results[0]),
        json!({
            "success": false,
            "error": "Message not found in input data or node parameters [item 0]"
        })
    );
    assert!(f.campaigns.sms_requests().is_empty());
}

#[tokio::test]
async fn test_message_emptied_by_stripping_is_rejected() {
    let f = fixture();
    let items = vec![
        item(json!({"message": "🎉🎉", "body": {"contacts": ["0412345678"]}})),
        item(json!({"message": "Party 🎉", "body": {"contacts": ["0412345679"]}})),
    ];

    let results = f
        .service
        .send_batch(items, &params("ACME", CampaignType::Notification))
        .await;

    assert!(!results[0].is_success());
    assert_eq!(
        as_json(&results[0])["error"],
        "Message not found in input data or node parameters [item 0]"
    );
    assert!(results[1].is_success());

    let requests = f.campaigns.sms_requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].message, "Party ");
}

#[tokio::test]
async fn test_wire_placement_sends_footer() {
    let f = fixture_with(FooterPlacement::Wire);
    let items = vec![item(json!({"message": "Sale", "body": {"contacts": ["0412345678"]}}))];

    f.service
        .send_batch(items, &params("#SharedNum#", CampaignType::Promotional))
        .await;

    assert_eq!(
        f.campaigns.sms_requests()[0].message,
        "Sale   Reply STOP to optout"
    );
}

#[tokio::test]
async fn test_preview_does_not_send() {
    let f = fixture();
    let mut params = params("#SharedNum#", CampaignType::Promotional);
    params.message = "a".repeat(161);

    let preview = f
        .service
        .preview(&params, &["0412345678".to_string(), "nope".to_string()])
        .await
        .unwrap();

    assert_eq!(preview.parts, 2);
    assert_eq!(preview.message_length, 161 + 23);
    assert_eq!(preview.valid_contacts, vec!["61412345678"]);
    assert_eq!(preview.invalid_contacts, vec!["nope"]);
    assert_eq!(preview.sender_type, "shared");
    assert!(f.campaigns.sms_requests().is_empty());
}
