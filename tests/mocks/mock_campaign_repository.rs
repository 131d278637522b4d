use async_trait::async_trait;
use guni_mcp_server::error::{GuniApiError, GuniApiResult};
use guni_mcp_server::models::{MmsBulkRequest, SmsBulkRequest};
use guni_mcp_server::repositories::CampaignRepository;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock campaign repository for testing.
///
/// Records every submitted request. Individual submissions (counted from
/// zero across SMS and MMS) can be made to fail.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockCampaignRepository {
    sms_requests: Arc<Mutex<Vec<SmsBulkRequest>>>,
    mms_requests: Arc<Mutex<Vec<MmsBulkRequest>>>,
    failures: Arc<Mutex<HashMap<usize, (u16, String)>>>,
    submissions: Arc<Mutex<usize>>,
}

#[allow(dead_code)]
impl MockCampaignRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the `n`th submission with a status error.
    pub fn fail_submission(&self, n: usize, status: u16, message: &str) {
        self.failures
            .lock()
            .unwrap()
            .insert(n, (status, message.to_string()));
    }

    pub fn sms_requests(&self) -> Vec<SmsBulkRequest> {
        self.sms_requests.lock().unwrap().clone()
    }

    pub fn mms_requests(&self) -> Vec<MmsBulkRequest> {
        self.mms_requests.lock().unwrap().clone()
    }

    fn next_submission(&self) -> GuniApiResult<Value> {
        let mut submissions = self.submissions.lock().unwrap();
        let n = *submissions;
        *submissions += 1;

        match self.failures.lock().unwrap().get(&n) {
            Some((status, message)) => Err(GuniApiError::ApiError {
                status: *status,
                message: message.clone(),
            }),
            None => Ok(json!({"status": "success", "campaignId": n + 1})),
        }
    }
}

#[async_trait]
impl CampaignRepository for MockCampaignRepository {
    async fn submit_sms(&self, request: &SmsBulkRequest) -> GuniApiResult<Value> {
        let result = self.next_submission();
        if result.is_ok() {
            self.sms_requests.lock().unwrap().push(request.clone());
        }
        result
    }

    async fn submit_mms(&self, request: &MmsBulkRequest) -> GuniApiResult<Value> {
        let result = self.next_submission();
        if result.is_ok() {
            self.mms_requests.lock().unwrap().push(request.clone());
        }
        result
    }
}
