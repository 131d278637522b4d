use async_trait::async_trait;
use guni_mcp_server::domain::SenderOption;
use guni_mcp_server::error::{GuniApiError, GuniApiResult};
use guni_mcp_server::repositories::SenderRepository;
use std::sync::{Arc, Mutex};

/// Mock sender repository for testing.
///
/// Serves a fixed sender list, or a configured failure, and counts calls.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockSenderRepository {
    senders: Arc<Mutex<Vec<SenderOption>>>,
    failure: Arc<Mutex<Option<(u16, String)>>>,
    calls: Arc<Mutex<usize>>,
}

#[allow(dead_code)]
impl MockSenderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository preloaded with a typical account.
    pub fn with_account() -> Self {
        let repo = Self::new();
        repo.add_sender(SenderOption::new("#SharedNum#", "Shared Number"));
        repo.add_sender(SenderOption::new("61412345678", "0412 345 678 (Dedicated)"));
        repo.add_sender(SenderOption::new("ACME", "ACME (Business)"));
        repo.add_sender(SenderOption::new("61498765432", "0498 765 432 (Personal)"));
        repo
    }

    pub fn add_sender(&self, sender: SenderOption) {
        self.senders.lock().unwrap().push(sender);
    }

    /// Make every `list` call fail with a status error.
    pub fn fail_with(&self, status: u16, message: &str) {
        *self.failure.lock().unwrap() = Some((status, message.to_string()));
    }

    pub fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl SenderRepository for MockSenderRepository {
    async fn list(&self) -> GuniApiResult<Vec<SenderOption>> {
        *self.calls.lock().unwrap() += 1;

        if let Some((status, message)) = self.failure.lock().unwrap().clone() {
            return Err(GuniApiError::ApiError { status, message });
        }
        Ok(self.senders.lock().unwrap().clone())
    }
}
