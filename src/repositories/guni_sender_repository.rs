use async_trait::async_trait;
use std::sync::Arc;
use crate::cache::SenderCache;
use crate::client::AsyncGuniClient;
use crate::domain::SenderOption;
use crate::error::GuniApiResult;
use crate::repositories::traits::SenderRepository;

/// Sender repository backed by the Guni API, with a TTL cache in front.
///
/// Failed fetches are not cached; the next call goes back to the gateway.
pub struct GuniSenderRepository {
    client: Arc<dyn AsyncGuniClient>,
    cache: SenderCache,
}

impl GuniSenderRepository {
    /// Create a new GuniSenderRepository caching for `cache_ttl_secs`.
    pub fn new(client: Arc<dyn AsyncGuniClient>, cache_ttl_secs: u64) -> Self {
        Self {
            client,
            cache: SenderCache::new(cache_ttl_secs),
        }
    }

    /// Drop the cached list so the next call refetches.
    pub fn invalidate(&self) {
        self.cache.invalidate();
    }
}

#[async_trait]
impl SenderRepository for GuniSenderRepository {
    async fn list(&self) -> GuniApiResult<Vec<SenderOption>> {
        if let Some(senders) = self.cache.get() {
            tracing::debug!("Sender list served from cache ({} senders)", senders.len());
            return Ok(senders);
        }

        let senders = self.client.get_sender_ids().await?;
        tracing::debug!("Fetched {} senders from gateway", senders.len());
        self.cache.insert(senders.clone());
        Ok(senders)
    }
}
