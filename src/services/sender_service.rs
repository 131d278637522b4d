//! Sender listing and category resolution.

use crate::domain::{SenderCategory, SenderOption, SenderSelection};
use crate::error::{GuniApiError, GuniApiResult};
use crate::repositories::SenderRepository;
use async_trait::async_trait;
use std::sync::Arc;

/// Sender service trait for business operations.
#[async_trait]
pub trait SenderService: Send + Sync {
    /// List the account's senders, optionally only those that can send MMS.
    async fn list_senders(&self, mms_only: bool) -> GuniApiResult<Vec<SenderOption>>;
}

/// Default implementation of SenderService.
pub struct SenderServiceImpl {
    senders: Arc<dyn SenderRepository>,
}

impl SenderServiceImpl {
    pub fn new(senders: Arc<dyn SenderRepository>) -> Self {
        Self { senders }
    }
}

#[async_trait]
impl SenderService for SenderServiceImpl {
    async fn list_senders(&self, mms_only: bool) -> GuniApiResult<Vec<SenderOption>> {
        let senders = self.senders.list().await?;
        if !mms_only {
            return Ok(senders);
        }
        Ok(senders.into_iter().filter(|s| s.supports_mms()).collect())
    }
}

/// A selection with its category worked out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSender {
    pub category: SenderCategory,

    /// Display label, when the caller or the gateway supplied one
    pub display: Option<String>,
}

/// Resolves sender categories for one batch.
///
/// The sender list is fetched on first need and then reused for the rest of
/// the batch, including a failed fetch: later items see the same error
/// instead of hitting the gateway again.
pub struct SenderLookup<'a> {
    repo: &'a dyn SenderRepository,
    senders: Option<Result<Vec<SenderOption>, String>>,
}

impl<'a> SenderLookup<'a> {
    pub fn new(repo: &'a dyn SenderRepository) -> Self {
        Self {
            repo,
            senders: None,
        }
    }

    /// Category of `selection`.
    ///
    /// A display label carried by the selection wins and needs no fetch.
    /// Otherwise the sender is looked up in the account list; ids missing
    /// from the list get a category inferred from the id itself.
    pub async fn resolve(&mut self, selection: &SenderSelection) -> GuniApiResult<ResolvedSender> {
        if let Some(display) = selection.display.as_deref().filter(|d| !d.trim().is_empty()) {
            return Ok(ResolvedSender {
                category: SenderCategory::from_display(display),
                display: Some(display.to_string()),
            });
        }

        let senders = self.senders().await?;
        Ok(match senders.iter().find(|s| s.value == selection.id) {
            Some(sender) => ResolvedSender {
                category: sender.category(),
                display: Some(sender.display.clone()),
            },
            None => ResolvedSender {
                category: SenderCategory::infer_from_id(&selection.id),
                display: None,
            },
        })
    }

    async fn senders(&mut self) -> GuniApiResult<&[SenderOption]> {
        if self.senders.is_none() {
            let fetched = self.repo.list().await.map_err(|e| e.provider_message());
            self.senders = Some(fetched);
        }

        match &self.senders {
            Some(Ok(senders)) => Ok(senders),
            Some(Err(message)) => Err(GuniApiError::HttpError(message.clone())),
            None => Ok(&[]),
        }
    }
}
