//! Async wrapper around synchronous GuniClient.
//!
//! This module provides an async interface to the synchronous GuniClient by using
//! `tokio::task::spawn_blocking` to run HTTP operations on a dedicated thread pool,
//! preventing blocking of the async runtime.

use crate::client::GuniClient;
use crate::domain::SenderOption;
use crate::error::{GuniApiError, GuniApiResult};
use crate::models::{MmsBulkRequest, SmsBulkRequest};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

/// Async gateway operations.
///
/// This is the seam the repositories sit on, so tests can swap the
/// network out without touching the send logic.
#[async_trait]
pub trait AsyncGuniClient: Send + Sync {
    async fn get_sender_ids(&self) -> GuniApiResult<Vec<SenderOption>>;
    async fn send_sms_bulk(&self, request: &SmsBulkRequest) -> GuniApiResult<Value>;
    async fn send_mms_bulk(&self, request: &MmsBulkRequest) -> GuniApiResult<Value>;
}

/// Async wrapper around synchronous GuniClient.
#[derive(Clone)]
pub struct AsyncGuniClientImpl {
    client: Arc<GuniClient>,
}

impl AsyncGuniClientImpl {
    pub fn new(client: GuniClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

fn join_error(e: tokio::task::JoinError) -> GuniApiError {
    GuniApiError::HttpError(format!("Task join error: {}", e))
}

#[async_trait]
impl AsyncGuniClient for AsyncGuniClientImpl {
    async fn get_sender_ids(&self) -> GuniApiResult<Vec<SenderOption>> {
        let client = self.client.clone();

        tokio::task::spawn_blocking(move || client.get_sender_ids())
            .await
            .map_err(join_error)?
    }

    async fn send_sms_bulk(&self, request: &SmsBulkRequest) -> GuniApiResult<Value> {
        let client = self.client.clone();
        let request = request.clone();

        tokio::task::spawn_blocking(move || client.send_sms_bulk(&request))
            .await
            .map_err(join_error)?
    }

    async fn send_mms_bulk(&self, request: &MmsBulkRequest) -> GuniApiResult<Value> {
        let client = self.client.clone();
        let request = request.clone();

        tokio::task::spawn_blocking(move || client.send_mms_bulk(&request))
            .await
            .map_err(join_error)?
    }
}
