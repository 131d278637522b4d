//! Basic metrics instrumentation.
//!
//! Counters for gateway HTTP traffic and for what the batches actually sent.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Metrics collector shared by the client and the send services.
#[derive(Debug, Clone)]
pub struct Metrics {
    /// Total number of HTTP requests made
    http_requests_total: Arc<AtomicU64>,

    /// Total number of failed HTTP requests
    http_errors_total: Arc<AtomicU64>,

    /// Total duration of all HTTP requests in milliseconds
    http_duration_total_ms: Arc<AtomicU64>,

    /// Campaigns accepted by the gateway
    campaigns_submitted_total: Arc<AtomicU64>,

    /// Contacts included in accepted campaigns
    contacts_sent_total: Arc<AtomicU64>,

    /// Contacts dropped by normalization
    contacts_rejected_total: Arc<AtomicU64>,

    /// Batch items that ended in an error result
    items_failed_total: Arc<AtomicU64>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            http_requests_total: Arc::new(AtomicU64::new(0)),
            http_errors_total: Arc::new(AtomicU64::new(0)),
            http_duration_total_ms: Arc::new(AtomicU64::new(0)),
            campaigns_submitted_total: Arc::new(AtomicU64::new(0)),
            contacts_sent_total: Arc::new(AtomicU64::new(0)),
            contacts_rejected_total: Arc::new(AtomicU64::new(0)),
            items_failed_total: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Record an HTTP request with duration.
    pub fn record_http_request(&self, duration: Duration) {
        self.http_requests_total.fetch_add(1, Ordering::Relaxed);
        self.http_duration_total_ms
            .fetch_add(duration.as_millis() as u64, Ordering::Relaxed);
    }

    pub fn record_http_error(&self) {
        self.http_errors_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a campaign the gateway accepted.
    pub fn record_campaign_submitted(&self, contacts: usize) {
        self.campaigns_submitted_total.fetch_add(1, Ordering::Relaxed);
        self.contacts_sent_total
            .fetch_add(contacts as u64, Ordering::Relaxed);
    }

    pub fn record_contacts_rejected(&self, count: usize) {
        self.contacts_rejected_total
            .fetch_add(count as u64, Ordering::Relaxed);
    }

    pub fn record_item_failed(&self) {
        self.items_failed_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn http_requests_total(&self) -> u64 {
        self.http_requests_total.load(Ordering::Relaxed)
    }

    pub fn http_errors_total(&self) -> u64 {
        self.http_errors_total.load(Ordering::Relaxed)
    }

    pub fn http_duration_total_ms(&self) -> u64 {
        self.http_duration_total_ms.load(Ordering::Relaxed)
    }

    /// Get average HTTP request duration in milliseconds.
    pub fn http_duration_avg_ms(&self) -> f64 {
        let total = self.http_duration_total_ms.load(Ordering::Relaxed);
        let count = self.http_requests_total.load(Ordering::Relaxed);
        if count == 0 {
            0.0
        } else {
            total as f64 / count as f64
        }
    }

    pub fn campaigns_submitted_total(&self) -> u64 {
        self.campaigns_submitted_total.load(Ordering::Relaxed)
    }

    pub fn contacts_sent_total(&self) -> u64 {
        self.contacts_sent_total.load(Ordering::Relaxed)
    }

    pub fn contacts_rejected_total(&self) -> u64 {
        self.contacts_rejected_total.load(Ordering::Relaxed)
    }

    pub fn items_failed_total(&self) -> u64 {
        self.items_failed_total.load(Ordering::Relaxed)
    }

    /// Get a summary of all metrics.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            http_requests_total: self.http_requests_total(),
            http_errors_total: self.http_errors_total(),
            http_duration_avg_ms: self.http_duration_avg_ms(),
            campaigns_submitted_total: self.campaigns_submitted_total(),
            contacts_sent_total: self.contacts_sent_total(),
            contacts_rejected_total: self.contacts_rejected_total(),
            items_failed_total: self.items_failed_total(),
        }
    }
}

/// A snapshot of metrics values.
#[derive(Debug, Clone)]
pub struct MetricsSummary {
    pub http_requests_total: u64,
    pub http_errors_total: u64,
    pub http_duration_avg_ms: f64,
    pub campaigns_submitted_total: u64,
    pub contacts_sent_total: u64,
    pub contacts_rejected_total: u64,
    pub items_failed_total: u64,
}

/// Helper for timing HTTP requests.
pub struct HttpTimer {
    start: Instant,
    metrics: Metrics,
}

impl HttpTimer {
    /// Start timing an HTTP request.
    pub fn new(metrics: Metrics) -> Self {
        Self {
            start: Instant::now(),
            metrics,
        }
    }

    /// Complete the timing and record the duration.
    pub fn complete(self) {
        self.metrics.record_http_request(self.start.elapsed());
    }

    /// Complete the timing and record as an error.
    pub fn complete_with_error(self) {
        self.metrics.record_http_request(self.start.elapsed());
        self.metrics.record_http_error();
    }
}
