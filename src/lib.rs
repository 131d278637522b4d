//! Guni MCP Server - a Model Context Protocol server for the Guni SMS gateway.
//!
//! This library lets AI assistants send SMS and MMS campaigns through Guni.
//! Every batch item is normalized, annotated with the opt-out footer its
//! campaign requires, and submitted on its own, so one bad item never stops
//! the rest of the batch.
//!
//! # Architecture
//!
//! - **domain**: Phone normalization, campaign types and sender identities
//! - **sms**: Encoding detection, part counting and compliance footers
//! - **models**: Gateway request bodies, batch items and per-item results
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **client**: HTTP client for the Guni API
//! - **cache**: TTL cache for the account's sender list
//! - **repositories**: Sender and campaign data access
//! - **services**: Per-item send pipeline
//! - **server**: MCP protocol server

pub mod cache;
pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod models;
pub mod repositories;
pub mod server;
pub mod services;
pub mod sms;

pub use cache::SenderCache;
pub use client::GuniClient;
pub use config::Config;
pub use domain::{normalize, CampaignType, ContactPartition, SenderCategory, SenderOption};
pub use error::{ConfigError, GuniApiError, SendError};
pub use metrics::{HttpTimer, Metrics, MetricsSummary};
pub use models::{BatchItem, MmsParameters, SendResult, SmsParameters};
pub use server::GuniMcpServer;
pub use sms::{annotate, AnnotateOptions, AnnotatedMessage, FooterPlacement};
