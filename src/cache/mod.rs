//! Caching utilities for the Guni MCP Server.
//!
//! The gateway's sender list changes rarely, so it is kept for a configurable
//! TTL and shared across batches.

pub mod sender_cache;

pub use sender_cache::SenderCache;
