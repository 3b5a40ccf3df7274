//! Distributor plugin types

use crate::Result;
use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Distributor plugin trait
///
/// A distributor forwards one curated content item per call into a remote
/// destination (a database table, a message board, a webhook). The host
/// pipeline drives the lifecycle: `initialize` once per feed, then
/// `distribute` zero or more times, then optionally `shutdown`. Distributors
/// never initiate calls on their own.
#[async_trait]
pub trait DistributorPlugin: Send + Sync {
    /// Plugin name (unique identifier, constant for the lifetime of the value)
    fn name(&self) -> &str;

    /// Bind the distributor to its destination and verify reachability
    ///
    /// Must not leave the distributor in a usable state when it fails; a
    /// repeated call re-creates the underlying connection.
    async fn initialize(&self, feed_id: &str, config: &HashMap<String, String>) -> Result<()>;

    /// Forward one content item to the destination
    ///
    /// One outbound write per call. No retry, no buffering; failures surface
    /// to the host, which owns the retry/skip/abort decision.
    async fn distribute(&self, feed_id: &str, content: &str) -> Result<()>;

    /// Release any resources held by the distributor
    async fn shutdown(&self) -> Result<()> {
        Ok(())
    }
}

/// One distributed content item as it is written to the destination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRecord {
    /// Feed the item belongs to, stored verbatim
    pub feed_id: String,

    /// The curated text content
    pub content: String,

    /// ISO-8601 UTC timestamp with millisecond precision
    pub created_at: String,
}

impl ContentRecord {
    /// Build a record stamped with the current UTC time
    pub fn new(feed_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            feed_id: feed_id.into(),
            content: content.into(),
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}
