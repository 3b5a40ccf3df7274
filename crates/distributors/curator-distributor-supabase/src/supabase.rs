//! Supabase distributor
//!
//! Forwards curated content into a Supabase table, one insert per item.
//! Retries, batching, and ordering between overlapping calls are the host
//! pipeline's concern.

use async_trait::async_trait;
use curator_core::{ContentRecord, CuratorError, DistributorPlugin, Result};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tracing::{debug, info};

use crate::store::{ContentStore, PostgrestStore};

/// Default destination table
pub const DEFAULT_TABLE: &str = "content";

/// Supabase connection configuration
#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    /// Supabase project URL (e.g., https://xxx.supabase.co)
    pub url: String,
    /// Supabase anon/service key
    pub api_key: String,
    /// Destination table
    pub table_name: String,
}

impl SupabaseConfig {
    /// Create a new Supabase configuration targeting the default table
    pub fn new(url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            api_key: api_key.into(),
            table_name: DEFAULT_TABLE.to_string(),
        }
    }

    /// Override the destination table
    pub fn with_table(mut self, table_name: impl Into<String>) -> Self {
        self.table_name = table_name.into();
        self
    }

    /// Parse the host-supplied config map
    ///
    /// `supabaseUrl` and `supabaseKey` are required and must be non-empty.
    /// An absent or empty `tableName` keeps the default.
    pub fn from_map(config: &HashMap<String, String>) -> Result<Self> {
        let url = config.get("supabaseUrl").filter(|v| !v.is_empty());
        let api_key = config.get("supabaseKey").filter(|v| !v.is_empty());

        let (url, api_key) = match (url, api_key) {
            (Some(url), Some(api_key)) => (url.clone(), api_key.clone()),
            _ => {
                return Err(CuratorError::config(
                    "Missing required config: supabaseUrl and supabaseKey",
                ))
            }
        };

        let mut parsed = Self::new(url, api_key);
        if let Some(table_name) = config.get("tableName").filter(|v| !v.is_empty()) {
            parsed = parsed.with_table(table_name);
        }

        Ok(parsed)
    }
}

type StoreConnector = Box<dyn Fn(&SupabaseConfig) -> Result<Arc<dyn ContentStore>> + Send + Sync>;

/// Distributor that inserts one row per content item into a Supabase table
///
/// The store handle is `Some` only after a successful `initialize`; a failed
/// probe, including one during re-initialization, leaves the distributor
/// uninitialized.
pub struct SupabaseDistributor {
    store: RwLock<Option<Arc<dyn ContentStore>>>,
    connector: StoreConnector,
}

impl SupabaseDistributor {
    /// Create an uninitialized distributor
    pub fn new() -> Self {
        Self::with_connector(Box::new(|config: &SupabaseConfig| {
            Ok(Arc::new(PostgrestStore::connect(config)?) as Arc<dyn ContentStore>)
        }))
    }

    fn with_connector(connector: StoreConnector) -> Self {
        Self {
            store: RwLock::new(None),
            connector,
        }
    }
}

impl Default for SupabaseDistributor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DistributorPlugin for SupabaseDistributor {
    fn name(&self) -> &str {
        "supabase"
    }

    async fn initialize(&self, feed_id: &str, config: &HashMap<String, String>) -> Result<()> {
        let config = SupabaseConfig::from_map(config)?;

        // A failed re-initialize must not leave a stale handle behind.
        *self.store.write().unwrap() = None;

        let store = (self.connector)(&config)?;
        store.probe().await.map_err(|e| {
            CuratorError::connection(format!("Failed to connect to Supabase table: {}", e))
        })?;

        info!(
            "Supabase distributor ready for feed '{}' (table '{}')",
            feed_id, config.table_name
        );
        *self.store.write().unwrap() = Some(store);
        Ok(())
    }

    async fn distribute(&self, feed_id: &str, content: &str) -> Result<()> {
        let store = self.store.read().unwrap().clone().ok_or_else(|| {
            CuratorError::not_initialized(
                "Supabase client not initialized. Call initialize() first.",
            )
        })?;

        let record = ContentRecord::new(feed_id, content);
        store.insert(&record).await.map_err(|e| {
            CuratorError::distribution(format!("Failed to distribute content: {}", e))
        })?;

        debug!("Distributed content for feed '{}'", feed_id);
        Ok(())
    }

    async fn shutdown(&self) -> Result<()> {
        // Nothing to clean up for the HTTP client.
        Ok(())
    }
}
