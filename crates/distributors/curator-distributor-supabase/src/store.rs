//! Content store backing the Supabase distributor
//!
//! `ContentStore` abstracts the two remote operations the distributor
//! performs. `PostgrestStore` is the production implementation over the
//! Supabase REST API (PostgREST).

use async_trait::async_trait;
use curator_core::{ContentRecord, CuratorError, Result};
use reqwest::{header, Client};
use tracing::info;

use crate::supabase::SupabaseConfig;

/// Remote table operations needed by the distributor
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Bounded read confirming the table exists and is reachable
    async fn probe(&self) -> Result<()>;

    /// Insert one record into the table
    async fn insert(&self, record: &ContentRecord) -> Result<()>;
}

/// Supabase-backed content store using the PostgREST API
pub struct PostgrestStore {
    url: String,
    table: String,
    client: Client,
}

impl PostgrestStore {
    /// Build an HTTP client bound to the configured endpoint and credential
    ///
    /// No network activity happens here; reachability is checked by `probe`.
    pub fn connect(config: &SupabaseConfig) -> Result<Self> {
        info!("Connecting to Supabase: {}", config.url);

        let mut headers = header::HeaderMap::new();
        headers.insert(
            "apikey",
            header::HeaderValue::from_str(&config.api_key)
                .map_err(|e| CuratorError::config(format!("Invalid API key: {}", e)))?,
        );
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&format!("Bearer {}", config.api_key))
                .map_err(|e| CuratorError::config(format!("Invalid API key: {}", e)))?,
        );
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let client = Client::builder().default_headers(headers).build().map_err(|e| {
            CuratorError::connection(format!("Failed to create HTTP client: {}", e))
        })?;

        Ok(Self {
            url: config.url.trim_end_matches('/').to_string(),
            table: config.table_name.clone(),
            client,
        })
    }

    /// Get the REST API URL for the configured table
    fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.url, urlencoding::encode(&self.table))
    }
}

#[async_trait]
impl ContentStore for PostgrestStore {
    async fn probe(&self) -> Result<()> {
        let url = format!("{}?select=id&limit=1", self.table_url());

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| CuratorError::connection(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(CuratorError::connection(format!(
                "Supabase query failed ({}): {}",
                status, body
            )));
        }

        Ok(())
    }

    async fn insert(&self, record: &ContentRecord) -> Result<()> {
        let response = self
            .client
            .post(self.table_url())
            .json(record)
            .send()
            .await
            .map_err(|e| CuratorError::distribution(format!("Insert failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(CuratorError::distribution(format!(
                "Supabase insert failed ({}): {}",
                status, body
            )));
        }

        Ok(())
    }
}
