//! Distributor registration and management utilities

use crate::types::DistributorPlugin;
use crate::{CuratorError, Result};
use std::collections::HashMap;
use std::sync::Arc;

/// Validate a distributor's structure
///
/// # Arguments
/// * `distributor` - The distributor to validate
///
/// # Returns
/// A result with validation errors if any
pub fn validate_distributor(distributor: &Arc<dyn DistributorPlugin>) -> Result<()> {
    if distributor.name().is_empty() {
        return Err(CuratorError::validation(
            "Distributor validation failed: distributor must have a name",
        ));
    }

    Ok(())
}

/// Registry of distributors held by a host pipeline, keyed by name
///
/// Registration order is not significant; distributors declare no
/// dependencies on each other.
#[derive(Default)]
pub struct DistributorRegistry {
    distributors: HashMap<String, Arc<dyn DistributorPlugin>>,
}

impl DistributorRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a distributor under its own name
    ///
    /// Fails when the distributor is structurally invalid or when the name
    /// is already taken.
    pub fn register(&mut self, distributor: Arc<dyn DistributorPlugin>) -> Result<()> {
        validate_distributor(&distributor)?;

        let name = distributor.name().to_string();
        if self.distributors.contains_key(&name) {
            return Err(CuratorError::validation(format!(
                "Distributor '{}' is already registered",
                name
            )));
        }

        tracing::debug!("Registered distributor '{}'", name);
        self.distributors.insert(name, distributor);
        Ok(())
    }

    /// Look up a distributor by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn DistributorPlugin>> {
        self.distributors.get(name).cloned()
    }

    /// Names of all registered distributors
    pub fn names(&self) -> Vec<String> {
        self.distributors.keys().cloned().collect()
    }

    /// Number of registered distributors
    pub fn len(&self) -> usize {
        self.distributors.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.distributors.is_empty()
    }

    /// Shut down every registered distributor
    pub async fn shutdown_all(&self) -> Result<()> {
        for distributor in self.distributors.values() {
            distributor.shutdown().await?;
        }

        Ok(())
    }
}
