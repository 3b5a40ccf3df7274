//! Curator Core
//!
//! This crate provides the contract and shared types for Curator distributor
//! plugins. A distributor takes curated content items from the host pipeline
//! and forwards each one into a remote destination. It includes:
//!
//! - The `DistributorPlugin` capability trait (initialize/distribute/shutdown)
//! - The `ContentRecord` wire type for distributed items
//! - Error taxonomy shared by all distributors
//! - A registry for hosts that hold several distributors

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
pub mod error;
pub mod plugin;
pub mod types;

// Re-export main types
pub use error::{CuratorError, Result};
pub use plugin::{validate_distributor, DistributorRegistry};
pub use types::{ContentRecord, DistributorPlugin};
