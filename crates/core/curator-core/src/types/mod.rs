//! Core type definitions for Curator

pub mod distributor;

// Re-export commonly used types
pub use distributor::*;
