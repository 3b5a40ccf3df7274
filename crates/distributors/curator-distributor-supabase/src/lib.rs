//! Curator Supabase Distributor
//!
//! Distributor plugin that forwards curated content into a Supabase table.
//! Uses the Supabase REST API (PostgREST) for all remote operations: one
//! bounded read to verify the table during initialization, one insert per
//! distributed item.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Re-exports
pub use curator_core;

pub mod store;
pub mod supabase;

// Re-export the adapter
pub use store::{ContentStore, PostgrestStore};
pub use supabase::{SupabaseConfig, SupabaseDistributor, DEFAULT_TABLE};
