//! Alankar Client - access to the external content source
//!
//! Provides the [`ContentSource`] trait, an HTTP implementation for the
//! hosted tabular data service, and an in-memory implementation.

pub mod config;
pub mod error;
pub mod http;
pub mod memory;
pub mod source;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use memory::MemorySource;
pub use source::ContentSource;

// Re-export shared query types for convenience
pub use shared::{Filter, RawRecord, SelectQuery, SortDirection, SortSpec};
