//! Shared types for the Alankar content layer
//!
//! Domain models for the five content families, the raw record shape the
//! content source returns, and the select query used to ask for it.

pub mod models;
pub mod query;
pub mod record;
pub mod util;

// Re-exports
pub use query::{Filter, SelectQuery, SortDirection, SortSpec};
pub use record::{FieldError, FieldResult, RawRecord};
pub use serde::{Deserialize, Serialize};
