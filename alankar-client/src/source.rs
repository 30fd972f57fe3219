//! Content source abstraction

use async_trait::async_trait;
use shared::{RawRecord, SelectQuery};

use crate::ClientResult;

/// Remote tabular data service holding the site content
///
/// Implementations return every record matching the query, already filtered
/// and sorted as requested.
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn select(&self, query: &SelectQuery) -> ClientResult<Vec<RawRecord>>;
}
