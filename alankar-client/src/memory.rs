//! In-memory content source
//!
//! Holds tables of raw records and answers [`SelectQuery`]s the way the
//! remote service does (filter, then sort). Counts calls per table and can
//! be told to fail, which makes it the stand-in for the real service in tests
//! and offline runs.

use async_trait::async_trait;
use serde_json::Value;
use shared::{RawRecord, SelectQuery, SortDirection, SortSpec};
use std::cmp::Ordering;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::{ClientError, ClientResult, ContentSource};

#[derive(Debug, Default)]
struct MemoryInner {
    tables: HashMap<String, Vec<RawRecord>>,
    calls: HashMap<String, usize>,
    /// Failure applied to every table
    failure: Option<String>,
    /// Failures applied to single tables
    table_failures: HashMap<String, String>,
}

/// In-memory [`ContentSource`]
#[derive(Debug, Default)]
pub struct MemorySource {
    inner: RwLock<MemoryInner>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace a table's records
    pub async fn set_table(&self, table: impl Into<String>, records: Vec<RawRecord>) {
        let mut inner = self.inner.write().await;
        inner.tables.insert(table.into(), records);
    }

    /// Make every query fail until [`recover`](Self::recover)
    pub async fn fail_with(&self, message: impl Into<String>) {
        let mut inner = self.inner.write().await;
        inner.failure = Some(message.into());
    }

    /// Make queries against one table fail until [`recover`](Self::recover)
    pub async fn fail_table(&self, table: impl Into<String>, message: impl Into<String>) {
        let mut inner = self.inner.write().await;
        inner.table_failures.insert(table.into(), message.into());
    }

    /// Clear injected failures
    pub async fn recover(&self) {
        let mut inner = self.inner.write().await;
        inner.failure = None;
        inner.table_failures.clear();
    }

    /// Number of queries issued against a table, failed ones included
    pub async fn calls(&self, table: &str) -> usize {
        let inner = self.inner.read().await;
        inner.calls.get(table).copied().unwrap_or(0)
    }

    /// Number of queries issued against any table
    pub async fn total_calls(&self) -> usize {
        let inner = self.inner.read().await;
        inner.calls.values().sum()
    }
}

#[async_trait]
impl ContentSource for MemorySource {
    async fn select(&self, query: &SelectQuery) -> ClientResult<Vec<RawRecord>> {
        let mut inner = self.inner.write().await;
        *inner.calls.entry(query.table.clone()).or_default() += 1;

        if let Some(message) = inner
            .failure
            .as_ref()
            .or_else(|| inner.table_failures.get(&query.table))
        {
            return Err(ClientError::Injected(message.clone()));
        }

        let Some(records) = inner.tables.get(&query.table) else {
            return Err(ClientError::NotFound(format!("table {}", query.table)));
        };

        let mut selected: Vec<RawRecord> = records
            .iter()
            .filter(|record| query.filter.as_ref().is_none_or(|f| f.matches(record)))
            .cloned()
            .collect();
        selected.sort_by(|a, b| compare_records(a, b, &query.sort));

        Ok(selected)
    }
}

/// Stable multi-key comparison following the sort specs
fn compare_records(a: &RawRecord, b: &RawRecord, sort: &[SortSpec]) -> Ordering {
    for spec in sort {
        let ordering = compare_values(a.get(&spec.field), b.get(&spec.field));
        let ordering = match spec.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}

/// Empty cells sort first, then numbers, then text
fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    fn rank(value: Option<&Value>) -> u8 {
        match value {
            None => 0,
            Some(Value::Number(_)) => 1,
            Some(Value::String(_)) => 2,
            Some(_) => 3,
        }
    }

    match (a, b) {
        (Some(Value::Number(x)), Some(Value::Number(y))) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        _ => rank(a).cmp(&rank(b)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn records() -> Vec<RawRecord> {
        vec![
            RawRecord::new("b", json!({ "Name": "Beta", "Display_Order": 2, "Is_Active": true })),
            RawRecord::new("x", json!({ "Name": "Hidden", "Display_Order": 0 })),
            RawRecord::new("a", json!({ "Name": "Alpha", "Display_Order": 1, "Is_Active": true })),
        ]
    }

    #[tokio::test]
    async fn test_select_filters_and_sorts() {
        let source = MemorySource::new();
        source.set_table("Locations", records()).await;

        let query = SelectQuery::table("Locations")
            .where_true("Is_Active")
            .order_by_asc("Display_Order");
        let ids: Vec<_> = source
            .select(&query)
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.id)
            .collect();

        assert_eq!(ids, ["a", "b"]);
        assert_eq!(source.calls("Locations").await, 1);
    }

    #[tokio::test]
    async fn test_select_sort_desc_by_text() {
        let source = MemorySource::new();
        source.set_table("Menu_Items", records()).await;

        let query = SelectQuery::table("Menu_Items").order_by("Name", SortDirection::Desc);
        let ids: Vec<_> = source
            .select(&query)
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.id)
            .collect();

        assert_eq!(ids, ["x", "b", "a"]);
    }

    #[tokio::test]
    async fn test_failure_injection_counts_calls() {
        let source = MemorySource::new();
        source.set_table("Testimonials", records()).await;
        source.fail_with("offline").await;

        let query = SelectQuery::table("Testimonials");
        assert!(matches!(
            source.select(&query).await,
            Err(ClientError::Injected(_))
        ));
        assert_eq!(source.calls("Testimonials").await, 1);

        source.recover().await;
        assert_eq!(source.select(&query).await.unwrap().len(), 3);
        assert_eq!(source.total_calls().await, 2);
    }

    #[tokio::test]
    async fn test_single_table_failure() {
        let source = MemorySource::new();
        source.set_table("Locations", records()).await;
        source.set_table("ContactInfo", records()).await;
        source.fail_table("Locations", "boom").await;

        assert!(source.select(&SelectQuery::table("Locations")).await.is_err());
        assert!(source.select(&SelectQuery::table("ContactInfo")).await.is_ok());
    }

    #[tokio::test]
    async fn test_unknown_table_is_not_found() {
        let source = MemorySource::new();
        let result = source.select(&SelectQuery::table("Nope")).await;
        assert!(matches!(result, Err(ClientError::NotFound(_))));
    }
}
