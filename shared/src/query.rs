//! Select query types
//!
//! A query names one table of the content source plus a filter predicate,
//! sort order and optional saved view. The HTTP client renders it into the
//! service's formula syntax; in-memory sources evaluate it directly.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::record::RawRecord;

/// Row filter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Filter {
    /// Checkbox field is ticked
    IsTrue(String),
}

impl Filter {
    pub fn is_true(field: impl Into<String>) -> Self {
        Self::IsTrue(field.into())
    }

    /// Formula text, e.g. `{Is_Active} = TRUE()`
    pub fn formula(&self) -> String {
        match self {
            Self::IsTrue(field) => format!("{{{}}} = TRUE()", field),
        }
    }

    /// Evaluate against a record the way the remote service does
    ///
    /// Unticked checkboxes are omitted by the service, so a missing field
    /// does not match.
    pub fn matches(&self, record: &RawRecord) -> bool {
        match self {
            Self::IsTrue(field) => match record.get(field) {
                Some(Value::Bool(b)) => *b,
                Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
                _ => false,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

/// Query against one table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectQuery {
    pub table: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<Filter>,
    #[serde(default)]
    pub sort: Vec<SortSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<String>,
}

impl SelectQuery {
    /// Every record of a table, source order
    pub fn table(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            filter: None,
            sort: Vec::new(),
            view: None,
        }
    }

    pub fn filter(mut self, filter: Filter) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Only rows whose checkbox `field` is ticked
    pub fn where_true(self, field: impl Into<String>) -> Self {
        self.filter(Filter::is_true(field))
    }

    pub fn order_by(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        self.sort.push(SortSpec {
            field: field.into(),
            direction,
        });
        self
    }

    pub fn order_by_asc(self, field: impl Into<String>) -> Self {
        self.order_by(field, SortDirection::Asc)
    }

    pub fn view(mut self, view: impl Into<String>) -> Self {
        self.view = Some(view.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_select_query_builder() {
        let query = SelectQuery::table("Locations")
            .where_true("Is_Active")
            .order_by_asc("Display_Order")
            .view("Grid view");

        assert_eq!(query.table, "Locations");
        assert_eq!(query.filter.as_ref().unwrap().formula(), "{Is_Active} = TRUE()");
        assert_eq!(query.sort[0].field, "Display_Order");
        assert_eq!(query.sort[0].direction, SortDirection::Asc);
        assert_eq!(query.view.as_deref(), Some("Grid view"));
    }

    #[test]
    fn test_filter_matches_ticked_only() {
        let filter = Filter::is_true("Is_Active");
        assert!(filter.matches(&RawRecord::new("a", json!({ "Is_Active": true }))));
        assert!(!filter.matches(&RawRecord::new("b", json!({ "Is_Active": false }))));
        assert!(!filter.matches(&RawRecord::new("c", json!({}))));
    }
}
