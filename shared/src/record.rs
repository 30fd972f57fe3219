//! Raw external records
//!
//! The content source hands back loosely-typed field bags. [`RawRecord`] keeps
//! that bag intact and exposes typed accessors; each accessor either yields a
//! value or an explicit [`FieldError`], so decoders never do ad hoc type
//! assertions of their own.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Per-field decode failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// Field absent (or explicitly null)
    #[error("field '{field}' is missing")]
    Missing { field: String },

    /// Field present with the wrong JSON type
    #[error("field '{field}' is not {expected}")]
    WrongType { field: String, expected: &'static str },

    /// Field present with the right type but unusable content
    #[error("field '{field}' is malformed: {reason}")]
    Malformed { field: String, reason: String },
}

impl FieldError {
    pub fn missing(field: &str) -> Self {
        Self::Missing {
            field: field.to_string(),
        }
    }

    pub fn wrong_type(field: &str, expected: &'static str) -> Self {
        Self::WrongType {
            field: field.to_string(),
            expected,
        }
    }

    pub fn malformed(field: &str, reason: impl Into<String>) -> Self {
        Self::Malformed {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    /// Absence is expected; anything else is worth reporting
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing { .. })
    }

    pub fn field(&self) -> &str {
        match self {
            Self::Missing { field } | Self::WrongType { field, .. } | Self::Malformed { field, .. } => {
                field
            }
        }
    }
}

pub type FieldResult<T> = Result<T, FieldError>;

/// One record as returned by the content source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRecord {
    /// Opaque record id
    pub id: String,
    #[serde(default)]
    pub fields: Map<String, Value>,
    /// Source-side creation time, when the source reports one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_time: Option<String>,
}

impl RawRecord {
    pub fn new(id: impl Into<String>, fields: Value) -> Self {
        let fields = match fields {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        Self {
            id: id.into(),
            fields,
            created_time: None,
        }
    }

    pub fn with_created_time(mut self, created_time: impl Into<String>) -> Self {
        self.created_time = Some(created_time.into());
        self
    }

    /// Raw value, treating null as absent
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field).filter(|value| !value.is_null())
    }

    fn require(&self, field: &str) -> FieldResult<&Value> {
        self.get(field).ok_or_else(|| FieldError::missing(field))
    }

    pub fn text(&self, field: &str) -> FieldResult<String> {
        match self.require(field)? {
            Value::String(s) => Ok(s.clone()),
            _ => Err(FieldError::wrong_type(field, "text")),
        }
    }

    /// First present text among several spellings of the same field
    pub fn text_any(&self, fields: &[&str]) -> FieldResult<String> {
        let mut last = FieldError::missing(fields.first().copied().unwrap_or_default());
        for field in fields {
            match self.text(field) {
                Ok(value) => return Ok(value),
                Err(e) if e.is_missing() => {}
                Err(e) => last = e,
            }
        }
        Err(last)
    }

    pub fn flag(&self, field: &str) -> FieldResult<bool> {
        match self.require(field)? {
            Value::Bool(b) => Ok(*b),
            _ => Err(FieldError::wrong_type(field, "a boolean")),
        }
    }

    pub fn number(&self, field: &str) -> FieldResult<f64> {
        self.require(field)?
            .as_f64()
            .ok_or_else(|| FieldError::wrong_type(field, "a number"))
    }

    /// Integral number; `2.0` is accepted, `2.5` is not
    pub fn integer(&self, field: &str) -> FieldResult<i64> {
        let value = self.require(field)?;
        if let Some(i) = value.as_i64() {
            return Ok(i);
        }
        let n = value
            .as_f64()
            .ok_or_else(|| FieldError::wrong_type(field, "a number"))?;
        if n.fract() == 0.0 && n >= i64::MIN as f64 && n <= i64::MAX as f64 {
            Ok(n as i64)
        } else {
            Err(FieldError::malformed(field, format!("{} is not an integer", n)))
        }
    }

    /// Array of strings, or a comma-separated string
    pub fn string_list(&self, field: &str) -> FieldResult<Vec<String>> {
        match self.require(field)? {
            Value::Array(values) => values
                .iter()
                .map(|v| {
                    v.as_str()
                        .map(str::to_string)
                        .ok_or_else(|| FieldError::wrong_type(field, "a list of text"))
                })
                .collect(),
            Value::String(s) => Ok(s
                .split(',')
                .map(str::trim)
                .filter(|part| !part.is_empty())
                .map(str::to_string)
                .collect()),
            _ => Err(FieldError::wrong_type(field, "a list of text")),
        }
    }

    /// Reference to another record: linked-record array (first id) or plain text
    pub fn link(&self, field: &str) -> FieldResult<String> {
        match self.require(field)? {
            Value::String(s) => Ok(s.clone()),
            Value::Array(values) => match values.first() {
                Some(Value::String(id)) => Ok(id.clone()),
                Some(Value::Object(obj)) => obj
                    .get("id")
                    .and_then(Value::as_str)
                    .map(str::to_string)
                    .ok_or_else(|| FieldError::malformed(field, "linked record without id")),
                Some(_) => Err(FieldError::malformed(field, "linked record is not an id")),
                None => Err(FieldError::malformed(field, "empty link list")),
            },
            _ => Err(FieldError::wrong_type(field, "a link or text")),
        }
    }

    /// Attachment URL: plain URL text, or the first attachment's `url`
    pub fn attachment_url(&self, field: &str) -> FieldResult<String> {
        match self.require(field)? {
            Value::String(s) => Ok(s.clone()),
            Value::Array(values) => values
                .first()
                .and_then(|v| v.get("url"))
                .and_then(Value::as_str)
                .map(str::to_string)
                .ok_or_else(|| FieldError::malformed(field, "attachment without url")),
            _ => Err(FieldError::wrong_type(field, "an attachment")),
        }
    }

    /// Nested structure, given either as a JSON object or as JSON-encoded text
    pub fn structured<T: DeserializeOwned>(&self, field: &str) -> FieldResult<T> {
        let decoded = match self.require(field)? {
            Value::String(s) => serde_json::from_str(s),
            other => serde_json::from_value(other.clone()),
        };
        decoded.map_err(|e| FieldError::malformed(field, e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_and_null_are_absent() {
        let record = RawRecord::new("rec1", json!({ "Name": null }));
        assert!(record.text("Name").unwrap_err().is_missing());
        assert!(record.text("Other").unwrap_err().is_missing());
    }

    #[test]
    fn test_wrong_type() {
        let record = RawRecord::new("rec1", json!({ "Name": 12, "Is_Active": "yes" }));
        assert_eq!(
            record.text("Name"),
            Err(FieldError::wrong_type("Name", "text"))
        );
        assert!(!record.flag("Is_Active").unwrap_err().is_missing());
    }

    #[test]
    fn test_integer_accepts_integral_floats() {
        let record = RawRecord::new("rec1", json!({ "a": 2, "b": 3.0, "c": 2.5 }));
        assert_eq!(record.integer("a"), Ok(2));
        assert_eq!(record.integer("b"), Ok(3));
        assert!(matches!(record.integer("c"), Err(FieldError::Malformed { .. })));
    }

    #[test]
    fn test_string_list_shapes() {
        let record = RawRecord::new(
            "rec1",
            json!({ "arr": ["Dine-in", "Parking"], "csv": "Dine-in, Delivery ,", "bad": [1] }),
        );
        assert_eq!(record.string_list("arr").unwrap(), ["Dine-in", "Parking"]);
        assert_eq!(record.string_list("csv").unwrap(), ["Dine-in", "Delivery"]);
        assert!(record.string_list("bad").is_err());
    }

    #[test]
    fn test_link_shapes() {
        let record = RawRecord::new(
            "rec1",
            json!({ "linked": ["recCat1", "recCat2"], "plain": "desserts", "empty": [], "num": 4 }),
        );
        assert_eq!(record.link("linked").unwrap(), "recCat1");
        assert_eq!(record.link("plain").unwrap(), "desserts");
        assert!(matches!(record.link("empty"), Err(FieldError::Malformed { .. })));
        assert!(matches!(record.link("num"), Err(FieldError::WrongType { .. })));
    }

    #[test]
    fn test_attachment_url() {
        let record = RawRecord::new(
            "rec1",
            json!({ "Image": [{ "url": "https://img/a.jpg", "filename": "a.jpg" }], "Plain": "https://img/b.jpg" }),
        );
        assert_eq!(record.attachment_url("Image").unwrap(), "https://img/a.jpg");
        assert_eq!(record.attachment_url("Plain").unwrap(), "https://img/b.jpg");
    }

    #[test]
    fn test_structured_from_text_or_object() {
        #[derive(Debug, Deserialize, PartialEq)]
        struct Point {
            lat: f64,
            lng: f64,
        }

        let record = RawRecord::new(
            "rec1",
            json!({
                "obj": { "lat": 12.9, "lng": 79.3 },
                "txt": "{\"lat\": 1.5, \"lng\": 2.5}",
                "bad": "{not json"
            }),
        );
        assert_eq!(record.structured::<Point>("obj").unwrap(), Point { lat: 12.9, lng: 79.3 });
        assert_eq!(record.structured::<Point>("txt").unwrap(), Point { lat: 1.5, lng: 2.5 });
        assert!(matches!(
            record.structured::<Point>("bad"),
            Err(FieldError::Malformed { .. })
        ));
    }

    #[test]
    fn test_text_any_prefers_first_present() {
        let record = RawRecord::new("rec1", json!({ "Created_At": "2024-01-01T00:00:00Z" }));
        assert_eq!(
            record.text_any(&["createdAt", "Created_At"]).unwrap(),
            "2024-01-01T00:00:00Z"
        );
        assert!(record.text_any(&["updatedAt", "Updated_At"]).unwrap_err().is_missing());
    }

    #[test]
    fn test_deserializes_source_shape() {
        let record: RawRecord = serde_json::from_value(json!({
            "id": "recA",
            "createdTime": "2024-05-01T10:00:00.000Z",
            "fields": { "Name": "Kulfi" }
        }))
        .unwrap();
        assert_eq!(record.id, "recA");
        assert_eq!(record.created_time.as_deref(), Some("2024-05-01T10:00:00.000Z"));
        assert_eq!(record.text("Name").unwrap(), "Kulfi");
    }
}
