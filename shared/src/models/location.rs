//! Location Model

use serde::{Deserialize, Serialize};

/// Restaurant branch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: String,
    pub name: String,
    pub address: String,
    pub area: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Service tags, e.g. "Dine-in", "Parking"
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub display_order: i32,
    pub is_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operating_hours: Option<OperatingHours>,
    pub created_at: String,
    pub updated_at: String,
}

/// Geographic position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Daily opening window with optional service periods
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatingHours {
    /// "HH:MM"
    pub open: String,
    /// "HH:MM"
    pub close: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub breaks: Vec<ServicePeriod>,
}

/// Labeled interval inside the opening window (e.g. "Lunch" 11:00-16:00)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServicePeriod {
    pub start: String,
    pub end: String,
    pub label: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operating_hours_breaks_default_empty() {
        let hours: OperatingHours =
            serde_json::from_str(r#"{"open":"07:00","close":"22:00"}"#).unwrap();
        assert!(hours.breaks.is_empty());

        let hours: OperatingHours = serde_json::from_str(
            r#"{"open":"07:00","close":"22:00","breaks":[{"start":"11:00","end":"16:00","label":"Lunch"}]}"#,
        )
        .unwrap();
        assert_eq!(hours.breaks[0].label, "Lunch");
    }
}
