//! Testimonial Model

use serde::{Deserialize, Serialize};

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// Customer review
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: String,
    pub customer_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_title: Option<String>,
    /// 1..=5
    pub rating: u8,
    pub comment: String,
    /// Free-text branch name, not a location id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// "YYYY-MM-DD"
    pub date: String,
    pub is_active: bool,
    pub is_featured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub display_order: i32,
    pub created_at: String,
    pub updated_at: String,
}

impl Testimonial {
    /// Case-insensitive substring match against the free-text location
    pub fn mentions_location(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.location
            .as_deref()
            .is_some_and(|location| location.to_lowercase().contains(&query))
    }
}

/// Clamp a raw rating into `MIN_RATING..=MAX_RATING`, rounding fractions
pub fn clamp_rating(raw: f64) -> u8 {
    if raw.is_nan() {
        return MAX_RATING;
    }
    raw.round().clamp(MIN_RATING as f64, MAX_RATING as f64) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_rating() {
        assert_eq!(clamp_rating(7.0), 5);
        assert_eq!(clamp_rating(0.0), 1);
        assert_eq!(clamp_rating(-3.0), 1);
        assert_eq!(clamp_rating(3.6), 4);
        assert_eq!(clamp_rating(f64::NAN), 5);
    }

    #[test]
    fn test_mentions_location() {
        let testimonial = Testimonial {
            id: "t1".into(),
            customer_name: "Priya".into(),
            customer_title: None,
            rating: 5,
            comment: String::new(),
            location: Some("Walajapet Highway".into()),
            date: "2024-12-15".into(),
            is_active: true,
            is_featured: true,
            avatar: None,
            display_order: 1,
            created_at: String::new(),
            updated_at: String::new(),
        };

        assert!(testimonial.mentions_location("walajapet"));
        assert!(testimonial.mentions_location("HIGHWAY"));
        assert!(!testimonial.mentions_location("vellore"));
    }
}
