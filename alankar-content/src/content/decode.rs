//! Record decoding
//!
//! Turns raw source records into typed models. Decoding never fails as a
//! whole: each unusable field falls back to its default and is reported as a
//! [`FieldError`] alongside the value, so the caller can log it against the
//! record id.

use serde::de::DeserializeOwned;

use shared::models::{
    clamp_rating, AmbianceImage, ContactInfo, ContactType, Coordinates, Location, MenuCategory,
    MenuItem, OperatingHours, Testimonial, DEFAULT_CATEGORY_ICON, MAX_RATING, MIN_RATING,
};
use shared::util::{now_rfc3339, today};
use shared::{FieldError, FieldResult, RawRecord};

/// Sentinel for references that could not be read
pub const UNKNOWN_REFERENCE: &str = "unknown";

const CREATED_AT: &[&str] = &["createdAt", "Created_At"];
const UPDATED_AT: &[&str] = &["updatedAt", "Updated_At"];

/// Decoded value plus the problems met along the way
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded<T> {
    pub value: T,
    pub issues: Vec<FieldError>,
}

impl<T> Decoded<T> {
    /// Log every issue against its record
    pub fn report(&self, table: &str, record_id: &str) {
        for issue in &self.issues {
            tracing::warn!(
                table = %table,
                record = %record_id,
                field = %issue.field(),
                "Malformed field: {}",
                issue
            );
        }
    }
}

/// Reads fields off one record, collecting issues
struct FieldReader<'a> {
    record: &'a RawRecord,
    issues: Vec<FieldError>,
}

impl<'a> FieldReader<'a> {
    fn new(record: &'a RawRecord) -> Self {
        Self {
            record,
            issues: Vec::new(),
        }
    }

    /// Missing fields are silent; wrong or malformed ones are reported
    fn keep<T>(&mut self, result: FieldResult<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                if !e.is_missing() {
                    self.issues.push(e);
                }
                None
            }
        }
    }

    fn text(&mut self, field: &str) -> String {
        let result = self.record.text(field);
        self.keep(result).unwrap_or_default()
    }

    /// Empty text counts as absent
    fn optional_text(&mut self, field: &str) -> Option<String> {
        let result = self.record.text(field);
        self.keep(result).filter(|s| !s.trim().is_empty())
    }

    fn flag_or(&mut self, field: &str, default: bool) -> bool {
        let result = self.record.flag(field);
        self.keep(result).unwrap_or(default)
    }

    fn display_order(&mut self, field: &str) -> i32 {
        let result = self.record.integer(field).and_then(|n| {
            i32::try_from(n).map_err(|_| FieldError::malformed(field, format!("{} out of range", n)))
        });
        self.keep(result).unwrap_or(0)
    }

    fn string_list(&mut self, field: &str) -> Vec<String> {
        let result = self.record.string_list(field);
        self.keep(result).unwrap_or_default()
    }

    /// Link reference; anything unreadable, absence included, becomes the
    /// sentinel and is reported
    fn link(&mut self, field: &str) -> String {
        match self.record.link(field) {
            Ok(id) => id,
            Err(e) => {
                self.issues.push(e);
                UNKNOWN_REFERENCE.to_string()
            }
        }
    }

    fn attachment(&mut self, field: &str) -> Option<String> {
        let result = self.record.attachment_url(field);
        self.keep(result).filter(|url| !url.is_empty())
    }

    fn structured<T: DeserializeOwned>(&mut self, field: &str) -> Option<T> {
        let result = self.record.structured(field);
        self.keep(result)
    }

    /// Source timestamp under any accepted spelling, else the record's own
    /// creation time, else now
    fn timestamp(&mut self, fields: &[&str]) -> String {
        let result = self.record.text_any(fields);
        self.keep(result)
            .or_else(|| self.record.created_time.clone())
            .unwrap_or_else(now_rfc3339)
    }

    /// Positive price, else 0 with an issue
    fn price(&mut self, field: &str) -> f64 {
        match self.record.number(field) {
            Ok(price) if price > 0.0 => price,
            Ok(price) => {
                self.issues
                    .push(FieldError::malformed(field, format!("price {} is not positive", price)));
                0.0
            }
            Err(e) => {
                self.issues.push(e);
                0.0
            }
        }
    }

    /// Rating in range; absent or non-numeric defaults to the top score,
    /// out-of-range values are clamped to the nearest bound
    fn rating(&mut self, field: &str) -> u8 {
        let result = self.record.number(field);
        let Some(raw) = self.keep(result) else {
            return MAX_RATING;
        };
        let rating = clamp_rating(raw);
        if raw != rating as f64 {
            self.issues.push(FieldError::malformed(
                field,
                format!("rating {} outside {}..={}, using {}", raw, MIN_RATING, MAX_RATING, rating),
            ));
        }
        rating
    }

    fn contact_type(&mut self, field: &str) -> ContactType {
        let result = self.record.text(field);
        match self.keep(result) {
            Some(raw) => raw.parse().unwrap_or_else(|reason: String| {
                self.issues.push(FieldError::malformed(field, reason));
                ContactType::default()
            }),
            None => ContactType::default(),
        }
    }

    fn coordinates(&mut self, field: &str) -> Option<Coordinates> {
        let coordinates: Coordinates = self.structured(field)?;
        let valid = (-90.0..=90.0).contains(&coordinates.lat) && (-180.0..=180.0).contains(&coordinates.lng);
        if !valid {
            self.issues.push(FieldError::malformed(
                field,
                format!("({}, {}) is not a position", coordinates.lat, coordinates.lng),
            ));
            return None;
        }
        Some(coordinates)
    }

    fn finish<T>(self, value: T) -> Decoded<T> {
        Decoded {
            value,
            issues: self.issues,
        }
    }
}

pub fn decode_category(record: &RawRecord) -> Decoded<MenuCategory> {
    let mut r = FieldReader::new(record);
    let category = MenuCategory {
        id: record.id.clone(),
        name: r.text("Name"),
        description: r.optional_text("Description"),
        icon: r
            .optional_text("Icon")
            .unwrap_or_else(|| DEFAULT_CATEGORY_ICON.to_string()),
        display_order: r.display_order("Display_Order"),
        is_active: r.flag_or("Is_Active", true),
        items: Vec::new(),
        created_at: r.timestamp(CREATED_AT),
        updated_at: r.timestamp(UPDATED_AT),
    };
    r.finish(category)
}

pub fn decode_menu_item(record: &RawRecord) -> Decoded<MenuItem> {
    let mut r = FieldReader::new(record);
    let item = MenuItem {
        id: record.id.clone(),
        name: r.text("Name"),
        description: r.text("Description"),
        price: r.price("Price"),
        category: r.link("Category"),
        is_available: r.flag_or("isAvailable", true),
        image: r.attachment("Image"),
        tags: r.string_list("Tags"),
        is_signature: r.flag_or("isSignature", false),
        is_latest: r.flag_or("isLatest", false),
        created_at: r.timestamp(CREATED_AT),
        updated_at: r.timestamp(UPDATED_AT),
    };
    r.finish(item)
}

pub fn decode_ambiance_image(record: &RawRecord) -> Decoded<AmbianceImage> {
    let mut r = FieldReader::new(record);
    let image = AmbianceImage {
        id: record.id.clone(),
        title: r.text("Title"),
        description: r.optional_text("Description"),
        image: r.attachment("Image").unwrap_or_default(),
        kind: r.link("Type"),
        display_order: r.display_order("Display_Order"),
        is_active: r.flag_or("Is_Active", true),
        created_at: r.timestamp(CREATED_AT),
        updated_at: r.timestamp(UPDATED_AT),
    };
    r.finish(image)
}

pub fn decode_location(record: &RawRecord) -> Decoded<Location> {
    let mut r = FieldReader::new(record);
    let location = Location {
        id: record.id.clone(),
        name: r.text("Name"),
        address: r.text("Address"),
        area: r.text("Area"),
        phone: r.text("Phone"),
        email: r.optional_text("Email"),
        services: r.string_list("Services"),
        description: r.optional_text("Description"),
        coordinates: r.coordinates("Coordinates"),
        image: r.attachment("Image"),
        display_order: r.display_order("Display_Order"),
        is_active: r.flag_or("Is_Active", true),
        operating_hours: r.structured::<OperatingHours>("Operating_Hours"),
        created_at: r.timestamp(CREATED_AT),
        updated_at: r.timestamp(UPDATED_AT),
    };
    r.finish(location)
}

pub fn decode_testimonial(record: &RawRecord) -> Decoded<Testimonial> {
    let mut r = FieldReader::new(record);
    let testimonial = Testimonial {
        id: record.id.clone(),
        customer_name: r.text("Customer_Name"),
        customer_title: r.optional_text("Customer_Title"),
        rating: r.rating("Rating"),
        comment: r.text("Comment"),
        location: r.optional_text("Location"),
        date: r.optional_text("Date").unwrap_or_else(today),
        is_active: r.flag_or("Is_Active", true),
        is_featured: r.flag_or("Is_Featured", false),
        avatar: r.attachment("avatar").or_else(|| r.attachment("Avatar")),
        display_order: r.display_order("Display_Order"),
        created_at: r.timestamp(CREATED_AT),
        updated_at: r.timestamp(UPDATED_AT),
    };
    r.finish(testimonial)
}

pub fn decode_contact_info(record: &RawRecord) -> Decoded<ContactInfo> {
    let mut r = FieldReader::new(record);
    let contact = ContactInfo {
        id: record.id.clone(),
        kind: r.contact_type("Type"),
        label: r.text("Label"),
        value: r.text("Value"),
        icon: r.optional_text("Icon"),
        display_order: r.display_order("Display_Order"),
        is_active: r.flag_or("Is_Active", true),
        created_at: r.timestamp(CREATED_AT),
        updated_at: r.timestamp(UPDATED_AT),
    };
    r.finish(contact)
}
