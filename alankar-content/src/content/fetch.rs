//! Per-family fetchers
//!
//! Each fetcher queries one table for active rows and decodes them. Errors
//! stop at this boundary: they are logged and turn into an empty result, and
//! the caller decides what to serve instead.

use std::sync::Arc;

use alankar_client::ContentSource;
use shared::models::{AmbianceImage, ContactInfo, Location, MenuCategory, MenuItem, Testimonial};
use shared::{RawRecord, SelectQuery};

use super::decode::{
    decode_ambiance_image, decode_category, decode_contact_info, decode_location, decode_menu_item,
    decode_testimonial, Decoded,
};

/// Table names in the content base
pub mod tables {
    pub const MENU_CATEGORIES: &str = "Menu_Categories";
    pub const MENU_ITEMS: &str = "Menu_Items";
    pub const AMBIANCE: &str = "Restaurant_Ambiance";
    pub const LOCATIONS: &str = "Locations";
    pub const TESTIMONIALS: &str = "Testimonials";
    pub const CONTACT_INFO: &str = "ContactInfo";
}

const ACTIVE: &str = "Is_Active";
const DISPLAY_ORDER: &str = "Display_Order";
const GRID_VIEW: &str = "Grid view";

/// Active rows of a table in display order
fn active_by_display_order(table: &str) -> SelectQuery {
    SelectQuery::table(table)
        .where_true(ACTIVE)
        .order_by_asc(DISPLAY_ORDER)
}

pub fn categories_query() -> SelectQuery {
    active_by_display_order(tables::MENU_CATEGORIES)
}

/// Items carry no display order of their own; they come back by name
pub fn menu_items_query() -> SelectQuery {
    SelectQuery::table(tables::MENU_ITEMS)
        .where_true("isAvailable")
        .order_by_asc("Name")
}

pub fn ambiance_query() -> SelectQuery {
    active_by_display_order(tables::AMBIANCE)
}

pub fn locations_query() -> SelectQuery {
    active_by_display_order(tables::LOCATIONS).view(GRID_VIEW)
}

pub fn testimonials_query() -> SelectQuery {
    active_by_display_order(tables::TESTIMONIALS).view(GRID_VIEW)
}

pub fn contact_info_query() -> SelectQuery {
    active_by_display_order(tables::CONTACT_INFO).view(GRID_VIEW)
}

/// Fetches and decodes content from the source
///
/// With no source configured every fetch is empty and no request is made.
#[derive(Clone)]
pub struct Fetcher {
    source: Option<Arc<dyn ContentSource>>,
}

impl std::fmt::Debug for Fetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fetcher")
            .field("configured", &self.is_configured())
            .finish()
    }
}

impl Fetcher {
    pub fn new(source: Option<Arc<dyn ContentSource>>) -> Self {
        Self { source }
    }

    pub fn is_configured(&self) -> bool {
        self.source.is_some()
    }

    /// Run a query and decode every row; errors become an empty list
    async fn fetch<T>(&self, query: SelectQuery, decode: fn(&RawRecord) -> Decoded<T>) -> Vec<T> {
        let Some(source) = &self.source else {
            tracing::debug!(table = %query.table, "Content source not configured, skipping fetch");
            return Vec::new();
        };

        match source.select(&query).await {
            Ok(records) => {
                let values: Vec<T> = records
                    .iter()
                    .map(|record| {
                        let decoded = decode(record);
                        decoded.report(&query.table, &record.id);
                        decoded.value
                    })
                    .collect();
                tracing::info!(table = %query.table, count = values.len(), "Fetched records");
                values
            }
            Err(e) => {
                tracing::error!(table = %query.table, error = %e, "Error fetching records");
                Vec::new()
            }
        }
    }

    pub async fn categories(&self) -> Vec<MenuCategory> {
        let mut categories = self.fetch(categories_query(), decode_category).await;
        categories.sort_by_key(|c| c.display_order);
        categories
    }

    /// Available items by name
    pub async fn menu_items(&self) -> Vec<MenuItem> {
        self.fetch(menu_items_query(), decode_menu_item).await
    }

    pub async fn ambiance_images(&self) -> Vec<AmbianceImage> {
        let mut images = self.fetch(ambiance_query(), decode_ambiance_image).await;
        images.sort_by_key(|i| i.display_order);
        images
    }

    pub async fn locations(&self) -> Vec<Location> {
        let mut locations = self.fetch(locations_query(), decode_location).await;
        locations.sort_by_key(|l| l.display_order);
        locations
    }

    pub async fn testimonials(&self) -> Vec<Testimonial> {
        let mut testimonials = self.fetch(testimonials_query(), decode_testimonial).await;
        testimonials.sort_by_key(|t| t.display_order);
        testimonials
    }

    pub async fn contact_info(&self) -> Vec<ContactInfo> {
        let mut contacts = self.fetch(contact_info_query(), decode_contact_info).await;
        contacts.sort_by_key(|c| c.display_order);
        contacts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alankar_client::MemorySource;
    use serde_json::json;

    #[test]
    fn test_queries() {
        assert_eq!(
            categories_query().filter.unwrap().formula(),
            "{Is_Active} = TRUE()"
        );
        assert_eq!(
            menu_items_query().filter.unwrap().formula(),
            "{isAvailable} = TRUE()"
        );
        assert_eq!(menu_items_query().sort[0].field, "Name");
        assert_eq!(locations_query().view.as_deref(), Some(GRID_VIEW));
        assert!(ambiance_query().view.is_none());
    }

    #[tokio::test]
    async fn test_unconfigured_fetch_is_empty() {
        let fetcher = Fetcher::new(None);
        assert!(!fetcher.is_configured());
        assert!(fetcher.locations().await.is_empty());
        assert!(fetcher.categories().await.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_error_is_empty() {
        let source = Arc::new(MemorySource::new());
        source.fail_with("connection reset").await;

        let fetcher = Fetcher::new(Some(source.clone()));
        assert!(fetcher.testimonials().await.is_empty());
        assert_eq!(source.calls(tables::TESTIMONIALS).await, 1);
    }

    #[tokio::test]
    async fn test_malformed_record_still_emitted() {
        let source = Arc::new(MemorySource::new());
        source
            .set_table(
                tables::LOCATIONS,
                vec![
                    RawRecord::new("ok", json!({ "Name": "Ok", "Is_Active": true, "Display_Order": 1 })),
                    RawRecord::new(
                        "bad",
                        json!({ "Name": 5, "Is_Active": true, "Display_Order": 2, "Coordinates": "??" }),
                    ),
                ],
            )
            .await;

        let locations = Fetcher::new(Some(source)).locations().await;
        assert_eq!(locations.len(), 2);
        assert_eq!(locations[1].id, "bad");
        assert_eq!(locations[1].name, "");
        assert!(locations[1].coordinates.is_none());
    }

    #[tokio::test]
    async fn test_sorted_by_display_order_even_if_source_is_not() {
        struct Unsorted;

        #[async_trait::async_trait]
        impl ContentSource for Unsorted {
            async fn select(&self, _query: &SelectQuery) -> alankar_client::ClientResult<Vec<RawRecord>> {
                Ok(vec![
                    RawRecord::new("second", json!({ "Display_Order": 2 })),
                    RawRecord::new("first", json!({ "Display_Order": 1 })),
                    RawRecord::new("also-second", json!({ "Display_Order": 2 })),
                ])
            }
        }

        let contacts = Fetcher::new(Some(Arc::new(Unsorted))).contact_info().await;
        let ids: Vec<_> = contacts.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["first", "second", "also-second"]);
    }
}
