//! Content Service - cached, always-resolving access to site content
//!
//! One accessor per content family. Each accessor serves the cached value while
//! it is fresh, otherwise refetches; a refresh that yields nothing falls back
//! to last-known-good data, then to the static datasets. No accessor fails.

use std::sync::Arc;

use alankar_client::{ClientConfig, ClientResult, ContentSource};
use shared::models::{
    AmbianceData, AmbianceImage, ContactInfo, ContactType, Location, MenuData, MenuItem,
    Testimonial,
};

use crate::content::{fallback, ContentCache, ContentFamily, Fetcher, Provenance};
use crate::core::Config;

// =============================================================================
// ContentService
// =============================================================================

/// Cached content accessors
///
/// Cloning shares the cache.
#[derive(Clone)]
pub struct ContentService {
    fetcher: Fetcher,
    cache: Arc<ContentCache>,
}

impl std::fmt::Debug for ContentService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentService")
            .field("fetcher", &self.fetcher)
            .field("policy", self.cache.policy())
            .finish()
    }
}

impl ContentService {
    /// Service over an explicit source; `None` serves fallback data only
    pub fn new(source: Option<Arc<dyn ContentSource>>, config: &Config) -> Self {
        Self {
            fetcher: Fetcher::new(source),
            cache: Arc::new(ContentCache::new(config.cache_policy())),
        }
    }

    /// Service over the HTTP source described by `client`
    ///
    /// Missing credentials are not an error: the service then runs on
    /// fallback data.
    pub fn from_config(client: &ClientConfig, config: &Config) -> ClientResult<Self> {
        let source = client
            .build_http_client()?
            .map(|http| Arc::new(http) as Arc<dyn ContentSource>);
        if source.is_none() {
            tracing::warn!("Content source credentials not configured, serving fallback content");
        }
        Ok(Self::new(source, config))
    }

    pub fn is_configured(&self) -> bool {
        self.fetcher.is_configured()
    }

    // =========================================================================
    // Family accessors
    // =========================================================================

    /// Categories with their items attached, plus the raw item list
    ///
    /// A menu with no categories counts as empty regardless of items.
    pub async fn menu_data(&self) -> Arc<MenuData> {
        let fetcher = &self.fetcher;
        self.cache
            .menu
            .resolve(
                self.cache.policy(),
                move || async move {
                    let (categories, items) = tokio::join!(fetcher.categories(), fetcher.menu_items());
                    if categories.is_empty() {
                        return None;
                    }
                    Some(MenuData::group(categories, items))
                },
                || MenuData::from_grouped(fallback::menu()),
            )
            .await
    }

    /// Ambiance images and their grouping by type
    pub async fn ambiance_data(&self) -> Arc<AmbianceData> {
        let fetcher = &self.fetcher;
        self.cache
            .ambiance
            .resolve(
                self.cache.policy(),
                move || async move { non_empty(fetcher.ambiance_images().await).map(AmbianceData::new) },
                || AmbianceData::new(fallback::ambiance()),
            )
            .await
    }

    pub async fn locations_data(&self) -> Arc<Vec<Location>> {
        let fetcher = &self.fetcher;
        self.cache
            .locations
            .resolve(
                self.cache.policy(),
                move || async move { non_empty(fetcher.locations().await) },
                fallback::locations,
            )
            .await
    }

    pub async fn testimonials_data(&self) -> Arc<Vec<Testimonial>> {
        let fetcher = &self.fetcher;
        self.cache
            .testimonials
            .resolve(
                self.cache.policy(),
                move || async move { non_empty(fetcher.testimonials().await) },
                fallback::testimonials,
            )
            .await
    }

    pub async fn contact_info_data(&self) -> Arc<Vec<ContactInfo>> {
        let fetcher = &self.fetcher;
        self.cache
            .contact_info
            .resolve(
                self.cache.policy(),
                move || async move { non_empty(fetcher.contact_info().await) },
                fallback::contact_info,
            )
            .await
    }

    // =========================================================================
    // Derived views
    // =========================================================================

    /// Every fetched item, including ones whose category matched nothing
    pub async fn menu_items(&self) -> Vec<MenuItem> {
        self.menu_data().await.items.clone()
    }

    /// First item with this id across all categories
    pub async fn menu_item(&self, id: &str) -> Option<MenuItem> {
        self.menu_data()
            .await
            .grouped_items()
            .find(|item| item.id == id)
            .cloned()
    }

    /// Items grouped under the category with this id; empty when no category
    /// matches, so orphaned references never resolve
    pub async fn menu_items_by_category(&self, category_id: &str) -> Vec<MenuItem> {
        self.menu_data()
            .await
            .categories
            .iter()
            .find(|category| category.id == category_id)
            .map(|category| category.items.clone())
            .unwrap_or_default()
    }

    pub async fn signature_dishes(&self) -> Vec<MenuItem> {
        self.menu_data()
            .await
            .grouped_items()
            .filter(|item| item.is_signature)
            .cloned()
            .collect()
    }

    pub async fn latest_dishes(&self) -> Vec<MenuItem> {
        self.menu_data()
            .await
            .grouped_items()
            .filter(|item| item.is_latest)
            .cloned()
            .collect()
    }

    /// All ambiance images in group order
    pub async fn ambiance_images(&self) -> Vec<AmbianceImage> {
        self.ambiance_data().await.grouped_images().cloned().collect()
    }

    /// Images with this type label; empty for an unknown label
    pub async fn ambiance_by_type(&self, kind: &str) -> Vec<AmbianceImage> {
        self.ambiance_data()
            .await
            .of_type(kind)
            .map(|group| group.images.clone())
            .unwrap_or_default()
    }

    pub async fn featured_testimonials(&self) -> Vec<Testimonial> {
        self.testimonials_data()
            .await
            .iter()
            .filter(|t| t.is_featured)
            .cloned()
            .collect()
    }

    /// Case-insensitive substring match on the testimonial's location
    pub async fn testimonials_by_location(&self, location: &str) -> Vec<Testimonial> {
        self.testimonials_data()
            .await
            .iter()
            .filter(|t| t.mentions_location(location))
            .cloned()
            .collect()
    }

    pub async fn contact_info_by_type(&self, kind: ContactType) -> Vec<ContactInfo> {
        self.contact_info_data()
            .await
            .iter()
            .filter(|c| c.kind == kind)
            .cloned()
            .collect()
    }

    // =========================================================================
    // Refresh
    // =========================================================================

    pub async fn refresh_menu(&self) {
        self.refresh(ContentFamily::Menu).await;
    }

    pub async fn refresh_ambiance(&self) {
        self.refresh(ContentFamily::Ambiance).await;
    }

    pub async fn refresh_locations(&self) {
        self.refresh(ContentFamily::Locations).await;
    }

    pub async fn refresh_testimonials(&self) {
        self.refresh(ContentFamily::Testimonials).await;
    }

    pub async fn refresh_contact_info(&self) {
        self.refresh(ContentFamily::ContactInfo).await;
    }

    /// Drop one family's cached value; the next read refetches
    pub async fn refresh(&self, family: ContentFamily) {
        tracing::info!(family = %family, "Cache cleared");
        self.cache.clear(family).await;
    }

    /// Drop every cached value
    pub async fn refresh_all(&self) {
        tracing::info!("All content caches cleared");
        self.cache.clear_all().await;
    }

    /// Origin of the value currently cached for `family`, if any
    pub async fn provenance(&self, family: ContentFamily) -> Option<Provenance> {
        self.cache.provenance(family).await
    }
}

fn non_empty<T>(values: Vec<T>) -> Option<Vec<T>> {
    if values.is_empty() { None } else { Some(values) }
}
