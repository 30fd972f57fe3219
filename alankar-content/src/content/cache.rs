//! Per-family content cache
//!
//! One slot per content family. A slot holds the last resolved value, when it
//! was stored and where it came from. Live values stay fresh for the cache
//! duration; anything else (last-known-good or fallback data) only for the
//! shorter retry window, so a recovered source takes over quickly.

use serde::Serialize;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;

use shared::models::{AmbianceData, ContactInfo, Location, MenuData, Testimonial};

use super::ContentFamily;

/// Freshness window for live data
pub const CACHE_DURATION: Duration = Duration::from_secs(5 * 60);

/// Freshness window for last-known-good and fallback data
pub const FALLBACK_RETRY: Duration = Duration::from_secs(30);

/// Where a cached value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Provenance {
    /// Fetched from the content source
    Live,
    /// A once-live value re-served after a failed or empty refresh
    LastKnownGood,
    /// Static fallback dataset
    Fallback,
}

impl Provenance {
    pub fn is_live_origin(&self) -> bool {
        matches!(self, Self::Live | Self::LastKnownGood)
    }
}

/// Freshness windows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CachePolicy {
    pub ttl: Duration,
    pub fallback_ttl: Duration,
}

impl CachePolicy {
    pub fn ttl_for(&self, provenance: Provenance) -> Duration {
        match provenance {
            Provenance::Live => self.ttl,
            Provenance::LastKnownGood | Provenance::Fallback => self.fallback_ttl,
        }
    }
}

impl Default for CachePolicy {
    fn default() -> Self {
        Self {
            ttl: CACHE_DURATION,
            fallback_ttl: FALLBACK_RETRY,
        }
    }
}

#[derive(Debug, Clone)]
struct CacheEntry<T> {
    data: Arc<T>,
    provenance: Provenance,
    stored_at: Instant,
}

/// Cache slot for one content family
#[derive(Debug)]
pub struct CacheSlot<T> {
    family: ContentFamily,
    entry: RwLock<Option<CacheEntry<T>>>,
}

impl<T> CacheSlot<T> {
    pub fn new(family: ContentFamily) -> Self {
        Self {
            family,
            entry: RwLock::new(None),
        }
    }

    /// Cached value if it is still inside its freshness window
    pub async fn fresh(&self, policy: &CachePolicy) -> Option<Arc<T>> {
        let entry = self.entry.read().await;
        entry
            .as_ref()
            .filter(|e| e.stored_at.elapsed() < policy.ttl_for(e.provenance))
            .map(|e| e.data.clone())
    }

    /// Cached value of live origin, regardless of age
    pub async fn last_known_good(&self) -> Option<Arc<T>> {
        let entry = self.entry.read().await;
        entry
            .as_ref()
            .filter(|e| e.provenance.is_live_origin())
            .map(|e| e.data.clone())
    }

    /// Overwrite the slot, stamping it with the current time
    pub async fn store(&self, data: Arc<T>, provenance: Provenance) {
        let mut entry = self.entry.write().await;
        *entry = Some(CacheEntry {
            data,
            provenance,
            stored_at: Instant::now(),
        });
    }

    /// Empty the slot; the next read is a miss
    pub async fn clear(&self) {
        let mut entry = self.entry.write().await;
        *entry = None;
    }

    pub async fn provenance(&self) -> Option<Provenance> {
        let entry = self.entry.read().await;
        entry.as_ref().map(|e| e.provenance)
    }

    /// Cache, then fetch, then last-known-good, then fallback
    ///
    /// `fetch` yields `None` when the source is unconfigured, failed, or had
    /// no rows. Whatever is returned is also written to the slot.
    pub async fn resolve<F, Fut>(
        &self,
        policy: &CachePolicy,
        fetch: F,
        fallback: impl FnOnce() -> T,
    ) -> Arc<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Option<T>>,
    {
        if let Some(data) = self.fresh(policy).await {
            tracing::debug!(family = %self.family, "Cache hit");
            return data;
        }
        tracing::debug!(family = %self.family, "Cache miss, fetching");

        if let Some(data) = fetch().await {
            let data = Arc::new(data);
            self.store(data.clone(), Provenance::Live).await;
            return data;
        }

        if let Some(data) = self.last_known_good().await {
            tracing::warn!(family = %self.family, "Refresh yielded nothing, serving last known good data");
            self.store(data.clone(), Provenance::LastKnownGood).await;
            return data;
        }

        tracing::warn!(family = %self.family, "Refresh yielded nothing, serving fallback data");
        let data = Arc::new(fallback());
        self.store(data.clone(), Provenance::Fallback).await;
        data
    }
}

/// All content cache slots
#[derive(Debug)]
pub struct ContentCache {
    policy: CachePolicy,
    pub menu: CacheSlot<MenuData>,
    pub ambiance: CacheSlot<AmbianceData>,
    pub locations: CacheSlot<Vec<Location>>,
    pub testimonials: CacheSlot<Vec<Testimonial>>,
    pub contact_info: CacheSlot<Vec<ContactInfo>>,
}

impl ContentCache {
    pub fn new(policy: CachePolicy) -> Self {
        Self {
            policy,
            menu: CacheSlot::new(ContentFamily::Menu),
            ambiance: CacheSlot::new(ContentFamily::Ambiance),
            locations: CacheSlot::new(ContentFamily::Locations),
            testimonials: CacheSlot::new(ContentFamily::Testimonials),
            contact_info: CacheSlot::new(ContentFamily::ContactInfo),
        }
    }

    pub fn policy(&self) -> &CachePolicy {
        &self.policy
    }

    /// Empty one family's slot
    pub async fn clear(&self, family: ContentFamily) {
        match family {
            ContentFamily::Menu => self.menu.clear().await,
            ContentFamily::Ambiance => self.ambiance.clear().await,
            ContentFamily::Locations => self.locations.clear().await,
            ContentFamily::Testimonials => self.testimonials.clear().await,
            ContentFamily::ContactInfo => self.contact_info.clear().await,
        }
    }

    /// Empty every slot
    pub async fn clear_all(&self) {
        for family in ContentFamily::ALL {
            self.clear(family).await;
        }
    }

    pub async fn provenance(&self, family: ContentFamily) -> Option<Provenance> {
        match family {
            ContentFamily::Menu => self.menu.provenance().await,
            ContentFamily::Ambiance => self.ambiance.provenance().await,
            ContentFamily::Locations => self.locations.provenance().await,
            ContentFamily::Testimonials => self.testimonials.provenance().await,
            ContentFamily::ContactInfo => self.contact_info.provenance().await,
        }
    }
}

impl Default for ContentCache {
    fn default() -> Self {
        Self::new(CachePolicy::default())
    }
}
