//! Alankar Content - cached site content for the restaurant website
//!
//! # Architecture
//!
//! Content (menu, ambiance, locations, testimonials, contact info) lives in an
//! external tabular service. This crate reads it through a
//! [`alankar_client::ContentSource`], caches it per family and always
//! resolves: when the source is unconfigured, failing or empty it serves the
//! last value it fetched, or the built-in fallback datasets.
//!
//! # Module layout
//!
//! ```text
//! alankar-content/src/
//! ├── content/       # cache, decoders, fetchers, fallback data
//! ├── services/      # ContentService accessors and derived views
//! ├── core/          # configuration
//! └── utils/         # logging
//! ```

pub mod content;
pub mod core;
pub mod services;
pub mod utils;

pub use crate::content::{CachePolicy, ContentCache, ContentFamily, Provenance};
pub use crate::core::Config;
pub use crate::services::ContentService;
pub use crate::utils::init_logger;

/// Load `.env`, read [`Config`] and install the logger
pub fn setup_environment() -> anyhow::Result<Config> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    init_logger(&config.log_level, config.log_json)?;

    Ok(config)
}
