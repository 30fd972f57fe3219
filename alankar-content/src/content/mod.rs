//! Content layer: cache, decoding, fetching and fallback data

pub mod cache;
pub mod decode;
pub mod fallback;
pub mod fetch;

use std::fmt;
use std::str::FromStr;

pub use cache::{CachePolicy, CacheSlot, ContentCache, Provenance};
pub use fetch::Fetcher;

/// One independently cached content family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentFamily {
    Menu,
    Ambiance,
    Locations,
    Testimonials,
    ContactInfo,
}

impl ContentFamily {
    pub const ALL: [ContentFamily; 5] = [
        Self::Menu,
        Self::Ambiance,
        Self::Locations,
        Self::Testimonials,
        Self::ContactInfo,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Menu => "menu",
            Self::Ambiance => "ambiance",
            Self::Locations => "locations",
            Self::Testimonials => "testimonials",
            Self::ContactInfo => "contactInfo",
        }
    }
}

impl fmt::Display for ContentFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognised family name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown content family '{0}' (expected one of: menu, ambiance, locations, testimonials, contactInfo)")]
pub struct UnknownFamily(pub String);

impl FromStr for ContentFamily {
    type Err = UnknownFamily;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "menu" => Ok(Self::Menu),
            "ambiance" => Ok(Self::Ambiance),
            "locations" => Ok(Self::Locations),
            "testimonials" => Ok(Self::Testimonials),
            "contactinfo" | "contact" => Ok(Self::ContactInfo),
            _ => Err(UnknownFamily(s.to_string())),
        }
    }
}
