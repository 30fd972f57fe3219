//! Data models
//!
//! Typed shapes of the five content families. Shared between the content
//! service and anything rendering its output (serialized as camelCase JSON).

pub mod ambiance;
pub mod contact;
pub mod location;
pub mod menu;
pub mod testimonial;

// Re-exports
pub use ambiance::*;
pub use contact::*;
pub use location::*;
pub use menu::*;
pub use testimonial::*;
