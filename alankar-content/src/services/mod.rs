//! Service layer
//!
//! - [`ContentService`] - cached content accessors and derived views

pub mod content_service;

pub use content_service::ContentService;
