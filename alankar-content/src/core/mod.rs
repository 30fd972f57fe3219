//! Core module: configuration
//!
//! - [`Config`] - cache windows, logging and environment

pub mod config;

pub use config::Config;
