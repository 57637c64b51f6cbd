//! ga4-core - Core library for the Google Analytics 4 config page
//!
//! This crate contains the parameter models, service account key validation,
//! the config page state reducer and the save computation shared by every
//! host of the config page.

pub mod api;
pub mod config;
pub mod config_page;
pub mod error;
pub mod host;
pub mod models;

pub use error::{Error, Result};
pub use models::{Parameters, ServiceAccountKey, ServiceAccountKeyId};
