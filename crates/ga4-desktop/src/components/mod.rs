//! UI Components
//!
//! Sections of the config page and the host toolbar.

mod api_access;
mod config_page;
mod content_types_section;
mod property_section;
mod section;
mod toolbar;

pub use config_page::ConfigPage;
pub use toolbar::Toolbar;
