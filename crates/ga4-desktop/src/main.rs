//! GA4 config desktop host
//!
//! Renders the Google Analytics 4 config page and persists accepted
//! configurations to a local parameter file.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod components;
mod services;
mod state;

use dioxus::desktop::{Config, WindowBuilder};

fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("ga4=debug".parse().expect("static log directive")),
        )
        .init();

    tracing::info!("Starting GA4 config...");

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Google Analytics 4 - Configuration")
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::new()
        .with_cfg(config)
        .launch(app::App);
}
