//! Clima Desktop Application
//!
//! A desktop app showing a 5-day weather forecast for your location.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod bootstrap_config;
mod components;
mod state;
mod theme;
mod views;

use dioxus::desktop::{Config, WindowBuilder};

fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("clima=debug".parse().unwrap()),
        )
        .init();

    tracing::info!("Starting Clima...");

    let config = Config::new().with_window(WindowBuilder::new().with_title("Clima"));

    dioxus::LaunchBuilder::new()
        .with_cfg(config)
        .launch(app::App);
}
