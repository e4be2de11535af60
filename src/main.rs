//! Messenger mockup: a single-screen chat client view built with egui
//!
//! All chats and messages are hardcoded; nothing is sent or stored.

#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod chat;
mod config;
mod ui;

use anyhow::Result;
use config::AppConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("messenger_mockup=debug,warn")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting messenger-mockup v{}", env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load_or_default();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Telegram")
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([800.0, 600.0])
            .with_icon(load_icon()),
        ..Default::default()
    };

    eframe::run_native(
        "Telegram",
        native_options,
        Box::new(move |cc| Ok(Box::new(app::MessengerApp::new(cc, &config)))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))
}

/// Accent-blue circle used as the window icon
fn load_icon() -> egui::IconData {
    let size = 64;
    let mut rgba = vec![0u8; size * size * 4];

    let center = size as f32 / 2.0;
    let radius = center * 0.8;

    for y in 0..size {
        for x in 0..size {
            let dx = x as f32 - center;
            let dy = y as f32 - center;

            if (dx * dx + dy * dy).sqrt() <= radius {
                let idx = (y * size + x) * 4;
                rgba[idx..idx + 4].copy_from_slice(&[0x25, 0x63, 0xEB, 0xFF]);
            }
        }
    }

    egui::IconData {
        rgba,
        width: size as u32,
        height: size as u32,
    }
}
