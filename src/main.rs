//! geo-form desktop launcher
//!
//! ```bash
//! geo-form
//! geo-form --geocoder-url http://localhost:8080 --zoom 15
//! RUST_LOG=geo_form_ui=debug geo-form
//! ```

mod cli;

use std::sync::Arc;

use anyhow::{anyhow, Context};
use clap::Parser;
use geo_form_ui::GeoFormApp;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Cli;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "geo_form=info,geo_form_ui=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Cli::parse().into_config();
    tracing::info!(
        geocoder = %config.geocoder_url,
        center = %config.map_center,
        zoom = config.map_zoom,
        "Starting geo-form"
    );

    let runtime = Arc::new(
        tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .context("Failed to create tokio runtime")?,
    );

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title("geo-form")
            .with_inner_size([960.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "geo-form",
        options,
        Box::new(move |cc| Ok(Box::new(GeoFormApp::new(cc, config, runtime)))),
    )
    .map_err(|e| anyhow!("eframe error: {}", e))
}
