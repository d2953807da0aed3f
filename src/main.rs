mod api;
mod app;
mod config;
mod error;
mod gallery;
mod screening;
mod selection;
mod upload;
mod utils;

use anyhow::Result;
use api::HttpBackend;
use app::ResumeUploaderApp;
use config::ClientConfig;
use eframe::CreationContext;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<()> {
    let config = ClientConfig::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.log_filter))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Uploader v{}", env!("CARGO_PKG_VERSION"));

    let runtime = tokio::runtime::Runtime::new()?;
    let backend = Arc::new(HttpBackend::new(config.backend_url.clone()));
    let backend_label = config.backend_url.to_string();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 720.0])
            .with_min_inner_size([700.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Resume Uploader",
        options,
        Box::new(move |cc: &CreationContext| {
            Box::new(ResumeUploaderApp::new(cc, runtime, backend, backend_label))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Failed to open window: {e}"))
}
