mod api;
mod app;
mod config;
mod error;
mod utils;

use anyhow::{anyhow, Context, Result};
use api::{FilesApi, HttpFilesApi};
use app::UploadDashboard;
use clap::Parser;
use config::{ApiConfig, Args};
use std::sync::Arc;
use tokio::runtime::Runtime;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("file_upload_monitor=info")),
        )
        .init();

    let config = ApiConfig::from(Args::parse());
    info!("Using API at {}", config.base_url);

    let runtime = Runtime::new().context("Failed to start async runtime")?;
    let api: Arc<dyn FilesApi> =
        Arc::new(HttpFilesApi::new(config.clone()).context("Failed to build HTTP client")?);
    let handle = runtime.handle().clone();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([760.0, 640.0])
            .with_min_inner_size([480.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "File Upload Monitor",
        options,
        Box::new(move |_cc| Box::new(UploadDashboard::new(config, api, handle))),
    )
    .map_err(|e| anyhow!("Failed to open window: {}", e))
}
