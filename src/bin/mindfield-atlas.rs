//! Interactive constellation viewer (requires `--features egui`).
//!
//! Usage:
//!   cargo run --features egui --bin mindfield-atlas -- --api-base http://127.0.0.1:5050

use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use clap::Parser;
use eframe::egui;

use mindfield::config::AtlasConfig;
use mindfield::egui_app::AtlasApp;

#[derive(Parser, Debug)]
#[command(author, version, about = "Query the MindField bridge and explore the answer", long_about = None)]
struct Args {
    /// Configuration file (TOML). Missing file means defaults.
    #[arg(short, long, value_name = "FILE", default_value = "mindfield.toml")]
    config: Utf8PathBuf,

    /// API base URL; overrides the config file
    #[arg(long)]
    api_base: Option<String>,

    /// Hostname the viewer treats as its origin when no API base is given
    #[arg(long)]
    host: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let mut config = AtlasConfig::load_from(&args.config)
        .with_context(|| format!("Failed to load config {}", args.config))?;
    if args.api_base.is_some() {
        config.api_base = args.api_base;
    }
    if let Some(host) = args.host {
        config.host = host;
    }
    log::info!("query endpoint base: {:?}", config.api_base());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1280.0, 800.0]),
        ..Default::default()
    };
    let app = AtlasApp::new(&config);
    eframe::run_native(
        "MindField Atlas",
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))?;
    Ok(())
}
