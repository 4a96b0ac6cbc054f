//! Opviz GUI application entry point.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod context;
mod state;
mod ui;
mod util;
mod viewer;

use anyhow::Context as _;
use app::OpvizApp;
use context::AppContext;
use eframe::egui;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Both input artifacts are required up front; a missing file aborts
    // startup instead of opening an empty window.
    let cwd = std::env::current_dir().context("cannot resolve working directory")?;
    let data = AppContext::load(&cwd)?;

    let opts = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1200.0, 800.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Opviz",
        opts,
        Box::new(move |cc| {
            ui::theme::configure_style(&cc.egui_ctx);
            Ok(Box::new(OpvizApp::new(data)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("eframe exited with error: {e}"))
}
