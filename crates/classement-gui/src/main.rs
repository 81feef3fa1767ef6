use anyhow::{Context, anyhow};
use clap::Parser;
use classement_core::Session;
use eframe::{
    NativeOptions,
    egui::{ViewportBuilder, Visuals},
};

mod app;
mod cli;
mod util;

const APP_TITLE: &str = "Classement";

fn main() -> anyhow::Result<()> {
    let args = cli::Args::parse();
    util::init_logger()?;

    let config = args.config().context("invalid arguments")?;
    // the feed is read once, before any control can act on it
    let session = Session::load(&config);

    let native_options = NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title(format!("{APP_TITLE} - {}", config.source))
            .with_min_inner_size([640.0, 400.0])
            .with_inner_size([1100.0, 720.0]),
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        native_options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(Visuals::light());

            Ok(Box::new(app::ClassementApp::new(session)))
        }),
    )
    .map_err(|e| anyhow!("cannot open window: {e}"))
}
