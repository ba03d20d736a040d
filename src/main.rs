mod app;
mod auth;
mod catalog;
mod filter;
mod galaxy;
mod logging;
mod selection;

use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

use crate::catalog::CatalogSource;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Project catalog JSON; the built-in catalog is used when omitted.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Seed for reproducible layouts.
    #[arg(long)]
    seed: Option<u64>,

    /// Wallet address pre-filled on the login screen.
    #[arg(long)]
    wallet: Option<String>,

    #[arg(long, default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,
}

fn main() -> eframe::Result<()> {
    let args = Args::parse();
    logging::init(args.log_level);

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1440.0, 920.0])
            .with_title("Monad Odyssey"),
        ..Default::default()
    };

    let launch = app::LaunchOptions {
        source: args
            .catalog
            .map(CatalogSource::File)
            .unwrap_or(CatalogSource::Builtin),
        seed: args.seed,
        wallet_hint: args.wallet.unwrap_or_default(),
    };

    eframe::run_native(
        "Monad Odyssey",
        options,
        Box::new(move |cc| Ok(Box::new(app::GalaxyApp::new(cc, launch)))),
    )
}
