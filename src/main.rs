use astralixi::KeyProfile;
use astralixi::core::config;
use astralixi::{headless, tui};
use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "astralixi", about = "Scene-based menu UI for small screens")]
struct Args {
    /// Key preset deciding which key returns to the menu
    #[arg(short, long, value_enum)]
    profile: Option<KeyProfile>,

    /// Read key names from stdin and print render plans instead of drawing
    #[arg(long)]
    headless: bool,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Initialize file logger - writes to astralixi.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("astralixi.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("{}, falling back to defaults", e);
        config::AstralixiConfig::default()
    });
    let resolved = config::resolve(&file_config, args.profile);

    log::info!(
        "Astralixi starting up with key profile: {:?} (headless: {})",
        resolved.key_profile,
        args.headless
    );

    if args.headless {
        headless::run(resolved)
    } else {
        tui::run(resolved)
    }
}
