use std::fs::File;
use std::path::PathBuf;

use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use skimmer::core::config;
use skimmer::{OpenMode, StartupMode, tui};

#[derive(Parser)]
#[command(name = "skimmer", about = "Single-pane feed viewer")]
struct Args {
    /// Startup handshake variant
    #[arg(long, value_enum)]
    startup_mode: Option<StartupMode>,

    /// How to open the current item's URL
    #[arg(long = "open", value_enum)]
    open_strategy: Option<OpenMode>,

    /// JSON file of pre-fetched feed items
    #[arg(long)]
    items: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to skimmer.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("skimmer.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{e}");
            return Err(std::io::Error::other(e.to_string()));
        }
    };
    let resolved = config::resolve(
        &file_config,
        args.startup_mode,
        args.open_strategy,
        args.items,
    );

    log::info!(
        "Skimmer starting up: startup={:?}, open={:?}",
        resolved.startup_mode,
        resolved.open_strategy
    );

    tui::run(resolved)
}
