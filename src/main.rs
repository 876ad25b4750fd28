use clap::Parser;
use log::{info, warn};
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

use toot::core::config::{self, TootConfig};
use toot::core::error_record::ErrorRecord;
use toot::core::state::App;
use toot::core::status::load_status;

#[derive(Parser)]
#[command(name = "toot-tui", about = "Terminal overlays for the toot client", version)]
struct Args {
    /// JSON file with a status as received from the server, for the inspector
    #[arg(short, long)]
    status: Option<PathBuf>,

    /// Log level: off, error, warn, info, debug, trace
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    let (file_config, config_error) = match config::load_config() {
        Ok(c) => (c, None),
        Err(e) => (TootConfig::default(), Some(e)),
    };
    let config = config::resolve(&file_config, args.log_level.as_deref());

    // Initialize file logger; the terminal belongs to the UI
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(&config.log_file) {
        let _ = WriteLogger::init(config.log_level, log_config, log_file);
    }

    info!("toot-tui {} starting", toot::VERSION);

    let mut app = App::new();
    if let Some(e) = config_error {
        warn!("Ignoring config file: {}", e);
        app.record_error(ErrorRecord::capture(&e));
    }
    if let Some(path) = args.status {
        match load_status(&path) {
            Ok(status) => app.status = Some(status),
            Err(e) => {
                warn!("Could not load status from {}: {}", path.display(), e);
                app.record_error(ErrorRecord::capture(&e));
            }
        }
    }

    toot::tui::run(&config, app)
}
