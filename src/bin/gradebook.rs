//! Gradebook Binary
//!
//! Loads the store, seeds demo data on first run, and starts the console
//! login loop.

use clap::Parser;
use gradebook::{menu, seed, Config, Store};
use tracing_subscriber::{fmt, EnvFilter};

/// Gradebook
#[derive(Parser, Debug)]
#[command(name = "gradebook")]
#[command(about = "Console-driven school grade management tool")]
#[command(version)]
struct Args {
    /// Directory holding students.bin and teachers.bin
    #[arg(short, long, default_value = "./gradebook_data")]
    data_dir: String,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,gradebook=info"));

    fmt().with_env_filter(filter).with_target(true).init();

    let args = Args::parse();

    tracing::info!("Gradebook v{}", gradebook::VERSION);
    tracing::info!("Data directory: {}", args.data_dir);

    let config = Config::builder().data_dir(&args.data_dir).build();

    // A corrupt data file is fatal: fail fast with a diagnostic rather than
    // silently dropping records
    let mut store = match Store::open(&config) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("Failed to open store: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = seed::seed_if_empty(&mut store) {
        tracing::error!("Failed to seed demo data: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = menu::run(&mut store, &config) {
        tracing::error!("Fatal error: {}", e);
        std::process::exit(1);
    }
}
