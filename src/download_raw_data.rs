/*
cargo run --release --bin download_raw_data

Fetches the UCI "Online Retail" workbook into raw/ next to the binary,
unless it is already there. Keeps the repository small while still letting
the full pipeline be reproduced locally.
*/

use std::env;
use std::fs::{self, File};
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use log::info;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use time::macros::format_description;

use retail_data::fetch::HttpSource;
use retail_data::fetcher::{ensure_downloaded, FetchOutcome};

// CLI parameters
#[derive(Parser, Debug)]
#[command(version, about = "Download the Online Retail dataset into raw/")]
struct Cli {
    #[arg(long, default_value = "logs")]
    log_dir: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // logger setup
    fs::create_dir_all(&cli.log_dir)
        .with_context(|| format!("failed to create {}", cli.log_dir.display()))?;
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let log_path = cli.log_dir.join(format!("download_raw_data_{timestamp}.log"));
    WriteLogger::init(
        LevelFilter::Info,
        ConfigBuilder::new()
            .set_time_format_custom(format_description!(
                "[year]-[month]-[day] [hour]:[minute]:[second]"
            ))
            .build(),
        File::create(&log_path)
            .with_context(|| format!("failed to create log file {}", log_path.display()))?,
    )?;
    info!("Program started");

    let source = HttpSource::new();
    match ensure_downloaded(&source, &program_dir()?)? {
        FetchOutcome::AlreadyPresent { size } => info!("Dataset already present ({size} bytes)"),
        FetchOutcome::Downloaded { size } => info!("Dataset downloaded ({size} bytes)"),
    }

    Ok(())
}

// The destination is anchored to the executable's own directory so the
// dataset lands in the same place no matter where the tool is run from.
fn program_dir() -> Result<PathBuf> {
    let exe = env::current_exe().context("cannot determine executable path")?;
    let dir = exe
        .parent()
        .context("executable has no parent directory")?;
    Ok(dir.to_path_buf())
}
