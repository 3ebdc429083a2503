use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, info};

use crate::fetch::DatasetSource;

pub const UCI_URL: &str =
    "https://archive.ics.uci.edu/ml/machine-learning-databases/00352/Online%20Retail.xlsx";

pub const RAW_DIR_NAME: &str = "raw";
pub const DATASET_FILE_NAME: &str = "online_retail.xlsx";

// What a run did, with the destination's byte size in either case.
#[derive(Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    AlreadyPresent { size: u64 },
    Downloaded { size: u64 },
}

/// Make sure `<base_dir>/raw/online_retail.xlsx` exists, downloading it
/// through `source` if it does not. Skips the network entirely when the
/// file is already on disk.
pub fn ensure_downloaded(source: &dyn DatasetSource, base_dir: &Path) -> Result<FetchOutcome> {
    let raw_dir = base_dir.join(RAW_DIR_NAME);
    fs::create_dir_all(&raw_dir)
        .with_context(|| format!("failed to create {}", raw_dir.display()))?;

    let target = raw_dir.join(DATASET_FILE_NAME);

    if target.exists() {
        let size = fs::metadata(&target)
            .with_context(|| format!("cannot stat {}", target.display()))?
            .len();
        println!(
            "File already exists at {} (size={} bytes).",
            target.display(),
            size
        );
        debug!(
            "Not GETting {}, {} already present",
            UCI_URL,
            target.display()
        );
        return Ok(FetchOutcome::AlreadyPresent { size });
    }

    println!("Downloading Online Retail dataset from UCI...");
    println!("URL: {UCI_URL}");
    println!("Destination: {}", target.display());
    info!("GET {UCI_URL}");

    let body = source.fetch_bytes(UCI_URL)?;

    // Stage next to the target so publishing is a single rename and an
    // interrupted transfer can never pass the existence check above.
    let staging = raw_dir.join(format!("{DATASET_FILE_NAME}.part"));
    fs::write(&staging, &body)
        .with_context(|| format!("failed to write {}", staging.display()))?;
    fs::rename(&staging, &target)
        .with_context(|| format!("failed to move {} into place", staging.display()))?;

    let size = fs::metadata(&target)
        .with_context(|| format!("cannot stat {}", target.display()))?
        .len();
    info!("Wrote {} ({} bytes)", target.display(), size);

    println!("Download finished.");
    println!("Final size: {size} bytes");

    Ok(FetchOutcome::Downloaded { size })
}
