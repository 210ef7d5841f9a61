#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
mod ads;
mod sender;
mod storage;

use crate::ads::prelude::*;
use crate::storage::Storage;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = &CmdArgs::parse(std::env::args().collect())?;
    let config = AppConfig::from_file(&args.config)?;

    let storage = Storage::open(&config.snapshot_file)?;
    let mut fetcher = AdsFetcher::new(&config, storage);
    let outcome = fetcher.run().await?;

    if outcome.first_run {
        println!("Stored baseline snapshot: {} ads", outcome.total);
    } else {
        println!(
            "Snapshot: {} ads, {} added, {} removed",
            outcome.total, outcome.added, outcome.removed
        );
    }

    Ok(())
}
