use rand::seq::SliceRandom;
use scraper::Html;

use super::config::{AppConfig, DEFAULT_USER_AGENTS};
use super::data_types::Snapshot;
use super::dedupe::dedupe;
use super::diff::diff;
use super::extractor::extract;
use crate::sender;
use crate::storage::{SnapshotStorage, Storage};

pub struct AdsFetcher {
    pub config: AppConfig,
    storage: Storage,
    listing_url: String,
}

/// Counts from one monitoring cycle.
#[derive(Debug, Default)]
pub struct RunOutcome {
    pub total: usize,
    pub added: usize,
    pub removed: usize,
    pub skipped: usize,
    pub first_run: bool,
}

impl AdsFetcher {
    #[must_use]
    /// Create a new fetcher with the given configuration
    pub fn new(config: &AppConfig, storage: Storage) -> AdsFetcher {
        Self {
            config: config.clone(),
            listing_url: config.url.clone(),
            storage,
        }
    }

    #[allow(dead_code)]
    fn with_listing_url(&mut self, url: String) -> &mut Self {
        self.listing_url = url;
        self
    }

    /// Run one monitoring cycle:
    /// 1. Fetch the listing page with a randomly chosen user agent
    /// 2. Extract the ad records, skipping malformed ad tables
    /// 3. De-duplicate them into the current snapshot
    /// 4. Diff against the previously persisted snapshot and report the
    ///    delta; on the first run there is nothing to diff against and the
    ///    current snapshot only becomes the baseline
    /// 5. Persist the current snapshot for the next cycle
    pub async fn run(&mut self) -> Result<RunOutcome, Box<dyn std::error::Error>> {
        let html = self.fetch_page().await?;
        let document = Html::parse_document(&html);

        let extraction = extract(&document)?;
        if extraction.skipped > 0 {
            eprintln!("Warning: skipped {} malformed ad tables", extraction.skipped);
        }

        let current: Snapshot = dedupe(extraction.ads);
        let previous = self.storage.load()?;

        let mut outcome = RunOutcome {
            total: current.len(),
            skipped: extraction.skipped,
            ..RunOutcome::default()
        };
        match previous {
            None => {
                sender::print_baseline(current.len());
                outcome.first_run = true;
            }
            Some(previous) => {
                let (removed, added) = diff(&previous, &current);
                sender::print_report(&added, &removed);
                outcome.added = added.len();
                outcome.removed = removed.len();
            }
        }

        self.storage.store(&current)?;
        Ok(outcome)
    }

    /// Fetch the listing page, rotating over the configured user agents.
    async fn fetch_page(&self) -> Result<String, Box<dyn std::error::Error>> {
        let user_agents = self.config.get_user_agents();
        let user_agent = user_agents
            .choose(&mut rand::thread_rng())
            .cloned()
            .unwrap_or_else(|| DEFAULT_USER_AGENTS[0].to_string());

        let response = reqwest::Client::new()
            .get(&self.listing_url)
            .header(reqwest::header::USER_AGENT, user_agent)
            .send()
            .await?;

        Ok(response.text().await?)
    }
}
