// src/runner.rs
//
// The whole pipeline, strictly sequential and single-shot:
// fetch → extract → dedup → persist → notify.

use std::error::Error;
use std::path::Path;

use crate::config::consts::{STORE_FILE, TARGET_URL};
use crate::config::env::MailConfig;
use crate::data::JobRecord;
use crate::{dedup, extract, fetch, notify, store};

/// What a run did, for the caller and for tests.
pub struct RunSummary {
    pub extracted: usize,
    pub skipped: usize,
    pub new_jobs: usize,
}

pub fn run() -> Result<RunSummary, Box<dyn Error>> {
    logf!("Run started against {}", TARGET_URL);

    let markup = fetch::fetch_page(TARGET_URL)?;
    let extraction = extract::extract_jobs(&markup)?;

    if extraction.skipped > 0 {
        println!("Skipped {} incomplete job card(s).", extraction.skipped);
        logf!("Skipped {} incomplete card(s)", extraction.skipped);
    }

    let new_jobs = sync_store(&extraction.records, Path::new(STORE_FILE))?;

    // Notify iff something is actually new.
    if !new_jobs.is_empty() {
        match MailConfig::from_env() {
            Ok(config) => notify::send(&config, &new_jobs),
            Err(e) => {
                // Same fate as an auth failure: logged, not fatal.
                println!("Failed to send email. Error: {e}");
                loge!("Mail configuration error: {e}");
            }
        }
    }

    logf!(
        "Run finished: {} extracted, {} skipped, {} new",
        extraction.records.len(),
        extraction.skipped,
        new_jobs.len()
    );

    Ok(RunSummary {
        extracted: extraction.records.len(),
        skipped: extraction.skipped,
        new_jobs: new_jobs.len(),
    })
}

/// Diff `extracted` against the store at `store_path`, persist what is
/// new, and return it. First run initializes the file; later runs
/// append. An empty extraction never touches the filesystem.
pub fn sync_store(
    extracted: &[JobRecord],
    store_path: &Path,
) -> Result<Vec<JobRecord>, Box<dyn Error>> {
    if extracted.is_empty() {
        println!("No new jobs found.");
        return Ok(Vec::new());
    }

    match store::load(store_path)? {
        None => {
            store::init(store_path, extracted)?;
            println!("Data has been saved to {}.", store_path.display());
            Ok(extracted.to_vec())
        }
        Some(stored) => {
            let fresh = dedup::new_records(extracted, &stored);
            if fresh.is_empty() {
                println!("No new jobs found.");
            } else {
                store::append(store_path, &fresh)?;
                println!(
                    "{} new job(s) found and added to {}.",
                    fresh.len(),
                    store_path.display()
                );
            }
            Ok(fresh)
        }
    }
}
