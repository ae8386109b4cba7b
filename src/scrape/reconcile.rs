use rand::{distributions::Alphanumeric, Rng};
use std::collections::{HashMap, HashSet};

use crate::errors::{AppError, Result};
use crate::models::live_match::LiveMatch;

pub const MATCH_ID_LEN: usize = 16;
const MAX_MINT_ATTEMPTS: usize = 8;

/// A schedule-card entry as scraped from the match-list page, before it has
/// an identity.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrapedMatch {
    pub match_url: String,
    pub match_name: String,
}

#[derive(Debug, Default)]
pub struct ReconciledMatches {
    pub existing: HashMap<String, LiveMatch>,
    pub new: HashMap<String, LiveMatch>,
}

/// Partition freshly scraped entries into already-known and new matches.
/// A known match (exact `match_url` equality) keeps its id and picks up the
/// scraped name/url; an unknown one gets a freshly minted id. Fails with
/// `NoMatchesFound` when nothing lands in either bucket, which is how
/// callers tell "page structure changed or legitimately empty" apart from a
/// partial parse.
pub fn reconcile(scraped: Vec<ScrapedMatch>, known: &[LiveMatch]) -> Result<ReconciledMatches> {
    let mut taken: HashSet<String> = known.iter().map(|m| m.match_id.clone()).collect();
    let mut result = ReconciledMatches::default();

    for entry in scraped {
        match known.iter().find(|m| m.match_url == entry.match_url) {
            Some(found) => {
                result.existing.insert(
                    found.match_id.clone(),
                    LiveMatch {
                        match_id: found.match_id.clone(),
                        match_url: entry.match_url,
                        match_name: entry.match_name,
                    },
                );
            }
            None => {
                let match_id = mint_match_id(&taken)?;
                taken.insert(match_id.clone());
                result.new.insert(
                    match_id.clone(),
                    LiveMatch {
                        match_id,
                        match_url: entry.match_url,
                        match_name: entry.match_name,
                    },
                );
            }
        }
    }

    if result.existing.is_empty() && result.new.is_empty() {
        return Err(AppError::NoMatchesFound);
    }

    Ok(result)
}

/// Mint a 16-character alphanumeric id that collides with neither persisted
/// ids nor ids minted earlier in this batch. The 62^16 keyspace makes a
/// collision negligible but not impossible, so the check retries a bounded
/// number of times and fails loudly when exhausted.
fn mint_match_id(taken: &HashSet<String>) -> Result<String> {
    for _ in 0..MAX_MINT_ATTEMPTS {
        let candidate: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(MATCH_ID_LEN)
            .map(char::from)
            .collect();
        if !taken.contains(&candidate) {
            return Ok(candidate);
        }
    }
    Err(AppError::service("could not mint a unique match id"))
}
