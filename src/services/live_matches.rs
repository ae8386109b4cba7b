use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;

use crate::database::store::MatchStore;
use crate::errors::{AppError, Result};
use crate::models::live_match::LiveMatch;
use crate::scrape::extract;
use crate::scrape::fetcher::PageSource;
use crate::scrape::reconcile::reconcile;

/// Sentinel match id requesting a full refresh of the match list.
pub const REFRESH_SENTINEL: &str = "0";

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum MatchesResponse {
    Single(LiveMatch),
    All(HashMap<String, LiveMatch>),
}

/// Orchestrates the match-list pipeline: fetch the schedule page, extract
/// the cards, reconcile against the persisted list, persist the newly
/// observed matches. Dependencies come in through the constructor so the
/// whole thing runs against canned pages and an in-memory store in tests.
pub struct LiveMatchesService {
    store: Arc<dyn MatchStore>,
    pages: Arc<dyn PageSource>,
    schedule_url: String,
}

impl LiveMatchesService {
    pub fn new(store: Arc<dyn MatchStore>, pages: Arc<dyn PageSource>, schedule_url: String) -> Self {
        LiveMatchesService {
            store,
            pages,
            schedule_url,
        }
    }

    pub async fn get_matches(&self, match_id: &str) -> Result<MatchesResponse> {
        if match_id.trim().is_empty() {
            return Err(AppError::invalid_argument("match id must not be empty"));
        }

        if match_id == REFRESH_SENTINEL {
            return Ok(MatchesResponse::All(self.refresh().await?));
        }

        let found = self
            .store
            .find_match(match_id)
            .await?
            .ok_or_else(|| AppError::MatchNotFound(match_id.to_string()))?;
        Ok(MatchesResponse::Single(found))
    }

    /// Full refresh. Returns the merged id map of already-known and newly
    /// discovered matches.
    pub async fn refresh(&self) -> Result<HashMap<String, LiveMatch>> {
        tracing::info!(url = %self.schedule_url, "refreshing live match list");

        let known = self.store.all_matches().await?;

        let page = self.pages.fetch(&self.schedule_url).await.map_err(|e| {
            tracing::error!("schedule page fetch failed: {}", e);
            e
        })?;
        let cards = extract::schedule_cards(&page);
        tracing::info!(scraped = cards.len(), known = known.len(), "parsed schedule page");

        let reconciled = reconcile(cards, &known).map_err(|e| {
            tracing::error!("match reconciliation failed: {}", e);
            e
        })?;

        // insert-only: ids of already-known matches are never rewritten
        for entry in reconciled.new.values() {
            self.store.insert_match(entry).await?;
        }
        tracing::info!(
            existing = reconciled.existing.len(),
            new = reconciled.new.len(),
            "live match list reconciled"
        );

        let mut merged = reconciled.existing;
        merged.extend(reconciled.new);
        Ok(merged)
    }
}
