use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::doc;
use mongodb::{Collection, Database};
use std::collections::HashMap;
use std::sync::RwLock;

use crate::errors::Result;
use crate::models::live_match::LiveMatch;
use crate::models::match_stats::MatchStats;

pub const LIVE_MATCHES: &str = "live_matches";
pub const MATCH_STATS: &str = "match_stats";

/// Storage seam for the scraping pipeline. Read-after-write holds for both
/// implementations: a match inserted earlier in a call chain is visible to
/// the next read.
#[async_trait]
pub trait MatchStore: Send + Sync {
    async fn find_match(&self, match_id: &str) -> Result<Option<LiveMatch>>;
    async fn all_matches(&self) -> Result<Vec<LiveMatch>>;
    async fn insert_match(&self, entry: &LiveMatch) -> Result<()>;
    async fn upsert_stats(&self, stats: &MatchStats) -> Result<()>;
}

pub struct MongoMatchStore {
    db: Database,
}

impl MongoMatchStore {
    pub fn new(db: Database) -> Self {
        MongoMatchStore { db }
    }

    fn matches(&self) -> Collection<LiveMatch> {
        self.db.collection(LIVE_MATCHES)
    }

    fn stats(&self) -> Collection<MatchStats> {
        self.db.collection(MATCH_STATS)
    }
}

#[async_trait]
impl MatchStore for MongoMatchStore {
    async fn find_match(&self, match_id: &str) -> Result<Option<LiveMatch>> {
        Ok(self.matches().find_one(doc! { "matchId": match_id }).await?)
    }

    async fn all_matches(&self) -> Result<Vec<LiveMatch>> {
        let cursor = self.matches().find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn insert_match(&self, entry: &LiveMatch) -> Result<()> {
        self.matches().insert_one(entry).await?;
        Ok(())
    }

    async fn upsert_stats(&self, stats: &MatchStats) -> Result<()> {
        self.stats()
            .replace_one(doc! { "matchId": &stats.match_id }, stats)
            .upsert(true)
            .await?;
        Ok(())
    }
}

/// In-memory store backing the service tests.
#[derive(Default)]
pub struct MemoryMatchStore {
    matches: RwLock<HashMap<String, LiveMatch>>,
    stats: RwLock<HashMap<String, MatchStats>>,
}

impl MemoryMatchStore {
    pub fn new() -> Self {
        MemoryMatchStore::default()
    }

    pub fn match_count(&self) -> usize {
        self.matches.read().unwrap().len()
    }

    pub fn stats_for(&self, match_id: &str) -> Option<MatchStats> {
        self.stats.read().unwrap().get(match_id).cloned()
    }
}

#[async_trait]
impl MatchStore for MemoryMatchStore {
    async fn find_match(&self, match_id: &str) -> Result<Option<LiveMatch>> {
        Ok(self.matches.read().unwrap().get(match_id).cloned())
    }

    async fn all_matches(&self) -> Result<Vec<LiveMatch>> {
        Ok(self.matches.read().unwrap().values().cloned().collect())
    }

    async fn insert_match(&self, entry: &LiveMatch) -> Result<()> {
        self.matches
            .write()
            .unwrap()
            .insert(entry.match_id.clone(), entry.clone());
        Ok(())
    }

    async fn upsert_stats(&self, stats: &MatchStats) -> Result<()> {
        self.stats
            .write()
            .unwrap()
            .insert(stats.match_id.clone(), stats.clone());
        Ok(())
    }
}
