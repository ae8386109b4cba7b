use std::sync::Arc;
use mongodb::Database;

use crate::config::AppConfig;
use crate::database::store::{MatchStore, MongoMatchStore};
use crate::scrape::fetcher::{HttpPageFetcher, PageSource};
use crate::services::live_matches::LiveMatchesService;
use crate::services::match_stats::MatchStatsService;

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub jwt_secret: String,
    pub live_matches: Arc<LiveMatchesService>,
    pub match_stats: Arc<MatchStatsService>,
}

impl AppState {
    pub fn new(db: Database, config: &AppConfig) -> Self {
        let store: Arc<dyn MatchStore> = Arc::new(MongoMatchStore::new(db.clone()));
        let pages: Arc<dyn PageSource> = Arc::new(HttpPageFetcher::new());

        let live_matches = Arc::new(LiveMatchesService::new(
            store.clone(),
            pages.clone(),
            config.schedule_url(),
        ));
        let match_stats = Arc::new(MatchStatsService::new(
            store,
            pages,
            config.source_base_url.clone(),
        ));

        AppState {
            db,
            jwt_secret: config.jwt_secret.clone(),
            live_matches,
            match_stats,
        }
    }
}
