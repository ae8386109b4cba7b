use mongodb::bson::DateTime as BsonDateTime;
use std::sync::Arc;

use crate::database::store::MatchStore;
use crate::errors::{AppError, Result};
use crate::models::match_stats::MatchStats;
use crate::scrape::extract;
use crate::scrape::fetcher::PageSource;

/// Orchestrates the per-match pipeline: look the match up, fetch its detail
/// page, extract every region, persist the assembled record wholesale.
pub struct MatchStatsService {
    store: Arc<dyn MatchStore>,
    pages: Arc<dyn PageSource>,
    source_base_url: String,
}

impl MatchStatsService {
    pub fn new(store: Arc<dyn MatchStore>, pages: Arc<dyn PageSource>, source_base_url: String) -> Self {
        MatchStatsService {
            store,
            pages,
            source_base_url,
        }
    }

    pub async fn get_match_stats(&self, match_id: &str) -> Result<MatchStats> {
        if match_id.trim().is_empty() {
            return Err(AppError::invalid_argument("match id must not be empty"));
        }

        let known = self
            .store
            .find_match(match_id)
            .await?
            .ok_or_else(|| AppError::MatchNotFound(match_id.to_string()))?;

        let url = detail_url(&self.source_base_url, &known.match_url);
        let page = self.pages.fetch(&url).await.map_err(|e| {
            tracing::error!(match_id, "detail page fetch failed: {}", e);
            e
        })?;

        let parts = extract::match_stats_parts(&page).map_err(|e| {
            tracing::error!(match_id, "detail page extraction failed: {}", e);
            e
        })?;

        let now = BsonDateTime::now();
        let stats = MatchStats {
            match_id: known.match_id.clone(),
            team1: parts.team1,
            team2: parts.team2,
            on_batting: parts.on_batting,
            run_rate: parts.run_rate,
            summary: parts.summary,
            is_live: parts.is_live,
            match_commentary: parts.commentary,
            key_stats: parts.key_stats,
            tournament_name: parts.tournament_name,
            match_name: parts.match_name.or(Some(known.match_name)),
            scraped_at: now,
            last_updated: now,
        };

        self.store.upsert_stats(&stats).await?;
        tracing::info!(match_id, is_live = ?stats.is_live, "match stats refreshed");

        Ok(stats)
    }
}

/// The persisted match url is usually site-relative; older records may carry
/// the absolute form.
fn detail_url(base: &str, match_url: &str) -> String {
    if match_url.starts_with("http://") || match_url.starts_with("https://") {
        return match_url.to_string();
    }
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        match_url.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::store::{MatchStore, MemoryMatchStore};
    use crate::models::live_match::LiveMatch;
    use crate::scrape::fetcher::ScrapedPage;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct StaticPages {
        body: &'static str,
        fetched: Mutex<Vec<String>>,
    }

    impl StaticPages {
        fn new(body: &'static str) -> Self {
            StaticPages {
                body,
                fetched: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl PageSource for StaticPages {
        async fn fetch(&self, url: &str) -> Result<ScrapedPage> {
            self.fetched.lock().unwrap().push(url.to_string());
            Ok(ScrapedPage::new(url, self.body))
        }
    }

    const DETAIL_BODY: &str = r#"
        <h1 class="cb-nav-hdr">CSK vs MI, Final</h1>
        <div class="cb-min-bat-rw">
          <div class="cb-min-tm">MI 168/5 (20)</div>
          <div class="cb-min-tm">CSK 115/2 (14.1)</div>
          <div class="cb-min-rr">CRR: 8.12 REQ: 9.26</div>
        </div>
        <div class="cb-min-stts cb-text-live">CSK need 54 runs in 35 balls</div>
        <p class="cb-com-ln">Over 14.1: short and pulled away for four</p>
    "#;

    const SCORES_ONLY_BODY: &str = r#"
        <div class="cb-min-bat-rw">
          <div class="cb-min-tm">IND 436</div>
          <div class="cb-min-tm">AUS 89/1 (30)</div>
        </div>
    "#;

    async fn seeded_store() -> Arc<MemoryMatchStore> {
        let store = Arc::new(MemoryMatchStore::new());
        store
            .insert_match(&LiveMatch {
                match_id: "knownid123456789".to_string(),
                match_url: "/live-cricket-scores/1/csk-vs-mi".to_string(),
                match_name: "CSK vs MI".to_string(),
            })
            .await
            .unwrap();
        store
    }

    #[tokio::test]
    async fn assembles_and_persists_the_full_record() {
        let store = seeded_store().await;
        let pages = Arc::new(StaticPages::new(DETAIL_BODY));
        let svc = MatchStatsService::new(store.clone(), pages.clone(), "http://source.test".to_string());

        let stats = svc.get_match_stats("knownid123456789").await.unwrap();

        assert_eq!(stats.match_id, "knownid123456789");
        assert_eq!(stats.team1.name, "MI");
        assert_eq!(stats.team2.name, "CSK");
        assert_eq!(stats.summary, "CSK need 54 runs in 35 balls");
        assert_eq!(stats.is_live, Some(true));
        assert_eq!(stats.match_name.as_deref(), Some("CSK vs MI, Final"));

        // the detail url was built from the persisted match url
        let fetched = pages.fetched.lock().unwrap().clone();
        assert_eq!(fetched, ["http://source.test/live-cricket-scores/1/csk-vs-mi"]);

        // upsert replaced the document wholesale
        let persisted = store.stats_for("knownid123456789").unwrap();
        assert_eq!(persisted.team2.overs.as_deref(), Some("14.1"));
    }

    #[tokio::test]
    async fn optional_regions_are_omitted_from_the_record() {
        let store = seeded_store().await;
        let svc = MatchStatsService::new(
            store,
            Arc::new(StaticPages::new(SCORES_ONLY_BODY)),
            "http://source.test".to_string(),
        );

        let stats = svc.get_match_stats("knownid123456789").await.unwrap();
        assert!(stats.on_batting.is_none());
        assert!(stats.run_rate.is_none());
        assert!(stats.match_commentary.is_none());
        assert!(stats.is_live.is_none());
        // the persisted name backfills a missing header
        assert_eq!(stats.match_name.as_deref(), Some("CSK vs MI"));
    }

    #[tokio::test]
    async fn unknown_id_is_not_found_and_nothing_is_fetched() {
        let store = Arc::new(MemoryMatchStore::new());
        let pages = Arc::new(StaticPages::new(DETAIL_BODY));
        let svc = MatchStatsService::new(store, pages.clone(), "http://source.test".to_string());

        let err = svc.get_match_stats("missing1234567890").await.unwrap_err();
        assert!(matches!(err, AppError::MatchNotFound(_)));
        assert!(pages.fetched.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn empty_id_is_invalid() {
        let store = Arc::new(MemoryMatchStore::new());
        let svc = MatchStatsService::new(
            store,
            Arc::new(StaticPages::new(DETAIL_BODY)),
            "http://source.test".to_string(),
        );
        let err = svc.get_match_stats("").await.unwrap_err();
        assert!(matches!(err, AppError::InvalidArgument(_)));
    }

    #[tokio::test]
    async fn scoreless_page_is_a_parse_failure() {
        let store = seeded_store().await;
        let svc = MatchStatsService::new(
            store,
            Arc::new(StaticPages::new("<html><body></body></html>")),
            "http://source.test".to_string(),
        );
        let err = svc.get_match_stats("knownid123456789").await.unwrap_err();
        assert!(matches!(err, AppError::ParseFailure(_)));
    }

    #[test]
    fn detail_url_joins_relative_and_keeps_absolute() {
        assert_eq!(
            detail_url("http://source.test/", "/live-cricket-scores/1/x"),
            "http://source.test/live-cricket-scores/1/x"
        );
        assert_eq!(
            detail_url("http://source.test", "https://elsewhere.test/m/1"),
            "https://elsewhere.test/m/1"
        );
    }
}
