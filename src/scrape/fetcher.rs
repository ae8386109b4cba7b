use async_trait::async_trait;
use scraper::Html;
use std::time::{Duration, Instant};

use crate::errors::{AppError, Result};

// Imitate a browser, the source site rejects bare clients
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// A fetched page body. The DOM is parsed on demand inside synchronous
/// extraction code; `scraper::Html` is not `Send` and must never be held
/// across an await point.
#[derive(Debug, Clone)]
pub struct ScrapedPage {
    url: String,
    body: String,
}

impl ScrapedPage {
    pub fn new(url: impl Into<String>, body: impl Into<String>) -> Self {
        ScrapedPage {
            url: url.into(),
            body: body.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn dom(&self) -> Html {
        Html::parse_document(&self.body)
    }
}

/// Seam for everything that retrieves source pages, so the services can be
/// exercised against canned HTML.
#[async_trait]
pub trait PageSource: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<ScrapedPage>;
}

pub struct HttpPageFetcher {
    client: reqwest::Client,
}

impl HttpPageFetcher {
    pub fn new() -> Self {
        HttpPageFetcher {
            client: reqwest::Client::builder()
                .user_agent(BROWSER_USER_AGENT)
                .timeout(FETCH_TIMEOUT)
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
        }
    }
}

#[async_trait]
impl PageSource for HttpPageFetcher {
    async fn fetch(&self, url: &str) -> Result<ScrapedPage> {
        if url.trim().is_empty() {
            return Err(AppError::invalid_argument("url must not be empty"));
        }

        let started = Instant::now();
        let resp = self.client.get(url).send().await?;
        let status = resp.status();

        if status != reqwest::StatusCode::OK {
            tracing::warn!(
                url,
                status = status.as_u16(),
                elapsed_ms = started.elapsed().as_millis() as u64,
                "source page fetch failed"
            );
            return Err(AppError::fetch_failed(
                status.as_u16(),
                format!("{} returned {}", url, status),
            ));
        }

        let body = resp.text().await?;
        tracing::info!(
            url,
            status = status.as_u16(),
            bytes = body.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "fetched source page"
        );

        Ok(ScrapedPage::new(url, body))
    }
}
