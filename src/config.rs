// config.rs
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt_secret: String,
    pub source_base_url: String,
    pub port: u16,
    pub host: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        AppConfig {
            database_url: env::var("DATABASE_URL")
                .expect("DATABASE_URL must be set"),
            jwt_secret: env::var("JWT_SECRET")
                .unwrap_or_else(|_| "your-secret-key-change-in-production".to_string()),
            source_base_url: env::var("SOURCE_BASE_URL")
                .unwrap_or_else(|_| "https://www.cricbuzz.com".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "10000".to_string())
                .parse()
                .unwrap_or(10000),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
        }
    }

    /// The match-list page carrying the schedule cards.
    pub fn schedule_url(&self) -> String {
        format!(
            "{}/cricket-match/live-scores",
            self.source_base_url.trim_end_matches('/')
        )
    }
}
