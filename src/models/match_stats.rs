// models/match_stats.rs
use mongodb::bson::DateTime as BsonDateTime;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Score line of one team as shown on the detail page. Overs are kept as the
/// literal source text ("9.1" means 9 overs and 1 ball) since the frontend
/// re-renders them verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamScoreData {
    pub name: String,
    pub score: String,
    pub wickets: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overs: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_innings: Option<PreviousInnings>,
}

/// Completed innings in multi-innings formats, present when the source text
/// carries an `&` separator ("ENG 246 & 316/6").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviousInnings {
    pub score: String,
    pub wickets: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerData {
    pub name: String,
    pub runs: String,
    pub balls: String,
}

/// The batting pair currently at the crease.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnBatting {
    pub player1: PlayerData,
    pub player2: PlayerData,
}

/// Required rate is only present during a chase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunRateData {
    pub current_run_rate: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_run_rate: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentaryEntry {
    pub commentary: String,
    pub has_over: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub over: Option<String>,
}

/// Full statistics record for one match. Rewritten wholesale on every scrape:
/// the upsert replaces the document keyed by `match_id`, there is no
/// field-level merge at the storage layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchStats {
    pub match_id: String,
    pub team1: TeamScoreData,
    pub team2: TeamScoreData,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_batting: Option<OnBatting>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_rate: Option<RunRateData>,
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_live: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_commentary: Option<Vec<CommentaryEntry>>,
    pub key_stats: HashMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tournament_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_name: Option<String>,
    pub scraped_at: BsonDateTime,
    pub last_updated: BsonDateTime,
}
