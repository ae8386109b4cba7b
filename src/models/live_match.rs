// models/live_match.rs
use serde::{Deserialize, Serialize};

/// One entry of the live match list. `match_id` is minted when the match is
/// first observed and never changes afterwards; it is the document key in
/// the `live_matches` collection. Name and url may drift between scrapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveMatch {
    pub match_id: String,
    pub match_url: String,
    pub match_name: String,
}
