use axum::{
    extract::{Path, State},
    response::Json,
};
use std::collections::HashMap;

use crate::errors::Result;
use crate::models::live_match::LiveMatch;
use crate::models::match_stats::MatchStats;
use crate::models::response::ApiResponse;
use crate::services::live_matches::MatchesResponse;
use crate::state::AppState;

pub async fn get_matches(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<HashMap<String, LiveMatch>>>> {
    println!("🏏 GET /api/matches called");
    let start_time = std::time::Instant::now();

    let matches = state.live_matches.refresh().await?;

    println!("✅ Refreshed {} live matches in {:?}", matches.len(), start_time.elapsed());
    Ok(Json(ApiResponse::ok("Live matches refreshed", matches)))
}

pub async fn get_match_by_id(
    State(state): State<AppState>,
    Path(match_id): Path<String>,
) -> Result<Json<ApiResponse<MatchesResponse>>> {
    println!("🏏 GET /api/matches/{} called", match_id);
    let start_time = std::time::Instant::now();

    let response = state.live_matches.get_matches(&match_id).await?;

    let message = match &response {
        MatchesResponse::Single(_) => "Match found",
        MatchesResponse::All(_) => "Live matches refreshed",
    };
    println!("✅ {} in {:?}", message, start_time.elapsed());
    Ok(Json(ApiResponse::ok(message, response)))
}

pub async fn get_match_stats(
    State(state): State<AppState>,
    Path(match_id): Path<String>,
) -> Result<Json<ApiResponse<MatchStats>>> {
    println!("📊 GET /api/matches/{}/stats called", match_id);
    let start_time = std::time::Instant::now();

    let stats = state.match_stats.get_match_stats(&match_id).await?;

    println!("✅ Fetched stats for {} in {:?}", match_id, start_time.elapsed());
    Ok(Json(ApiResponse::ok("Match stats fetched", stats)))
}
