use axum::{
    middleware::from_fn_with_state,
    routing::get,
    Router,
};

use crate::handlers::matches;
use crate::middleware::auth::auth_middleware;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(matches::get_matches))
        .route("/:match_id", get(matches::get_match_by_id))
        .route("/:match_id/stats", get(matches::get_match_stats))
        .layer(from_fn_with_state(state, auth_middleware))
}
