use axum::{Router, routing::get};

use super::handlers::{get_event, list_events, list_profiles};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_events))
        .route("/:event_id", get(get_event))
        .route("/:event_id/profiles", get(list_profiles))
}
