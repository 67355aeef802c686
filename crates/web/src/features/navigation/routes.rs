use axum::{
    Router,
    routing::{get, post},
};

use super::handlers::{resolve, resolve_for_user};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/resolve", post(resolve))
        .route("/:user_id", get(resolve_for_user))
}
