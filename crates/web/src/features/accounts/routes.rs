use axum::{Router, routing::post};

use super::handlers::{password_strength, validate_document};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/password-strength", post(password_strength))
        .route("/validate-document", post(validate_document))
}
