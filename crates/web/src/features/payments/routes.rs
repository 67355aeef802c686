use axum::{
    Router, middleware,
    routing::{get, post, put},
};

use super::handlers::{create_payment, list_payments, submit_proof, update_status};
use crate::middleware::auth::{ApiKeys, require_auth};
use crate::state::AppState;

pub fn routes(api_keys: ApiKeys) -> Router<AppState> {
    let protected = Router::new()
        .route("/", post(create_payment))
        .route("/:payment_id/proof", post(submit_proof))
        .route("/:payment_id/status", put(update_status))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new().route("/", get(list_payments)).merge(protected)
}
