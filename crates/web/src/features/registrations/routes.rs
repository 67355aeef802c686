use axum::{
    Router, middleware,
    routing::{get, post},
};

use super::handlers::{get_registration, register, register_dependent};
use crate::middleware::auth::{ApiKeys, require_auth};
use crate::state::AppState;

pub fn routes(api_keys: ApiKeys) -> Router<AppState> {
    let protected = Router::new()
        .route("/", post(register))
        .route("/dependents", post(register_dependent))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/:user_id", get(get_registration))
        .merge(protected)
}
