//! Responsibility
//! - URL structure of the service (three GET routes at the root)
//! - unmatched paths fall through to axum's default 404

use axum::{Router, routing::get};

use crate::api::handlers::{
    greeting::greeting,
    health::{healthy, ready},
};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(greeting))
        .route("/ready", get(ready))
        .route("/healthy", get(healthy))
}
