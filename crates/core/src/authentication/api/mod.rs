use std::sync::Arc;

use axum::{routing::get, Router};

use crate::app_state::AppState;

mod status;
pub use status::StatusResponse;

pub fn create_authentication_routes() -> Router<Arc<AppState>> {
    Router::new().route("/status", get(status::status))
}
