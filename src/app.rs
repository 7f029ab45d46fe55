use axum::{Router, routing::get};

use crate::states::app_state::AppState;
use crate::ws::ws_handler;

pub const DEFAULT_WS_PATH: &str = "/ws/quiz";

pub fn build_app(state: AppState, ws_path: &str) -> Router {
    Router::new()
        .route(ws_path, get(ws_handler))
        .with_state(state)
}
