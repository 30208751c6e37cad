use axum::{
    Router,
    routing::{delete, get},
};
use utoipa::OpenApi;

use super::handlers::{
    clear_scan_history::{__path_clear_scan_history, clear_scan_history},
    delete_scan::{__path_delete_scan, delete_scan},
    get_scan_history::{__path_get_scan_history, get_scan_history},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(get_scan_history, delete_scan, clear_scan_history))]
pub struct HistoryApiDoc;

pub fn history_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/history", state.args.server.root_path),
            get(get_scan_history).delete(clear_scan_history),
        )
        .route(
            &format!("{}/history/{{scan_id}}", state.args.server.root_path),
            delete(delete_scan),
        )
}
