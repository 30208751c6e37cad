use axum::{Router, routing::post};
use utoipa::OpenApi;

use super::handlers::scan_barcode::{__path_scan_barcode, scan_barcode};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(scan_barcode))]
pub struct ScanApiDoc;

pub fn scan_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/scans", state.args.server.root_path),
        post(scan_barcode),
    )
}
