use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use vegscan_core::domain::product::{ClassifiedProduct, ProductScanService};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ScanHistoryResponse {
    pub items: Vec<ClassifiedProduct>,
    pub count: usize,
}

#[utoipa::path(
    get,
    path = "",
    tag = "history",
    summary = "List recent scans",
    description = "Returns the most recent scans, newest first. Each barcode appears at most once.",
    responses(
        (status = 200, description = "Scan history", body = ScanHistoryResponse)
    )
)]
pub async fn get_scan_history(
    State(state): State<AppState>,
) -> Result<Response<ScanHistoryResponse>, ApiError> {
    let items = state.service.get_history().await?;

    Ok(Response::OK(ScanHistoryResponse {
        count: items.len(),
        items,
    }))
}
