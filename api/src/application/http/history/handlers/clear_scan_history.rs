use axum::extract::State;
use vegscan_core::domain::product::ProductScanService;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    delete,
    path = "",
    tag = "history",
    summary = "Clear the scan history",
    responses(
        (status = 204, description = "History cleared")
    )
)]
pub async fn clear_scan_history(State(state): State<AppState>) -> Result<Response<()>, ApiError> {
    state.service.clear_history().await?;

    Ok(Response::NoContent)
}
