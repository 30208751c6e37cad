use axum::extract::{Path, State};
use uuid::Uuid;
use vegscan_core::domain::product::{ProductScanService, RemoveHistoryEntryInput};

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiErrorResponse},
        response::Response,
    },
    app_state::AppState,
};

#[utoipa::path(
    delete,
    path = "/{scan_id}",
    tag = "history",
    summary = "Remove a scan from the history",
    params(
        ("scan_id" = Uuid, Path, description = "Scan id"),
    ),
    responses(
        (status = 204, description = "Scan removed"),
        (status = 404, description = "Scan not found", body = ApiErrorResponse)
    )
)]
pub async fn delete_scan(
    Path(scan_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<()>, ApiError> {
    state
        .service
        .remove_history_entry(RemoveHistoryEntryInput { scan_id })
        .await?;

    Ok(Response::NoContent)
}
