use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use vegscan_core::domain::product::{ClassifiedProduct, ProductScanService, ScanBarcodeInput};

use crate::application::http::{
    scan::validators::ScanBarcodeRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ScanBarcodeResponse {
    pub data: ClassifiedProduct,
}

#[utoipa::path(
    post,
    path = "",
    tag = "scan",
    summary = "Scan a barcode",
    description = "Looks the product up in the food database, classifies it and records the result in the scan history.",
    request_body = ScanBarcodeRequest,
    responses(
        (status = 200, description = "Product classified", body = ScanBarcodeResponse),
        (status = 400, description = "Invalid barcode", body = ApiErrorResponse),
        (status = 404, description = "Product not found", body = ApiErrorResponse),
        (status = 502, description = "Food database returned an error", body = ApiErrorResponse),
        (status = 503, description = "Food database unreachable", body = ApiErrorResponse)
    )
)]
pub async fn scan_barcode(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<ScanBarcodeRequest>,
) -> Result<Response<ScanBarcodeResponse>, ApiError> {
    let product = state
        .service
        .scan_barcode(ScanBarcodeInput {
            barcode: payload.barcode,
        })
        .await?;

    Ok(Response::OK(ScanBarcodeResponse { data: product }))
}
