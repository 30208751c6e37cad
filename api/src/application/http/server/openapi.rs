use crate::application::http::{
    health::HealthApiDoc, history::router::HistoryApiDoc, scan::router::ScanApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "VegScan API",
        description = "Scan a product barcode and find out whether it is vegan, vegetarian or neither."
    ),
    nest(
        (path = "/scans", api = ScanApiDoc),
        (path = "/history", api = HistoryApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
