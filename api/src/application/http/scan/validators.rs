use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

static BARCODE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*[0-9]{8,14}\s*$").expect("valid barcode pattern")
});

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct ScanBarcodeRequest {
    /// EAN-8, UPC-A, EAN-13 or GTIN-14 digits.
    #[validate(regex(
        path = *BARCODE_PATTERN,
        message = "barcode must be 8 to 14 digits"
    ))]
    #[schema(example = "3017620422003")]
    pub barcode: String,
}
