use std::future::Future;

use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    product::{
        entities::{ClassifiedProduct, RawProductRecord},
        value_objects::{Barcode, RemoveHistoryEntryInput, ScanBarcodeInput},
    },
};

/// Product database lookup. `Ok(None)` means the barcode is unknown to the database.
#[cfg_attr(test, mockall::automock)]
pub trait ProductLookup: Send + Sync {
    fn fetch_product(
        &self,
        barcode: &Barcode,
    ) -> impl Future<Output = Result<Option<RawProductRecord>, CoreError>> + Send;
}

/// Bounded, newest-first history of classified products.
///
/// `record` must be atomic: drop any entry with the same barcode, prepend
/// the new one, and truncate to capacity without interleaving with another
/// `record` call.
#[cfg_attr(test, mockall::automock)]
pub trait ScanHistoryRepository: Send + Sync {
    fn record(
        &self,
        product: ClassifiedProduct,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn list(&self) -> impl Future<Output = Result<Vec<ClassifiedProduct>, CoreError>> + Send;

    fn remove(&self, scan_id: Uuid) -> impl Future<Output = Result<bool, CoreError>> + Send;

    fn clear(&self) -> impl Future<Output = Result<(), CoreError>> + Send;
}

/// Service trait for barcode scanning business logic
#[cfg_attr(test, mockall::automock)]
pub trait ProductScanService: Send + Sync {
    fn scan_barcode(
        &self,
        input: ScanBarcodeInput,
    ) -> impl Future<Output = Result<ClassifiedProduct, CoreError>> + Send;

    fn get_history(&self) -> impl Future<Output = Result<Vec<ClassifiedProduct>, CoreError>> + Send;

    fn remove_history_entry(
        &self,
        input: RemoveHistoryEntryInput,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn clear_history(&self) -> impl Future<Output = Result<(), CoreError>> + Send;
}
