use crate::domain::{
    classification::ports::LLMClient,
    common::{entities::app_errors::CoreError, services::Service},
    product::{
        entities::ClassifiedProduct,
        ports::{ProductLookup, ProductScanService, ScanHistoryRepository},
        value_objects::{Barcode, RemoveHistoryEntryInput, ScanBarcodeInput},
    },
};

impl<PL, LLM, SH> ProductScanService for Service<PL, LLM, SH>
where
    PL: ProductLookup,
    LLM: LLMClient,
    SH: ScanHistoryRepository,
{
    async fn scan_barcode(&self, input: ScanBarcodeInput) -> Result<ClassifiedProduct, CoreError> {
        // 1. Validate barcode
        let barcode = Barcode::parse(&input.barcode)?;

        // 2. Fetch product data
        tracing::info!(barcode = %barcode, "looking up product");
        let record = self
            .product_lookup
            .fetch_product(&barcode)
            .await?
            .ok_or_else(|| {
                tracing::info!(barcode = %barcode, "product not found");
                CoreError::ProductNotFound
            })?;

        // 3. Classify
        let product = self.pipeline.classify(record).await;

        // 4. Keep it in the history
        self.scan_history.record(product.clone()).await?;

        Ok(product)
    }

    async fn get_history(&self) -> Result<Vec<ClassifiedProduct>, CoreError> {
        self.scan_history.list().await
    }

    async fn remove_history_entry(&self, input: RemoveHistoryEntryInput) -> Result<(), CoreError> {
        if self.scan_history.remove(input.scan_id).await? {
            Ok(())
        } else {
            Err(CoreError::NotFound)
        }
    }

    async fn clear_history(&self) -> Result<(), CoreError> {
        self.scan_history.clear().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{
            classification::{
                entities::{Classification, VerdictSource},
                pipeline::ClassificationPipeline,
                ports::MockLLMClient,
            },
            product::{
                entities::{DietSignals, IngredientTexts, RawProductRecord},
                ports::MockProductLookup,
            },
        },
        infrastructure::history::InMemoryScanHistory,
        test_support::silent_llm,
    };

    type TestService = Service<MockProductLookup, MockLLMClient, InMemoryScanHistory>;

    fn service(lookup: MockProductLookup, llm: MockLLMClient) -> TestService {
        Service::new(
            lookup,
            ClassificationPipeline::new(llm, "es"),
            InMemoryScanHistory::new(50),
        )
    }

    fn coke() -> RawProductRecord {
        RawProductRecord {
            id: "5449000131805".to_string(),
            barcode: "5449000131805".to_string(),
            name: Some("Coca-Cola Zero".to_string()),
            brand: Some("Coca-Cola".to_string()),
            ingredients: IngredientTexts {
                default: Some("agua carbonatada, caramelo E150d, cafeína".to_string()),
                ..Default::default()
            },
            diet_signals: DietSignals {
                tags: Some(vec!["en:non-vegetarian".to_string()]),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn lookup_returning_coke(times: usize) -> MockProductLookup {
        let mut lookup = MockProductLookup::new();
        lookup
            .expect_fetch_product()
            .withf(|barcode| barcode.as_str() == "5449000131805")
            .times(times)
            .returning(|_| Box::pin(async { Ok(Some(coke())) }));
        lookup
    }

    #[tokio::test]
    async fn test_scan_with_structured_metadata() {
        let service = service(lookup_returning_coke(1), silent_llm());

        let product = service
            .scan_barcode(ScanBarcodeInput {
                barcode: " 5449000131805 ".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(product.classification, Classification::Omnivore);
        assert_eq!(product.confidence, 100);
        assert_eq!(product.source, VerdictSource::StructuredMetadata);

        let history = service.get_history().await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].id, product.id);
    }

    #[tokio::test]
    async fn test_invalid_barcode_skips_lookup() {
        let mut lookup = MockProductLookup::new();
        lookup.expect_fetch_product().never();
        let service = service(lookup, silent_llm());

        let err = service
            .scan_barcode(ScanBarcodeInput {
                barcode: "12ab".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::InvalidBarcode(_)));
    }

    #[tokio::test]
    async fn test_unknown_barcode_is_not_found() {
        let mut lookup = MockProductLookup::new();
        lookup
            .expect_fetch_product()
            .times(1)
            .returning(|_| Box::pin(async { Ok(None) }));
        let service = service(lookup, silent_llm());

        let err = service
            .scan_barcode(ScanBarcodeInput {
                barcode: "00000000".to_string(),
            })
            .await
            .unwrap_err();

        assert_eq!(err, CoreError::ProductNotFound);
        assert!(service.get_history().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_lookup_failure_is_raised() {
        let mut lookup = MockProductLookup::new();
        lookup.expect_fetch_product().times(1).returning(|_| {
            Box::pin(async {
                Err(CoreError::ProductDatabaseUnavailable(
                    "connection refused".to_string(),
                ))
            })
        });
        let service = service(lookup, silent_llm());

        let err = service
            .scan_barcode(ScanBarcodeInput {
                barcode: "5449000131805".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::ProductDatabaseUnavailable(_)));
        assert!(service.get_history().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_rescan_replaces_history_entry() {
        let service = service(lookup_returning_coke(2), silent_llm());
        let input = || ScanBarcodeInput {
            barcode: "5449000131805".to_string(),
        };

        let first = service.scan_barcode(input()).await.unwrap();
        let second = service.scan_barcode(input()).await.unwrap();

        let history = service.get_history().await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].id, second.id);
        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn test_remove_history_entry() {
        let service = service(lookup_returning_coke(1), silent_llm());
        let product = service
            .scan_barcode(ScanBarcodeInput {
                barcode: "5449000131805".to_string(),
            })
            .await
            .unwrap();

        service
            .remove_history_entry(RemoveHistoryEntryInput {
                scan_id: product.id,
            })
            .await
            .unwrap();
        assert!(service.get_history().await.unwrap().is_empty());

        let err = service
            .remove_history_entry(RemoveHistoryEntryInput {
                scan_id: product.id,
            })
            .await
            .unwrap_err();
        assert_eq!(err, CoreError::NotFound);
    }
}
