use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    product::{entities::ClassifiedProduct, ports::ScanHistoryRepository},
};

/// Process-local scan history, newest first.
#[derive(Debug, Clone)]
pub struct InMemoryScanHistory {
    capacity: usize,
    entries: Arc<RwLock<Vec<ClassifiedProduct>>>,
}

impl InMemoryScanHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            entries: Arc::default(),
        }
    }
}

impl ScanHistoryRepository for InMemoryScanHistory {
    async fn record(&self, product: ClassifiedProduct) -> Result<(), CoreError> {
        // Dedupe, prepend and truncate under one guard.
        let mut entries = self.entries.write().await;
        entries.retain(|entry| entry.barcode != product.barcode);
        entries.insert(0, product);
        entries.truncate(self.capacity);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<ClassifiedProduct>, CoreError> {
        Ok(self.entries.read().await.clone())
    }

    async fn remove(&self, scan_id: Uuid) -> Result<bool, CoreError> {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|entry| entry.id != scan_id);
        Ok(entries.len() != before)
    }

    async fn clear(&self) -> Result<(), CoreError> {
        self.entries.write().await.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::domain::{
        classification::entities::{Classification, ClassificationVerdict, VerdictSource},
        product::entities::RawProductRecord,
    };

    fn product(barcode: &str) -> ClassifiedProduct {
        ClassifiedProduct::new(
            RawProductRecord {
                id: barcode.to_string(),
                barcode: barcode.to_string(),
                ..Default::default()
            },
            String::new(),
            ClassificationVerdict {
                classification: Classification::Vegan,
                confidence: 70,
                source: VerdictSource::Heuristic,
                reasoning: None,
                confidence_explanation: None,
            },
        )
    }

    #[tokio::test]
    async fn test_newest_first_and_deduplicated() {
        let history = InMemoryScanHistory::new(50);
        history.record(product("11111111")).await.unwrap();
        history.record(product("22222222")).await.unwrap();
        let rescan = product("11111111");
        let rescan_id = rescan.id;
        history.record(rescan).await.unwrap();

        let entries = history.list().await.unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id, rescan_id);
        assert_eq!(entries[1].barcode, "22222222");
    }

    #[tokio::test]
    async fn test_capacity_is_enforced() {
        let history = InMemoryScanHistory::new(50);
        for i in 0..60 {
            history.record(product(&format!("{:08}", i))).await.unwrap();
        }

        let entries = history.list().await.unwrap();
        assert_eq!(entries.len(), 50);
        assert_eq!(entries[0].barcode, "00000059");
        assert_eq!(entries[49].barcode, "00000010");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_records_keep_invariants() {
        let history = InMemoryScanHistory::new(50);
        let mut handles = Vec::new();
        for i in 0..200 {
            let history = history.clone();
            handles.push(tokio::spawn(async move {
                history
                    .record(product(&format!("{:08}", i % 80)))
                    .await
                    .unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let entries = history.list().await.unwrap();
        assert_eq!(entries.len(), 50);
        let barcodes: HashSet<_> = entries.iter().map(|e| e.barcode.clone()).collect();
        assert_eq!(barcodes.len(), 50);
    }

    #[tokio::test]
    async fn test_remove_and_clear() {
        let history = InMemoryScanHistory::new(50);
        let first = product("11111111");
        let first_id = first.id;
        history.record(first).await.unwrap();
        history.record(product("22222222")).await.unwrap();

        assert!(history.remove(first_id).await.unwrap());
        assert!(!history.remove(first_id).await.unwrap());
        assert_eq!(history.list().await.unwrap().len(), 1);

        history.clear().await.unwrap();
        assert!(history.list().await.unwrap().is_empty());
    }
}
