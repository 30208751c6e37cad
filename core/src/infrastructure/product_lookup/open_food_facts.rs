use reqwest::Client;

use crate::{
    domain::{
        common::{ProductDatabaseConfig, entities::app_errors::CoreError},
        product::{entities::RawProductRecord, ports::ProductLookup, value_objects::Barcode},
    },
    infrastructure::product_lookup::mappers::OpenFoodFactsResponse,
};

#[derive(Debug, Clone)]
pub struct OpenFoodFactsClient {
    base_url: String,
    client: Client,
}

impl OpenFoodFactsClient {
    pub fn new(config: &ProductDatabaseConfig) -> Result<Self, CoreError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .user_agent(concat!("vegscan/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build product database client: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }
}

impl ProductLookup for OpenFoodFactsClient {
    async fn fetch_product(&self, barcode: &Barcode) -> Result<Option<RawProductRecord>, CoreError> {
        let url = format!("{}/{}.json", self.base_url, barcode);

        let response = self.client.get(&url).send().await.map_err(|e| {
            tracing::error!("Product database request failed: {}", e);
            CoreError::ProductDatabaseUnavailable(e.to_string())
        })?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Product database error: {} - {}", status, error_text);
            return Err(CoreError::ProductDatabaseError {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let body: OpenFoodFactsResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse product database response: {}", e);
            CoreError::ProductDatabaseInvalidResponse(e.to_string())
        })?;

        let record = body.into_record(barcode.as_str());
        match &record {
            Some(product) => tracing::debug!(
                barcode = %barcode,
                name = ?product.name,
                "product found"
            ),
            None => tracing::debug!(barcode = %barcode, "product not in database"),
        }

        Ok(record)
    }
}
