use crate::{
    domain::{
        classification::pipeline::ClassificationPipeline,
        common::{VegScanConfig, entities::app_errors::CoreError, services::Service},
    },
    infrastructure::{
        history::InMemoryScanHistory, llm::GeminiLLMClient, product_lookup::OpenFoodFactsClient,
    },
};

pub type VegScanService = Service<OpenFoodFactsClient, GeminiLLMClient, InMemoryScanHistory>;

pub fn create_service(config: VegScanConfig) -> Result<VegScanService, CoreError> {
    let product_lookup = OpenFoodFactsClient::new(&config.product_database)?;
    let llm_client = GeminiLLMClient::new(&config.llm);
    let pipeline =
        ClassificationPipeline::new(llm_client, config.classification.preferred_locale.clone());
    let scan_history = InMemoryScanHistory::new(config.history.capacity);

    if config.llm.gemini_api_key.trim().is_empty() {
        tracing::warn!("Gemini API key is not set; AI analysis and translation are disabled");
    }

    Ok(Service::new(product_lookup, pipeline, scan_history))
}
