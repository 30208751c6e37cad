use std::time::Duration;

use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp};

pub mod entities;
pub mod services;

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_PRODUCT_DATABASE_URL: &str = "https://world.openfoodfacts.org/api/v0/product";
pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

#[derive(Clone, Debug)]
pub struct VegScanConfig {
    pub llm: LLMConfig,
    pub product_database: ProductDatabaseConfig,
    pub history: HistoryConfig,
    pub classification: ClassificationConfig,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub max_attempts: u32,
    pub base_retry_delay: Duration,
}

#[derive(Clone, Debug)]
pub struct ProductDatabaseConfig {
    pub base_url: String,
    pub request_timeout: Duration,
}

#[derive(Clone, Debug)]
pub struct HistoryConfig {
    pub capacity: usize,
}

#[derive(Clone, Debug)]
pub struct ClassificationConfig {
    /// Locale whose ingredient text is preferred over the product's default text.
    pub preferred_locale: String,
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            gemini_api_key: String::new(),
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            gemini_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            max_attempts: 3,
            base_retry_delay: Duration::from_millis(1000),
        }
    }
}

impl Default for ProductDatabaseConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_PRODUCT_DATABASE_URL.to_string(),
            request_timeout: Duration::from_secs(15),
        }
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

impl Default for ClassificationConfig {
    fn default() -> Self {
        Self {
            preferred_locale: "es".to_string(),
        }
    }
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, now.timestamp_subsec_nanos());

    (now, timestamp)
}
