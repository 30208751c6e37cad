use std::time::Duration;

use clap::{Args as ClapArgs, Parser};
use vegscan_core::domain::common::{
    ClassificationConfig, DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL,
    DEFAULT_PRODUCT_DATABASE_URL, HistoryConfig, LLMConfig, ProductDatabaseConfig, VegScanConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "vegscan", version, about = "Barcode scanning and diet classification API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub product_database: ProductDatabaseArgs,

    #[command(flatten)]
    pub history: HistoryArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LlmArgs {
    #[arg(long, env = "GEMINI_API_KEY", default_value = "", hide_env_values = true)]
    pub gemini_api_key: String,

    #[arg(long, env = "GEMINI_MODEL", default_value = DEFAULT_GEMINI_MODEL)]
    pub gemini_model: String,

    #[arg(long, env = "GEMINI_BASE_URL", default_value = DEFAULT_GEMINI_BASE_URL)]
    pub gemini_base_url: String,

    #[arg(long, env = "LLM_MAX_ATTEMPTS", default_value_t = 3)]
    pub llm_max_attempts: u32,

    #[arg(long, env = "LLM_RETRY_BASE_DELAY_MS", default_value_t = 1000)]
    pub llm_retry_base_delay_ms: u64,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ProductDatabaseArgs {
    #[arg(long, env = "PRODUCT_DATABASE_URL", default_value = DEFAULT_PRODUCT_DATABASE_URL)]
    pub product_database_url: String,

    #[arg(long, env = "PRODUCT_DATABASE_TIMEOUT_SECS", default_value_t = 15)]
    pub product_database_timeout_secs: u64,

    /// Locale whose ingredient list is preferred when the product has several.
    #[arg(long, env = "INGREDIENTS_LOCALE", default_value = "es")]
    pub ingredients_locale: String,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct HistoryArgs {
    #[arg(long, env = "HISTORY_CAPACITY", default_value_t = 50)]
    pub history_capacity: usize,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "RUST_LOG", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<Args> for VegScanConfig {
    fn from(args: Args) -> Self {
        VegScanConfig {
            llm: LLMConfig {
                gemini_api_key: args.llm.gemini_api_key,
                gemini_model: args.llm.gemini_model,
                gemini_base_url: args.llm.gemini_base_url,
                max_attempts: args.llm.llm_max_attempts,
                base_retry_delay: Duration::from_millis(args.llm.llm_retry_base_delay_ms),
            },
            product_database: ProductDatabaseConfig {
                base_url: args.product_database.product_database_url,
                request_timeout: Duration::from_secs(
                    args.product_database.product_database_timeout_secs,
                ),
            },
            history: HistoryConfig {
                capacity: args.history.history_capacity,
            },
            classification: ClassificationConfig {
                preferred_locale: args.product_database.ingredients_locale,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_into_config() {
        let args = Args::parse_from([
            "vegscan",
            "--gemini-api-key",
            "secret",
            "--llm-retry-base-delay-ms",
            "250",
            "--history-capacity",
            "10",
            "--allowed-origins",
            "http://a.test,http://b.test",
        ]);
        assert_eq!(args.server.allowed_origins.len(), 2);

        let config = VegScanConfig::from(args);
        assert_eq!(config.llm.gemini_api_key, "secret");
        assert_eq!(config.llm.base_retry_delay, Duration::from_millis(250));
        assert_eq!(config.history.capacity, 10);
    }
}
