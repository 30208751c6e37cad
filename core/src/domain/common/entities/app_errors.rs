use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Invalid barcode: {0}")]
    InvalidBarcode(String),

    #[error("Product not found")]
    ProductNotFound,

    #[error("Product database is unreachable: {0}")]
    ProductDatabaseUnavailable(String),

    #[error("Product database returned an error: {status} - {message}")]
    ProductDatabaseError { status: u16, message: String },

    #[error("Product database returned an unreadable response: {0}")]
    ProductDatabaseInvalidResponse(String),

    #[error("LLM API key is not configured")]
    LlmNotConfigured,

    #[error("LLM rate limit exceeded, try again later")]
    RateLimitExceeded,

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Not found")]
    NotFound,

    #[error("Internal server error")]
    InternalServerError,
}

impl CoreError {
    /// Message shown to the person scanning when a lookup cannot complete.
    pub fn user_message(&self) -> String {
        match self {
            CoreError::InvalidBarcode(_) => {
                "The barcode must contain between 8 and 14 digits.".to_string()
            }
            CoreError::ProductNotFound => {
                "Product not found in the OpenFoodFacts database.".to_string()
            }
            CoreError::ProductDatabaseUnavailable(_) => {
                "Could not reach the product database. Check your internet connection."
                    .to_string()
            }
            CoreError::ProductDatabaseError { status, .. } => {
                format!("The product database failed to answer (status {status}).")
            }
            CoreError::ProductDatabaseInvalidResponse(_) => {
                "The product database sent a response that could not be read.".to_string()
            }
            other => other.to_string(),
        }
    }
}
