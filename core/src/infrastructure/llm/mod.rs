pub mod gemini_client;
pub mod retry;

pub use gemini_client::GeminiLLMClient;
pub use retry::RetryPolicy;
