use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use crate::domain::{
    classification::ports::{LLMClient, MockLLMClient},
    common::entities::app_errors::CoreError,
};

/// Mock LLM that must not be called.
pub fn silent_llm() -> MockLLMClient {
    let mut llm = MockLLMClient::new();
    llm.expect_generate_with_text().never();
    llm
}

/// Mock LLM expecting exactly one call, answered with `reply`.
pub fn llm_replying_once(reply: Result<String, CoreError>) -> MockLLMClient {
    let mut llm = MockLLMClient::new();
    llm.expect_generate_with_text()
        .times(1)
        .returning(move |_, _| {
            let reply = reply.clone();
            Box::pin(async move { reply })
        });
    llm
}

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub prompt: String,
    pub with_schema: bool,
}

/// LLM double that replays scripted responses in order and records each prompt.
/// Running out of responses yields an `ExternalServiceError`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedLLMClient {
    responses: Arc<Mutex<VecDeque<Result<String, CoreError>>>>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl ScriptedLLMClient {
    pub fn new(responses: Vec<Result<String, CoreError>>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(responses.into())),
            calls: Arc::default(),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl LLMClient for ScriptedLLMClient {
    async fn generate_with_text(
        &self,
        prompt: String,
        response_schema: Option<serde_json::Value>,
    ) -> Result<String, CoreError> {
        self.calls.lock().unwrap().push(RecordedCall {
            prompt,
            with_schema: response_schema.is_some(),
        });
        self.responses.lock().unwrap().pop_front().unwrap_or_else(|| {
            Err(CoreError::ExternalServiceError(
                "no scripted response left".to_string(),
            ))
        })
    }
}
