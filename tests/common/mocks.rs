use async_trait::async_trait;
use bedrock_gateway::llm::{
    ChatMessage, ContentBlock, ConverseRequest, ConverseResponse, InferenceError, LlmClient, Role,
    Usage,
};
use std::sync::{Arc, Mutex};

/// Mock LLM client for testing
#[derive(Debug)]
pub struct MockLlmClient {
    pub response: Option<ConverseResponse>,
    pub requests: Arc<Mutex<Vec<ConverseRequest>>>,
    pub error: Option<InferenceError>,
}

impl MockLlmClient {
    pub fn new() -> Self {
        Self {
            response: None,
            requests: Arc::new(Mutex::new(Vec::new())),
            error: None,
        }
    }

    /// Answers every request with a single text block
    pub fn replying(text: &str) -> Self {
        Self::new().with_response(create_mock_converse_response(text))
    }

    pub fn failing(error: InferenceError) -> Self {
        Self::new().with_error(error)
    }

    pub fn with_response(mut self, response: ConverseResponse) -> Self {
        self.response = Some(response);
        self
    }

    pub fn with_error(mut self, error: InferenceError) -> Self {
        self.error = Some(error);
        self
    }

    pub fn get_requests(&self) -> Vec<ConverseRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn converse(
        &self,
        request: ConverseRequest,
    ) -> Result<ConverseResponse, InferenceError> {
        self.requests.lock().unwrap().push(request);

        if let Some(ref error) = self.error {
            return Err(error.clone());
        }

        self.response
            .clone()
            .ok_or_else(|| InferenceError::service("No mock response configured"))
    }
}

impl Default for MockLlmClient {
    fn default() -> Self {
        Self::new()
    }
}

pub fn create_mock_converse_response(text: &str) -> ConverseResponse {
    ConverseResponse {
        message: Some(ChatMessage::new(
            Role::Assistant,
            vec![ContentBlock::Text(text.to_string())],
        )),
        stop_reason: Some("end_turn".to_string()),
        usage: Some(Usage {
            input_tokens: 10,
            output_tokens: 5,
            total_tokens: 15,
        }),
    }
}
