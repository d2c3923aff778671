use crate::{
    Error, Result,
    llm::{ChatMessage, ConverseRequest, InferenceConfig, InferenceError, LlmClient},
};
use std::sync::Arc;
use tracing::{debug, error, info};

/// Hosted model every conversation is sent to.
pub const MODEL_ID: &str = "anthropic.claude-3-haiku-20240307-v1:0";

/// Wraps a single user message into a one-turn conversation and returns the
/// model's first text block.
#[derive(Clone)]
pub struct InferenceAdapter {
    llm_client: Arc<dyn LlmClient>,
    model_id: String,
    inference_config: InferenceConfig,
}

impl InferenceAdapter {
    pub fn new(llm_client: Arc<dyn LlmClient>) -> Self {
        Self {
            llm_client,
            model_id: MODEL_ID.to_string(),
            inference_config: InferenceConfig::default(),
        }
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    pub fn build_request(&self, user_message: &str) -> ConverseRequest {
        ConverseRequest {
            model_id: self.model_id.clone(),
            messages: vec![ChatMessage::user(user_message)],
            inference_config: self.inference_config,
        }
    }

    pub async fn generate(&self, user_message: &str) -> Result<String> {
        debug!(
            "Forwarding {} byte message to '{}'",
            user_message.len(),
            self.model_id
        );

        let request = self.build_request(user_message);
        let outcome = match self.llm_client.converse(request).await {
            Ok(response) => response.first_text().map(str::to_string).ok_or_else(|| {
                InferenceError::malformed_response("response contained no text content")
            }),
            Err(e) => Err(e),
        };

        match outcome {
            Ok(text) => {
                info!("Model output: {}", text);
                Ok(text)
            }
            Err(e) => {
                error!("Inference with '{}' failed: {:?}", self.model_id, e);
                Err(Error::invocation(&self.model_id, e))
            }
        }
    }
}
