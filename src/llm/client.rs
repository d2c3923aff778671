use super::types::*;
use crate::config::BedrockConfig;
use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region, retry::RetryConfig};
use aws_sdk_bedrockruntime::{
    Client,
    error::{DisplayErrorContext, ProvideErrorMetadata, SdkError},
    operation::converse::{ConverseError, ConverseOutput},
    types as bedrock,
};
use aws_smithy_types::{Document, Number};
use std::collections::HashMap;
use tracing::debug;

/// Service error codes that mean the caller's credentials were refused.
const AUTH_ERROR_CODES: &[&str] = &[
    "AccessDeniedException",
    "UnrecognizedClientException",
    "ExpiredTokenException",
    "InvalidSignatureException",
    "MissingAuthenticationTokenException",
];

#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn converse(
        &self,
        request: ConverseRequest,
    ) -> Result<ConverseResponse, InferenceError>;
}

pub struct BedrockClient {
    client: Client,
}

impl BedrockClient {
    /// Resolves credentials through the default AWS provider chain. SDK retries
    /// are disabled: one request, one round trip.
    pub async fn new(config: &BedrockConfig) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .retry_config(RetryConfig::disabled());

        if let Some(endpoint_url) = &config.endpoint_url {
            loader = loader.endpoint_url(endpoint_url);
        }

        let sdk_config = loader.load().await;

        Self {
            client: Client::new(&sdk_config),
        }
    }

    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl LlmClient for BedrockClient {
    async fn converse(
        &self,
        request: ConverseRequest,
    ) -> Result<ConverseResponse, InferenceError> {
        debug!(
            "Invoking '{}' with {} messages",
            request.model_id,
            request.messages.len()
        );

        let mut messages = Vec::with_capacity(request.messages.len());
        for msg in &request.messages {
            messages.push(to_bedrock_message(msg)?);
        }

        let output = self
            .client
            .converse()
            .model_id(&request.model_id)
            .set_messages(Some(messages))
            .inference_config(to_inference_configuration(&request.inference_config))
            .additional_model_request_fields(additional_fields(&request.inference_config))
            .send()
            .await
            .map_err(classify_sdk_error)?;

        let response = from_converse_output(&output);

        debug!(
            "Received response from '{}' (stop reason: {:?})",
            request.model_id, response.stop_reason
        );

        Ok(response)
    }
}

fn to_bedrock_message(msg: &ChatMessage) -> Result<bedrock::Message, InferenceError> {
    let role = match msg.role {
        Role::User => bedrock::ConversationRole::User,
        Role::Assistant => bedrock::ConversationRole::Assistant,
    };

    let mut content = Vec::with_capacity(msg.content.len());
    for block in &msg.content {
        match block {
            ContentBlock::Text(text) => content.push(bedrock::ContentBlock::Text(text.clone())),
            ContentBlock::Other(kind) => {
                return Err(InferenceError::service(format!(
                    "Cannot send '{}' content blocks",
                    kind
                )));
            }
        }
    }

    bedrock::Message::builder()
        .role(role)
        .set_content(Some(content))
        .build()
        .map_err(|e| InferenceError::service(format!("Failed to build {} message: {}", msg.role, e)))
}

fn to_inference_configuration(config: &InferenceConfig) -> bedrock::InferenceConfiguration {
    bedrock::InferenceConfiguration::builder()
        .max_tokens(config.max_tokens)
        .temperature(config.temperature)
        .build()
}

fn additional_fields(config: &InferenceConfig) -> Document {
    Document::Object(HashMap::from([(
        "top_k".to_string(),
        Document::Number(Number::PosInt(u64::from(config.top_k))),
    )]))
}

fn from_converse_output(output: &ConverseOutput) -> ConverseResponse {
    let message = output
        .output()
        .and_then(|out| out.as_message().ok())
        .map(from_bedrock_message);

    let usage = output.usage().map(|u| Usage {
        input_tokens: u.input_tokens(),
        output_tokens: u.output_tokens(),
        total_tokens: u.total_tokens(),
    });

    ConverseResponse {
        message,
        stop_reason: Some(output.stop_reason().as_str().to_string()),
        usage,
    }
}

fn from_bedrock_message(msg: &bedrock::Message) -> ChatMessage {
    let role = match msg.role() {
        bedrock::ConversationRole::User => Role::User,
        _ => Role::Assistant,
    };

    let content = msg
        .content()
        .iter()
        .map(|block| match block {
            bedrock::ContentBlock::Text(text) => ContentBlock::Text(text.clone()),
            bedrock::ContentBlock::ToolUse(_) => ContentBlock::Other("tool_use".to_string()),
            bedrock::ContentBlock::Image(_) => ContentBlock::Other("image".to_string()),
            _ => ContentBlock::Other("unsupported".to_string()),
        })
        .collect();

    ChatMessage::new(role, content)
}

fn classify_sdk_error<R>(err: SdkError<ConverseError, R>) -> InferenceError
where
    R: std::fmt::Debug + 'static,
{
    let detail = DisplayErrorContext(&err).to_string();

    match &err {
        SdkError::TimeoutError(_) | SdkError::DispatchFailure(_) => InferenceError::Network(detail),
        SdkError::ResponseError(_) => InferenceError::MalformedResponse(detail),
        SdkError::ServiceError(context) => match context.err().code() {
            Some(code) if AUTH_ERROR_CODES.contains(&code) => {
                InferenceError::Authentication(detail)
            }
            _ => InferenceError::Service(detail),
        },
        _ => InferenceError::Service(detail),
    }
}
