use thiserror::Error;

/// Failure kinds reported by an [`LlmClient`](super::LlmClient).
///
/// Callers normally collapse these into one generic invocation error; the
/// kind is kept for logging and tests.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InferenceError {
    #[error("{0}")]
    Network(String),

    #[error("{0}")]
    Authentication(String),

    #[error("{0}")]
    Service(String),

    #[error("{0}")]
    MalformedResponse(String),
}

impl InferenceError {
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    pub fn authentication(msg: impl Into<String>) -> Self {
        Self::Authentication(msg.into())
    }

    pub fn service(msg: impl Into<String>) -> Self {
        Self::Service(msg.into())
    }

    pub fn malformed_response(msg: impl Into<String>) -> Self {
        Self::MalformedResponse(msg.into())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Assistant => write!(f, "assistant"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ContentBlock {
    Text(String),
    /// A block we do not interpret (tool use, reasoning, images...), tagged by kind.
    Other(String),
}

impl ContentBlock {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ContentBlock::Text(text) => Some(text.as_str()),
            ContentBlock::Other(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub role: Role,
    pub content: Vec<ContentBlock>,
}

impl ChatMessage {
    pub fn new(role: Role, content: Vec<ContentBlock>) -> Self {
        Self { role, content }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Role::User, vec![ContentBlock::Text(text.into())])
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InferenceConfig {
    pub max_tokens: i32,
    pub temperature: f32,
    /// Provider-specific sampling breadth, sent as an additional model field.
    pub top_k: u32,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            max_tokens: 4096,
            temperature: 0.0,
            top_k: 250,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConverseRequest {
    pub model_id: String,
    pub messages: Vec<ChatMessage>,
    pub inference_config: InferenceConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConverseResponse {
    pub message: Option<ChatMessage>,
    pub stop_reason: Option<String>,
    pub usage: Option<Usage>,
}

impl ConverseResponse {
    /// Text of the output message's first content block; `None` when that
    /// block is missing or is not text.
    pub fn first_text(&self) -> Option<&str> {
        self.message
            .as_ref()?
            .content
            .first()
            .and_then(ContentBlock::as_text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Usage {
    pub input_tokens: i32,
    pub output_tokens: i32,
    pub total_tokens: i32,
}
