use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct StatusMessage {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct ConversationRequest {
    pub user_message: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ModelOutput {
    pub model_output: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}
