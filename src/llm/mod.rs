mod client;
mod types;

pub use client::{BedrockClient, LlmClient};
pub use types::*;
