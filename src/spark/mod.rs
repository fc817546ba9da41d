//! Spark chat-completion endpoint integration.

mod client;
mod types;

pub use client::SparkClient;
pub use types::{
    ChatMessage, ChatRequest, ChatResponse, Choice, ChoiceMessage, MessageRole, Usage,
    PROBE_TEMPERATURE,
};
