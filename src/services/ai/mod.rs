pub mod agent;
pub mod groq;
pub mod ollama;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

#[async_trait]
pub trait LlmProvider: Send + Sync {
    async fn chat(&self, system_prompt: &str, messages: &[Message]) -> anyhow::Result<String>;
}

/// System prompt followed by the conversation, in the OpenAI-style shape
/// both providers accept.
fn chat_messages(system_prompt: &str, messages: &[Message]) -> Vec<serde_json::Value> {
    std::iter::once(serde_json::json!({
        "role": "system",
        "content": system_prompt,
    }))
    .chain(messages.iter().map(|msg| {
        serde_json::json!({
            "role": msg.role,
            "content": msg.content,
        })
    }))
    .collect()
}
