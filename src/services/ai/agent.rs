use serde::{Deserialize, Deserializer};

use crate::errors::AppError;
use crate::services::ai::{LlmProvider, Message};
use crate::services::tools::{run_tool, Tool};
use crate::state::AppState;

const SYSTEM_PROMPT: &str = r#"You are a concise resort booking assistant. Pick exactly one tool for the guest's message.

Return ONLY valid JSON (no markdown, no explanation) with this exact structure:
{
  "tool": "<tool name>",
  "input": "<tool input>"
}

Rules:
- For booking requests, use create_booking with the guest's full sentence as input.
- For cancelling or bills, pass only the customer's name.
- For resort amenities, dining or activities, use search_resort_info with the keywords.
- If the message is unrelated to the resort, use web_search with the question.
- If no tool fits, return {"reply": "<your short answer>"} instead.

Tools:
"#;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ToolCall {
    pub tool: Tool,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub input: String,
}

// Models often send `"input": null` for tools that take no input.
fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq)]
pub enum AgentDecision {
    Call(ToolCall),
    Reply(String),
}

#[derive(Deserialize)]
struct DirectReply {
    reply: String,
}

fn system_prompt() -> String {
    let tools = Tool::ALL
        .iter()
        .map(|t| format!("- {}: {}", t.name(), t.description()))
        .collect::<Vec<_>>()
        .join("\n");
    format!("{SYSTEM_PROMPT}{tools}")
}

pub async fn decide(llm: &dyn LlmProvider, utterance: &str) -> anyhow::Result<AgentDecision> {
    let messages = [Message {
        role: "user".to_string(),
        content: utterance.to_string(),
    }];
    let response = llm.chat(&system_prompt(), &messages).await?;
    Ok(parse_decision(&response))
}

/// Route one guest utterance to a tool and return only that tool's output.
pub async fn run_agent(state: &AppState, utterance: &str) -> Result<String, AppError> {
    let decision = decide(state.llm.as_ref(), utterance)
        .await
        .map_err(|e| AppError::Ai(format!("{e:#}")))?;

    match decision {
        AgentDecision::Call(call) => {
            tracing::info!(tool = call.tool.name(), "agent selected tool");
            run_tool(state, call.tool, &call.input).await
        }
        AgentDecision::Reply(text) => Ok(text),
    }
}

fn try_parse(text: &str) -> Option<AgentDecision> {
    if let Ok(call) = serde_json::from_str::<ToolCall>(text) {
        return Some(AgentDecision::Call(call));
    }
    serde_json::from_str::<DirectReply>(text)
        .ok()
        .map(|r| AgentDecision::Reply(r.reply))
}

fn parse_decision(response: &str) -> AgentDecision {
    if let Some(decision) = try_parse(response) {
        return decision;
    }

    // Strip markdown code fences
    let cleaned = response
        .trim()
        .strip_prefix("```json")
        .or_else(|| response.trim().strip_prefix("```"))
        .unwrap_or(response.trim());
    let cleaned = cleaned.strip_suffix("```").unwrap_or(cleaned).trim();

    if let Some(decision) = try_parse(cleaned) {
        return decision;
    }

    if let (Some(start), Some(end)) = (cleaned.find('{'), cleaned.rfind('}')) {
        if start < end {
            if let Some(decision) = try_parse(&cleaned[start..=end]) {
                return decision;
            }
        }
    }

    tracing::warn!("failed to parse LLM response as a tool call, replying with raw text");
    AgentDecision::Reply(response.to_string())
}
