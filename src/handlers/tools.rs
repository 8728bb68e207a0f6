use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::services::tools::{run_tool, Tool};
use crate::state::AppState;

#[derive(Serialize)]
pub struct ToolInfo {
    name: &'static str,
    description: &'static str,
}

// GET /api/tools
pub async fn list_tools() -> Json<Vec<ToolInfo>> {
    Json(
        Tool::ALL
            .iter()
            .map(|t| ToolInfo {
                name: t.name(),
                description: t.description(),
            })
            .collect(),
    )
}

#[derive(Deserialize, Default)]
pub struct ToolInput {
    #[serde(default)]
    pub input: String,
}

#[derive(Serialize)]
pub struct ToolOutput {
    pub tool: &'static str,
    pub output: String,
}

// POST /api/tools/:name
pub async fn invoke_tool(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    Json(payload): Json<ToolInput>,
) -> Result<Json<ToolOutput>, AppError> {
    let tool = Tool::parse(&name).ok_or_else(|| AppError::NotFound(format!("tool '{name}'")))?;
    let output = run_tool(&state, tool, &payload.input).await?;
    Ok(Json(ToolOutput {
        tool: tool.name(),
        output,
    }))
}
