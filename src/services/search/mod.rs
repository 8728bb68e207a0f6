pub mod tavily;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub content: String,
}

impl SearchResult {
    pub fn to_human_readable(&self) -> String {
        format!("**{}**\n{}\n{}", self.title, self.content, self.url)
    }
}

/// General web search, used for questions unrelated to the resort.
#[async_trait]
pub trait WebSearch: Send + Sync {
    async fn search(&self, query: &str) -> anyhow::Result<Vec<SearchResult>>;
}
