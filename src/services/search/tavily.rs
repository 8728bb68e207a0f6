use anyhow::Context;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use super::{SearchResult, WebSearch};

pub struct TavilySearch {
    api_key: String,
    max_results: u32,
    client: reqwest::Client,
}

impl TavilySearch {
    pub fn new(api_key: String, max_results: u32) -> Self {
        Self {
            api_key,
            max_results,
            client: reqwest::Client::new(),
        }
    }
}

#[derive(Deserialize)]
struct TavilyResponse {
    #[serde(default)]
    results: Vec<SearchResult>,
}

#[async_trait]
impl WebSearch for TavilySearch {
    async fn search(&self, query: &str) -> anyhow::Result<Vec<SearchResult>> {
        anyhow::ensure!(!self.api_key.is_empty(), "TAVILY_API_KEY is not set");

        let body = json!({
            "api_key": self.api_key,
            "query": query,
            "max_results": self.max_results,
        });

        let resp = self
            .client
            .post("https://api.tavily.com/search")
            .json(&body)
            .send()
            .await
            .context("failed to call Tavily API")?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            anyhow::bail!("Tavily API error ({status}): {text}");
        }

        let data: TavilyResponse = resp
            .json()
            .await
            .context("failed to parse Tavily response")?;

        Ok(data.results)
    }
}
