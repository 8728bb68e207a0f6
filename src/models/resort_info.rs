use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResortInfo {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl ResortInfo {
    /// True if any of the lowercased query words occurs in the title or description.
    pub fn matches_any(&self, words: &[&str]) -> bool {
        let title = self.title.as_deref().unwrap_or_default().to_lowercase();
        let description = self.description.as_deref().unwrap_or_default().to_lowercase();
        words
            .iter()
            .any(|w| title.contains(w) || description.contains(w))
    }

    pub fn to_human_readable(&self) -> String {
        format!(
            "**{}**\n{}",
            self.title.as_deref().unwrap_or("No Title"),
            self.description.as_deref().unwrap_or("No Description"),
        )
    }
}
