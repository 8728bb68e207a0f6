use crate::models::ResortInfo;
use crate::store::Store;

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum InfoError {
    #[error("Resort data file is missing or invalid.")]
    DataUnavailable,

    #[error("Query cannot be empty.")]
    EmptyQuery,

    #[error("No matching resort information found.")]
    NoMatch,
}

/// Records whose title or description contains any word of `query`, in file order.
pub fn search_info(store: &Store, query: &str) -> Result<Vec<ResortInfo>, InfoError> {
    let records = store.resort_info().map_err(|e| {
        tracing::warn!(error = %e, "resort data unavailable");
        InfoError::DataUnavailable
    })?;

    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Err(InfoError::EmptyQuery);
    }
    let words: Vec<&str> = query.split_whitespace().collect();

    let matches: Vec<ResortInfo> = records
        .into_iter()
        .filter(|r| r.matches_any(&words))
        .collect();

    if matches.is_empty() {
        return Err(InfoError::NoMatch);
    }
    Ok(matches)
}

pub fn to_human_readable(records: &[ResortInfo]) -> String {
    records
        .iter()
        .map(|r| r.to_human_readable())
        .collect::<Vec<_>>()
        .join("\n\n")
}
