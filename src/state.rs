use crate::services::ai::LlmProvider;
use crate::services::intent::IntentExtractor;
use crate::services::search::WebSearch;
use crate::store::Store;

pub struct AppState {
    pub store: Store,
    pub llm: Box<dyn LlmProvider>,
    pub search: Box<dyn WebSearch>,
    pub extractor: Box<dyn IntentExtractor>,
}
