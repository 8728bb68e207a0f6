use std::sync::Arc;

use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use resortdesk::config::AppConfig;
use resortdesk::services::ai::groq::GroqProvider;
use resortdesk::services::ai::ollama::OllamaProvider;
use resortdesk::services::ai::LlmProvider;
use resortdesk::services::intent::PatternIntentExtractor;
use resortdesk::services::search::tavily::TavilySearch;
use resortdesk::state::AppState;
use resortdesk::store::{FileBackend, Store};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let store = Store::new(Arc::new(FileBackend::new(
        &config.rooms_file,
        &config.bookings_file,
        &config.resort_data_file,
    )));
    let room_count = store.rooms()?.len();
    tracing::info!(rooms = room_count, file = %config.rooms_file, "loaded room data");

    let llm: Box<dyn LlmProvider> = match config.llm_provider.as_str() {
        "groq" => {
            anyhow::ensure!(
                !config.groq_api_key.is_empty(),
                "GROQ_API_KEY must be set when LLM_PROVIDER=groq"
            );
            tracing::info!("using Groq LLM provider (model: {})", config.groq_model);
            Box::new(GroqProvider::new(
                config.groq_api_key.clone(),
                config.groq_model.clone(),
            ))
        }
        _ => {
            tracing::info!("using Ollama LLM provider (url: {})", config.ollama_url);
            Box::new(OllamaProvider::new(
                config.ollama_url.clone(),
                config.ollama_model.clone(),
            ))
        }
    };

    if config.tavily_api_key.is_empty() {
        tracing::warn!("TAVILY_API_KEY not set, web search will be unavailable");
    }
    let search = TavilySearch::new(config.tavily_api_key.clone(), config.tavily_max_results);

    let state = Arc::new(AppState {
        store,
        llm,
        search: Box::new(search),
        extractor: Box::new(PatternIntentExtractor),
    });

    let app = resortdesk::router(state).layer(TraceLayer::new_for_http());

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
