use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub rooms_file: String,
    pub bookings_file: String,
    pub resort_data_file: String,
    pub llm_provider: String,
    pub ollama_url: String,
    pub ollama_model: String,
    pub groq_api_key: String,
    pub groq_model: String,
    pub tavily_api_key: String,
    pub tavily_max_results: u32,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            rooms_file: env::var("ROOMS_FILE").unwrap_or_else(|_| "rooms.json".to_string()),
            bookings_file: env::var("BOOKINGS_FILE")
                .unwrap_or_else(|_| "bookings.json".to_string()),
            resort_data_file: env::var("RESORT_DATA_FILE")
                .unwrap_or_else(|_| "data/resort_data.json".to_string()),
            llm_provider: env::var("LLM_PROVIDER").unwrap_or_else(|_| "ollama".to_string()),
            ollama_url: env::var("OLLAMA_URL")
                .unwrap_or_else(|_| "http://localhost:11434".to_string()),
            ollama_model: env::var("OLLAMA_MODEL").unwrap_or_else(|_| "llama3.2".to_string()),
            groq_api_key: env::var("GROQ_API_KEY").unwrap_or_default(),
            groq_model: env::var("GROQ_MODEL")
                .unwrap_or_else(|_| "llama-3.3-70b-versatile".to_string()),
            tavily_api_key: env::var("TAVILY_API_KEY").unwrap_or_default(),
            tavily_max_results: env::var("TAVILY_MAX_RESULTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
        }
    }
}
