use clap::Parser;

// CLI argument structure
#[derive(Parser, Debug, Clone)]
#[command(name = "dealscout-api")]
#[command(about = "Deal sourcing AI backend - rate limited gateway to OpenAI")]
pub struct Args {
    // Port to run the server on
    #[arg(short, long, default_value_t = 8000)]
    pub port: u16,

    // Base URL of the OpenAI-compatible completions API
    #[arg(long, default_value = "https://api.openai.com")]
    pub openai_url: String,

    // Completion model to request
    #[arg(long, default_value = "gpt-3.5-turbo")]
    pub model: String,

    // Rate limit: max requests per client per window
    #[arg(long, default_value_t = 5)]
    pub rate_limit: u32,

    // Rate limit window in seconds
    #[arg(long, default_value_t = 3600)]
    pub rate_window: u64,

    // Allowed CORS origins (repeatable)
    #[arg(
        long = "cors-origin",
        default_values_t = [
            "http://localhost:3000".to_string(),
            "http://127.0.0.1:3000".to_string(),
        ]
    )]
    pub cors_origins: Vec<String>,
}
