use serde::{Deserialize, Serialize};

// Chat endpoint request/response format
#[derive(Deserialize, Serialize, Clone)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub conversation_id: Option<String>,
}

#[derive(Deserialize, Serialize, Clone)]
pub struct ChatResponse {
    pub message: String,
    pub conversation_id: String,
}

// Stored conversation metadata (mock history store)
#[derive(Deserialize, Serialize, Clone)]
pub struct Conversation {
    pub id: String,
    pub title: String,
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Deserialize, Serialize, Clone)]
pub struct CreateConversationRequest {
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Deserialize, Serialize, Clone)]
pub struct DiscoverRequest {
    pub query: String,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub stage: Option<String>,
}

#[derive(Deserialize, Serialize, Clone)]
pub struct DiscoverResponse {
    pub results: String,
    pub query: String,
    pub remaining_requests: u32,
}

#[derive(Deserialize, Serialize, Clone)]
pub struct AnalyzeRequest {
    pub startup_name: String,
    #[serde(default = "default_analysis_type")]
    pub analysis_type: String,
}

fn default_analysis_type() -> String {
    "comprehensive".to_string()
}

#[derive(Deserialize, Serialize, Clone)]
pub struct AnalyzeResponse {
    pub analysis: String,
    pub startup_name: String,
    pub analysis_type: String,
    pub remaining_requests: u32,
}

#[derive(Deserialize, Serialize, Clone)]
pub struct SearchRequest {
    pub query: String,
    #[serde(default = "default_search_type")]
    pub search_type: String,
}

fn default_search_type() -> String {
    "all".to_string()
}

#[derive(Deserialize, Serialize, Clone)]
pub struct SearchResponse {
    pub results: String,
    pub query: String,
    pub search_type: String,
    pub remaining_requests: u32,
}

#[derive(Deserialize, Serialize, Clone)]
pub struct QuotaResponse {
    pub remaining_requests: u32,
    pub max_requests: u32,
    pub window_seconds: u64,
}
