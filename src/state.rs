use tokio::sync::RwLock;

use crate::models::Conversation;
use crate::openai::CompletionClient;
use crate::rate_limit::RateLimiter;

// App's shared state. Constructed once in main and handed to every handler
// by Arc; the rate limiter is owned here rather than living in a global so
// tests get clean per-instance state.
pub struct AppState {
    pub completions: CompletionClient,
    pub limiter: RateLimiter,
    pub conversations: RwLock<Vec<Conversation>>,
}

impl AppState {
    pub fn new(completions: CompletionClient, limiter: RateLimiter) -> Self {
        Self {
            completions,
            limiter,
            conversations: RwLock::new(mock_conversations()),
        }
    }
}

// Mock seed data standing in for a real database.
fn mock_conversations() -> Vec<Conversation> {
    vec![
        Conversation {
            id: "conv_1".to_string(),
            title: "Sample Conversation 1".to_string(),
            created_at: "2024-01-15T10:00:00Z".to_string(),
            updated_at: Some("2024-01-15T10:30:00Z".to_string()),
        },
        Conversation {
            id: "conv_2".to_string(),
            title: "Sample Conversation 2".to_string(),
            created_at: "2024-01-14T14:00:00Z".to_string(),
            updated_at: Some("2024-01-14T15:00:00Z".to_string()),
        },
    ]
}
