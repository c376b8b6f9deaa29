mod chat;
mod health;
mod history;
mod metrics;
mod quota;
mod startups;

pub use chat::chat_handler;
pub use health::health_handler;
pub use history::{create_conversation_handler, get_history_handler};
pub use metrics::metrics_handler;
pub use quota::quota_handler;
pub use startups::{analyze_handler, discover_handler, search_handler};
