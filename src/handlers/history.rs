use axum::Json;
use axum::extract::State;
use chrono::{SecondsFormat, Utc};
use std::sync::Arc;

use crate::models::{Conversation, CreateConversationRequest};
use crate::state::AppState;

pub async fn get_history_handler(State(state): State<Arc<AppState>>) -> Json<Vec<Conversation>> {
    let conversations = state.conversations.read().await;
    Json(conversations.clone())
}

pub async fn create_conversation_handler(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateConversationRequest>,
) -> Json<Conversation> {
    let mut conversations = state.conversations.write().await;
    let now = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
    let ordinal = conversations.len() + 1;

    let conversation = Conversation {
        id: format!("conv_{ordinal}"),
        title: payload
            .title
            .unwrap_or_else(|| format!("New Conversation {ordinal}")),
        created_at: now.clone(),
        updated_at: Some(now),
    };

    conversations.push(conversation.clone());
    Json(conversation)
}
