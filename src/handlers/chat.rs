use axum::Json;
use sha2::{Digest, Sha256};

use crate::models::{ChatRequest, ChatResponse};

// Derive a stable conversation id from the message content
fn derive_conversation_id(message: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(message.as_bytes());
    let digest = hasher.finalize();
    let short = u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]]);
    format!("conv_{short:08x}")
}

// Placeholder chat endpoint; the real AI routes are /api/discover,
// /api/analyze and /api/search.
pub async fn chat_handler(Json(payload): Json<ChatRequest>) -> Json<ChatResponse> {
    let conversation_id = payload
        .conversation_id
        .unwrap_or_else(|| derive_conversation_id(&payload.message));

    Json(ChatResponse {
        message: format!("This is a placeholder response to: {}", payload.message),
        conversation_id,
    })
}
