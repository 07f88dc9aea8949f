use axum::{
    Extension,
    extract::{Path, State, rejection::PathRejection},
};
use tracing::debug;

use back2me_types::api::{ConversationsResponse, MessagesResponse, SendMessageResponse};
use back2me_types::models::{ConversationId, SessionClaim};

use crate::auth::AppState;
use crate::codec::extract_field;
use crate::reply::ApiReply;

/// Send a message as the session's account. The conversation and receiver
/// are taken on trust.
pub async fn send_message(
    State(state): State<AppState>,
    Extension(claim): Extension<SessionClaim>,
    body: String,
) -> Result<ApiReply, ApiReply> {
    let conversation_id = numeric_field(&body, "conversation_id")?;
    let receiver_id = numeric_field(&body, "receiver_id")?;
    let text = extract_field(&body, "message");

    let message = state
        .store
        .send_message(conversation_id, claim.user_id, receiver_id, &text)?;

    Ok(ApiReply::ok(&SendMessageResponse {
        message_id: message.id,
        message,
    }))
}

pub async fn get_messages(
    State(state): State<AppState>,
    conversation_id: Result<Path<ConversationId>, PathRejection>,
) -> Result<ApiReply, ApiReply> {
    let Path(conversation_id) = conversation_id.map_err(|e| {
        debug!("Bad conversation id: {}", e);
        ApiReply::fail("conversation_id must be a number")
    })?;
    let messages = state.store.get_messages(conversation_id)?;
    Ok(ApiReply::ok(&MessagesResponse { messages }))
}

pub async fn get_conversations(
    State(state): State<AppState>,
    Extension(claim): Extension<SessionClaim>,
) -> Result<ApiReply, ApiReply> {
    let conversations = state.store.conversations_for(claim.user_id)?;
    Ok(ApiReply::ok(&ConversationsResponse { conversations }))
}

fn numeric_field(body: &str, key: &str) -> Result<u64, ApiReply> {
    extract_field(body, key)
        .trim()
        .parse()
        .map_err(|_| ApiReply::fail(format!("{key} must be a number")))
}
