use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{
    AccountId, AccountView, ConversationId, Message, MessageId, Post, PostId, PostStatus,
};

// Every response body is wrapped with a `success` flag by the codec; the
// types here only carry the payload fields beside it.

// -- Auth --

#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub user_id: AccountId,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub session_token: String,
    pub user: AccountView,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ForgotPasswordResponse {
    pub message: String,
}

// -- Posts --

#[derive(Debug, Default, Deserialize)]
pub struct PostsQuery {
    pub status: Option<String>,
    pub item_name: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

/// The listing shape of a post: no image reference or timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostSummary {
    pub id: PostId,
    pub user_id: AccountId,
    pub status: PostStatus,
    pub item_name: String,
    pub location: String,
    pub place: String,
    pub description: String,
}

impl From<&Post> for PostSummary {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id,
            user_id: post.user_id,
            status: post.status,
            item_name: post.item_name.clone(),
            location: post.location.clone(),
            place: post.place.clone(),
            description: post.description.clone(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PostsResponse {
    pub posts: Vec<PostSummary>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PostResponse {
    pub post: Post,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreatePostResponse {
    pub post_id: PostId,
    pub post: Post,
}

// -- Messages --

#[derive(Debug, Serialize, Deserialize)]
pub struct SendMessageResponse {
    pub message_id: MessageId,
    pub message: Message,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessagesResponse {
    pub messages: Vec<Message>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRef {
    pub id: AccountId,
    pub username: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ConversationSummary {
    pub conversation_id: ConversationId,
    pub other_user: Option<UserRef>,
    pub last_message: String,
    pub last_message_time: DateTime<Utc>,
    pub messages: Vec<Message>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ConversationsResponse {
    pub conversations: Vec<ConversationSummary>,
}

// -- Health --

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}
