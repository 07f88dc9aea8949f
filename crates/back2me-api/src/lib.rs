pub mod auth;
pub mod codec;
pub mod messages;
pub mod middleware;
pub mod posts;
pub mod reply;
pub mod sessions;

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use back2me_types::api::HealthResponse;

use crate::auth::AppState;
use crate::middleware::require_session;
use crate::reply::ApiReply;

/// Build the full HTTP surface. Business errors are in-band, unknown paths
/// get a JSON 404, and CORS is open to any origin.
pub fn router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/api/register", post(auth::register))
        .route("/api/login", post(auth::login))
        .route("/api/forgot-password", post(auth::forgot_password))
        .route("/api/posts", get(posts::list_posts))
        .route("/api/posts/search", get(posts::search_posts))
        .route("/api/posts/{post_id}", get(posts::get_post))
        .route("/api/messages/{conversation_id}", get(messages::get_messages))
        .route("/health", get(health))
        .with_state(state.clone());

    let protected_routes = Router::new()
        .route("/api/posts", post(posts::create_post))
        .route("/api/messages", post(messages::send_message))
        .route("/api/conversations", get(messages::get_conversations))
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            require_session,
        ))
        .with_state(state);

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .fallback(not_found)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

async fn not_found() -> ApiReply {
    ApiReply::not_found()
}

async fn health() -> ApiReply {
    ApiReply::ok(&HealthResponse {
        status: "ok".into(),
    })
}
