use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::headers::{Authorization, HeaderMapExt, authorization::Bearer};
use tracing::warn;

use crate::auth::AppState;
use crate::reply::ApiReply;

/// Resolve the `Authorization: Bearer` token and attach the session claim
/// to the request. Missing or unknown tokens get a 401.
pub async fn require_session(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiReply> {
    let auth = req
        .headers()
        .typed_get::<Authorization<Bearer>>()
        .ok_or_else(ApiReply::unauthorized)?;

    let claim = state.sessions.resolve(auth.token()).ok_or_else(|| {
        warn!("Rejected unknown session token on {}", req.uri().path());
        ApiReply::unauthorized()
    })?;

    req.extensions_mut().insert(claim);
    Ok(next.run(req).await)
}
