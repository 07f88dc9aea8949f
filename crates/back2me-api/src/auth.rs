use std::sync::Arc;

use axum::extract::State;
use tracing::{info, warn};

use back2me_store::{Store, StoreError};
use back2me_types::api::{ForgotPasswordResponse, LoginResponse, RegisterResponse};

use crate::codec::extract_field;
use crate::reply::ApiReply;
use crate::sessions::SessionRegistry;

pub type AppState = Arc<AppStateInner>;

/// Everything a handler can reach. Built once at startup and dropped at
/// shutdown; nothing here is global.
pub struct AppStateInner {
    pub store: Store,
    pub sessions: SessionRegistry,
}

impl AppStateInner {
    pub fn new(store: Store) -> AppState {
        Arc::new(Self {
            store,
            sessions: SessionRegistry::new(),
        })
    }
}

pub async fn register(State(state): State<AppState>, body: String) -> Result<ApiReply, ApiReply> {
    let username = extract_field(&body, "username");
    let email = extract_field(&body, "email");
    let password = extract_field(&body, "password");

    let user_id = state.store.register(&username, &email, &password)?;

    Ok(ApiReply::ok(&RegisterResponse { user_id }))
}

pub async fn login(State(state): State<AppState>, body: String) -> Result<ApiReply, ApiReply> {
    let email = extract_field(&body, "email");
    let password = extract_field(&body, "password");

    let user = state.store.authenticate(&email, &password).map_err(|e| {
        if matches!(e, StoreError::InvalidCredentials) {
            warn!("Failed login for '{}'", email);
        }
        ApiReply::from(e)
    })?;

    let session_token = state.sessions.issue(user.id, &user.username, &user.email);
    info!("Account {} logged in", user.id);

    Ok(ApiReply::ok(&LoginResponse {
        session_token,
        user,
    }))
}

/// Acknowledges a reset request for a known email. No mail is sent.
pub async fn forgot_password(
    State(state): State<AppState>,
    body: String,
) -> Result<ApiReply, ApiReply> {
    let email = extract_field(&body, "email");

    if state.store.find_account_by_email(&email)?.is_none() {
        return Err(ApiReply::fail("Email not found"));
    }

    info!("Password reset requested for '{}'", email);
    Ok(ApiReply::ok(&ForgotPasswordResponse {
        message: "Password reset link sent to email".into(),
    }))
}
