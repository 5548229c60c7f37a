use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::{Deserialize, Serialize};
use shared_types::SafeUser;
use thiserror::Error;

use crate::server::fetch_current_user;

pub const AUTH_TOKEN_KEY: &str = "haven_auth_token";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    pub sub: String, // User ID
    pub exp: usize,  // Expiration time
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid token: {0}")]
    InvalidToken(String),
    #[error("could not issue token: {0}")]
    Issue(String),
    #[error("password check failed: {0}")]
    Password(String),
}

/// The signed-in user for this browser tab.
///
/// Pages read it once and hand `user` down as a prop; components below the
/// page never look it up themselves.
#[derive(Clone, Copy)]
pub struct Session {
    pub user: RwSignal<Option<SafeUser>>,
    pub resolved: RwSignal<bool>,
}

impl Session {
    pub fn sign_in(&self, token: &str, user: SafeUser) {
        store_token(token);
        self.user.set(Some(user));
        self.resolved.set(true);
    }

    pub fn sign_out(&self) {
        clear_token();
        self.user.set(None);
    }
}

/// Creates the session, resolves any stored token against the server and
/// provides it as context.
pub fn provide_session() -> Session {
    let session = Session {
        user: RwSignal::new(None),
        resolved: RwSignal::new(false),
    };

    // Effects only run in the browser, where the token lives.
    Effect::new(move |_| {
        let Some(token) = get_stored_token() else {
            session.resolved.set(true);
            return;
        };

        spawn_local(async move {
            match fetch_current_user(Some(token)).await {
                Ok(Some(user)) => session.user.set(Some(user)),
                Ok(None) => clear_token(),
                Err(e) => {
                    leptos::logging::warn!("Failed to resolve session: {}", e);
                }
            }
            session.resolved.set(true);
        });
    });

    provide_context(session);
    session
}

pub fn use_session() -> Session {
    expect_context::<Session>()
}

fn local_storage() -> Option<web_sys::Storage> {
    #[cfg(feature = "hydrate")]
    let storage = web_sys::window().and_then(|window| window.local_storage().ok().flatten());

    // No localStorage on the server
    #[cfg(not(feature = "hydrate"))]
    let storage = None;

    storage
}

pub fn get_stored_token() -> Option<String> {
    local_storage()
        .and_then(|storage| storage.get_item(AUTH_TOKEN_KEY).ok().flatten())
        .filter(|token| !token.is_empty())
}

pub fn store_token(token: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(AUTH_TOKEN_KEY, token);
    }
}

pub fn clear_token() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(AUTH_TOKEN_KEY);
    }
}

/// Signs a session token for `user_id`.
#[cfg(feature = "ssr")]
pub fn issue_token(user_id: &str, secret: &str, ttl_seconds: u64) -> Result<String, AuthError> {
    use jsonwebtoken::{encode, EncodingKey, Header};

    let exp = chrono::Utc::now().timestamp() as u64 + ttl_seconds;
    let claims = Claims {
        sub: user_id.to_string(),
        exp: exp as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )
    .map_err(|e| AuthError::Issue(e.to_string()))
}

/// Returns the user id carried by a valid, unexpired token.
#[cfg(feature = "ssr")]
pub fn verify_token(token: &str, secret: &str) -> Result<String, AuthError> {
    use jsonwebtoken::{decode, DecodingKey, Validation};

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_ref()),
        &Validation::default(),
    )
    .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

    Ok(token_data.claims.sub)
}

#[cfg(feature = "ssr")]
pub fn verify_password(password: &str, hashed: &str) -> Result<bool, AuthError> {
    bcrypt::verify(password, hashed).map_err(|e| AuthError::Password(e.to_string()))
}
