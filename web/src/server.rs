use leptos::prelude::*;
use leptos::server;
use shared_types::{AuthResponse, ListingDetails, SafeUser};

#[cfg(feature = "ssr")]
use crate::booking::parse_listing_id;
#[cfg(feature = "ssr")]
use crate::config::AppConfig;
#[cfg(feature = "ssr")]
use crate::db::listing_repository::{get_listing_by_id, get_reservations_by_listing};
#[cfg(feature = "ssr")]
use crate::db::user_repository::{get_user_by_email, get_user_by_id};
#[cfg(feature = "ssr")]
use crate::utils::auth::{issue_token, verify_password, verify_token};

/// Listing, owner and reservations for the listing page.
/// `Ok(None)` when the id is malformed or unknown.
#[server]
pub async fn fetch_listing_details(
    listing_id: String,
) -> Result<Option<ListingDetails>, ServerFnError> {
    let listing_id = match parse_listing_id(&listing_id) {
        Ok(id) => id,
        Err(e) => {
            tracing::debug!(error = %e, "rejected listing id");
            return Ok(None);
        }
    };

    let Some(listing) = get_listing_by_id(&listing_id).await.map_err(|e| {
        tracing::error!(error = %e, listing_id = %listing_id, "listing lookup failed");
        ServerFnError::new(format!("Failed to fetch listing: {}", e))
    })?
    else {
        return Ok(None);
    };

    let owner = get_user_by_id(&listing.user_id)
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to fetch owner: {}", e)))?
        .ok_or_else(|| {
            tracing::error!(listing_id = %listing.id, user_id = %listing.user_id, "listing has no owner");
            ServerFnError::new("Listing owner not found".to_string())
        })?;

    let reservations = get_reservations_by_listing(&listing.id)
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to fetch reservations: {}", e)))?;

    tracing::debug!(
        listing_id = %listing.id,
        reservations = reservations.len(),
        "loaded listing details"
    );

    Ok(Some(ListingDetails {
        listing,
        owner,
        reservations,
    }))
}

/// Resolves a stored token to its user. Missing, invalid or expired tokens
/// are treated as signed out.
#[server]
pub async fn fetch_current_user(token: Option<String>) -> Result<Option<SafeUser>, ServerFnError> {
    let Some(token) = token else {
        return Ok(None);
    };

    let user_id = match verify_token(&token, &AppConfig::get().jwt_secret) {
        Ok(id) => id,
        Err(e) => {
            tracing::debug!(error = %e, "ignoring invalid session token");
            return Ok(None);
        }
    };

    get_user_by_id(&user_id)
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to fetch user: {}", e)))
}

#[server]
pub async fn login_user(email: String, password: String) -> Result<AuthResponse, ServerFnError> {
    let rejected = || AuthResponse {
        success: false,
        token: None,
        user: None,
        error: Some("Invalid email or password".to_string()),
    };

    let Some(row) = get_user_by_email(email.trim())
        .await
        .map_err(|e| ServerFnError::new(format!("Database error: {}", e)))?
    else {
        return Ok(rejected());
    };

    let Some(hashed) = row.hashed_password.as_deref() else {
        return Ok(rejected());
    };

    if !verify_password(&password, hashed).map_err(|e| ServerFnError::new(e.to_string()))? {
        tracing::info!(user_id = %row.id, "login rejected");
        return Ok(rejected());
    }

    let config = AppConfig::get();
    let token = issue_token(&row.id, &config.jwt_secret, config.jwt_expiration_seconds)
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    tracing::info!(user_id = %row.id, "user logged in");

    Ok(AuthResponse {
        success: true,
        token: Some(token),
        user: Some(SafeUser::from(row)),
        error: None,
    })
}
