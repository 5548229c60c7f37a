use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A rentable property as exposed to the browser.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image_src: String,
    pub category: String,
    pub room_count: i32,
    pub bathroom_count: i32,
    pub guest_count: i32,
    pub location_value: String,
    pub user_id: String,
    /// Nightly price in whole currency units.
    pub price: i32,
    pub created_at: DateTime<Utc>,
}

/// User record with credentials stripped.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SafeUser {
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Reservation {
    pub id: String,
    pub listing_id: String,
    pub user_id: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub total_price: i32,
    pub created_at: DateTime<Utc>,
}

/// Everything the listing page needs in one round trip.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ListingDetails {
    pub listing: Listing,
    pub owner: SafeUser,
    pub reservations: Vec<Reservation>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AuthResponse {
    pub success: bool,
    pub token: Option<String>,
    pub user: Option<SafeUser>,
    pub error: Option<String>,
}
