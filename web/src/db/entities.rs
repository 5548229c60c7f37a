use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared_types::{Listing, Reservation, SafeUser};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "ssr", derive(sqlx::FromRow))]
pub struct ListingRow {
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
    pub price: i32,
    pub created_at: DateTime<Utc>,
}

impl From<ListingRow> for Listing {
    fn from(row: ListingRow) -> Self {
        Listing {
            id: row.id,
            title: row.title,
            description: row.description,
            image_src: row.image_src,
            category: row.category,
            room_count: row.room_count,
            bathroom_count: row.bathroom_count,
            guest_count: row.guest_count,
            location_value: row.location_value,
            user_id: row.user_id,
            price: row.price,
            created_at: row.created_at,
        }
    }
}

/// Full user row. `hashed_password` never leaves the server.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "ssr", derive(sqlx::FromRow))]
pub struct UserRow {
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub image: Option<String>,
    pub hashed_password: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<UserRow> for SafeUser {
    fn from(row: UserRow) -> Self {
        SafeUser {
            id: row.id,
            name: row.name,
            email: row.email,
            image: row.image,
            created_at: row.created_at,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "ssr", derive(sqlx::FromRow))]
pub struct ReservationRow {
    pub id: String,
    pub listing_id: String,
    pub user_id: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub total_price: i32,
    pub created_at: DateTime<Utc>,
}

impl From<ReservationRow> for Reservation {
    fn from(row: ReservationRow) -> Self {
        Reservation {
            id: row.id,
            listing_id: row.listing_id,
            user_id: row.user_id,
            start_date: row.start_date,
            end_date: row.end_date,
            total_price: row.total_price,
            created_at: row.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn safe_user_drops_password_hash() {
        let row = UserRow {
            id: "u1".to_string(),
            name: Some("Ada".to_string()),
            email: Some("ada@example.com".to_string()),
            image: None,
            hashed_password: Some("$2b$12$abc".to_string()),
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        };
        let user = SafeUser::from(row);
        assert_eq!(user.id, "u1");
        assert_eq!(user.email.as_deref(), Some("ada@example.com"));
    }
}
