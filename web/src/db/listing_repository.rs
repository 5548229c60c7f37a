#[cfg(feature = "ssr")]
use shared_types::{Listing, Reservation};

#[cfg(feature = "ssr")]
use super::entities::{ListingRow, ReservationRow};

#[cfg(feature = "ssr")]
type DbResult<T> = Result<T, sqlx::Error>;

/// Get a listing by id
#[cfg(feature = "ssr")]
pub async fn get_listing_by_id(listing_id: &str) -> DbResult<Option<Listing>> {
    let pool = crate::db::pool::get_pool()?;

    let row = sqlx::query_as::<_, ListingRow>(
        "SELECT id, title, description, image_src, category, room_count,
                bathroom_count, guest_count, location_value, user_id, price, created_at
         FROM listings
         WHERE id = $1",
    )
    .bind(listing_id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(Listing::from))
}

/// Get all reservations held against a listing, oldest stay first
#[cfg(feature = "ssr")]
pub async fn get_reservations_by_listing(listing_id: &str) -> DbResult<Vec<Reservation>> {
    let pool = crate::db::pool::get_pool()?;

    let rows = sqlx::query_as::<_, ReservationRow>(
        "SELECT id, listing_id, user_id, start_date, end_date, total_price, created_at
         FROM reservations
         WHERE listing_id = $1
         ORDER BY start_date ASC",
    )
    .bind(listing_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(Reservation::from).collect())
}
