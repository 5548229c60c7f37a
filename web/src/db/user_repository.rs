#[cfg(feature = "ssr")]
use shared_types::SafeUser;

#[cfg(feature = "ssr")]
use super::entities::UserRow;

#[cfg(feature = "ssr")]
type DbResult<T> = Result<T, sqlx::Error>;

#[cfg(feature = "ssr")]
pub async fn get_user_by_id(user_id: &str) -> DbResult<Option<SafeUser>> {
    let pool = crate::db::pool::get_pool()?;

    let row = sqlx::query_as::<_, UserRow>(
        "SELECT id, name, email, image, hashed_password, created_at
         FROM users
         WHERE id = $1",
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(SafeUser::from))
}

/// Full row including the password hash, for credential checks only
#[cfg(feature = "ssr")]
pub async fn get_user_by_email(email: &str) -> DbResult<Option<UserRow>> {
    let pool = crate::db::pool::get_pool()?;

    sqlx::query_as::<_, UserRow>(
        "SELECT id, name, email, image, hashed_password, created_at
         FROM users
         WHERE LOWER(email) = LOWER($1)",
    )
    .bind(email)
    .fetch_optional(pool)
    .await
}
