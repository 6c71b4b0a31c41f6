//! Session handling: the session only stores the user id; the user row is loaded
//! on every request so a renamed user is seen with the new name right away.

use sqlx::PgPool;
use tower_sessions::Session;
use uuid::Uuid;

use crate::models::User;

/// Key for storing user ID in session.
pub const SESSION_USER_ID_KEY: &str = "user_id";

/// The logged-in user, if any.
pub async fn current_user(session: &Session, pool: &PgPool) -> Result<Option<User>, String> {
    let user_id: Option<String> = session
        .get(SESSION_USER_ID_KEY)
        .await
        .map_err(|e| e.to_string())?;

    let Some(user_id) = user_id else {
        return Ok(None);
    };

    let Ok(user_uuid) = Uuid::parse_str(&user_id) else {
        tracing::warn!("Discarding session with malformed user id");
        return Ok(None);
    };

    sqlx::query_as("SELECT * FROM users WHERE id = $1")
        .bind(user_uuid)
        .fetch_optional(pool)
        .await
        .map_err(|e| e.to_string())
}

/// Bind the session to `user`, rotating the session id.
pub async fn sign_in(session: &Session, user: &User) -> Result<(), String> {
    session.cycle_id().await.map_err(|e| e.to_string())?;
    session
        .insert(SESSION_USER_ID_KEY, user.id.to_string())
        .await
        .map_err(|e| e.to_string())
}
