//! # API crate: fullstack server functions for PicasClub
//!
//! Every function the web frontend calls on the server lives here, together with
//! the server-side modules they depend on.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`auth`] | always | Password hashing and the session ↔ user binding |
//! | [`db`] | always | PostgreSQL pool (lazy `OnceCell` singleton) and [`db::PgCifraStore`] |
//! | [`models`] | always | `User` rows and their client-safe projection `UserInfo` |
//! | `settings` | `server` | Layered configuration (defaults, `config.toml`, environment) |
//!
//! ## Server functions
//!
//! Each public `async fn` below is a Dioxus server function, compiled twice: with the
//! real body behind `#[cfg(feature = "server")]`, and as a client stub that forwards
//! the call over HTTP.
//!
//! - **Authentication**: `get_current_user`, `register`, `login`, `logout`
//! - **Cifras**: `list_cifras`, `get_cifra`, `search_cifras`, `create_cifra`,
//!   `update_cifra`, `delete_cifra`
//!
//! Cifra mutations go through [`store::Repository`], which validates the draft and
//! checks that the logged-in user's display name equals the cifra's author before
//! touching the database. Every error reaches the client as
//! `ServerFnError::new(message)`.

use dioxus::prelude::*;

pub mod auth;
pub mod db;
pub mod models;
#[cfg(feature = "server")]
pub mod settings;

pub use models::UserInfo;
pub use store::{Cifra, CifraDraft};

#[cfg(feature = "server")]
fn server_error(e: impl std::fmt::Display) -> ServerFnError {
    ServerFnError::new(e.to_string())
}

#[cfg(feature = "server")]
const DUPLICATE_EMAIL: &str = "Já existe uma conta com este email.";

/// Two signups with the same email can both pass the lookup; the loser hits the
/// `users.email` unique index.
#[cfg(feature = "server")]
fn registration_error(e: sqlx::Error) -> ServerFnError {
    match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            tracing::warn!("Concurrent registration for the same email");
            ServerFnError::new(DUPLICATE_EMAIL)
        }
        _ => server_error(e),
    }
}

#[cfg(feature = "server")]
async fn repository() -> Result<store::Repository<db::PgCifraStore>, ServerFnError> {
    let pool = db::get_pool().await.map_err(server_error)?;
    Ok(store::Repository::new(db::PgCifraStore::new(pool)))
}

/// Display name of the logged-in user, if any.
#[cfg(feature = "server")]
async fn session_name(session: &tower_sessions::Session) -> Result<Option<String>, ServerFnError> {
    let pool = db::get_pool().await.map_err(server_error)?;
    let user = auth::current_user(session, pool)
        .await
        .map_err(server_error)?;
    Ok(user.map(|u| u.name))
}

/// Get the current authenticated user from the session.
#[cfg(feature = "server")]
#[get("/api/auth/me", session: tower_sessions::Session)]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    let pool = db::get_pool().await.map_err(server_error)?;
    let user = auth::current_user(&session, pool)
        .await
        .map_err(server_error)?;

    Ok(user.map(|u| u.to_info()))
}

#[cfg(not(feature = "server"))]
#[get("/api/auth/me")]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    Ok(None)
}

/// Register a new account and log it in.
#[cfg(feature = "server")]
#[post("/api/auth/register", session: tower_sessions::Session)]
pub async fn register(
    email: String,
    password: String,
    name: String,
) -> Result<UserInfo, ServerFnError> {
    let email = email.trim().to_lowercase();
    let name = name.trim().to_string();

    store::validate::validate_registration(&name, &email, &password).map_err(server_error)?;

    let pool = db::get_pool().await.map_err(server_error)?;

    let existing: Option<(i32,)> = sqlx::query_as("SELECT 1 FROM users WHERE email = $1")
        .bind(&email)
        .fetch_optional(pool)
        .await
        .map_err(server_error)?;

    if existing.is_some() {
        return Err(ServerFnError::new(DUPLICATE_EMAIL));
    }

    let password_hash = auth::seal_password(&password).map_err(ServerFnError::new)?;

    let user: models::User = sqlx::query_as(
        "INSERT INTO users (email, name, password_hash) VALUES ($1, $2, $3) RETURNING *",
    )
    .bind(&email)
    .bind(&name)
    .bind(&password_hash)
    .fetch_one(pool)
    .await
    .map_err(registration_error)?;

    auth::sign_in(&session, &user).await.map_err(server_error)?;
    tracing::info!(user = %user.id, "Registered {}", user.name);

    Ok(user.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/register")]
pub async fn register(
    email: String,
    password: String,
    name: String,
) -> Result<UserInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Log in with email and password.
#[cfg(feature = "server")]
#[post("/api/auth/login", session: tower_sessions::Session)]
pub async fn login(email: String, password: String) -> Result<UserInfo, ServerFnError> {
    let email = email.trim().to_lowercase();

    store::validate::validate_login(&email, &password).map_err(server_error)?;

    let pool = db::get_pool().await.map_err(server_error)?;

    let user: Option<models::User> = sqlx::query_as("SELECT * FROM users WHERE email = $1")
        .bind(&email)
        .fetch_optional(pool)
        .await
        .map_err(server_error)?;

    let verdict = auth::check_password(user.as_ref(), &password).map_err(ServerFnError::new)?;
    let (Some(user), auth::Verdict::Accepted) = (user, verdict) else {
        return Err(ServerFnError::new("Email ou senha inválidos."));
    };

    auth::sign_in(&session, &user).await.map_err(server_error)?;

    Ok(user.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/login")]
pub async fn login(email: String, password: String) -> Result<UserInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Log out the current user by clearing the session.
#[cfg(feature = "server")]
#[post("/api/auth/logout", session: tower_sessions::Session)]
pub async fn logout() -> Result<(), ServerFnError> {
    session.flush().await.map_err(server_error)?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/logout")]
pub async fn logout() -> Result<(), ServerFnError> {
    Ok(())
}

/// All cifras, newest first.
#[cfg(feature = "server")]
#[get("/api/cifras")]
pub async fn list_cifras() -> Result<Vec<Cifra>, ServerFnError> {
    repository().await?.list().await.map_err(server_error)
}

#[cfg(not(feature = "server"))]
#[get("/api/cifras")]
pub async fn list_cifras() -> Result<Vec<Cifra>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// One cifra by id.
#[cfg(feature = "server")]
#[post("/api/cifras/get")]
pub async fn get_cifra(id: String) -> Result<Cifra, ServerFnError> {
    repository().await?.get(&id).await.map_err(server_error)
}

#[cfg(not(feature = "server"))]
#[post("/api/cifras/get")]
pub async fn get_cifra(id: String) -> Result<Cifra, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Cifras whose title or author contains `query`.
#[cfg(feature = "server")]
#[post("/api/cifras/search")]
pub async fn search_cifras(query: String) -> Result<Vec<Cifra>, ServerFnError> {
    repository().await?.search(&query).await.map_err(server_error)
}

#[cfg(not(feature = "server"))]
#[post("/api/cifras/search")]
pub async fn search_cifras(query: String) -> Result<Vec<Cifra>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Submit a new cifra authored by the logged-in user.
#[cfg(feature = "server")]
#[post("/api/cifras/create", session: tower_sessions::Session)]
pub async fn create_cifra(draft: CifraDraft) -> Result<Cifra, ServerFnError> {
    let name = session_name(&session).await?;
    let cifra = repository()
        .await?
        .submit(name.as_deref(), draft)
        .await
        .map_err(|e| {
            tracing::warn!("Submit refused: {e}");
            server_error(e)
        })?;

    tracing::info!(id = %cifra.id, "Cifra submitted by {}", cifra.autor);
    Ok(cifra)
}

#[cfg(not(feature = "server"))]
#[post("/api/cifras/create")]
pub async fn create_cifra(draft: CifraDraft) -> Result<Cifra, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Replace title, body and video of a cifra. Author only.
#[cfg(feature = "server")]
#[post("/api/cifras/update", session: tower_sessions::Session)]
pub async fn update_cifra(id: String, draft: CifraDraft) -> Result<Cifra, ServerFnError> {
    let name = session_name(&session).await?;
    let cifra = repository()
        .await?
        .edit(name.as_deref(), &id, draft)
        .await
        .map_err(|e| {
            tracing::warn!(id = %id, "Edit refused: {e}");
            server_error(e)
        })?;

    tracing::info!(id = %cifra.id, "Cifra updated");
    Ok(cifra)
}

#[cfg(not(feature = "server"))]
#[post("/api/cifras/update")]
pub async fn update_cifra(id: String, draft: CifraDraft) -> Result<Cifra, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Delete a cifra. Author only.
#[cfg(feature = "server")]
#[post("/api/cifras/delete", session: tower_sessions::Session)]
pub async fn delete_cifra(id: String) -> Result<(), ServerFnError> {
    let name = session_name(&session).await?;
    repository()
        .await?
        .remove(name.as_deref(), &id)
        .await
        .map_err(|e| {
            tracing::warn!(id = %id, "Delete refused: {e}");
            server_error(e)
        })?;

    tracing::info!(id = %id, "Cifra deleted");
    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/cifras/delete")]
pub async fn delete_cifra(id: String) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(all(test, feature = "server"))]
mod tests {
    use super::*;
    use sqlx::error::{DatabaseError, ErrorKind};
    use std::error::Error as StdError;

    #[derive(Debug)]
    struct EmailTaken;

    impl std::fmt::Display for EmailTaken {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.message())
        }
    }

    impl StdError for EmailTaken {}

    impl DatabaseError for EmailTaken {
        fn message(&self) -> &str {
            "duplicate key value violates unique constraint \"users_email_key\""
        }

        fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn StdError + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn StdError + Send + Sync + 'static> {
            self
        }

        fn kind(&self) -> ErrorKind {
            ErrorKind::UniqueViolation
        }
    }

    #[test]
    fn test_taken_email_on_insert() {
        let err = registration_error(sqlx::Error::Database(Box::new(EmailTaken)));
        assert!(err.to_string().contains(DUPLICATE_EMAIL));
    }

    #[test]
    fn test_other_insert_errors_pass_through() {
        let err = registration_error(sqlx::Error::RowNotFound);
        assert!(!err.to_string().contains(DUPLICATE_EMAIL));
        assert!(err.to_string().contains(&sqlx::Error::RowNotFound.to_string()));
    }
}
