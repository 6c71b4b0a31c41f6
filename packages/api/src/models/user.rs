//! # User accounts
//!
//! ## [`User`] (server only)
//!
//! The full row of the `users` table, loaded with [`sqlx::FromRow`]:
//!
//! - `id`: primary key (`UUID`).
//! - `email`: login identifier, stored lowercased, unique.
//! - `name`: display name. Cifras record it as their author and the edit/delete
//!   check compares against it. It is not unique.
//! - `password_hash`: Argon2id PHC string.
//! - `created_at` / `updated_at`.
//!
//! ## [`UserInfo`]
//!
//! The client-safe projection sent through server functions: no hash, no
//! timestamps, `Uuid` rendered as a `String` so it works in WASM.

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// Full user record from the database.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl User {
    /// Convert to UserInfo for client consumption.
    pub fn to_info(&self) -> UserInfo {
        UserInfo {
            id: self.id.to_string(),
            email: self.email.clone(),
            name: self.name.clone(),
        }
    }
}

/// User information safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub name: String,
}

impl UserInfo {
    /// The name shown as "enviado por" and compared against a cifra's author.
    pub fn display_name(&self) -> &str {
        &self.name
    }
}
