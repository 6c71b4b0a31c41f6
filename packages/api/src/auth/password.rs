//! # Account passwords
//!
//! `users.password_hash` holds an Argon2id PHC string produced by [`seal`].
//! [`check`] decides a login attempt. When no account has the email, the attempt
//! is still verified against a throwaway hash, so response time does not reveal
//! which emails are registered.

use std::sync::OnceLock;

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

use crate::models::User;

/// Outcome of a login attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    Rejected,
}

/// PHC string for a new account password.
pub fn seal(password: &str) -> Result<String, String> {
    let salt = SaltString::generate(&mut OsRng);
    let phc = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| format!("Failed to hash password: {e}"))?;
    Ok(phc.to_string())
}

/// `user` is the account registered under the attempted email, if any.
/// A stored hash that does not parse is an error, not a rejection.
pub fn check(user: Option<&User>, password: &str) -> Result<Verdict, String> {
    let stored = match user {
        Some(user) => user.password_hash.as_str(),
        None => decoy()?,
    };
    let parsed = PasswordHash::new(stored).map_err(|e| format!("Invalid password hash: {e}"))?;
    let matches = Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok();

    Ok(match (user, matches) {
        (Some(_), true) => Verdict::Accepted,
        (Some(user), false) => {
            tracing::warn!(user = %user.id, "Wrong password");
            Verdict::Rejected
        }
        (None, _) => {
            tracing::warn!("Login attempt for unknown email");
            Verdict::Rejected
        }
    })
}

fn decoy() -> Result<&'static str, String> {
    static DECOY: OnceLock<String> = OnceLock::new();
    if let Some(phc) = DECOY.get() {
        return Ok(phc);
    }
    let phc = seal("picasclub")?;
    Ok(DECOY.get_or_init(|| phc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn account(password: &str) -> User {
        User {
            id: Uuid::new_v4(),
            email: "luiz@forro.com.br".to_string(),
            name: "luiz".to_string(),
            password_hash: seal(password).unwrap(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_seal_is_salted_argon2id() {
        let a = seal("violão123").unwrap();
        let b = seal("violão123").unwrap();
        assert!(a.starts_with("$argon2id$"));
        assert_ne!(a, b);
    }

    #[test]
    fn test_check_account_password() {
        let user = account("violão123");
        assert_eq!(check(Some(&user), "violão123"), Ok(Verdict::Accepted));
        assert_eq!(check(Some(&user), "guitarra"), Ok(Verdict::Rejected));
    }

    #[test]
    fn test_unknown_email_is_rejected_even_with_decoy_password() {
        assert_eq!(check(None, "qualquer"), Ok(Verdict::Rejected));
        assert_eq!(check(None, "picasclub"), Ok(Verdict::Rejected));
    }

    #[test]
    fn test_malformed_stored_hash() {
        let mut user = account("x");
        user.password_hash = "not-a-phc-string".to_string();
        assert!(check(Some(&user), "x").is_err());
    }
}
