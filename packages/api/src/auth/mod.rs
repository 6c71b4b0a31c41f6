//! Local (email + password) authentication.

#[cfg(feature = "server")]
mod password;
#[cfg(feature = "server")]
mod session;

#[cfg(feature = "server")]
pub use password::{check as check_password, seal as seal_password, Verdict};
#[cfg(feature = "server")]
pub use session::{current_user, sign_in, SESSION_USER_ID_KEY};
