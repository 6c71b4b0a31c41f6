//! Author-gated editing.
//!
//! Ownership is a plain comparison between the display name stored on the cifra and
//! the display name of the current session. Display names are not unique, so anyone
//! registering the same name passes this check.

use crate::error::CifraError;
use crate::models::Cifra;

pub fn is_author(cifra: &Cifra, session_name: Option<&str>) -> bool {
    session_name.is_some_and(|name| name == cifra.autor)
}

pub fn ensure_author(cifra: &Cifra, session_name: Option<&str>) -> Result<(), CifraError> {
    match session_name {
        None => Err(CifraError::Unauthenticated),
        Some(name) if name == cifra.autor => Ok(()),
        Some(_) => Err(CifraError::NotAuthor),
    }
}

/// The loaded cifra, only while it is the record the page was opened for. A view
/// whose route id changed keeps the previous record until the new one arrives.
pub fn for_route(cifra: Option<Cifra>, route_id: &str) -> Option<Cifra> {
    cifra.filter(|c| c.id == route_id)
}
