//! Form validation, run in the browser before calling the server and again inside
//! the server functions before anything touches the database.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::CifraError;
use crate::models::CifraDraft;

pub const MIN_USERNAME_LEN: usize = 3;
pub const MIN_PASSWORD_LEN: usize = 6;

static EMAIL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"));

/// Title and body are required.
pub fn validate_draft(draft: &CifraDraft) -> Result<(), CifraError> {
    if draft.titulo.trim().is_empty() {
        return Err(CifraError::validation("O título é obrigatório."));
    }
    if draft.texto.trim().is_empty() {
        return Err(CifraError::validation("O texto da cifra é obrigatório."));
    }
    Ok(())
}

pub fn validate_registration(username: &str, email: &str, password: &str) -> Result<(), CifraError> {
    if username.trim().chars().count() < MIN_USERNAME_LEN {
        return Err(CifraError::validation(format!(
            "Nome de usuário deve ter pelo menos {MIN_USERNAME_LEN} caracteres."
        )));
    }
    if !is_valid_email(email) {
        return Err(CifraError::validation("Por favor, insira um email válido."));
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(CifraError::validation(format!(
            "A senha deve ter pelo menos {MIN_PASSWORD_LEN} caracteres."
        )));
    }
    Ok(())
}

pub fn validate_login(email: &str, password: &str) -> Result<(), CifraError> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(CifraError::validation("Informe email e senha."));
    }
    Ok(())
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email.trim())
}
