//! Error taxonomy shared by the server functions and the views.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CifraError {
    #[error("Cifra não encontrada.")]
    NotFound,

    #[error("Você precisa estar logado.")]
    Unauthenticated,

    #[error("Só quem enviou a cifra pode alterá-la.")]
    NotAuthor,

    #[error("{0}")]
    Validation(String),

    #[error("Erro de armazenamento: {0}")]
    Storage(String),
}

impl CifraError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn storage(err: impl std::fmt::Display) -> Self {
        Self::Storage(err.to_string())
    }
}
