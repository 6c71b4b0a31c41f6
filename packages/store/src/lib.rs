pub mod access;
pub mod error;
pub mod models;
pub mod repo;
pub mod search;
pub mod validate;

mod memory;
pub use memory::MemoryStore;

pub use error::CifraError;
pub use models::{Cifra, CifraDraft};
pub use repo::{CifraStore, Repository};
