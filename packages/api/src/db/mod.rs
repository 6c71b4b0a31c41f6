//! # Database module: PostgreSQL pool and the cifra table
//!
//! Server only. [`get_pool`] hands out a lazily created, process-wide pool whose URL
//! and size come from [`crate::settings::Settings`]. [`PgCifraStore`] implements
//! [`store::CifraStore`] on top of it, so [`store::Repository`] applies the same
//! validation and author checks here as in tests.

#[cfg(feature = "server")]
mod cifras;
#[cfg(feature = "server")]
mod pool;

#[cfg(feature = "server")]
pub use cifras::PgCifraStore;
#[cfg(feature = "server")]
pub use pool::get_pool;
