//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Persistence (in-memory for tests, SQLite for the binary)
//! - Clock (for testing)

mod error;
mod repos;
mod testing;
mod types;

pub use error::RepoError;
pub use repos::*;
pub use testing::ClockPort;
pub use types::RankedCharacter;
