//! Questbound progression engine.
//!
//! ## Structure
//!
//! - `use_cases/` - quest, skill and character operations
//! - `infrastructure/` - ports plus in-memory and SQLite adapters
//! - `config` - environment configuration
//! - `app` - application composition

pub mod app;
pub mod config;
pub mod infrastructure;
pub mod use_cases;

/// Shared builders for unit tests.
#[cfg(test)]
pub mod test_fixtures;

pub use app::App;
pub use config::{ConfigError, EngineConfig};
