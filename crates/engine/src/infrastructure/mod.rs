//! Infrastructure layer - port traits and their adapters.
//!
//! - `ports` - the persistence and clock contracts the use cases depend on
//! - `memory` - in-process store, used by tests and for quick local runs
//! - `sqlite` - durable store used by the binary

pub mod clock;
pub mod memory;
pub mod ports;
pub mod sqlite;
