//! System orchestration, configuration, startup, and shutdown logic.

pub mod beer_system;
pub mod config;
pub mod telemetry;

pub use beer_system::*;
pub use config::*;
pub use telemetry::*;
