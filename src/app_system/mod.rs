//! System orchestration, startup, and shutdown logic.

pub mod checkout_system;
pub mod config;
pub mod telemetry;

pub use checkout_system::*;
pub use config::*;
pub use telemetry::*;
