//! Settings loading and logging setup for programs that embed the
//! Enviratron filename parser.
//!
//! The parser itself never touches the environment; this crate resolves
//! [`ParserSettings`](enviratron_core::ParserSettings) from files, inline JSON
//! or defaults and installs the tracing subscriber the parser logs through.

pub mod loader;
pub mod logging;

pub use loader::{ParserSettingsLoader, SettingsFormat, SettingsSource};
pub use logging::init_tracing;
