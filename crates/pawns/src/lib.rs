//! Pawns - console tic-tac-toe
//!
//! Wires the [`pawns_engine`] game loop to a real terminal: command-line
//! flags, TOML configuration, tracing setup and a coloured stdio terminal.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod console;
mod telemetry;

pub use cli::Cli;
pub use config::{ConfigError, GameConfig};
pub use console::ConsoleTerminal;
pub use telemetry::init_tracing;
