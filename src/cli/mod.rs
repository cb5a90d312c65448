//! CLI layer - Command-line interface

pub mod commands;
pub mod output;
pub mod shell;

pub use commands::Cli;
pub use output::write_overview;
