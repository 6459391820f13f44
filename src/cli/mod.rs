//! CLI module for projboard - command-line interface and subcommands.
//!
//! Launches the TUI by default; `submit` runs one form submission without a
//! terminal UI.

pub mod commands;

pub use commands::Cli;
