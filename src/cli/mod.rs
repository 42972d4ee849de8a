//! Command-line interface for onboarding flows.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, ListArgs, MoveArgs, StatusArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
