//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait and is routed by
//! [`CommandDispatcher`]. Every command rebuilds the flow from its file;
//! nothing is persisted between invocations.

pub mod dispatcher;
pub mod display;
pub mod flow;
pub mod list;
pub mod navigate;
pub mod status;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
