//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::error::Result;

/// Onboardable - Inspect and navigate onboarding flows.
#[derive(Debug, Parser)]
#[command(name = "onboardable")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to flow file (overrides discovery of .onboarding.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// The project root: `--project`, or the current directory.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the current directory cannot be read.
    pub fn project_root(&self) -> Result<PathBuf> {
        match &self.project {
            Some(project) => Ok(project.clone()),
            None => Ok(std::env::current_dir()?),
        }
    }
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show every step with its status and the overall progress (default)
    Status(StatusArgs),

    /// List the steps of the flow in order
    List(ListArgs),

    /// Move to the step after the current one
    Next(MoveArgs),

    /// Move to the step before the current one
    Prev(MoveArgs),
}

/// Arguments for the `status` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct StatusArgs {
    /// Step to treat as current (defaults to the flow's current step)
    #[arg(long)]
    pub current: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `next` and `prev` commands.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct MoveArgs {
    /// Step to move from (defaults to the flow's current step)
    #[arg(long)]
    pub current: Option<String>,
}
