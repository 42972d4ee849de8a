//! Flow configuration loading and parsing.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use onboardable::config::load_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join(".onboarding.yml"), "steps: [intro, profile]").unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! let sequence = config.build(None).unwrap();
//! assert_eq!(sequence.current_step().name().as_str(), "intro");
//! ```
//!
//! # Flow File Location
//!
//! The nearest `.onboarding.yml` (or `.onboarding.yaml`) at or above the
//! project root is used unless a path is given explicitly.

pub mod loader;
pub mod schema;

pub use loader::{find_config, load_config, load_config_file, parse_config, CONFIG_FILE_NAMES};
pub use schema::{FlowConfig, ProgressSetting, StepEntry};
