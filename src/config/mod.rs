//! Configuration module for rowdiff.
//!
//! This module provides typed configuration with:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - YAML config file loading
//! - A builder for programmatic construction
//!
//! # Configuration file
//!
//! Place a `.rowdiff.yaml` in your working directory to persist defaults
//! that CLI arguments override:
//!
//! ```yaml
//! columns:
//!   key: [id]
//!   compare: [name, email]
//! format: json
//! ```

pub mod file;
mod types;
mod validation;

pub use file::{load_or_default, FileConfig, CONFIG_FILE_NAME};
pub use types::{
    BehaviorConfig, ColumnsConfig, DiffConfig, DiffConfigBuilder, DiffPaths, OutputConfig,
};
pub use validation::{ConfigError, Validatable};
