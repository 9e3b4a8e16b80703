//! YAML config file loading.
//!
//! A `.rowdiff.yaml` in the working directory supplies defaults that CLI
//! arguments override. Only settings that make sense to persist are
//! accepted: column selection, output format, and batch size.

use super::types::ColumnsConfig;
use crate::error::{Result, RowDiffError};
use crate::reports::ReportFormat;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default config file name, discovered in the working directory.
pub const CONFIG_FILE_NAME: &str = ".rowdiff.yaml";

/// Settings loadable from a config file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Default column selection
    pub columns: ColumnsConfig,
    /// Default output format
    pub format: Option<ReportFormat>,
    /// Default scan batch size
    pub batch_size: Option<usize>,
}

/// Find a config file in the working directory, if any.
#[must_use]
pub fn discover() -> Option<PathBuf> {
    let candidate = PathBuf::from(CONFIG_FILE_NAME);
    candidate.is_file().then_some(candidate)
}

/// Load a config file from an explicit path.
pub fn load(path: &Path) -> Result<FileConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| RowDiffError::io(path, e))?;
    serde_yaml::from_str(&content)
        .map_err(|e| RowDiffError::config(format!("{}: {e}", path.display())))
}

/// Load the explicit config file, or the discovered one, or defaults.
///
/// Returns the config and the path it was loaded from (`None` when
/// defaults were used). An explicit path that fails to load is an error;
/// a missing discovered file is not.
pub fn load_or_default(explicit: Option<&Path>) -> Result<(FileConfig, Option<PathBuf>)> {
    match explicit {
        Some(path) => {
            let config = load(path)?;
            Ok((config, Some(path.to_path_buf())))
        }
        None => match discover() {
            Some(path) => {
                let config = load(&path)?;
                tracing::debug!(path = %path.display(), "loaded config file");
                Ok((config, Some(path)))
            }
            None => Ok((FileConfig::default(), None)),
        },
    }
}
