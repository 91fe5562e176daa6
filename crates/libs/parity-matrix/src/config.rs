use crate::error::MatrixError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_DOCUMENT_PATH: &str = "docs/be_ai_parity_matrix.md";
pub const DEFAULT_SCHEDULE_HEADING: &str = "## Remediation schedule";
pub const DEFAULT_STATUSES: [&str; 4] = ["implemented", "missing", "divergent", "stub"];

/// Status that exempts a row from schedule coverage.
pub const IMPLEMENTED_STATUS: &str = "implemented";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CheckConfig {
    pub document_path: String,
    pub allowed_statuses: Vec<String>,
    pub schedule_heading: String,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            document_path: DEFAULT_DOCUMENT_PATH.into(),
            allowed_statuses: DEFAULT_STATUSES.iter().map(|s| s.to_string()).collect(),
            schedule_heading: DEFAULT_SCHEDULE_HEADING.into(),
        }
    }
}

impl CheckConfig {
    pub fn from_toml(input: &str) -> Result<Self, MatrixError> {
        let mut config: Self =
            toml::from_str(input).map_err(|e| MatrixError::Decode(e.to_string()))?;
        for status in config.allowed_statuses.iter_mut() {
            *status = status.trim().to_lowercase();
        }
        if config.schedule_heading.trim().is_empty() {
            return Err(MatrixError::Decode("schedule_heading must not be empty".into()));
        }
        Ok(config)
    }

    pub fn load_from_path(path: &Path) -> Result<Self, MatrixError> {
        let raw = std::fs::read_to_string(path).map_err(|e| MatrixError::Io(e.to_string()))?;
        Self::from_toml(&raw)
    }

    pub fn example_toml() -> Result<String, MatrixError> {
        toml::to_string_pretty(&Self::default()).map_err(|e| MatrixError::Decode(e.to_string()))
    }

    /// Absolute document paths are used as-is; relative ones hang off `root`.
    pub fn resolve_document(&self, root: &Path) -> PathBuf {
        let path = Path::new(&self.document_path);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            root.join(path)
        }
    }

    /// Compares case-insensitively, so hand-built configs need not lowercase.
    pub fn status_allowed(&self, status: &str) -> bool {
        let status = status.trim().to_lowercase();
        self.allowed_statuses
            .iter()
            .any(|allowed| allowed.trim().to_lowercase() == status)
    }
}
