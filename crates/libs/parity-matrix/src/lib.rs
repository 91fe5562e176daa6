//! Validation of feature-parity matrix documents.
//!
//! A matrix document is a markdown file holding a `Function | Retail reference |
//! Status | Acceptance` table and a `## Remediation schedule` checklist. Every row
//! needs an allowed status and real acceptance criteria, and every row that is
//! not `implemented` must be named by at least one unchecked schedule item.

pub mod config;
pub mod document;
pub mod error;
pub mod names;
pub mod schedule;
pub mod table;
pub mod validate;

pub use config::CheckConfig;
pub use document::MatrixDocument;
pub use error::MatrixError;
pub use names::normalise_function_names;
pub use schedule::{parse_schedule, schedule_text, ScheduleItem};
pub use table::{parse_table, MatrixEntry};
pub use validate::{validate_document, validate_lines, ValidationError, ValidationReport};

use std::path::Path;

/// Loads the configured document relative to `root` and validates it.
///
/// Only environment failures surface as `Err`; rule violations are collected in
/// the returned report.
pub fn check(config: &CheckConfig, root: &Path) -> Result<ValidationReport, MatrixError> {
    let path = config.resolve_document(root);
    log::info!("checking parity matrix {}", path.display());
    let document = MatrixDocument::load(&path)?;
    Ok(validate_document(&document, config))
}
