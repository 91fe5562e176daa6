use crate::config::{CheckConfig, IMPLEMENTED_STATUS};
use crate::document::MatrixDocument;
use crate::names::normalise_function_names;
use crate::schedule::{parse_schedule, schedule_text};
use crate::table::{parse_table, MatrixEntry};

const PLACEHOLDER_ACCEPTANCE: &str = "tbd";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Unsupported status '{status}' for {function}")]
    UnsupportedStatus { status: String, function: String },
    #[error("Acceptance criteria missing for {function}")]
    MissingAcceptance { function: String },
    #[error("Remediation schedule section not found")]
    ScheduleNotFound,
    #[error("Remediation schedule missing coverage for '{function}'")]
    MissingCoverage { function: String },
}

impl ValidationError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UnsupportedStatus { .. } => "unsupported_status",
            Self::MissingAcceptance { .. } => "missing_acceptance",
            Self::ScheduleNotFound => "schedule_not_found",
            Self::MissingCoverage { .. } => "missing_coverage",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub entries: usize,
    pub schedule_items: usize,
    pub errors: Vec<ValidationError>,
}

impl ValidationReport {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn summary(&self) -> String {
        format!(
            "Validated {} matrix entries with schedule coverage for non-implemented items.",
            self.entries
        )
    }
}

pub fn validate_document(document: &MatrixDocument, config: &CheckConfig) -> ValidationReport {
    validate_lines(document.lines(), config)
}

/// Runs every rule over `lines` and collects all violations.
pub fn validate_lines<S: AsRef<str>>(lines: &[S], config: &CheckConfig) -> ValidationReport {
    let entries = parse_table(lines);
    let schedule = parse_schedule(lines, &config.schedule_heading);

    let mut errors = Vec::new();
    for entry in &entries {
        errors.extend(check_entry(entry, config));
    }

    if schedule.is_empty() {
        errors.push(ValidationError::ScheduleNotFound);
    } else {
        let text = schedule_text(&schedule);
        errors.extend(
            entries
                .iter()
                .filter(|entry| entry.status != IMPLEMENTED_STATUS)
                .filter(|entry| !is_covered(entry, &text))
                .map(|entry| ValidationError::MissingCoverage {
                    function: entry.function.clone(),
                }),
        );
    }

    log::info!(
        "parity matrix: {} entries, {} schedule items, {} errors",
        entries.len(),
        schedule.len(),
        errors.len()
    );

    ValidationReport {
        entries: entries.len(),
        schedule_items: schedule.len(),
        errors,
    }
}

fn check_entry(entry: &MatrixEntry, config: &CheckConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    if !config.status_allowed(&entry.status) {
        errors.push(ValidationError::UnsupportedStatus {
            status: entry.status.clone(),
            function: entry.function.clone(),
        });
    }
    if entry.acceptance.is_empty() || entry.acceptance.eq_ignore_ascii_case(PLACEHOLDER_ACCEPTANCE)
    {
        errors.push(ValidationError::MissingAcceptance {
            function: entry.function.clone(),
        });
    }
    errors
}

/// Any single alias appearing in the schedule text covers the row.
fn is_covered(entry: &MatrixEntry, schedule_text: &str) -> bool {
    normalise_function_names(&entry.function)
        .iter()
        .any(|name| schedule_text.contains(&name.to_lowercase()))
}
