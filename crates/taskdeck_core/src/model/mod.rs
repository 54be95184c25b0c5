//! Domain model for projects and tasks.
//!
//! # Responsibility
//! - Define the canonical data structures used by core business logic.
//! - Enforce field-level validation at construction and update time.
//!
//! # Invariants
//! - Every domain object is identified by a stable store-allocated id.
//! - No entity instance ever holds a field that fails its validator.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod project;
pub mod task;

/// Upper bound for project names and task titles, in characters.
pub const MAX_NAME_CHARS: usize = 30;
/// Upper bound for project and task descriptions, in characters.
pub const MAX_DESCRIPTION_CHARS: usize = 150;

/// Field-level validation failure, independent of storage state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is empty or whitespace-only.
    BlankField { field: &'static str },
    /// Field exceeds its character limit.
    FieldTooLong { field: &'static str, max: usize },
    /// Deadline is present but not a valid `YYYY-MM-DD` calendar date.
    InvalidDeadline { value: String },
    /// Status string is outside the task status enum.
    UnknownStatus { value: String },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankField { field } => write!(f, "{field} must not be blank"),
            Self::FieldTooLong { field, max } => {
                write!(f, "{field} must be at most {max} characters")
            }
            Self::InvalidDeadline { value } => {
                write!(f, "invalid deadline `{value}`; expected YYYY-MM-DD")
            }
            Self::UnknownStatus { value } => {
                write!(f, "unknown task status `{value}`; expected todo|doing|done")
            }
        }
    }
}

impl Error for ValidationError {}

/// Validates a mandatory text field against blankness and a character limit.
///
/// Limits count `char`s, not bytes, so multi-byte input is not penalized.
pub(crate) fn validate_text(
    field: &'static str,
    value: &str,
    max: usize,
) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::BlankField { field });
    }
    if value.chars().count() > max {
        return Err(ValidationError::FieldTooLong { field, max });
    }
    Ok(())
}

/// Epoch milliseconds for entity creation stamps.
pub(crate) fn now_epoch_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
