//! Task domain model.
//!
//! # Responsibility
//! - Define the task record, its status enum and embedded validators.
//! - Parse optional deadlines from `YYYY-MM-DD` input.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `project_id` is set once at creation and immutable thereafter.
//! - `deadline` is always a real calendar date when present.

use crate::model::project::ProjectId;
use crate::model::{now_epoch_ms, validate_text, ValidationError, MAX_DESCRIPTION_CHARS, MAX_NAME_CHARS};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Stable identifier for a task, allocated by the store.
pub type TaskId = u64;

/// Task lifecycle state.
///
/// Transitions are unrestricted: any state is reachable from any other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Created but not started.
    #[default]
    Todo,
    /// Work is in progress.
    Doing,
    /// Completed.
    Done,
}

impl TaskStatus {
    /// Wire/display name for this status.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::Doing => "doing",
            Self::Done => "done",
        }
    }

    /// Parses a status from its wire name.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        match value {
            "todo" => Ok(Self::Todo),
            "doing" => Ok(Self::Doing),
            "done" => Ok(Self::Done),
            other => Err(ValidationError::UnknownStatus {
                value: other.to_string(),
            }),
        }
    }
}

/// A unit of work belonging to exactly one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable id, immutable after creation.
    pub id: TaskId,
    /// Owning project, set at creation in the service layer.
    pub project_id: ProjectId,
    /// 1-30 characters, non-blank.
    pub title: String,
    /// 1-150 characters, non-blank.
    pub description: String,
    /// Defaults to `Todo` at creation.
    pub status: TaskStatus,
    /// Optional due date, parsed from `YYYY-MM-DD`.
    pub deadline: Option<NaiveDate>,
    /// Creation stamp in epoch milliseconds.
    pub created_at_ms: i64,
}

impl Task {
    /// Creates a validated task attached to `project_id` with status `Todo`.
    ///
    /// # Errors
    /// - `BlankField` / `FieldTooLong` for title or description.
    /// - `InvalidDeadline` when a non-empty deadline fails to parse.
    pub fn new(
        id: TaskId,
        project_id: ProjectId,
        title: impl Into<String>,
        description: impl Into<String>,
        deadline: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        let description = description.into();
        validate_text("task title", &title, MAX_NAME_CHARS)?;
        validate_text("task description", &description, MAX_DESCRIPTION_CHARS)?;
        let deadline = parse_deadline(deadline)?;
        Ok(Self {
            id,
            project_id,
            title,
            description,
            status: TaskStatus::default(),
            deadline,
            created_at_ms: now_epoch_ms(),
        })
    }

    /// Replaces all mutable fields, re-running full validation.
    ///
    /// Every field is validated before any is assigned, so a failure leaves
    /// the entity exactly as it was.
    pub fn update(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        deadline: Option<&str>,
        status: &str,
    ) -> Result<(), ValidationError> {
        let title = title.into();
        let description = description.into();
        validate_text("task title", &title, MAX_NAME_CHARS)?;
        validate_text("task description", &description, MAX_DESCRIPTION_CHARS)?;
        let deadline = parse_deadline(deadline)?;
        let status = TaskStatus::parse(status)?;
        self.title = title;
        self.description = description;
        self.deadline = deadline;
        self.status = status;
        Ok(())
    }

    /// Sets status from its wire name, leaving every other field untouched.
    pub fn change_status(&mut self, status: &str) -> Result<(), ValidationError> {
        self.status = TaskStatus::parse(status)?;
        Ok(())
    }
}

/// Parses an optional `YYYY-MM-DD` deadline.
///
/// Absent or blank input is always valid and yields `None`. Present input
/// must be a real calendar date; `2024-02-30` is rejected, not normalized.
fn parse_deadline(value: Option<&str>) -> Result<Option<NaiveDate>, ValidationError> {
    let Some(raw) = value else {
        return Ok(None);
    };
    if raw.trim().is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| ValidationError::InvalidDeadline {
            value: raw.to_string(),
        })
}
