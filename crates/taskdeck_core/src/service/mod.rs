//! Core use-case services.
//!
//! # Responsibility
//! - Enforce cross-entity business rules (capacity limits, name uniqueness,
//!   existence checks) on top of the store.
//! - Act as the only components that mutate store state.
//!
//! # Invariants
//! - Every mutating operation either fully succeeds or leaves all state
//!   exactly as before the call.
//! - Services never bypass entity validation.

use crate::model::project::ProjectId;
use crate::model::task::TaskId;
use crate::model::ValidationError;
use crate::store::memory_store::StoreError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod project_service;
pub mod task_service;

/// Ceiling on live projects, enforced at creation time.
pub const MAX_PROJECTS: usize = 10;
/// Ceiling on live tasks per project, enforced at creation time.
pub const MAX_TASKS_PER_PROJECT: usize = 50;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Error surface of the service layer toward the presentation layer.
///
/// Every variant is recoverable; the interactive session is never expected
/// to terminate on one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Field content violates a static rule.
    Validation(ValidationError),
    /// Referenced project does not exist.
    ProjectNotFound(ProjectId),
    /// Referenced task does not exist.
    TaskNotFound(TaskId),
    /// Project name collides with an existing live project.
    DuplicateName(String),
    /// Project count is at its ceiling.
    ProjectLimitReached { max: usize },
    /// Per-project task count is at its ceiling.
    TaskLimitReached { project_id: ProjectId, max: usize },
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::ProjectNotFound(id) => write!(f, "project not found: {id}"),
            Self::TaskNotFound(id) => write!(f, "task not found: {id}"),
            Self::DuplicateName(name) => {
                write!(f, "project with name `{name}` already exists")
            }
            Self::ProjectLimitReached { max } => {
                write!(f, "cannot create more than {max} projects")
            }
            Self::TaskLimitReached { project_id, max } => {
                write!(
                    f,
                    "cannot create more than {max} tasks in project {project_id}"
                )
            }
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for ServiceError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for ServiceError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::ProjectNotFound(id) => Self::ProjectNotFound(id),
            StoreError::TaskNotFound(id) => Self::TaskNotFound(id),
        }
    }
}
