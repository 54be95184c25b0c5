//! Project domain model.
//!
//! # Responsibility
//! - Define the project record and its embedded field validators.
//!
//! # Invariants
//! - `id` is stable and never reused for another project.
//! - `name` and `description` always satisfy their length/blankness rules.
//! - Name uniqueness across live projects is a service-layer rule, not
//!   checked here.

use crate::model::{now_epoch_ms, validate_text, ValidationError, MAX_DESCRIPTION_CHARS, MAX_NAME_CHARS};
use serde::{Deserialize, Serialize};

/// Stable identifier for a project, allocated by the store.
pub type ProjectId = u64;

/// A named container for tasks.
///
/// Owned task ids are tracked by the store index, not on the entity, so a
/// project snapshot never goes stale against its task list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Stable id, immutable after creation.
    pub id: ProjectId,
    /// 1-30 characters, non-blank, unique among live projects.
    pub name: String,
    /// 1-150 characters, non-blank.
    pub description: String,
    /// Creation stamp in epoch milliseconds.
    pub created_at_ms: i64,
}

impl Project {
    /// Creates a validated project with the given stable id.
    ///
    /// # Errors
    /// - `BlankField` / `FieldTooLong` when name or description violate
    ///   their rules.
    pub fn new(
        id: ProjectId,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let description = description.into();
        validate_text("project name", &name, MAX_NAME_CHARS)?;
        validate_text("project description", &description, MAX_DESCRIPTION_CHARS)?;
        Ok(Self {
            id,
            name,
            description,
            created_at_ms: now_epoch_ms(),
        })
    }

    /// Replaces name and description, re-running full validation.
    ///
    /// Validation failure leaves the entity unchanged; there is no partial
    /// update path.
    pub fn rename(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<(), ValidationError> {
        let name = name.into();
        let description = description.into();
        validate_text("project name", &name, MAX_NAME_CHARS)?;
        validate_text("project description", &description, MAX_DESCRIPTION_CHARS)?;
        self.name = name;
        self.description = description;
        Ok(())
    }
}
