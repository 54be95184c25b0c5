//! Core domain logic for TaskDeck.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::project::{Project, ProjectId};
pub use model::task::{Task, TaskId, TaskStatus};
pub use model::{ValidationError, MAX_DESCRIPTION_CHARS, MAX_NAME_CHARS};
pub use service::project_service::ProjectService;
pub use service::task_service::TaskService;
pub use service::{
    ServiceError, ServiceResult, MAX_PROJECTS, MAX_TASKS_PER_PROJECT,
};
pub use store::memory_store::{MemoryStore, Store, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
