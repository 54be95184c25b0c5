//! Project use-case service.
//!
//! # Responsibility
//! - Provide project create/update/delete/list entry points.
//! - Enforce the project ceiling and global name uniqueness.
//!
//! # Invariants
//! - A rename to the project's own current name is not a collision.
//! - Deleting a project cascades to all of its tasks through the store.

use crate::model::project::{Project, ProjectId};
use crate::service::{ServiceError, ServiceResult, MAX_PROJECTS};
use crate::store::memory_store::Store;
use log::info;
use std::cell::RefCell;
use std::rc::Rc;

/// Use-case service for project operations.
///
/// Shares the store with the task service through `Rc<RefCell<_>>`; the
/// core is single-threaded, so no borrow is ever held across calls.
pub struct ProjectService<S: Store> {
    store: Rc<RefCell<S>>,
}

impl<S: Store> ProjectService<S> {
    pub fn new(store: Rc<RefCell<S>>) -> Self {
        Self { store }
    }

    /// Creates a project after capacity and uniqueness checks.
    ///
    /// # Errors
    /// - `ProjectLimitReached` at `MAX_PROJECTS` live projects.
    /// - `DuplicateName` on an exact live-name collision.
    /// - `Validation` when name or description violate field rules.
    pub fn create_project(&self, name: &str, description: &str) -> ServiceResult<Project> {
        let mut store = self.store.borrow_mut();
        if store.project_count() >= MAX_PROJECTS {
            return Err(ServiceError::ProjectLimitReached { max: MAX_PROJECTS });
        }
        if store.project_by_name(name).is_some() {
            return Err(ServiceError::DuplicateName(name.to_string()));
        }
        let id = store.next_id();
        let project = Project::new(id, name, description)?;
        store.add_project(project.clone());
        info!("event=project_created module=service status=ok project_id={id}");
        Ok(project)
    }

    /// Replaces name and description of an existing project.
    ///
    /// # Errors
    /// - `ProjectNotFound` when `id` is absent.
    /// - `DuplicateName` when a *different* project already holds `name`.
    /// - `Validation` on field rule violations; stored state is untouched.
    pub fn update_project(
        &self,
        id: ProjectId,
        name: &str,
        description: &str,
    ) -> ServiceResult<Project> {
        let mut store = self.store.borrow_mut();
        let mut project = store
            .project(id)
            .ok_or(ServiceError::ProjectNotFound(id))?;
        if let Some(existing) = store.project_by_name(name) {
            if existing.id != id {
                return Err(ServiceError::DuplicateName(name.to_string()));
            }
        }
        project.rename(name, description)?;
        store.update_project(project.clone())?;
        info!("event=project_updated module=service status=ok project_id={id}");
        Ok(project)
    }

    /// Deletes a project and, through the store cascade, all of its tasks.
    pub fn delete_project(&self, id: ProjectId) -> ServiceResult<()> {
        let mut store = self.store.borrow_mut();
        if store.project(id).is_none() {
            return Err(ServiceError::ProjectNotFound(id));
        }
        let cascaded = store.task_count_in_project(id);
        store.delete_project(id);
        info!(
            "event=project_deleted module=service status=ok project_id={id} cascaded_tasks={cascaded}"
        );
        Ok(())
    }

    /// All live projects in creation order.
    pub fn all_projects(&self) -> Vec<Project> {
        self.store.borrow().all_projects()
    }

    /// One project by id, if present.
    pub fn project(&self, id: ProjectId) -> Option<Project> {
        self.store.borrow().project(id)
    }

    /// Live task count for a project; absent project yields 0.
    pub fn task_count(&self, id: ProjectId) -> usize {
        self.store.borrow().task_count_in_project(id)
    }
}
