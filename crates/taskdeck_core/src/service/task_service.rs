//! Task use-case service.
//!
//! # Responsibility
//! - Provide task create/update/status-change/delete/list entry points.
//! - Enforce parent existence and the per-project task ceiling.
//!
//! # Invariants
//! - Attachment to the owning project happens at creation, never later.
//! - Status transitions are unrestricted within the status enum.
//! - A failed update leaves the stored task exactly as it was.

use crate::model::project::ProjectId;
use crate::model::task::{Task, TaskId};
use crate::service::{ServiceError, ServiceResult, MAX_TASKS_PER_PROJECT};
use crate::store::memory_store::Store;
use log::info;
use std::cell::RefCell;
use std::rc::Rc;

/// Use-case service for task operations.
pub struct TaskService<S: Store> {
    store: Rc<RefCell<S>>,
}

impl<S: Store> TaskService<S> {
    pub fn new(store: Rc<RefCell<S>>) -> Self {
        Self { store }
    }

    /// Creates a task attached to `project_id` with default status `todo`.
    ///
    /// # Errors
    /// - `ProjectNotFound` when the owning project is absent.
    /// - `TaskLimitReached` at `MAX_TASKS_PER_PROJECT` tasks in the project.
    /// - `Validation` for field rule violations, including a deadline that
    ///   is not a real `YYYY-MM-DD` calendar date.
    pub fn create_task(
        &self,
        project_id: ProjectId,
        title: &str,
        description: &str,
        deadline: Option<&str>,
    ) -> ServiceResult<Task> {
        let mut store = self.store.borrow_mut();
        if store.project(project_id).is_none() {
            return Err(ServiceError::ProjectNotFound(project_id));
        }
        if store.task_count_in_project(project_id) >= MAX_TASKS_PER_PROJECT {
            return Err(ServiceError::TaskLimitReached {
                project_id,
                max: MAX_TASKS_PER_PROJECT,
            });
        }
        let id = store.next_id();
        let task = Task::new(id, project_id, title, description, deadline)?;
        store.add_task(task.clone())?;
        info!(
            "event=task_created module=service status=ok task_id={id} project_id={project_id}"
        );
        Ok(task)
    }

    /// Tasks of one project in attachment order.
    ///
    /// # Errors
    /// - `ProjectNotFound` when the project is absent.
    pub fn tasks_by_project(&self, project_id: ProjectId) -> ServiceResult<Vec<Task>> {
        let store = self.store.borrow();
        if store.project(project_id).is_none() {
            return Err(ServiceError::ProjectNotFound(project_id));
        }
        Ok(store.tasks_by_project(project_id))
    }

    /// One task by id, if present.
    pub fn task(&self, id: TaskId) -> Option<Task> {
        self.store.borrow().task(id)
    }

    /// Sets a task's status from its wire name, leaving other fields as-is.
    ///
    /// # Errors
    /// - `TaskNotFound` when `id` is absent.
    /// - `Validation` on an unknown status; the prior status is kept.
    pub fn change_task_status(&self, id: TaskId, status: &str) -> ServiceResult<Task> {
        let mut store = self.store.borrow_mut();
        let mut task = store.task(id).ok_or(ServiceError::TaskNotFound(id))?;
        task.change_status(status)?;
        store.update_task(task.clone())?;
        info!(
            "event=task_status_changed module=service status=ok task_id={id} task_status={}",
            task.status.as_str()
        );
        Ok(task)
    }

    /// Replaces all mutable fields of a task under full re-validation.
    ///
    /// # Errors
    /// - `TaskNotFound` when `id` is absent.
    /// - `Validation` on any field rule violation; nothing is replaced.
    pub fn update_task(
        &self,
        id: TaskId,
        title: &str,
        description: &str,
        deadline: Option<&str>,
        status: &str,
    ) -> ServiceResult<Task> {
        let mut store = self.store.borrow_mut();
        let mut task = store.task(id).ok_or(ServiceError::TaskNotFound(id))?;
        task.update(title, description, deadline, status)?;
        store.update_task(task.clone())?;
        info!("event=task_updated module=service status=ok task_id={id}");
        Ok(task)
    }

    /// Deletes one task, keeping its siblings and their order intact.
    pub fn delete_task(&self, id: TaskId) -> ServiceResult<()> {
        let mut store = self.store.borrow_mut();
        if store.task(id).is_none() {
            return Err(ServiceError::TaskNotFound(id));
        }
        store.delete_task(id);
        info!("event=task_deleted module=service status=ok task_id={id}");
        Ok(())
    }
}
