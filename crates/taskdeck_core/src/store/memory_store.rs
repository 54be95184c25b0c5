//! Store contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide CRUD primitives over the project and task tables.
//! - Maintain the project-to-ordered-task-id index alongside every write.
//! - Allocate stable, monotonically increasing entity ids.
//!
//! # Invariants
//! - Cascade delete is atomic from the caller's perspective; no partial
//!   cascade is ever observable.
//! - Index buckets preserve task attachment order.
//! - Capacity limits are a service-layer rule, not enforced here.

use crate::model::project::{Project, ProjectId};
use crate::model::task::{Task, TaskId};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Referential-integrity error for store write operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    ProjectNotFound(ProjectId),
    TaskNotFound(TaskId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ProjectNotFound(id) => write!(f, "project not found: {id}"),
            Self::TaskNotFound(id) => write!(f, "task not found: {id}"),
        }
    }
}

impl Error for StoreError {}

/// Storage interface for project/task CRUD and id allocation.
///
/// Read operations return owned snapshots so callers never observe later
/// mutation through a shared reference.
pub trait Store {
    /// Allocates the next process-unique entity id.
    fn next_id(&mut self) -> u64;

    fn add_project(&mut self, project: Project);
    fn project(&self, id: ProjectId) -> Option<Project>;
    /// Linear scan, exact name match; used for uniqueness checks.
    fn project_by_name(&self, name: &str) -> Option<Project>;
    fn all_projects(&self) -> Vec<Project>;
    fn update_project(&mut self, project: Project) -> StoreResult<()>;
    /// Cascade delete: removes the project, its index bucket and every task
    /// listed in the bucket. No-op when the project is absent.
    fn delete_project(&mut self, id: ProjectId);
    fn project_count(&self) -> usize;

    /// Inserts a task under its owning project and appends its id to that
    /// project's bucket. Fails when the owning project is absent.
    fn add_task(&mut self, task: Task) -> StoreResult<()>;
    fn task(&self, id: TaskId) -> Option<Task>;
    /// Tasks in attachment order; absent project yields an empty list.
    fn tasks_by_project(&self, id: ProjectId) -> Vec<Task>;
    fn update_task(&mut self, task: Task) -> StoreResult<()>;
    /// Removes the task and filters its id out of the parent bucket,
    /// preserving the order of remaining ids. No-op when absent.
    fn delete_task(&mut self, id: TaskId);
    /// Absent project yields count 0.
    fn task_count_in_project(&self, id: ProjectId) -> usize;
}

/// In-memory store backed by ordered maps.
///
/// `BTreeMap` keeps iteration in id order, which equals creation order since
/// ids are allocated monotonically.
#[derive(Debug, Default)]
pub struct MemoryStore {
    next_id: u64,
    projects: BTreeMap<ProjectId, Project>,
    tasks: BTreeMap<TaskId, Task>,
    project_tasks: BTreeMap<ProjectId, Vec<TaskId>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for MemoryStore {
    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    fn add_project(&mut self, project: Project) {
        self.project_tasks.entry(project.id).or_default();
        self.projects.insert(project.id, project);
    }

    fn project(&self, id: ProjectId) -> Option<Project> {
        self.projects.get(&id).cloned()
    }

    fn project_by_name(&self, name: &str) -> Option<Project> {
        self.projects
            .values()
            .find(|project| project.name == name)
            .cloned()
    }

    fn all_projects(&self) -> Vec<Project> {
        self.projects.values().cloned().collect()
    }

    fn update_project(&mut self, project: Project) -> StoreResult<()> {
        if !self.projects.contains_key(&project.id) {
            return Err(StoreError::ProjectNotFound(project.id));
        }
        self.projects.insert(project.id, project);
        Ok(())
    }

    fn delete_project(&mut self, id: ProjectId) {
        let Some(bucket) = self.project_tasks.remove(&id) else {
            return;
        };
        for task_id in bucket {
            self.tasks.remove(&task_id);
        }
        self.projects.remove(&id);
    }

    fn project_count(&self) -> usize {
        self.projects.len()
    }

    fn add_task(&mut self, task: Task) -> StoreResult<()> {
        let Some(bucket) = self.project_tasks.get_mut(&task.project_id) else {
            return Err(StoreError::ProjectNotFound(task.project_id));
        };
        bucket.push(task.id);
        self.tasks.insert(task.id, task);
        Ok(())
    }

    fn task(&self, id: TaskId) -> Option<Task> {
        self.tasks.get(&id).cloned()
    }

    fn tasks_by_project(&self, id: ProjectId) -> Vec<Task> {
        let Some(bucket) = self.project_tasks.get(&id) else {
            return Vec::new();
        };
        bucket
            .iter()
            .filter_map(|task_id| self.tasks.get(task_id).cloned())
            .collect()
    }

    fn update_task(&mut self, task: Task) -> StoreResult<()> {
        if !self.tasks.contains_key(&task.id) {
            return Err(StoreError::TaskNotFound(task.id));
        }
        self.tasks.insert(task.id, task);
        Ok(())
    }

    fn delete_task(&mut self, id: TaskId) {
        let Some(task) = self.tasks.remove(&id) else {
            return;
        };
        if let Some(bucket) = self.project_tasks.get_mut(&task.project_id) {
            bucket.retain(|task_id| *task_id != id);
        }
    }

    fn task_count_in_project(&self, id: ProjectId) -> usize {
        self.project_tasks
            .get(&id)
            .map(Vec::len)
            .unwrap_or_default()
    }
}
