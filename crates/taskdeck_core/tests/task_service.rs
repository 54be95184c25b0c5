use chrono::NaiveDate;
use std::cell::RefCell;
use std::rc::Rc;
use taskdeck_core::{
    MemoryStore, Project, ProjectService, ServiceError, TaskService, TaskStatus, ValidationError,
    MAX_TASKS_PER_PROJECT,
};

fn services_with_project() -> (
    ProjectService<MemoryStore>,
    TaskService<MemoryStore>,
    Project,
) {
    let store = Rc::new(RefCell::new(MemoryStore::new()));
    let projects = ProjectService::new(Rc::clone(&store));
    let tasks = TaskService::new(store);
    let project = projects.create_project("inbox", "default project").unwrap();
    (projects, tasks, project)
}

#[test]
fn created_task_is_attached_with_default_status() {
    let (_projects, tasks, project) = services_with_project();

    let task = tasks
        .create_task(project.id, "buy milk", "two liters", Some("2026-03-01"))
        .unwrap();

    assert_eq!(task.project_id, project.id);
    assert_eq!(task.status, TaskStatus::Todo);
    assert_eq!(
        task.deadline,
        Some(NaiveDate::from_ymd_opt(2026, 3, 1).unwrap())
    );
    assert_eq!(tasks.task(task.id), Some(task));
}

#[test]
fn create_task_requires_existing_project() {
    let (_projects, tasks, _project) = services_with_project();

    let err = tasks
        .create_task(9999, "orphan", "no parent", None)
        .unwrap_err();
    assert_eq!(err, ServiceError::ProjectNotFound(9999));
}

#[test]
fn invalid_calendar_deadline_leaves_count_unchanged() {
    let (projects, tasks, project) = services_with_project();

    let err = tasks
        .create_task(project.id, "buy milk", "two liters", Some("2024-02-30"))
        .unwrap_err();

    assert!(matches!(
        err,
        ServiceError::Validation(ValidationError::InvalidDeadline { .. })
    ));
    assert_eq!(projects.task_count(project.id), 0);
}

#[test]
fn fifty_first_task_hits_the_ceiling() {
    let (projects, tasks, project) = services_with_project();

    for i in 0..MAX_TASKS_PER_PROJECT {
        tasks
            .create_task(project.id, &format!("task-{i}"), "capacity test", None)
            .unwrap();
    }

    let err = tasks
        .create_task(project.id, "one-too-many", "capacity test", None)
        .unwrap_err();
    assert_eq!(
        err,
        ServiceError::TaskLimitReached {
            project_id: project.id,
            max: MAX_TASKS_PER_PROJECT
        }
    );
    assert_eq!(projects.task_count(project.id), MAX_TASKS_PER_PROJECT);
}

#[test]
fn task_ceiling_is_per_project() {
    let (projects, tasks, project) = services_with_project();
    let other = projects.create_project("side", "second project").unwrap();

    for i in 0..MAX_TASKS_PER_PROJECT {
        tasks
            .create_task(project.id, &format!("task-{i}"), "capacity test", None)
            .unwrap();
    }

    // The sibling project still has room.
    assert!(tasks
        .create_task(other.id, "elsewhere", "different bucket", None)
        .is_ok());
}

#[test]
fn tasks_by_project_returns_attachment_order() {
    let (_projects, tasks, project) = services_with_project();

    let t1 = tasks
        .create_task(project.id, "first", "order test", None)
        .unwrap();
    let t2 = tasks
        .create_task(project.id, "second", "order test", None)
        .unwrap();

    let listed = tasks.tasks_by_project(project.id).unwrap();
    assert_eq!(listed, vec![t1, t2]);

    let err = tasks.tasks_by_project(9999).unwrap_err();
    assert_eq!(err, ServiceError::ProjectNotFound(9999));
}

#[test]
fn status_cycles_freely_and_reflects_last_value() {
    let (_projects, tasks, project) = services_with_project();
    let task = tasks
        .create_task(project.id, "buy milk", "two liters", None)
        .unwrap();

    for (input, expected) in [
        ("doing", TaskStatus::Doing),
        ("done", TaskStatus::Done),
        ("todo", TaskStatus::Todo),
        ("done", TaskStatus::Done),
    ] {
        let updated = tasks.change_task_status(task.id, input).unwrap();
        assert_eq!(updated.status, expected);
        assert_eq!(tasks.task(task.id).unwrap().status, expected);
    }
}

#[test]
fn unknown_status_keeps_prior_value() {
    let (_projects, tasks, project) = services_with_project();
    let task = tasks
        .create_task(project.id, "buy milk", "two liters", None)
        .unwrap();
    tasks.change_task_status(task.id, "doing").unwrap();

    let err = tasks.change_task_status(task.id, "blocked").unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Validation(ValidationError::UnknownStatus { .. })
    ));
    assert_eq!(tasks.task(task.id).unwrap().status, TaskStatus::Doing);
}

#[test]
fn change_status_of_absent_task_is_not_found() {
    let (_projects, tasks, _project) = services_with_project();

    let err = tasks.change_task_status(9999, "done").unwrap_err();
    assert_eq!(err, ServiceError::TaskNotFound(9999));
}

#[test]
fn update_task_replaces_all_fields_atomically() {
    let (_projects, tasks, project) = services_with_project();
    let created = tasks
        .create_task(project.id, "buy milk", "two liters", None)
        .unwrap();

    let updated = tasks
        .update_task(created.id, "buy bread", "one loaf", Some("2026-06-15"), "doing")
        .unwrap();
    assert_eq!(updated.title, "buy bread");
    assert_eq!(updated.description, "one loaf");
    assert_eq!(updated.status, TaskStatus::Doing);
    assert_eq!(
        updated.deadline,
        Some(NaiveDate::from_ymd_opt(2026, 6, 15).unwrap())
    );

    // Failed re-validation leaves the stored task exactly as it was.
    let err = tasks
        .update_task(created.id, "", "still valid", None, "done")
        .unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));
    assert_eq!(tasks.task(created.id), Some(updated));
}

#[test]
fn delete_task_spares_siblings_and_parent() {
    let (projects, tasks, project) = services_with_project();
    let t1 = tasks
        .create_task(project.id, "first", "sibling test", None)
        .unwrap();
    let t2 = tasks
        .create_task(project.id, "second", "sibling test", None)
        .unwrap();
    let t3 = tasks
        .create_task(project.id, "third", "sibling test", None)
        .unwrap();

    tasks.delete_task(t2.id).unwrap();

    assert_eq!(tasks.task(t2.id), None);
    let listed = tasks.tasks_by_project(project.id).unwrap();
    assert_eq!(listed, vec![t1, t3]);
    assert!(projects.project(project.id).is_some());

    let err = tasks.delete_task(t2.id).unwrap_err();
    assert_eq!(err, ServiceError::TaskNotFound(t2.id));
}
