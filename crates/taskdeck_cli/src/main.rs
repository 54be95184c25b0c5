//! Interactive menu entry point.
//!
//! # Responsibility
//! - Translate user input into `taskdeck_core` service calls.
//! - Render entity snapshots and recoverable errors as plain text.
//!
//! # Invariants
//! - No business rule lives here; every check belongs to the core services.
//! - Recoverable service errors never terminate the session.

use log::info;
use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;

use taskdeck_core::{
    core_version, default_log_level, init_logging, MemoryStore, Project, ProjectService,
    ServiceResult, Task, TaskService,
};

const MENU: &str = "\
==============================
TaskDeck v{version}
==============================
 1. Create project
 2. Edit project
 3. Delete project
 4. List projects
 5. Add task to project
 6. Change task status
 7. Edit task
 8. Delete task
 9. List tasks in project
 0. Exit
==============================";

fn main() {
    init_session_logging();

    let store = Rc::new(RefCell::new(MemoryStore::new()));
    let mut cli = Cli {
        input: io::stdin().lock(),
        projects: ProjectService::new(Rc::clone(&store)),
        tasks: TaskService::new(store),
    };
    info!("event=session_start module=cli status=ok");
    cli.run();
    info!("event=session_end module=cli status=ok");
}

/// Logging is best-effort for the interactive session; a failed init is
/// reported once and the session continues without file logs.
fn init_session_logging() {
    let log_dir = std::env::temp_dir().join("taskdeck").join("logs");
    let Some(dir) = log_dir.to_str() else {
        return;
    };
    if let Err(err) = init_logging(default_log_level(), dir) {
        eprintln!("file logging disabled: {err}");
    }
}

struct Cli<R: BufRead> {
    input: R,
    projects: ProjectService<MemoryStore>,
    tasks: TaskService<MemoryStore>,
}

impl<R: BufRead> Cli<R> {
    fn run(&mut self) {
        println!("Welcome to TaskDeck. All data is kept in memory only.");
        loop {
            println!("{}", MENU.replace("{version}", core_version()));
            let Some(choice) = self.prompt("Enter your choice: ") else {
                break;
            };
            match choice.as_str() {
                "1" => self.report(Self::create_project),
                "2" => self.report(Self::edit_project),
                "3" => self.report(Self::delete_project),
                "4" => self.report(Self::list_projects),
                "5" => self.report(Self::add_task),
                "6" => self.report(Self::change_task_status),
                "7" => self.report(Self::edit_task),
                "8" => self.report(Self::delete_task),
                "9" => self.report(Self::list_tasks),
                "0" => break,
                other => println!("invalid choice `{other}`"),
            }
        }
        println!("Goodbye.");
    }

    /// Runs one menu action and prints its error without ending the session.
    fn report(&mut self, action: fn(&mut Self) -> Option<ServiceResult<()>>) {
        match action(self) {
            // Prompt hit EOF mid-action; the main loop exits on next read.
            None => {}
            Some(Ok(())) => {}
            Some(Err(err)) => println!("error: {err}"),
        }
    }

    fn create_project(&mut self) -> Option<ServiceResult<()>> {
        println!("--- Create project ---");
        let name = self.prompt("Project name: ")?;
        let description = self.prompt("Project description: ")?;
        Some(self.projects.create_project(&name, &description).map(
            |project| {
                println!("created project #{} `{}`", project.id, project.name);
            },
        ))
    }

    fn edit_project(&mut self) -> Option<ServiceResult<()>> {
        println!("--- Edit project ---");
        let id = self.prompt_id("Project id: ")?;
        let name = self.prompt("New name: ")?;
        let description = self.prompt("New description: ")?;
        Some(
            self.projects
                .update_project(id, &name, &description)
                .map(|project| {
                    println!("updated project #{} `{}`", project.id, project.name);
                }),
        )
    }

    fn delete_project(&mut self) -> Option<ServiceResult<()>> {
        println!("--- Delete project ---");
        let id = self.prompt_id("Project id: ")?;
        let confirm =
            self.prompt("This deletes the project and ALL of its tasks. Continue? (y/n): ")?;
        if !confirm.eq_ignore_ascii_case("y") {
            println!("cancelled");
            return Some(Ok(()));
        }
        Some(self.projects.delete_project(id).map(|()| {
            println!("deleted project #{id} and all of its tasks");
        }))
    }

    fn list_projects(&mut self) -> Option<ServiceResult<()>> {
        println!("--- Projects ---");
        let projects = self.projects.all_projects();
        if projects.is_empty() {
            println!("(no projects yet)");
            return Some(Ok(()));
        }
        for project in projects {
            self.print_project(&project);
        }
        Some(Ok(()))
    }

    fn add_task(&mut self) -> Option<ServiceResult<()>> {
        println!("--- Add task ---");
        let project_id = self.prompt_id("Project id: ")?;
        let title = self.prompt("Task title: ")?;
        let description = self.prompt("Task description: ")?;
        let deadline = self.prompt("Deadline YYYY-MM-DD (blank for none): ")?;
        let deadline = non_blank(&deadline);
        Some(
            self.tasks
                .create_task(project_id, &title, &description, deadline)
                .map(|task| {
                    println!("created task #{} `{}`", task.id, task.title);
                }),
        )
    }

    fn change_task_status(&mut self) -> Option<ServiceResult<()>> {
        println!("--- Change task status ---");
        let id = self.prompt_id("Task id: ")?;
        let status = self.prompt("New status (todo|doing|done): ")?;
        Some(self.tasks.change_task_status(id, &status).map(|task| {
            println!("task #{} is now `{}`", task.id, task.status.as_str());
        }))
    }

    fn edit_task(&mut self) -> Option<ServiceResult<()>> {
        println!("--- Edit task ---");
        let id = self.prompt_id("Task id: ")?;
        let title = self.prompt("New title: ")?;
        let description = self.prompt("New description: ")?;
        let deadline = self.prompt("New deadline YYYY-MM-DD (blank for none): ")?;
        let status = self.prompt("New status (todo|doing|done): ")?;
        Some(
            self.tasks
                .update_task(id, &title, &description, non_blank(&deadline), &status)
                .map(|task| {
                    println!("updated task #{} `{}`", task.id, task.title);
                }),
        )
    }

    fn delete_task(&mut self) -> Option<ServiceResult<()>> {
        println!("--- Delete task ---");
        let id = self.prompt_id("Task id: ")?;
        Some(self.tasks.delete_task(id).map(|()| {
            println!("deleted task #{id}");
        }))
    }

    fn list_tasks(&mut self) -> Option<ServiceResult<()>> {
        println!("--- Tasks in project ---");
        let project_id = self.prompt_id("Project id: ")?;
        Some(self.tasks.tasks_by_project(project_id).map(|tasks| {
            if tasks.is_empty() {
                println!("(no tasks yet)");
                return;
            }
            for task in tasks {
                print_task(&task);
            }
        }))
    }

    fn print_project(&self, project: &Project) {
        println!(
            "#{} `{}` ({} tasks) {}",
            project.id,
            project.name,
            self.projects.task_count(project.id),
            project.description
        );
    }

    /// Reads one trimmed line; `None` means EOF and ends the session.
    fn prompt(&mut self, label: &str) -> Option<String> {
        print!("{label}");
        let _ = io::stdout().flush();
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_string()),
        }
    }

    /// Reads a numeric entity id, re-prompting on non-numeric input.
    fn prompt_id(&mut self, label: &str) -> Option<u64> {
        loop {
            let line = self.prompt(label)?;
            match line.parse::<u64>() {
                Ok(id) => return Some(id),
                Err(_) => println!("`{line}` is not a numeric id"),
            }
        }
    }
}

fn print_task(task: &Task) {
    let due = task
        .deadline
        .map(|date| format!(" due {}", date.format("%Y-%m-%d")))
        .unwrap_or_default();
    println!(
        "#{} [{}] `{}`{} {}",
        task.id,
        task.status.as_str(),
        task.title,
        due,
        task.description
    );
}

fn non_blank(value: &str) -> Option<&str> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use std::cell::RefCell;
    use std::io::Cursor;
    use std::rc::Rc;
    use taskdeck_core::{MemoryStore, ProjectService, Store, TaskService};

    fn scripted_cli(store: Rc<RefCell<MemoryStore>>, script: &str) -> Cli<Cursor<String>> {
        Cli {
            input: Cursor::new(script.to_string()),
            projects: ProjectService::new(Rc::clone(&store)),
            tasks: TaskService::new(store),
        }
    }

    #[test]
    fn declined_project_delete_keeps_project_and_tasks() {
        let store = Rc::new(RefCell::new(MemoryStore::new()));
        let projects = ProjectService::new(Rc::clone(&store));
        let tasks = TaskService::new(Rc::clone(&store));
        let project = projects.create_project("home", "household chores").unwrap();
        tasks
            .create_task(project.id, "buy milk", "two liters", None)
            .unwrap();

        let script = format!("3\n{}\nn\n0\n", project.id);
        scripted_cli(Rc::clone(&store), &script).run();

        assert!(store.borrow().project(project.id).is_some());
        assert_eq!(store.borrow().task_count_in_project(project.id), 1);
    }

    #[test]
    fn confirmed_project_delete_cascades() {
        let store = Rc::new(RefCell::new(MemoryStore::new()));
        let projects = ProjectService::new(Rc::clone(&store));
        let tasks = TaskService::new(Rc::clone(&store));
        let project = projects.create_project("home", "household chores").unwrap();
        let task = tasks
            .create_task(project.id, "buy milk", "two liters", None)
            .unwrap();

        // Upper-case confirmation is accepted, matching lenient y/n entry.
        let script = format!("3\n{}\nY\n0\n", project.id);
        scripted_cli(Rc::clone(&store), &script).run();

        assert!(store.borrow().project(project.id).is_none());
        assert!(store.borrow().task(task.id).is_none());
    }
}
