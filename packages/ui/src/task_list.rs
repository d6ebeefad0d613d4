use dioxus::prelude::*;
use store::models::format_day;
use store::{Task, TaskStatus};

use crate::icons::{FaStar, FaTrashCan};
use crate::session::{current_repository, use_backend, use_session};
use crate::toast::{toast_error, toast_success, use_toasts};
use crate::Icon;

/// Task cards with star, delete and status controls. `on_change` fires after
/// any successful write so the parent can refetch.
#[component]
pub fn TaskList(tasks: Vec<Task>, on_change: EventHandler<()>) -> Element {
    let backend = use_backend();
    let session = use_session();
    let mut toasts = use_toasts();

    let star_backend = backend.clone();
    let handle_star = move |task: Task| {
        let Some(repo) = current_repository(&star_backend, session) else {
            return;
        };
        spawn(async move {
            match repo.toggle_task_star(&task).await {
                Ok(_) => on_change.call(()),
                Err(e) => {
                    tracing::error!(task_id = %task.id, "star task: {e}");
                    toast_error(&mut toasts, "Error", "Failed to update task");
                }
            }
        });
    };

    let delete_backend = backend.clone();
    let handle_delete = move |task: Task| {
        let Some(repo) = current_repository(&delete_backend, session) else {
            return;
        };
        spawn(async move {
            match repo.delete_task(task.id).await {
                Ok(()) => {
                    toast_success(&mut toasts, "Success", "Task deleted successfully");
                    on_change.call(());
                }
                Err(e) => {
                    tracing::error!(task_id = %task.id, "delete task: {e}");
                    toast_error(&mut toasts, "Error", "Failed to delete task");
                }
            }
        });
    };

    let status_backend = backend.clone();
    let handle_status = move |task: Task| {
        let Some(repo) = current_repository(&status_backend, session) else {
            return;
        };
        let next = task.status.unwrap_or(TaskStatus::Pending).next();
        spawn(async move {
            match repo.set_task_status(task.id, next).await {
                Ok(_) => on_change.call(()),
                Err(e) => {
                    tracing::error!(task_id = %task.id, "task status: {e}");
                    toast_error(&mut toasts, "Error", "Failed to update task");
                }
            }
        });
    };

    if tasks.is_empty() {
        return rsx! {
            p { class: "empty", "No tasks yet. Add one to get started!" }
        };
    }

    rsx! {
        div {
            class: "card-grid",
            for task in tasks {
                TaskCard {
                    key: "{task.id}",
                    task,
                    on_star: handle_star.clone(),
                    on_delete: handle_delete.clone(),
                    on_status: handle_status.clone(),
                }
            }
        }
    }
}

#[component]
fn TaskCard(
    task: Task,
    on_star: EventHandler<Task>,
    on_delete: EventHandler<Task>,
    on_status: EventHandler<Task>,
) -> Element {
    let status = task.status.unwrap_or(TaskStatus::Pending);
    let status_class = match status {
        TaskStatus::Completed => "chip chip--done",
        TaskStatus::InProgress => "chip chip--doing",
        _ => "chip",
    };
    let title_class = if task.is_completed() {
        "card-title card-title--done"
    } else {
        "card-title"
    };

    rsx! {
        div {
            class: "card task-card",
            div {
                class: "card-header",
                h3 { class: title_class, "{task.title}" }
                div {
                    class: "card-actions",
                    button {
                        class: if task.is_starred { "btn btn-ghost btn-icon star star--on" } else { "btn btn-ghost btn-icon star" },
                        title: if task.is_starred { "Unstar" } else { "Star" },
                        onclick: {
                            let task = task.clone();
                            move |_| on_star.call(task.clone())
                        },
                        Icon { icon: FaStar, width: 14, height: 14 }
                    }
                    button {
                        class: "btn btn-ghost btn-icon btn-danger",
                        title: "Delete",
                        onclick: {
                            let task = task.clone();
                            move |_| on_delete.call(task.clone())
                        },
                        Icon { icon: FaTrashCan, width: 14, height: 14 }
                    }
                }
            }
            div {
                class: "card-body",
                if let Some(description) = &task.description {
                    p { "{description}" }
                }
                if let Some(due) = task.due_date {
                    div { class: "muted", "Due: {format_day(due)}" }
                }
                div {
                    class: "row",
                    button {
                        class: status_class,
                        title: "Change status",
                        onclick: {
                            let task = task.clone();
                            move |_| on_status.call(task.clone())
                        },
                        "{status.label()}"
                    }
                    if let Some(priority) = task.priority {
                        span { class: "chip chip--muted", "{priority.label()}" }
                    }
                }
            }
        }
    }
}
