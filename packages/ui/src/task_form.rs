use chrono::NaiveDate;
use dioxus::prelude::*;
use store::{RepoError, TaskDraft, TaskPriority, TaskStatus};

use crate::nav::{use_navigate, Destination};
use crate::session::{current_repository, use_backend, use_session};
use crate::toast::{toast_error, toast_success, use_toasts};

const PRIORITIES: [TaskPriority; 3] = [TaskPriority::Low, TaskPriority::Medium, TaskPriority::High];
const STATUSES: [TaskStatus; 3] = [TaskStatus::Pending, TaskStatus::InProgress, TaskStatus::Completed];

#[component]
pub fn TaskForm() -> Element {
    let backend = use_backend();
    let session = use_session();
    let navigate = use_navigate();
    let mut toasts = use_toasts();
    let mut draft = use_signal(TaskDraft::default);
    let mut saving = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(repo) = current_repository(&backend, session) else {
            return;
        };
        let current = draft();
        spawn(async move {
            saving.set(true);
            let result = repo.create_task(&current).await;
            saving.set(false);
            match result {
                Ok(_) => {
                    toast_success(&mut toasts, "Task created!", "Your task has been added.");
                    navigate.call(Destination::Tasks);
                }
                Err(RepoError::Invalid(e)) => toast_error(&mut toasts, "Missing information", &e.to_string()),
                Err(e) => {
                    tracing::error!("create task: {e}");
                    toast_error(&mut toasts, "Error", "Failed to create task. Please try again.");
                }
            }
        });
    };

    let d = draft();
    let due_value = d.due_date.map(|day| day.format("%Y-%m-%d").to_string()).unwrap_or_default();
    let priority_value = d.priority.map(form_value).unwrap_or_default();
    let status_value = status_form_value(d.status.unwrap_or(TaskStatus::Pending));

    rsx! {
        div {
            class: "page page--narrow",
            div {
                class: "card",
                h1 { class: "page-title", "New Task" }
                form {
                    class: "form",
                    onsubmit: handle_submit,
                    div {
                        class: "field",
                        label { r#for: "task-title", "Title" }
                        input {
                            id: "task-title",
                            class: "input",
                            placeholder: "What needs to be done?",
                            value: d.title.clone(),
                            oninput: move |evt: FormEvent| draft.write().title = evt.value(),
                        }
                    }
                    div {
                        class: "field",
                        label { r#for: "task-description", "Description" }
                        textarea {
                            id: "task-description",
                            class: "input textarea",
                            placeholder: "Add some details...",
                            value: d.description.clone(),
                            oninput: move |evt: FormEvent| draft.write().description = evt.value(),
                        }
                    }
                    div {
                        class: "field",
                        label { r#for: "task-due", "Due date" }
                        input {
                            id: "task-due",
                            class: "input",
                            r#type: "date",
                            value: due_value,
                            oninput: move |evt: FormEvent| {
                                draft.write().due_date = NaiveDate::parse_from_str(&evt.value(), "%Y-%m-%d").ok();
                            },
                        }
                    }
                    div {
                        class: "row",
                        div {
                            class: "field",
                            label { r#for: "task-priority", "Priority" }
                            select {
                                id: "task-priority",
                                class: "input",
                                value: priority_value,
                                onchange: move |evt: FormEvent| {
                                    draft.write().priority = TaskPriority::from_form(&evt.value());
                                },
                                option { value: "", "None" }
                                for priority in PRIORITIES {
                                    option { value: form_value(priority), "{priority.label()}" }
                                }
                            }
                        }
                        div {
                            class: "field",
                            label { r#for: "task-status", "Status" }
                            select {
                                id: "task-status",
                                class: "input",
                                value: status_value,
                                onchange: move |evt: FormEvent| {
                                    draft.write().status = status_from_form(&evt.value());
                                },
                                for status in STATUSES {
                                    option { value: status_form_value(status), "{status.label()}" }
                                }
                            }
                        }
                    }
                    div {
                        class: "form-actions",
                        button {
                            r#type: "button",
                            class: "btn btn-outline",
                            onclick: move |_| navigate.call(Destination::Tasks),
                            "Cancel"
                        }
                        button {
                            r#type: "submit",
                            class: "btn btn-primary",
                            disabled: saving(),
                            "Create Task"
                        }
                    }
                }
            }
        }
    }
}

fn form_value(priority: TaskPriority) -> &'static str {
    match priority {
        TaskPriority::Low => "low",
        TaskPriority::Medium => "medium",
        TaskPriority::High => "high",
        TaskPriority::Unknown => "",
    }
}

fn status_form_value(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::InProgress => "in_progress",
        TaskStatus::Completed => "completed",
        TaskStatus::Pending | TaskStatus::Unknown => "pending",
    }
}

fn status_from_form(value: &str) -> Option<TaskStatus> {
    match value {
        "pending" => Some(TaskStatus::Pending),
        "in_progress" => Some(TaskStatus::InProgress),
        "completed" => Some(TaskStatus::Completed),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_values_parse_back() {
        for priority in PRIORITIES {
            assert_eq!(TaskPriority::from_form(form_value(priority)), Some(priority));
        }
        assert_eq!(TaskPriority::from_form(form_value(TaskPriority::Unknown)), None);
    }

    #[test]
    fn test_status_values_parse_back() {
        for status in STATUSES {
            assert_eq!(status_from_form(status_form_value(status)), Some(status));
        }
        assert_eq!(status_form_value(TaskStatus::Unknown), "pending");
    }
}
