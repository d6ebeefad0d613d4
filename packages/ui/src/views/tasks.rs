use dioxus::prelude::*;
use store::Task;

use crate::icons::{FaArrowLeft, FaPlus};
use crate::nav::{use_navigate, Destination};
use crate::session::{current_repository, use_backend, use_session};
use crate::task_form::TaskForm;
use crate::task_list::TaskList;
use crate::toast::{toast_error, use_toasts};
use crate::Icon;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

#[component]
pub fn TasksView() -> Element {
    let backend = use_backend();
    let session = use_session();
    let navigate = use_navigate();
    let mut toasts = use_toasts();
    let mut tasks = use_signal(Vec::<Task>::new);
    let mut reload = use_signal(|| 0u32);

    let _loader = use_resource(move || {
        let backend = backend.clone();
        let _ = reload();
        async move {
            let Some(repo) = current_repository(&backend, session) else {
                return;
            };
            match repo.tasks().await {
                Ok(fetched) => tasks.set(fetched),
                Err(e) => {
                    tracing::error!("fetch tasks: {e}");
                    toast_error(&mut toasts, "Error", "Failed to fetch tasks");
                }
            }
        }
    });

    rsx! {
        document::Stylesheet { href: VIEWS_CSS }

        div {
            class: "page page--wide",
            div {
                class: "page-header",
                div {
                    class: "row",
                    button {
                        class: "btn btn-ghost btn-icon",
                        title: "Back to notes",
                        onclick: move |_| navigate.call(Destination::Notes),
                        Icon { icon: FaArrowLeft, width: 14, height: 14 }
                    }
                    h1 { class: "page-title", "My Tasks 📋" }
                }
                button {
                    class: "btn btn-primary btn-pill",
                    onclick: move |_| navigate.call(Destination::NewTask),
                    Icon { icon: FaPlus, width: 14, height: 14 }
                    "New Task"
                }
            }
            TaskList {
                tasks: tasks(),
                on_change: move |_| reload += 1,
            }
        }
    }
}

#[component]
pub fn NewTaskView() -> Element {
    rsx! {
        document::Stylesheet { href: VIEWS_CSS }
        TaskForm {}
    }
}
