use dioxus::prelude::*;
use store::StarredItem;

use crate::icons::{FaArrowLeft, FaStar};
use crate::nav::history_go;
use crate::session::{current_repository, use_backend, use_session};
use crate::starred::StarredGrid;
use crate::toast::{toast_error, use_toasts};
use crate::Icon;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

#[component]
pub fn StarredView() -> Element {
    let backend = use_backend();
    let session = use_session();
    let mut toasts = use_toasts();
    let mut items = use_signal(Vec::<StarredItem>::new);

    let _loader = use_resource(move || {
        let backend = backend.clone();
        async move {
            let Some(repo) = current_repository(&backend, session) else {
                return;
            };
            match repo.starred_items().await {
                Ok(merged) => items.set(merged),
                Err(e) => {
                    tracing::error!("fetch starred: {e}");
                    toast_error(&mut toasts, "Error", "Failed to fetch starred items");
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
                        title: "Back",
                        onclick: move |_| history_go(-1),
                        Icon { icon: FaArrowLeft, width: 14, height: 14 }
                    }
                    h1 {
                        class: "page-title",
                        span { class: "star star--on", Icon { icon: FaStar, width: 22, height: 22 } }
                        "Starred Items"
                    }
                }
            }
            StarredGrid { items: items() }
        }
    }
}
