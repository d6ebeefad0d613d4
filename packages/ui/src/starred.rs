use dioxus::prelude::*;
use store::models::format_day;
use store::{ItemKind, StarredItem};

use crate::icons::FaStar;
use crate::nav::{use_navigate, Destination};
use crate::Icon;

/// Compact starred list for the sidebar.
#[component]
pub fn StarredCard(items: Vec<StarredItem>) -> Element {
    let navigate = use_navigate();

    rsx! {
        div {
            class: "side-card",
            h4 {
                class: "side-card-title",
                span { class: "star star--on", Icon { icon: FaStar, width: 14, height: 14 } }
                "Starred Items"
            }
            if items.is_empty() {
                p { class: "muted", "No starred items" }
            }
            for item in items {
                div {
                    key: "{item.id}",
                    class: "side-item",
                    onclick: move |_| navigate.call(Destination::list_for(item.kind)),
                    p { class: "side-item-title", "{item.title}" }
                    p { class: "side-item-caption", "{item.caption()}" }
                }
            }
        }
    }
}

/// Full-page grid of starred notes and tasks.
#[component]
pub fn StarredGrid(items: Vec<StarredItem>) -> Element {
    let navigate = use_navigate();

    if items.is_empty() {
        return rsx! {
            div {
                class: "empty-state",
                span { class: "star star--on", Icon { icon: FaStar, width: 48, height: 48 } }
                h2 { "No starred items yet" }
                p { class: "muted", "Star your favorite notes and tasks to see them here!" }
            }
        };
    }

    rsx! {
        div {
            class: "card-grid card-grid--3",
            for item in items {
                div {
                    key: "{item.id}",
                    class: "card card--clickable",
                    onclick: move |_| navigate.call(Destination::list_for(item.kind)),
                    div {
                        class: "card-header",
                        h3 { class: "card-title", "{item.title}" }
                        span { class: "star star--on", Icon { icon: FaStar, width: 14, height: 14 } }
                    }
                    div {
                        class: "card-body",
                        p { class: "muted capitalize", "Type: {item.kind.label()}" }
                        if let (ItemKind::Task, Some(due)) = (item.kind, item.due_date) {
                            p { class: "muted", "Due: {format_day(due)}" }
                        }
                        p { class: "muted", "Created: {format_day(item.created_at.date_naive())}" }
                    }
                }
            }
        }
    }
}
