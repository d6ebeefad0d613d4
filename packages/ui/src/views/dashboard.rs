use dioxus::prelude::*;

use crate::icons::{FaBook, FaCalendarDays, FaListCheck, FaStar, FaUser};
use crate::nav::{use_navigate, Destination};
use crate::session::use_profile;
use crate::Icon;

#[component]
pub fn DashboardView() -> Element {
    let profile = use_profile();
    let navigate = use_navigate();

    let nickname = profile().and_then(|p| p.nickname);
    let menu_label = nickname.clone().unwrap_or_else(|| "Profile".to_string());
    let greeting_name = nickname.unwrap_or_else(|| "Friend".to_string());

    rsx! {
        div {
            class: "dashboard",
            header {
                class: "topbar",
                h1 { class: "topbar-title", "K.I.D.D.O" }
                button {
                    class: "btn btn-ghost",
                    onclick: move |_| navigate.call(Destination::Profile),
                    Icon { icon: FaUser, width: 16, height: 16 }
                    span { "{menu_label}" }
                }
            }
            main {
                class: "page page--wide",
                div {
                    class: "welcome",
                    h2 { "Welcome, {greeting_name}! 👋" }
                    p { class: "muted", "What would you like to do today?" }
                }
                div {
                    class: "card-grid",
                    DashboardCard {
                        title: "My Notes",
                        description: "Write, draw, and create!",
                        tone: "pink",
                        on_click: move |_| navigate.call(Destination::Notes),
                        Icon { icon: FaBook, width: 28, height: 28 }
                    }
                    DashboardCard {
                        title: "Calendar",
                        description: "Plan your activities",
                        tone: "purple",
                        on_click: move |_| navigate.call(Destination::Notes),
                        Icon { icon: FaCalendarDays, width: 28, height: 28 }
                    }
                    DashboardCard {
                        title: "Tasks",
                        description: "Keep track of your to-dos",
                        tone: "blue",
                        on_click: move |_| navigate.call(Destination::Tasks),
                        Icon { icon: FaListCheck, width: 28, height: 28 }
                    }
                    DashboardCard {
                        title: "Starred",
                        description: "Your favorite notes and tasks",
                        tone: "yellow",
                        on_click: move |_| navigate.call(Destination::Starred),
                        Icon { icon: FaStar, width: 28, height: 28 }
                    }
                }
            }
        }
    }
}

#[component]
fn DashboardCard(
    title: &'static str,
    description: &'static str,
    tone: &'static str,
    on_click: EventHandler<()>,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "card card--clickable dashboard-card",
            onclick: move |_| on_click.call(()),
            div { class: "menu-icon menu-icon--{tone}", {children} }
            div {
                h3 { class: "card-title", "{title}" }
                p { class: "muted", "{description}" }
            }
        }
    }
}
