use chrono::NaiveDate;
use dioxus::prelude::*;
use store::models::format_day;
use store::{StarredItem, Task};

use crate::calendar::{today, MonthCalendar};
use crate::icons::{FaCalendarDays, FaRightFromBracket, FaUser};
use crate::nav::{use_navigate, Destination};
use crate::session::{current_repository, sign_out, use_backend, use_profile, use_session};
use crate::starred::StarredCard;
use crate::Icon;

const SIDEBAR_CSS: Asset = asset!("/assets/styling/sidebar.css");

/// Right-hand sidebar of the notes page: user header, calendar, upcoming
/// tasks and starred items.
///
/// The cards reload whenever `refresh` changes, so the page bumps it after
/// starring, deleting or adding something.
#[component]
pub fn AppSidebar(
    selected: Option<NaiveDate>,
    on_date_select: EventHandler<Option<NaiveDate>>,
    refresh: ReadSignal<u32>,
) -> Element {
    let backend = use_backend();
    let session = use_session();
    let profile = use_profile();
    let navigate = use_navigate();
    let mut upcoming = use_signal(Vec::<Task>::new);
    let mut starred = use_signal(Vec::<StarredItem>::new);

    let limit = backend.app.calendar.upcoming_limit;
    let load_backend = backend.clone();
    let _loader = use_resource(move || {
        let backend = load_backend.clone();
        let _ = session();
        let _ = refresh();
        async move {
            let Some(repo) = current_repository(&backend, session) else {
                return;
            };
            match repo.upcoming_tasks(today(), limit).await {
                Ok(tasks) => upcoming.set(tasks),
                Err(e) => tracing::warn!("upcoming tasks: {e}"),
            }
            match repo.starred_items().await {
                Ok(items) => starred.set(items),
                Err(e) => tracing::warn!("starred items: {e}"),
            }
        }
    });

    let handle_logout = move |_| {
        let backend = backend.clone();
        spawn(async move {
            sign_out(&backend, session).await;
            navigate.call(Destination::Auth);
        });
    };

    let p = profile();
    let avatar = p.as_ref().and_then(|p| p.avatar_url.clone());
    let name = p.as_ref().and_then(|p| p.full_name.clone()).unwrap_or_default();

    rsx! {
        document::Stylesheet { href: SIDEBAR_CSS }

        aside {
            class: "sidebar",

            div {
                class: "sidebar-user",
                button {
                    class: "avatar",
                    title: "Profile",
                    onclick: move |_| navigate.call(Destination::Profile),
                    if let Some(url) = avatar {
                        img { src: "{url}", alt: "Avatar" }
                    } else {
                        Icon { icon: FaUser, width: 14, height: 14 }
                    }
                }
                span { class: "sidebar-user-name", "{name}" }
                button {
                    class: "btn btn-ghost btn-icon",
                    title: "Sign out",
                    onclick: handle_logout,
                    Icon { icon: FaRightFromBracket, width: 14, height: 14 }
                }
            }

            div {
                class: "side-card",
                h4 {
                    class: "side-card-title side-card-title--accent",
                    Icon { icon: FaCalendarDays, width: 14, height: 14 }
                    "Calendar"
                }
                MonthCalendar {
                    selected,
                    marked: upcoming().iter().filter_map(|t| t.due_date).collect::<Vec<_>>(),
                    on_select: move |day: NaiveDate| {
                        // Clicking the selected day again clears the filter
                        if selected == Some(day) {
                            on_date_select.call(None);
                        } else {
                            on_date_select.call(Some(day));
                        }
                    },
                }
            }

            div {
                class: "side-card",
                h4 { class: "side-card-title", "Tasks To Do" }
                if upcoming().is_empty() {
                    p { class: "muted", "No tasks to do" }
                }
                for task in upcoming() {
                    div {
                        key: "{task.id}",
                        class: "side-item",
                        onclick: move |_| navigate.call(Destination::Tasks),
                        p { class: "side-item-title", "{task.title}" }
                        if let Some(due) = task.due_date {
                            p { class: "side-item-caption", "Due: {format_day(due)}" }
                        }
                    }
                }
            }

            StarredCard { items: starred() }
        }
    }
}
