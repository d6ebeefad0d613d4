use chrono::{Datelike, Local, NaiveDate};
use dioxus::prelude::*;
use store::calendar::{MonthGrid, WEEKDAY_LABELS};
use store::models::format_day;
use store::TaskDraft;

use crate::icons::{FaCalendarDays, FaChevronLeft, FaChevronRight, FaPlus};
use crate::session::{current_repository, use_backend, use_session};
use crate::toast::{toast_error, toast_success, use_toasts};
use crate::views::ModalOverlay;
use crate::Icon;

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Month view with day selection. Days listed in `marked` get a dot.
#[component]
pub fn MonthCalendar(
    selected: Option<NaiveDate>,
    #[props(default)] marked: Vec<NaiveDate>,
    on_select: EventHandler<NaiveDate>,
) -> Element {
    let mut grid = use_signal(move || MonthGrid::containing(selected.unwrap_or_else(today)));
    let now = today();
    let g = grid();

    rsx! {
        div {
            class: "calendar",
            div {
                class: "calendar-caption",
                button {
                    class: "calendar-nav",
                    title: "Previous month",
                    onclick: move |_| {
                        let prev = grid.peek().prev();
                        if let Some(prev) = prev {
                            grid.set(prev);
                        }
                    },
                    Icon { icon: FaChevronLeft, width: 12, height: 12 }
                }
                span { class: "calendar-title", "{g.title()}" }
                button {
                    class: "calendar-nav",
                    title: "Next month",
                    onclick: move |_| {
                        let next = grid.peek().next();
                        if let Some(next) = next {
                            grid.set(next);
                        }
                    },
                    Icon { icon: FaChevronRight, width: 12, height: 12 }
                }
            }
            div {
                class: "calendar-row calendar-head",
                for label in WEEKDAY_LABELS {
                    span { class: "calendar-head-cell", "{label}" }
                }
            }
            for (i, week) in g.weeks.iter().enumerate() {
                div {
                    key: "{g.year}-{g.month}-{i}",
                    class: "calendar-row",
                    for cell in week.iter().copied() {
                        if let Some(day) = cell {
                            button {
                                class: day_class(day, selected, now, marked.contains(&day)),
                                onclick: move |_| on_select.call(day),
                                "{day.day()}"
                            }
                        } else {
                            span { class: "calendar-day calendar-day--blank" }
                        }
                    }
                }
            }
        }
    }
}

fn day_class(day: NaiveDate, selected: Option<NaiveDate>, today: NaiveDate, marked: bool) -> String {
    let mut class = String::from("calendar-day");
    if selected == Some(day) {
        class.push_str(" calendar-day--selected");
    }
    if day == today {
        class.push_str(" calendar-day--today");
    }
    if marked {
        class.push_str(" calendar-day--marked");
    }
    class
}

/// Date picker sheet: picking a date filters by it; a task can be added for it.
#[component]
pub fn CalendarModal(
    on_close: EventHandler<()>,
    on_date_select: EventHandler<Option<NaiveDate>>,
    #[props(default)] on_task_added: EventHandler<()>,
) -> Element {
    let mut selected = use_signal(|| Option::<NaiveDate>::None);
    let mut task_title = use_signal(String::new);
    let mut saving = use_signal(|| false);
    let backend = use_backend();
    let session = use_session();
    let mut toasts = use_toasts();

    let handle_add = move |_| {
        let Some(day) = selected() else {
            return;
        };
        let title = task_title();
        if title.trim().is_empty() {
            return;
        }
        let Some(repo) = current_repository(&backend, session) else {
            return;
        };
        spawn(async move {
            saving.set(true);
            match repo.create_task(&TaskDraft::due_on(&title, day)).await {
                Ok(_) => {
                    toast_success(&mut toasts, "Task added", &format!("Due {}", format_day(day)));
                    task_title.set(String::new());
                    on_task_added.call(());
                    on_close.call(());
                }
                Err(e) => toast_error(&mut toasts, "Error", &format!("Failed to add task: {e}")),
            }
            saving.set(false);
        });
    };

    rsx! {
        ModalOverlay {
            on_close: move |_| on_close.call(()),
            h2 {
                class: "sheet-title",
                Icon { icon: FaCalendarDays, width: 18, height: 18 }
                "Select Date"
            }
            MonthCalendar {
                selected: selected(),
                on_select: move |day: NaiveDate| {
                    selected.set(Some(day));
                    on_date_select.call(Some(day));
                },
            }
            if let Some(day) = selected() {
                div {
                    class: "sheet-section",
                    h3 { "Add task for {format_day(day)}" }
                    div {
                        class: "row",
                        input {
                            class: "input",
                            placeholder: "Enter task title...",
                            value: task_title(),
                            oninput: move |evt: FormEvent| task_title.set(evt.value()),
                        }
                        button {
                            class: "btn btn-primary",
                            disabled: saving(),
                            onclick: handle_add,
                            Icon { icon: FaPlus, width: 12, height: 12 }
                            "Add"
                        }
                    }
                }
            }
        }
    }
}
