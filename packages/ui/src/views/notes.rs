use chrono::{Local, NaiveDate};
use dioxus::prelude::*;
use store::filter::{unique_folders, NoteFilter};
use store::Note;

use crate::calendar::CalendarModal;
use crate::icons::{
    FaArrowLeft, FaArrowRight, FaCalendarDays, FaFolder, FaListCheck, FaMagnifyingGlass, FaPlus, FaStar,
};
use crate::nav::{history_go, use_navigate, Destination};
use crate::note_card::NoteCard;
use crate::session::{current_repository, use_backend, use_session};
use crate::sidebar::AppSidebar;
use crate::toast::{toast_error, toast_success, use_toasts};
use crate::Icon;

use super::ModalOverlay;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// The notes page: menu cards, search, folder chips, note grid and sidebar.
#[component]
pub fn NotesView() -> Element {
    let backend = use_backend();
    let session = use_session();
    let navigate = use_navigate();
    let mut toasts = use_toasts();

    let mut notes = use_signal(Vec::<Note>::new);
    let mut search = use_signal(String::new);
    let mut folder = use_signal(|| Option::<String>::None);
    let mut day = use_signal(|| Option::<NaiveDate>::None);
    let mut show_calendar = use_signal(|| false);
    let mut pending_delete = use_signal(|| Option::<Note>::None);
    let mut reload = use_signal(|| 0u32);
    let mut sidebar_refresh = use_signal(|| 0u32);

    // Refetch when the day filter changes; search and folder filter locally
    let load_backend = backend.clone();
    let _loader = use_resource(move || {
        let backend = load_backend.clone();
        let filter = NoteFilter {
            day: day(),
            ..NoteFilter::default()
        };
        let _ = reload();
        async move {
            let Some(repo) = current_repository(&backend, session) else {
                return;
            };
            match repo.notes(&filter, &Local).await {
                Ok(fetched) => notes.set(fetched),
                Err(e) => {
                    tracing::error!("fetch notes: {e}");
                    toast_error(&mut toasts, "Error", "Failed to fetch notes");
                }
            }
        }
    });

    let star_backend = backend.clone();
    let handle_star = move |note: Note| {
        let Some(repo) = current_repository(&star_backend, session) else {
            return;
        };
        spawn(async move {
            match repo.toggle_note_star(&note).await {
                Ok(updated) => {
                    if let Some(slot) = notes.write().iter_mut().find(|n| n.id == updated.id) {
                        *slot = updated;
                    }
                    sidebar_refresh += 1;
                }
                Err(e) => {
                    tracing::error!(note_id = %note.id, "star note: {e}");
                    toast_error(&mut toasts, "Error", "Failed to update note");
                }
            }
        });
    };

    let delete_backend = backend.clone();
    let confirm_delete = move |_| {
        let Some(note) = pending_delete.take() else {
            return;
        };
        let Some(repo) = current_repository(&delete_backend, session) else {
            return;
        };
        spawn(async move {
            match repo.delete_note(note.id).await {
                Ok(()) => {
                    toast_success(&mut toasts, "Success", "Note deleted successfully");
                    reload += 1;
                    sidebar_refresh += 1;
                }
                Err(e) => {
                    tracing::error!(note_id = %note.id, "delete note: {e}");
                    toast_error(&mut toasts, "Error", "Failed to delete note");
                }
            }
        });
    };

    let all = notes();
    let folders = unique_folders(&all);
    let filter = NoteFilter {
        search: search(),
        folder: folder(),
        day: day(),
    };
    let visible = filter.apply(all);

    rsx! {
        document::Stylesheet { href: VIEWS_CSS }

        div {
            class: "layout",
            main {
                class: "layout-main",
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
                        h1 { class: "page-title", "My Notes 📝" }
                        button {
                            class: "btn btn-ghost btn-icon",
                            title: "Forward",
                            onclick: move |_| history_go(1),
                            Icon { icon: FaArrowRight, width: 14, height: 14 }
                        }
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| navigate.call(Destination::NewNote),
                        Icon { icon: FaPlus, width: 14, height: 14 }
                        "New Note"
                    }
                }

                div {
                    class: "menu-grid",
                    MenuCard {
                        title: "Calendar",
                        tone: "purple",
                        on_click: move |_| show_calendar.set(true),
                        Icon { icon: FaCalendarDays, width: 22, height: 22 }
                    }
                    MenuCard {
                        title: "Tasks",
                        tone: "blue",
                        on_click: move |_| navigate.call(Destination::Tasks),
                        Icon { icon: FaListCheck, width: 22, height: 22 }
                    }
                    MenuCard {
                        title: "Recommendations",
                        tone: "yellow",
                        on_click: move |_| {
                            toast_success(&mut toasts, "Coming Soon", "This feature will be available soon!");
                        },
                        Icon { icon: FaStar, width: 22, height: 22 }
                    }
                }

                div {
                    class: "filter-bar",
                    div {
                        class: "search",
                        Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
                        input {
                            class: "input",
                            placeholder: "Search notes...",
                            value: search(),
                            oninput: move |evt: FormEvent| search.set(evt.value()),
                        }
                    }
                    div {
                        class: "row",
                        for name in folders {
                            button {
                                key: "{name}",
                                class: if folder().as_deref() == Some(name.as_str()) { "btn btn-chip btn-chip--on" } else { "btn btn-chip" },
                                onclick: {
                                    let name = name.clone();
                                    move |_| {
                                        let mut f = NoteFilter { folder: folder(), ..NoteFilter::default() };
                                        f.toggle_folder(&name);
                                        folder.set(f.folder);
                                    }
                                },
                                Icon { icon: FaFolder, width: 12, height: 12 }
                                "{name}"
                            }
                        }
                    }
                }

                if let Some(d) = day() {
                    div {
                        class: "filter-note",
                        "Showing notes from {store::models::format_day(d)} "
                        button {
                            class: "btn btn-link",
                            onclick: move |_| day.set(None),
                            "Show all"
                        }
                    }
                }

                if visible.is_empty() {
                    p { class: "empty", "No notes here yet. Create one to get started!" }
                }
                div {
                    class: "card-grid",
                    for note in visible {
                        NoteCard {
                            key: "{note.id}",
                            note,
                            on_star: handle_star.clone(),
                            on_edit: move |n: Note| navigate.call(Destination::EditNote(n.id)),
                            on_delete: move |n: Note| pending_delete.set(Some(n)),
                        }
                    }
                }
            }

            AppSidebar {
                selected: day(),
                on_date_select: move |d: Option<NaiveDate>| day.set(d),
                refresh: sidebar_refresh(),
            }
        }

        if show_calendar() {
            CalendarModal {
                on_close: move |_| show_calendar.set(false),
                on_date_select: move |d: Option<NaiveDate>| day.set(d),
                on_task_added: move |_| sidebar_refresh += 1,
            }
        }

        if let Some(note) = pending_delete() {
            ModalOverlay {
                on_close: move |_| pending_delete.set(None),
                h2 { class: "sheet-title", "Delete note?" }
                p { "\"{note.title}\" will be deleted. This cannot be undone." }
                div {
                    class: "form-actions",
                    button {
                        class: "btn btn-outline",
                        onclick: move |_| pending_delete.set(None),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-danger",
                        onclick: confirm_delete,
                        "Delete"
                    }
                }
            }
        }
    }
}

#[component]
fn MenuCard(title: &'static str, tone: &'static str, on_click: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "card card--clickable menu-card",
            onclick: move |_| on_click.call(()),
            div { class: "menu-icon menu-icon--{tone}", {children} }
            h3 { class: "menu-title menu-title--{tone}", "{title}" }
        }
    }
}

