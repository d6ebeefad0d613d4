use dioxus::prelude::*;
use store::models::format_day;
use store::Note;

use crate::icons::{FaPenToSquare, FaStar, FaTag, FaTrashCan};
use crate::Icon;

#[component]
pub fn NoteCard(
    note: Note,
    on_star: EventHandler<Note>,
    on_edit: EventHandler<Note>,
    on_delete: EventHandler<Note>,
) -> Element {
    let star_class = if note.is_starred {
        "btn btn-ghost btn-icon star star--on"
    } else {
        "btn btn-ghost btn-icon star"
    };

    rsx! {
        div {
            class: "card note-card",
            div {
                class: "card-header",
                h3 { class: "card-title", "{note.title}" }
                div {
                    class: "card-actions",
                    button {
                        class: star_class,
                        title: if note.is_starred { "Unstar" } else { "Star" },
                        onclick: {
                            let note = note.clone();
                            move |evt: Event<MouseData>| {
                                evt.stop_propagation();
                                on_star.call(note.clone());
                            }
                        },
                        Icon { icon: FaStar, width: 14, height: 14 }
                    }
                    button {
                        class: "btn btn-ghost btn-icon",
                        title: "Edit",
                        onclick: {
                            let note = note.clone();
                            move |_| on_edit.call(note.clone())
                        },
                        Icon { icon: FaPenToSquare, width: 14, height: 14 }
                    }
                    button {
                        class: "btn btn-ghost btn-icon btn-danger",
                        title: "Delete",
                        onclick: {
                            let note = note.clone();
                            move |evt: Event<MouseData>| {
                                evt.stop_propagation();
                                on_delete.call(note.clone());
                            }
                        },
                        Icon { icon: FaTrashCan, width: 14, height: 14 }
                    }
                }
            }
            div {
                class: "card-body",
                p { class: "note-excerpt", "{note.content}" }
                if let Some(url) = &note.image_url {
                    img { class: "note-image", src: "{url}", alt: "Note" }
                }
                if !note.tags.is_empty() {
                    div {
                        class: "tag-list",
                        for tag in note.tags.iter() {
                            span {
                                key: "{tag}",
                                class: "tag",
                                Icon { icon: FaTag, width: 10, height: 10 }
                                "{tag}"
                            }
                        }
                    }
                }
                if let Some(day) = note.schedule_date {
                    div { class: "muted", "Scheduled: {format_day(day)}" }
                }
            }
        }
    }
}
