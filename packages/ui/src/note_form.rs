//! Note create / edit form.

use dioxus::prelude::*;
use store::drawing::Drawing;
use store::{NoteDraft, RepoError};
use uuid::Uuid;

use crate::drawing_canvas::DrawingCanvas;
use crate::icons::{FaPaintbrush, FaSpinner};
use crate::nav::{use_navigate, Destination};
use crate::session::{current_repository, use_backend, use_session};
use crate::tag_editor::TagEditor;
use crate::toast::{toast_error, toast_success, use_toasts};
use crate::Icon;

/// Creates a note when `note_id` is `None`, otherwise edits that note.
#[component]
pub fn NoteForm(note_id: Option<Uuid>) -> Element {
    let backend = use_backend();
    let session = use_session();
    let navigate = use_navigate();
    let mut toasts = use_toasts();

    let default_folder = backend.app.notes.default_folder.clone();
    let canvas_size = (backend.app.canvas.width, backend.app.canvas.height);
    let mut draft = use_signal(move || NoteDraft {
        folder: default_folder,
        ..NoteDraft::default()
    });
    let mut image_url = use_signal(|| Option::<String>::None);
    let mut loaded = use_signal(move || note_id.is_none());
    let mut saving = use_signal(|| false);
    let mut show_canvas = use_signal(|| false);

    let load_backend = backend.clone();
    let _loader = use_resource(move || {
        let backend = load_backend.clone();
        async move {
            let Some(id) = note_id else {
                return;
            };
            let Some(repo) = current_repository(&backend, session) else {
                return;
            };
            match repo.note(id).await {
                Ok(note) => {
                    draft.set(NoteDraft::from_note(&note));
                    image_url.set(note.image_url.clone());
                    show_canvas.set(note.drawing.is_some());
                    loaded.set(true);
                }
                Err(e) => {
                    toast_error(&mut toasts, "Error", &format!("Failed to load note: {e}"));
                    navigate.call(Destination::Notes);
                }
            }
        }
    });

    let submit_backend = backend.clone();
    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(repo) = current_repository(&submit_backend, session) else {
            return;
        };
        let current = draft();
        spawn(async move {
            saving.set(true);
            let result = match note_id {
                Some(id) => repo.save_note(id, &current).await,
                None => repo.create_note(&current).await,
            };
            saving.set(false);
            match (result, note_id) {
                (Ok(_), None) => {
                    toast_success(&mut toasts, "Note created!", "Your note has been saved successfully! 🎉");
                    navigate.call(Destination::Notes);
                }
                (Ok(_), Some(_)) => {
                    toast_success(&mut toasts, "Note updated!", "Your changes have been saved.");
                    navigate.call(Destination::Notes);
                }
                (Err(RepoError::Invalid(e)), _) => {
                    toast_error(&mut toasts, "Missing information", &capitalize(&e.to_string()));
                }
                (Err(e), None) => {
                    tracing::error!("create note: {e}");
                    toast_error(&mut toasts, "Error", "Failed to create note. Please try again.");
                }
                (Err(e), Some(_)) => {
                    tracing::error!("save note: {e}");
                    toast_error(&mut toasts, "Error", "Failed to update note. Please try again.");
                }
            }
        });
    };

    let drawing_backend = backend.clone();
    let handle_drawing = move |scene: Drawing| {
        match scene.to_json() {
            Ok(json) => draft.write().drawing = Some(json),
            Err(e) => {
                toast_error(&mut toasts, "Error", &e.to_string());
                return;
            }
        }
        // Existing notes keep the drawing even if the form is abandoned
        let Some(id) = note_id else {
            toast_success(&mut toasts, "Drawing saved", "It will be stored with the note.");
            return;
        };
        let Some(repo) = current_repository(&drawing_backend, session) else {
            return;
        };
        spawn(async move {
            match repo.save_drawing(id, &scene).await {
                Ok(_) => toast_success(&mut toasts, "Drawing saved", "Your drawing has been saved."),
                Err(e) => toast_error(&mut toasts, "Error", &format!("Failed to save drawing: {e}")),
            }
        });
    };

    if !loaded() {
        return rsx! {
            div { class: "page-loading", "Loading..." }
        };
    }

    let d = draft();
    let heading = if note_id.is_some() { "Edit Note" } else { "New Note" };
    let submit_label = if note_id.is_some() { "Save Changes" } else { "Create Note" };

    rsx! {
        div {
            class: "page page--narrow",
            div {
                class: "card",
                h1 { class: "page-title", "{heading}" }
                form {
                    class: "form",
                    onsubmit: handle_submit,
                    div {
                        class: "field",
                        label { r#for: "title", "Title" }
                        input {
                            id: "title",
                            class: "input",
                            placeholder: "Give your note a title",
                            value: d.title.clone(),
                            oninput: move |evt: FormEvent| draft.write().title = evt.value(),
                        }
                    }
                    div {
                        class: "field",
                        label { r#for: "content", "Content" }
                        textarea {
                            id: "content",
                            class: "input textarea",
                            placeholder: "Write your thoughts here...",
                            value: d.content.clone(),
                            oninput: move |evt: FormEvent| draft.write().content = evt.value(),
                        }
                    }
                    div {
                        class: "field",
                        label { r#for: "folder", "Folder" }
                        input {
                            id: "folder",
                            class: "input",
                            placeholder: "Folder name (e.g., School, Personal)",
                            value: d.folder.clone(),
                            oninput: move |evt: FormEvent| draft.write().folder = evt.value(),
                        }
                    }
                    div {
                        class: "field",
                        label { "Tags" }
                        TagEditor {
                            tags: d.tags.clone(),
                            on_add: move |tag: String| {
                                draft.write().add_tag(&tag);
                            },
                            on_remove: move |tag: String| draft.write().remove_tag(&tag),
                        }
                    }
                    if let Some(url) = image_url() {
                        div {
                            class: "field",
                            label { "Image" }
                            img { class: "note-image", src: "{url}", alt: "Note" }
                        }
                    }
                    div {
                        class: "field",
                        if show_canvas() {
                            DrawingCanvas {
                                initial: d.drawing.clone(),
                                width: canvas_size.0,
                                height: canvas_size.1,
                                on_save: handle_drawing,
                            }
                        } else {
                            button {
                                r#type: "button",
                                class: "btn btn-soft",
                                onclick: move |_| show_canvas.set(true),
                                Icon { icon: FaPaintbrush, width: 14, height: 14 }
                                "Add Drawing"
                            }
                        }
                    }
                    div {
                        class: "form-actions",
                        button {
                            r#type: "button",
                            class: "btn btn-outline",
                            onclick: move |_| navigate.call(Destination::Notes),
                            "Cancel"
                        }
                        button {
                            r#type: "submit",
                            class: "btn btn-primary",
                            disabled: saving(),
                            if saving() {
                                span { class: "spin", Icon { icon: FaSpinner, width: 14, height: 14 } }
                            } else {
                                "{submit_label}"
                            }
                        }
                    }
                }
            }
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
