use dioxus::prelude::*;
use uuid::Uuid;

use crate::note_form::NoteForm;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

#[component]
pub fn NewNoteView() -> Element {
    rsx! {
        document::Stylesheet { href: VIEWS_CSS }
        NoteForm {}
    }
}

#[component]
pub fn EditNoteView(id: Uuid) -> Element {
    rsx! {
        document::Stylesheet { href: VIEWS_CSS }
        // Keyed so navigating between notes remounts the form
        NoteForm { key: "{id}", note_id: id }
    }
}
