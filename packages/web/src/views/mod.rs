//! Route components. Public pages render directly; the rest require a session.

use dioxus::prelude::*;
use ui::views::{
    AuthView, DashboardView, EditNoteView, HomeView, NewNoteView, NewTaskView, NotesView, ProfileView,
    StarredView, TasksView,
};
use ui::SignedIn;
use uuid::Uuid;

#[component]
pub fn Home() -> Element {
    rsx! { HomeView {} }
}

#[component]
pub fn Auth() -> Element {
    rsx! { AuthView {} }
}

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        SignedIn { DashboardView {} }
    }
}

#[component]
pub fn Notes() -> Element {
    rsx! {
        SignedIn { NotesView {} }
    }
}

#[component]
pub fn NewNote() -> Element {
    rsx! {
        SignedIn { NewNoteView {} }
    }
}

#[component]
pub fn EditNote(id: Uuid) -> Element {
    rsx! {
        SignedIn { EditNoteView { id } }
    }
}

#[component]
pub fn Tasks() -> Element {
    rsx! {
        SignedIn { TasksView {} }
    }
}

#[component]
pub fn NewTask() -> Element {
    rsx! {
        SignedIn { NewTaskView {} }
    }
}

#[component]
pub fn Starred() -> Element {
    rsx! {
        SignedIn { StarredView {} }
    }
}

#[component]
pub fn Profile() -> Element {
    rsx! {
        SignedIn { ProfileView {} }
    }
}
