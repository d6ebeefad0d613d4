//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod views;

pub const KIDDONOTES_CSS: Asset = asset!("/assets/kiddonotes.css");

pub mod nav;
pub use nav::{history_go, use_navigate, Destination, Navigate};

mod session;
pub use session::{
    current_repository, sign_out, use_backend, use_profile, use_session, BackendContext, SessionProvider,
    SessionState, SignedIn,
};

mod toast;
pub use toast::{toast_error, toast_success, use_toasts, Toast, ToastLevel, ToastProvider, Toasts};

pub mod theme;
pub use theme::apply_theme;

mod calendar;
pub use calendar::{CalendarModal, MonthCalendar};

mod drawing_canvas;
pub use drawing_canvas::DrawingCanvas;

mod tag_editor;
pub use tag_editor::TagEditor;

mod note_card;
pub use note_card::NoteCard;

mod note_form;
pub use note_form::NoteForm;

mod task_list;
pub use task_list::TaskList;

mod task_form;
pub use task_form::TaskForm;

mod starred;
pub use starred::{StarredCard, StarredGrid};

mod sidebar;
pub use sidebar::AppSidebar;
