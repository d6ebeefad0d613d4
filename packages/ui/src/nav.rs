//! Navigation targets shared by every view.
//!
//! Views don't know the router's `Route` type; they ask for a [`Destination`]
//! and the web crate's shell maps it to a route.

use dioxus::prelude::*;
use store::ItemKind;
use uuid::Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Destination {
    Home,
    Auth,
    Dashboard,
    Notes,
    NewNote,
    EditNote(Uuid),
    Tasks,
    NewTask,
    Starred,
    Profile,
}

impl Destination {
    /// List page for a starred item.
    pub fn list_for(kind: ItemKind) -> Self {
        match kind {
            ItemKind::Note => Destination::Notes,
            ItemKind::Task => Destination::Tasks,
        }
    }
}

/// Navigation handler provided by the app shell.
#[derive(Clone, Copy)]
pub struct Navigate(pub EventHandler<Destination>);

pub fn use_navigate() -> EventHandler<Destination> {
    use_context::<Navigate>().0
}

/// Browser history back/forward.
pub fn history_go(delta: i32) {
    #[cfg(target_arch = "wasm32")]
    if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
        if let Err(e) = history.go_with_delta(delta) {
            tracing::warn!("history.go({delta}): {e:?}");
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    tracing::debug!(delta, "history navigation is only available in the browser");
}
