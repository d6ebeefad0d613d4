//! # Backend: the remote table interface
//!
//! Every feature of the app is a create/read/update/delete call against one of
//! three remote tables (`notes`, `tasks`, `profiles`). [`Backend`] names those
//! calls once so that the same [`crate::Repository`] logic runs against the real
//! REST client (`api::RestBackend`) or the in-memory [`crate::MemoryBackend`]
//! used in tests.
//!
//! The trait uses return-position `impl Future` without a `Send` bound: the
//! browser's fetch futures are not `Send`, and the UI drives them on the
//! single-threaded wasm executor.
//!
//! ## Ordering
//!
//! List operations return rows ordered by `created_at`, newest first. Callers
//! rely on this for display and for the starred merge.

use chrono::{DateTime, Utc};
use std::future::Future;
use uuid::Uuid;

use crate::models::{
    NewNote, NewTask, Note, NotePatch, Profile, ProfileUpdate, Task, TaskPatch,
};

/// Remote table names.
pub const NOTES_TABLE: &str = "notes";
pub const TASKS_TABLE: &str = "tasks";
pub const PROFILES_TABLE: &str = "profiles";

/// Errors surfaced by any [`Backend`] implementation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BackendError {
    #[error("{table} row {id} not found")]
    NotFound { table: &'static str, id: String },
    #[error("not signed in or session expired")]
    Unauthorized,
    #[error("backend rejected request ({status}): {message}")]
    Rejected { status: u16, message: String },
    #[error("network error: {0}")]
    Transport(String),
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl BackendError {
    pub fn not_found(table: &'static str, id: impl ToString) -> Self {
        BackendError::NotFound {
            table,
            id: id.to_string(),
        }
    }
}

/// Filters for listing notes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NoteQuery {
    pub starred_only: bool,
    /// Inclusive `created_at` range.
    pub created_between: Option<(DateTime<Utc>, DateTime<Utc>)>,
}

impl NoteQuery {
    pub fn starred() -> Self {
        Self {
            starred_only: true,
            ..Self::default()
        }
    }

    pub fn matches(&self, note: &Note) -> bool {
        if self.starred_only && !note.is_starred {
            return false;
        }
        match self.created_between {
            Some((from, to)) => note.created_at >= from && note.created_at <= to,
            None => true,
        }
    }
}

/// Filters for listing tasks.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TaskQuery {
    pub starred_only: bool,
}

impl TaskQuery {
    pub fn starred() -> Self {
        Self { starred_only: true }
    }

    pub fn matches(&self, task: &Task) -> bool {
        !self.starred_only || task.is_starred
    }
}

/// Async access to the remote tables.
pub trait Backend {
    fn list_notes(
        &self,
        user_id: Uuid,
        query: &NoteQuery,
    ) -> impl Future<Output = Result<Vec<Note>, BackendError>>;

    fn get_note(&self, id: Uuid) -> impl Future<Output = Result<Note, BackendError>>;

    fn insert_note(&self, note: NewNote) -> impl Future<Output = Result<Note, BackendError>>;

    fn update_note(
        &self,
        id: Uuid,
        patch: NotePatch,
    ) -> impl Future<Output = Result<Note, BackendError>>;

    fn delete_note(&self, id: Uuid) -> impl Future<Output = Result<(), BackendError>>;

    fn list_tasks(
        &self,
        user_id: Uuid,
        query: &TaskQuery,
    ) -> impl Future<Output = Result<Vec<Task>, BackendError>>;

    fn insert_task(&self, task: NewTask) -> impl Future<Output = Result<Task, BackendError>>;

    fn update_task(
        &self,
        id: Uuid,
        patch: TaskPatch,
    ) -> impl Future<Output = Result<Task, BackendError>>;

    fn delete_task(&self, id: Uuid) -> impl Future<Output = Result<(), BackendError>>;

    fn get_profile(&self, user_id: Uuid) -> impl Future<Output = Result<Profile, BackendError>>;

    fn update_profile(
        &self,
        user_id: Uuid,
        update: ProfileUpdate,
    ) -> impl Future<Output = Result<Profile, BackendError>>;
}
