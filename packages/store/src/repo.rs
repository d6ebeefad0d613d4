//! # Repository: user-scoped operations over a [`Backend`]
//!
//! Pages never talk to the backend tables directly. They build a [`Repository`]
//! for the signed-in user and call the operation that matches the user action.
//! The repository supplies the user id, turns drafts into insert/patch rows and
//! does the little client-side work the pages need (filtering, merging, sorting).
//!
//! ## Notes
//!
//! | Method | Description |
//! |--------|-------------|
//! | [`notes`](Repository::notes) | Lists notes for a [`NoteFilter`]; the day range goes to the backend, search and folder are applied locally. |
//! | [`note`](Repository::note) | Loads one note, refusing notes owned by another user. |
//! | [`create_note`](Repository::create_note) / [`save_note`](Repository::save_note) | Validate a [`NoteDraft`] and insert or update. |
//! | [`toggle_note_star`](Repository::toggle_note_star) | Flips `is_starred`. |
//! | [`save_drawing`](Repository::save_drawing) | Stores a drawing scene on an existing note. |
//! | [`folders`](Repository::folders) | Distinct folders across the user's notes. |
//!
//! ## Tasks, profile, starred
//!
//! Tasks mirror the note operations plus [`set_task_status`](Repository::set_task_status).
//! [`starred_items`](Repository::starred_items) runs the two starred queries
//! concurrently and merges them with [`merge_starred`].
//!
//! ## Errors
//!
//! Every method returns [`RepoError`]: either the draft failed validation (nothing
//! was sent) or the backend call failed.

use chrono::{NaiveDate, TimeZone};
use uuid::Uuid;

use crate::backend::{Backend, BackendError, NoteQuery, TaskQuery, NOTES_TABLE};
use crate::calendar;
use crate::drafts::{DraftError, NoteDraft, ProfileDraft, TaskDraft};
use crate::drawing::Drawing;
use crate::filter::{unique_folders, NoteFilter};
use crate::models::{Note, NotePatch, Profile, StarredItem, Task, TaskPatch, TaskStatus};
use crate::starred::merge_starred;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RepoError {
    #[error(transparent)]
    Invalid(#[from] DraftError),
    #[error(transparent)]
    Backend(#[from] BackendError),
    #[error("drawing could not be saved: {0}")]
    Drawing(String),
}

/// The signed-in user's view of the backend.
#[derive(Clone, Debug)]
pub struct Repository<B: Backend> {
    backend: B,
    user_id: Uuid,
}

impl<B: Backend> Repository<B> {
    pub fn new(backend: B, user_id: Uuid) -> Self {
        Self { backend, user_id }
    }

    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Notes matching `filter`, newest first. `tz` defines the filter's day.
    pub async fn notes<Tz: TimeZone>(&self, filter: &NoteFilter, tz: &Tz) -> Result<Vec<Note>, RepoError> {
        let query = filter.to_query(tz);
        let notes = self.backend.list_notes(self.user_id, &query).await?;
        tracing::debug!(count = notes.len(), "fetched notes");
        Ok(filter.apply(notes))
    }

    pub async fn folders(&self) -> Result<Vec<String>, RepoError> {
        let notes = self.backend.list_notes(self.user_id, &NoteQuery::default()).await?;
        Ok(unique_folders(&notes))
    }

    pub async fn note(&self, id: Uuid) -> Result<Note, RepoError> {
        let note = self.backend.get_note(id).await?;
        if note.user_id != self.user_id {
            return Err(BackendError::not_found(NOTES_TABLE, id).into());
        }
        Ok(note)
    }

    pub async fn create_note(&self, draft: &NoteDraft) -> Result<Note, RepoError> {
        let row = draft.validate()?.into_new(self.user_id);
        let note = self.backend.insert_note(row).await?;
        tracing::info!(note_id = %note.id, "note created");
        Ok(note)
    }

    pub async fn save_note(&self, id: Uuid, draft: &NoteDraft) -> Result<Note, RepoError> {
        let patch = draft.validate()?.into_patch();
        let note = self.backend.update_note(id, patch).await?;
        tracing::info!(note_id = %id, "note saved");
        Ok(note)
    }

    pub async fn delete_note(&self, id: Uuid) -> Result<(), RepoError> {
        self.backend.delete_note(id).await?;
        tracing::info!(note_id = %id, "note deleted");
        Ok(())
    }

    pub async fn toggle_note_star(&self, note: &Note) -> Result<Note, RepoError> {
        Ok(self
            .backend
            .update_note(note.id, NotePatch::starred(!note.is_starred))
            .await?)
    }

    pub async fn save_drawing(&self, id: Uuid, drawing: &Drawing) -> Result<Note, RepoError> {
        let json = drawing
            .to_json()
            .map_err(|e| RepoError::Drawing(e.to_string()))?;
        let patch = NotePatch {
            drawing: Some(json),
            ..NotePatch::default()
        };
        Ok(self.backend.update_note(id, patch).await?)
    }

    pub async fn tasks(&self) -> Result<Vec<Task>, RepoError> {
        Ok(self.backend.list_tasks(self.user_id, &TaskQuery::default()).await?)
    }

    pub async fn create_task(&self, draft: &TaskDraft) -> Result<Task, RepoError> {
        let row = draft.validate(self.user_id)?;
        let task = self.backend.insert_task(row).await?;
        tracing::info!(task_id = %task.id, "task created");
        Ok(task)
    }

    pub async fn delete_task(&self, id: Uuid) -> Result<(), RepoError> {
        self.backend.delete_task(id).await?;
        tracing::info!(task_id = %id, "task deleted");
        Ok(())
    }

    pub async fn toggle_task_star(&self, task: &Task) -> Result<Task, RepoError> {
        Ok(self
            .backend
            .update_task(task.id, TaskPatch::starred(!task.is_starred))
            .await?)
    }

    pub async fn set_task_status(&self, id: Uuid, status: TaskStatus) -> Result<Task, RepoError> {
        Ok(self.backend.update_task(id, TaskPatch::status(status)).await?)
    }

    /// Open tasks for the sidebar card.
    pub async fn upcoming_tasks(&self, today: NaiveDate, limit: usize) -> Result<Vec<Task>, RepoError> {
        let tasks = self.tasks().await?;
        Ok(calendar::upcoming_tasks(&tasks, today, limit))
    }

    pub async fn profile(&self) -> Result<Profile, RepoError> {
        Ok(self.backend.get_profile(self.user_id).await?)
    }

    pub async fn save_profile(&self, draft: &ProfileDraft) -> Result<Profile, RepoError> {
        let update = draft.validate()?;
        Ok(self.backend.update_profile(self.user_id, update).await?)
    }

    /// Starred notes and tasks, newest first.
    ///
    /// Both queries run concurrently; if either fails the whole call fails.
    pub async fn starred_items(&self) -> Result<Vec<StarredItem>, RepoError> {
        let note_query = NoteQuery::starred();
        let task_query = TaskQuery::starred();
        let (notes, tasks) = futures::join!(
            self.backend.list_notes(self.user_id, &note_query),
            self.backend.list_tasks(self.user_id, &task_query),
        );
        let notes = notes.inspect_err(|e| tracing::warn!("starred notes: {e}"))?;
        let tasks = tasks.inspect_err(|e| tracing::warn!("starred tasks: {e}"))?;
        Ok(merge_starred(&notes, &tasks))
    }
}
