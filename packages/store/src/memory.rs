use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::backend::{
    Backend, BackendError, NoteQuery, TaskQuery, NOTES_TABLE, PROFILES_TABLE, TASKS_TABLE,
};
use crate::models::{
    NewNote, NewTask, Note, NotePatch, Profile, ProfileUpdate, Task, TaskPatch,
};

#[derive(Debug, Default)]
struct Tables {
    notes: Vec<Note>,
    tasks: Vec<Task>,
    profiles: HashMap<Uuid, Profile>,
    /// Last timestamp handed out, so rows created in a burst still order.
    clock: Option<DateTime<Utc>>,
}

impl Tables {
    fn now(&mut self) -> DateTime<Utc> {
        let now = Utc::now();
        let next = match self.clock {
            Some(last) if now <= last => last + Duration::milliseconds(1),
            _ => now,
        };
        self.clock = Some(next);
        next
    }
}

/// In-memory Backend for testing and offline previews.
#[derive(Clone, Debug, Default)]
pub struct MemoryBackend {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn tables(&self) -> Result<MutexGuard<'_, Tables>, BackendError> {
        self.tables
            .lock()
            .map_err(|_| BackendError::Transport("memory backend poisoned".to_string()))
    }

    /// Insert a note row as-is (tests use this to control `created_at`).
    pub fn seed_note(&self, note: Note) {
        if let Ok(mut t) = self.tables() {
            t.notes.push(note);
        }
    }

    /// Insert a task row as-is.
    pub fn seed_task(&self, task: Task) {
        if let Ok(mut t) = self.tables() {
            t.tasks.push(task);
        }
    }

    /// Create or replace a profile row.
    pub fn seed_profile(&self, profile: Profile) {
        if let Ok(mut t) = self.tables() {
            t.profiles.insert(profile.id, profile);
        }
    }
}

fn newest_first<T>(rows: &mut [T], created_at: impl Fn(&T) -> DateTime<Utc>) {
    rows.sort_by(|a, b| created_at(b).cmp(&created_at(a)));
}

impl Backend for MemoryBackend {
    async fn list_notes(&self, user_id: Uuid, query: &NoteQuery) -> Result<Vec<Note>, BackendError> {
        let t = self.tables()?;
        let mut notes: Vec<Note> = t
            .notes
            .iter()
            .filter(|n| n.user_id == user_id && query.matches(n))
            .cloned()
            .collect();
        newest_first(&mut notes, |n| n.created_at);
        Ok(notes)
    }

    async fn get_note(&self, id: Uuid) -> Result<Note, BackendError> {
        self.tables()?
            .notes
            .iter()
            .find(|n| n.id == id)
            .cloned()
            .ok_or_else(|| BackendError::not_found(NOTES_TABLE, id))
    }

    async fn insert_note(&self, note: NewNote) -> Result<Note, BackendError> {
        let mut t = self.tables()?;
        let created_at = t.now();
        let row = Note {
            id: Uuid::new_v4(),
            user_id: note.user_id,
            title: note.title,
            content: note.content,
            folder: note.folder,
            tags: note.tags,
            image_url: note.image_url,
            drawing: note.drawing,
            schedule_date: None,
            is_starred: false,
            created_at,
        };
        t.notes.push(row.clone());
        Ok(row)
    }

    async fn update_note(&self, id: Uuid, patch: NotePatch) -> Result<Note, BackendError> {
        let mut t = self.tables()?;
        let note = t
            .notes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| BackendError::not_found(NOTES_TABLE, id))?;
        if let Some(title) = patch.title {
            note.title = title;
        }
        if let Some(content) = patch.content {
            note.content = content;
        }
        if let Some(folder) = patch.folder {
            note.folder = folder;
        }
        if let Some(tags) = patch.tags {
            note.tags = tags;
        }
        if let Some(drawing) = patch.drawing {
            note.drawing = Some(drawing);
        }
        if let Some(is_starred) = patch.is_starred {
            note.is_starred = is_starred;
        }
        Ok(note.clone())
    }

    async fn delete_note(&self, id: Uuid) -> Result<(), BackendError> {
        let mut t = self.tables()?;
        let before = t.notes.len();
        t.notes.retain(|n| n.id != id);
        if t.notes.len() == before {
            return Err(BackendError::not_found(NOTES_TABLE, id));
        }
        Ok(())
    }

    async fn list_tasks(&self, user_id: Uuid, query: &TaskQuery) -> Result<Vec<Task>, BackendError> {
        let t = self.tables()?;
        let mut tasks: Vec<Task> = t
            .tasks
            .iter()
            .filter(|task| task.user_id == user_id && query.matches(task))
            .cloned()
            .collect();
        newest_first(&mut tasks, |task| task.created_at);
        Ok(tasks)
    }

    async fn insert_task(&self, task: NewTask) -> Result<Task, BackendError> {
        let mut t = self.tables()?;
        let created_at = t.now();
        let row = Task {
            id: Uuid::new_v4(),
            user_id: task.user_id,
            title: task.title,
            description: task.description,
            due_date: task.due_date,
            status: task.status,
            priority: task.priority,
            is_starred: false,
            created_at,
        };
        t.tasks.push(row.clone());
        Ok(row)
    }

    async fn update_task(&self, id: Uuid, patch: TaskPatch) -> Result<Task, BackendError> {
        let mut t = self.tables()?;
        let task = t
            .tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or_else(|| BackendError::not_found(TASKS_TABLE, id))?;
        if let Some(title) = patch.title {
            task.title = title;
        }
        if let Some(description) = patch.description {
            task.description = Some(description);
        }
        if let Some(due_date) = patch.due_date {
            task.due_date = Some(due_date);
        }
        if let Some(status) = patch.status {
            task.status = Some(status);
        }
        if let Some(priority) = patch.priority {
            task.priority = Some(priority);
        }
        if let Some(is_starred) = patch.is_starred {
            task.is_starred = is_starred;
        }
        Ok(task.clone())
    }

    async fn delete_task(&self, id: Uuid) -> Result<(), BackendError> {
        let mut t = self.tables()?;
        let before = t.tasks.len();
        t.tasks.retain(|task| task.id != id);
        if t.tasks.len() == before {
            return Err(BackendError::not_found(TASKS_TABLE, id));
        }
        Ok(())
    }

    async fn get_profile(&self, user_id: Uuid) -> Result<Profile, BackendError> {
        self.tables()?
            .profiles
            .get(&user_id)
            .cloned()
            .ok_or_else(|| BackendError::not_found(PROFILES_TABLE, user_id))
    }

    async fn update_profile(
        &self,
        user_id: Uuid,
        update: ProfileUpdate,
    ) -> Result<Profile, BackendError> {
        let mut t = self.tables()?;
        let profile = t
            .profiles
            .get_mut(&user_id)
            .ok_or_else(|| BackendError::not_found(PROFILES_TABLE, user_id))?;
        if let Some(full_name) = update.full_name {
            profile.full_name = Some(full_name);
        }
        if let Some(nickname) = update.nickname {
            profile.nickname = Some(nickname);
        }
        if let Some(user_type) = update.user_type {
            profile.user_type = Some(user_type);
        }
        if let Some(theme) = update.theme_preference {
            profile.theme_preference = Some(theme);
        }
        Ok(profile.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_note(user_id: Uuid, title: &str) -> NewNote {
        NewNote {
            user_id,
            title: title.to_string(),
            content: "body".to_string(),
            folder: "main".to_string(),
            tags: vec![],
            image_url: None,
            drawing: None,
        }
    }

    #[tokio::test]
    async fn test_insert_and_list_newest_first() {
        let backend = MemoryBackend::new();
        let user = Uuid::new_v4();

        assert!(backend.list_notes(user, &NoteQuery::default()).await.unwrap().is_empty());

        backend.insert_note(new_note(user, "first")).await.unwrap();
        backend.insert_note(new_note(user, "second")).await.unwrap();
        backend.insert_note(new_note(Uuid::new_v4(), "someone else")).await.unwrap();

        let notes = backend.list_notes(user, &NoteQuery::default()).await.unwrap();
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0].title, "second");
        assert_eq!(notes[1].title, "first");
        assert!(notes[0].created_at > notes[1].created_at);
    }

    #[tokio::test]
    async fn test_update_and_star_filter() {
        let backend = MemoryBackend::new();
        let user = Uuid::new_v4();
        let note = backend.insert_note(new_note(user, "draft")).await.unwrap();

        let updated = backend
            .update_note(
                note.id,
                NotePatch {
                    title: Some("final".into()),
                    is_starred: Some(true),
                    ..NotePatch::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.title, "final");
        assert_eq!(updated.content, "body");

        let starred = backend.list_notes(user, &NoteQuery::starred()).await.unwrap();
        assert_eq!(starred.len(), 1);
        assert!(starred[0].is_starred);
    }

    #[tokio::test]
    async fn test_missing_rows_are_not_found() {
        let backend = MemoryBackend::new();
        let id = Uuid::new_v4();

        assert!(matches!(
            backend.delete_note(id).await,
            Err(BackendError::NotFound { table: "notes", .. })
        ));
        assert!(matches!(
            backend.update_task(id, TaskPatch::starred(true)).await,
            Err(BackendError::NotFound { table: "tasks", .. })
        ));
        assert!(matches!(
            backend.get_profile(id).await,
            Err(BackendError::NotFound { table: "profiles", .. })
        ));
    }

    #[tokio::test]
    async fn test_delete_task() {
        let backend = MemoryBackend::new();
        let user = Uuid::new_v4();
        let task = backend
            .insert_task(NewTask {
                user_id: user,
                title: "Feed the fish".into(),
                description: None,
                due_date: None,
                status: None,
                priority: None,
            })
            .await
            .unwrap();

        backend.delete_task(task.id).await.unwrap();
        assert!(backend.list_tasks(user, &TaskQuery::default()).await.unwrap().is_empty());
    }
}
