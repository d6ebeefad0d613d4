//! # Domain models for notes, tasks, profiles and starred items
//!
//! These are flat records mirroring the rows of the remote `notes`, `tasks` and
//! `profiles` tables. They are `Serialize + Deserialize` so the same types are
//! used to decode REST responses in the `api` crate and to render in the UI.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Note`] | A user-authored note: title, body, folder, tags, optional image URL and drawing scene, star flag. |
//! | [`Task`] | A to-do entry with an optional due date, status and priority. |
//! | [`Profile`] | Per-user display data: names, avatar, parent/child flag and theme preference. |
//! | [`StarredItem`] | A note or task flagged for quick access, as shown on the starred page. |
//!
//! Insert and patch shapes ([`NewNote`], [`NotePatch`], [`NewTask`], [`TaskPatch`],
//! [`ProfileUpdate`]) only carry the columns the client writes. Patch fields that
//! are `None` are skipped when serialised so the backend leaves them untouched.
//!
//! ## Lenient columns
//!
//! Several columns are nullable upstream even where the UI treats them as plain
//! values (`tags`, `is_starred`). Those decode `null` as the empty/false value.
//! Date columns accept either `YYYY-MM-DD` or a full RFC 3339 timestamp.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Folder used when a note is saved without one.
pub const DEFAULT_FOLDER: &str = "main";

/// A note row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(default = "default_folder", deserialize_with = "null_as_default_folder")]
    pub folder: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    /// Serialised drawing scene, see [`crate::drawing::Drawing::to_json`].
    #[serde(default)]
    pub drawing: Option<String>,
    #[serde(default, deserialize_with = "lenient_date")]
    pub schedule_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_starred: bool,
    pub created_at: DateTime<Utc>,
}

/// Columns written when inserting a note.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewNote {
    pub user_id: Uuid,
    pub title: String,
    pub content: String,
    pub folder: String,
    pub tags: Vec<String>,
    pub image_url: Option<String>,
    pub drawing: Option<String>,
}

/// Partial update of a note.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct NotePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drawing: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_starred: Option<bool>,
}

impl NotePatch {
    pub fn starred(is_starred: bool) -> Self {
        Self {
            is_starred: Some(is_starred),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Task workflow state. Unrecognised values decode as [`TaskStatus::Unknown`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
    #[serde(other)]
    Unknown,
}

impl TaskStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "To do",
            TaskStatus::InProgress => "Doing",
            TaskStatus::Completed => "Done",
            TaskStatus::Unknown => "Unknown",
        }
    }

    /// The status a single "advance" click moves to.
    pub fn next(&self) -> TaskStatus {
        match self {
            TaskStatus::Pending | TaskStatus::Unknown => TaskStatus::InProgress,
            TaskStatus::InProgress => TaskStatus::Completed,
            TaskStatus::Completed => TaskStatus::Pending,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
    #[serde(other)]
    Unknown,
}

impl TaskPriority {
    pub fn label(&self) -> &'static str {
        match self {
            TaskPriority::Low => "Low",
            TaskPriority::Medium => "Medium",
            TaskPriority::High => "High",
            TaskPriority::Unknown => "Unknown",
        }
    }

    /// Parse the value of a `<select>`; blank means no priority.
    pub fn from_form(value: &str) -> Option<TaskPriority> {
        match value {
            "low" => Some(TaskPriority::Low),
            "medium" => Some(TaskPriority::Medium),
            "high" => Some(TaskPriority::High),
            _ => None,
        }
    }
}

/// A task row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_date")]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: Option<TaskStatus>,
    #[serde(default)]
    pub priority: Option<TaskPriority>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_starred: bool,
    pub created_at: DateTime<Utc>,
}

impl Task {
    pub fn is_completed(&self) -> bool {
        self.status == Some(TaskStatus::Completed)
    }
}

/// Columns written when inserting a task.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewTask {
    pub user_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
}

/// Partial update of a task.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<TaskPriority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_starred: Option<bool>,
}

impl TaskPatch {
    pub fn starred(is_starred: bool) -> Self {
        Self {
            is_starred: Some(is_starred),
            ..Self::default()
        }
    }

    pub fn status(status: TaskStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserType {
    Parent,
    Child,
}

/// Colour and font size picked by the user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ThemePreference {
    pub color: String,
    pub font_size: String,
}

impl Default for ThemePreference {
    fn default() -> Self {
        Self {
            color: "purple".to_string(),
            font_size: "medium".to_string(),
        }
    }
}

/// A profile row. Its `id` is the user's id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub user_type: Option<UserType>,
    #[serde(default)]
    pub theme_preference: Option<ThemePreference>,
}

impl Profile {
    /// Nickname, then full name, then a friendly placeholder.
    pub fn display_name(&self) -> &str {
        [self.nickname.as_deref(), self.full_name.as_deref()]
            .into_iter()
            .flatten()
            .find(|name| !name.trim().is_empty())
            .unwrap_or("Friend")
    }
}

/// Columns written by the profile form.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_type: Option<UserType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme_preference: Option<ThemePreference>,
}

/// Which collection a [`StarredItem`] came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Note,
    Task,
}

impl ItemKind {
    pub fn label(&self) -> &'static str {
        match self {
            ItemKind::Note => "note",
            ItemKind::Task => "task",
        }
    }
}

/// A starred note or task.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StarredItem {
    pub id: Uuid,
    pub title: String,
    pub kind: ItemKind,
    pub due_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

impl StarredItem {
    /// The list page the item opens.
    pub fn list_route(&self) -> &'static str {
        match self.kind {
            ItemKind::Note => "/notes",
            ItemKind::Task => "/tasks",
        }
    }

    /// "Due: .." for tasks with a due date, "Created: .." otherwise.
    pub fn caption(&self) -> String {
        match (self.kind, self.due_date) {
            (ItemKind::Task, Some(due)) => format!("Due: {}", format_day(due)),
            _ => format!("Created: {}", format_day(self.created_at.date_naive())),
        }
    }
}

impl From<&Note> for StarredItem {
    fn from(note: &Note) -> Self {
        Self {
            id: note.id,
            title: note.title.clone(),
            kind: ItemKind::Note,
            due_date: None,
            created_at: note.created_at,
        }
    }
}

impl From<&Task> for StarredItem {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id,
            title: task.title.clone(),
            kind: ItemKind::Task,
            due_date: task.due_date,
            created_at: task.created_at,
        }
    }
}

/// Long human date, e.g. "March 4th, 2024".
pub fn format_day(day: NaiveDate) -> String {
    use chrono::Datelike;

    let d = day.day();
    let suffix = match (d % 10, d % 100) {
        (1, n) if n != 11 => "st",
        (2, n) if n != 12 => "nd",
        (3, n) if n != 13 => "rd",
        _ => "th",
    };
    format!("{} {d}{suffix}, {}", day.format("%B"), day.year())
}

fn default_folder() -> String {
    DEFAULT_FOLDER.to_string()
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_default_folder<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?
        .filter(|f| !f.trim().is_empty())
        .unwrap_or_else(default_folder))
}

fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    parse_lenient_date(&raw)
        .map(Some)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid date: {raw}")))
}

/// Parse `YYYY-MM-DD` or an RFC 3339 timestamp into its calendar date.
pub fn parse_lenient_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(day) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(day);
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|ts| ts.date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_decodes_nullable_columns() {
        let json = r#"{
            "id": "6f1c8a52-3a7e-4c36-9a43-0d6f4a2b1e10",
            "user_id": "0b5f8f0e-1a2b-4c3d-8e9f-112233445566",
            "title": "My cat",
            "content": null,
            "folder": null,
            "tags": null,
            "image_url": null,
            "schedule_date": "2024-05-02T00:00:00+00:00",
            "is_starred": null,
            "created_at": "2024-05-01T10:00:00Z"
        }"#;
        let note: Note = serde_json::from_str(json).unwrap();
        assert_eq!(note.content, "");
        assert_eq!(note.folder, DEFAULT_FOLDER);
        assert!(note.tags.is_empty());
        assert!(!note.is_starred);
        assert!(note.drawing.is_none());
        assert_eq!(note.schedule_date, NaiveDate::from_ymd_opt(2024, 5, 2));
    }

    #[test]
    fn test_task_unknown_status_and_plain_date() {
        let json = r#"{
            "id": "6f1c8a52-3a7e-4c36-9a43-0d6f4a2b1e10",
            "user_id": "0b5f8f0e-1a2b-4c3d-8e9f-112233445566",
            "title": "Homework",
            "due_date": "2024-06-10",
            "status": "archived",
            "priority": "high",
            "is_starred": true,
            "created_at": "2024-05-01T10:00:00.123456+00:00"
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.status, Some(TaskStatus::Unknown));
        assert_eq!(task.priority, Some(TaskPriority::High));
        assert_eq!(task.due_date, NaiveDate::from_ymd_opt(2024, 6, 10));
        assert!(task.is_starred);
    }

    #[test]
    fn test_bad_date_is_rejected() {
        let json = r#"{
            "id": "6f1c8a52-3a7e-4c36-9a43-0d6f4a2b1e10",
            "user_id": "0b5f8f0e-1a2b-4c3d-8e9f-112233445566",
            "title": "Homework",
            "due_date": "next tuesday",
            "created_at": "2024-05-01T10:00:00Z"
        }"#;
        assert!(serde_json::from_str::<Task>(json).is_err());
    }

    #[test]
    fn test_patch_skips_unset_fields() {
        let patch = NotePatch::starred(true);
        assert_eq!(
            serde_json::to_value(&patch).unwrap(),
            serde_json::json!({ "is_starred": true })
        );
        assert!(NotePatch::default().is_empty());
        assert!(!patch.is_empty());
    }

    #[test]
    fn test_profile_display_name_fallbacks() {
        let mut profile = Profile {
            id: Uuid::nil(),
            full_name: Some("Ada Lovelace".into()),
            nickname: Some("  ".into()),
            avatar_url: None,
            created_at: Utc::now(),
            user_type: None,
            theme_preference: None,
        };
        assert_eq!(profile.display_name(), "Ada Lovelace");
        profile.nickname = Some("Ada".into());
        assert_eq!(profile.display_name(), "Ada");
        profile.nickname = None;
        profile.full_name = None;
        assert_eq!(profile.display_name(), "Friend");
    }

    #[test]
    fn test_starred_caption() {
        let created = DateTime::parse_from_rfc3339("2024-03-04T08:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let mut item = StarredItem {
            id: Uuid::nil(),
            title: "Read".into(),
            kind: ItemKind::Task,
            due_date: NaiveDate::from_ymd_opt(2024, 3, 22),
            created_at: created,
        };
        assert_eq!(item.caption(), "Due: March 22nd, 2024");
        assert_eq!(item.list_route(), "/tasks");

        item.due_date = None;
        assert_eq!(item.caption(), "Created: March 4th, 2024");

        item.kind = ItemKind::Note;
        assert_eq!(item.list_route(), "/notes");
    }

    #[test]
    fn test_format_day_suffixes() {
        let day = |d| format_day(NaiveDate::from_ymd_opt(2024, 1, d).unwrap());
        assert_eq!(day(1), "January 1st, 2024");
        assert_eq!(day(11), "January 11th, 2024");
        assert_eq!(day(12), "January 12th, 2024");
        assert_eq!(day(23), "January 23rd, 2024");
        assert_eq!(day(31), "January 31st, 2024");
    }

    #[test]
    fn test_status_cycle() {
        assert_eq!(TaskStatus::Pending.next(), TaskStatus::InProgress);
        assert_eq!(TaskStatus::InProgress.next(), TaskStatus::Completed);
        assert_eq!(TaskStatus::Completed.next(), TaskStatus::Pending);
    }
}
