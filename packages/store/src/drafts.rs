//! Form drafts and their validation.
//!
//! Each form in the UI edits a draft; on submit the draft is validated and
//! turned into the insert/patch shape for the backend.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::models::{
    NewNote, NewTask, Note, NotePatch, ProfileUpdate, TaskPriority, TaskStatus, ThemePreference,
    UserType, DEFAULT_FOLDER,
};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("{0} is required")]
    Missing(&'static str),
}

fn required(value: &str, field: &'static str) -> Result<String, DraftError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(DraftError::Missing(field));
    }
    Ok(value.to_string())
}

/// The note creation / edit form.
#[derive(Clone, Debug, PartialEq)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
    pub folder: String,
    pub tags: Vec<String>,
    pub drawing: Option<String>,
}

impl Default for NoteDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            folder: DEFAULT_FOLDER.to_string(),
            tags: Vec::new(),
            drawing: None,
        }
    }
}

/// Validated note fields.
#[derive(Clone, Debug, PartialEq)]
pub struct ValidNote {
    pub title: String,
    pub content: String,
    pub folder: String,
    pub tags: Vec<String>,
    pub drawing: Option<String>,
}

impl NoteDraft {
    /// Pre-fill the form from an existing note.
    pub fn from_note(note: &Note) -> Self {
        Self {
            title: note.title.clone(),
            content: note.content.clone(),
            folder: note.folder.clone(),
            tags: note.tags.clone(),
            drawing: note.drawing.clone(),
        }
    }

    /// Add a tag; returns `false` for blank or duplicate tags.
    pub fn add_tag(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        if tag.is_empty() || self.tags.iter().any(|t| t == tag) {
            return false;
        }
        self.tags.push(tag.to_string());
        true
    }

    pub fn remove_tag(&mut self, tag: &str) {
        self.tags.retain(|t| t != tag);
    }

    pub fn validate(&self) -> Result<ValidNote, DraftError> {
        let title = required(&self.title, "title")?;
        let content = required(&self.content, "content")?;
        let folder = match self.folder.trim() {
            "" => DEFAULT_FOLDER.to_string(),
            f => f.to_string(),
        };
        Ok(ValidNote {
            title,
            content,
            folder,
            tags: self.tags.clone(),
            drawing: self.drawing.clone(),
        })
    }
}

impl ValidNote {
    pub fn into_new(self, user_id: Uuid) -> NewNote {
        NewNote {
            user_id,
            title: self.title,
            content: self.content,
            folder: self.folder,
            tags: self.tags,
            image_url: None,
            drawing: self.drawing,
        }
    }

    pub fn into_patch(self) -> NotePatch {
        NotePatch {
            title: Some(self.title),
            content: Some(self.content),
            folder: Some(self.folder),
            tags: Some(self.tags),
            drawing: self.drawing,
            is_starred: None,
        }
    }
}

/// The task creation form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub due_date: Option<NaiveDate>,
    pub priority: Option<TaskPriority>,
    pub status: Option<TaskStatus>,
}

impl TaskDraft {
    /// A draft for the calendar's quick "add task for <date>".
    pub fn due_on(title: &str, day: NaiveDate) -> Self {
        Self {
            title: title.to_string(),
            due_date: Some(day),
            ..Self::default()
        }
    }

    pub fn validate(&self, user_id: Uuid) -> Result<NewTask, DraftError> {
        let title = required(&self.title, "title")?;
        let description = match self.description.trim() {
            "" => None,
            d => Some(d.to_string()),
        };
        Ok(NewTask {
            user_id,
            title,
            description,
            due_date: self.due_date,
            status: Some(self.status.unwrap_or(TaskStatus::Pending)),
            priority: self.priority,
        })
    }
}

/// The profile creation form.
#[derive(Clone, Debug, PartialEq)]
pub struct ProfileDraft {
    pub full_name: String,
    pub nickname: String,
    pub is_parent: bool,
    pub theme: Option<ThemePreference>,
}

impl Default for ProfileDraft {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            nickname: String::new(),
            is_parent: true,
            theme: None,
        }
    }
}

impl ProfileDraft {
    pub fn validate(&self) -> Result<ProfileUpdate, DraftError> {
        let full_name = required(&self.full_name, "full name")?;
        let nickname = required(&self.nickname, "nickname")?;
        Ok(ProfileUpdate {
            full_name: Some(full_name),
            nickname: Some(nickname),
            user_type: Some(if self.is_parent {
                UserType::Parent
            } else {
                UserType::Child
            }),
            theme_preference: self.theme.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_are_trimmed_and_deduplicated() {
        let mut draft = NoteDraft::default();
        assert!(draft.add_tag(" school "));
        assert!(!draft.add_tag("school"));
        assert!(!draft.add_tag("   "));
        assert!(draft.add_tag("art"));
        assert_eq!(draft.tags, vec!["school", "art"]);

        draft.remove_tag("school");
        assert_eq!(draft.tags, vec!["art"]);
    }

    #[test]
    fn test_note_requires_title_and_content() {
        let mut draft = NoteDraft {
            title: "  ".into(),
            content: "x".into(),
            ..NoteDraft::default()
        };
        assert_eq!(draft.validate(), Err(DraftError::Missing("title")));

        draft.title = "Trip".into();
        draft.content = String::new();
        assert_eq!(draft.validate(), Err(DraftError::Missing("content")));

        draft.content = " We saw whales ".into();
        draft.folder = "  ".into();
        let valid = draft.validate().unwrap();
        assert_eq!(valid.content, "We saw whales");
        assert_eq!(valid.folder, DEFAULT_FOLDER);
    }

    #[test]
    fn test_note_patch_keeps_existing_drawing_when_none() {
        let draft = NoteDraft {
            title: "t".into(),
            content: "c".into(),
            ..NoteDraft::default()
        };
        let patch = draft.validate().unwrap().into_patch();
        assert!(patch.drawing.is_none());
        assert_eq!(patch.tags, Some(vec![]));
    }

    #[test]
    fn test_task_defaults() {
        let user = Uuid::new_v4();
        assert_eq!(
            TaskDraft::default().validate(user),
            Err(DraftError::Missing("title"))
        );

        let day = NaiveDate::from_ymd_opt(2024, 9, 1).unwrap();
        let task = TaskDraft::due_on("Pack school bag", day).validate(user).unwrap();
        assert_eq!(task.due_date, Some(day));
        assert_eq!(task.status, Some(TaskStatus::Pending));
        assert_eq!(task.description, None);
    }

    #[test]
    fn test_profile_user_type() {
        let mut draft = ProfileDraft {
            full_name: "Sam Lee".into(),
            nickname: "Sammy".into(),
            ..ProfileDraft::default()
        };
        assert_eq!(draft.validate().unwrap().user_type, Some(UserType::Parent));

        draft.is_parent = false;
        assert_eq!(draft.validate().unwrap().user_type, Some(UserType::Child));

        draft.nickname.clear();
        assert_eq!(draft.validate(), Err(DraftError::Missing("nickname")));
    }
}
