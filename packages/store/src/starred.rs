//! Starred items: one list built from two remote collections.
//!
//! Notes and tasks live in separate tables, each with its own `is_starred`
//! flag. The starred page shows them together, newest first, so the merge
//! happens on the client.

use crate::models::{Note, StarredItem, Task};

/// Merge starred notes and tasks into one list ordered by `created_at`, newest first.
///
/// Unstarred rows are skipped. The sort is stable and notes are placed before
/// tasks, so a note and a task created at the same instant list the note first.
pub fn merge_starred(notes: &[Note], tasks: &[Task]) -> Vec<StarredItem> {
    let mut items: Vec<StarredItem> = notes
        .iter()
        .filter(|n| n.is_starred)
        .map(StarredItem::from)
        .chain(tasks.iter().filter(|t| t.is_starred).map(StarredItem::from))
        .collect();
    items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ItemKind;
    use chrono::{DateTime, NaiveDate, Utc};
    use uuid::Uuid;

    fn at(ts: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(ts).unwrap().with_timezone(&Utc)
    }

    fn note(title: &str, created_at: &str, starred: bool) -> Note {
        Note {
            id: Uuid::new_v4(),
            user_id: Uuid::nil(),
            title: title.into(),
            content: String::new(),
            folder: "main".into(),
            tags: vec![],
            image_url: None,
            drawing: None,
            schedule_date: None,
            is_starred: starred,
            created_at: at(created_at),
        }
    }

    fn task(title: &str, created_at: &str, due: Option<NaiveDate>) -> Task {
        Task {
            id: Uuid::new_v4(),
            user_id: Uuid::nil(),
            title: title.into(),
            description: None,
            due_date: due,
            status: None,
            priority: None,
            is_starred: true,
            created_at: at(created_at),
        }
    }

    #[test]
    fn test_interleaves_by_creation_time() {
        let notes = vec![
            note("note-new", "2024-05-03T09:00:00Z", true),
            note("note-old", "2024-05-01T09:00:00Z", true),
        ];
        let tasks = vec![
            task("task-mid", "2024-05-02T09:00:00Z", NaiveDate::from_ymd_opt(2024, 6, 1)),
            task("task-newest", "2024-05-04T09:00:00Z", None),
        ];

        let merged = merge_starred(&notes, &tasks);
        let titles: Vec<&str> = merged.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["task-newest", "note-new", "task-mid", "note-old"]);
        assert_eq!(merged[2].kind, ItemKind::Task);
        assert_eq!(merged[2].due_date, NaiveDate::from_ymd_opt(2024, 6, 1));
        assert_eq!(merged[1].due_date, None);
    }

    #[test]
    fn test_ties_put_notes_first_and_skip_unstarred() {
        let ts = "2024-05-01T12:00:00Z";
        let notes = vec![note("kept", ts, true), note("dropped", ts, false)];
        let tasks = vec![task("tied", ts, None)];

        let merged = merge_starred(&notes, &tasks);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].kind, ItemKind::Note);
        assert_eq!(merged[1].kind, ItemKind::Task);
    }

    #[test]
    fn test_empty_inputs() {
        assert!(merge_starred(&[], &[]).is_empty());
    }
}
