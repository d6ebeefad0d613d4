//! Client-side note filtering for the notes page.
//!
//! The day filter is pushed down to the backend as a `created_at` range (see
//! [`NoteFilter::to_query`]); search and folder are applied to the fetched rows.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeDelta, TimeZone, Utc};

use crate::backend::NoteQuery;
use crate::models::Note;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NoteFilter {
    pub search: String,
    pub folder: Option<String>,
    pub day: Option<NaiveDate>,
}

impl NoteFilter {
    /// Select `folder`, or clear the selection if it is already selected.
    pub fn toggle_folder(&mut self, folder: &str) {
        if self.folder.as_deref() == Some(folder) {
            self.folder = None;
        } else {
            self.folder = Some(folder.to_string());
        }
    }

    pub fn matches(&self, note: &Note) -> bool {
        self.matches_search(note) && self.matches_folder(note)
    }

    fn matches_search(&self, note: &Note) -> bool {
        let needle = self.search.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        note.title.to_lowercase().contains(&needle) || note.content.to_lowercase().contains(&needle)
    }

    fn matches_folder(&self, note: &Note) -> bool {
        match &self.folder {
            Some(folder) => &note.folder == folder,
            None => true,
        }
    }

    /// Backend query for this filter, with the day expressed in `tz`.
    pub fn to_query<Tz: TimeZone>(&self, tz: &Tz) -> NoteQuery {
        NoteQuery {
            starred_only: false,
            created_between: self.day.and_then(|day| day_bounds(day, tz)),
        }
    }

    pub fn apply(&self, notes: Vec<Note>) -> Vec<Note> {
        notes.into_iter().filter(|n| self.matches(n)).collect()
    }
}

/// First and last millisecond of `day` in `tz`, as UTC instants.
///
/// When midnight (or the end of the day) falls in a DST gap, the bound moves
/// to the nearest local time that exists. Returns `None` only if no time of
/// `day` exists in `tz`.
pub fn day_bounds<Tz: TimeZone>(day: NaiveDate, tz: &Tz) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    let minute = TimeDelta::minutes(1);
    let start = first_existing(tz, day, day.and_hms_opt(0, 0, 0)?, minute)?;
    let end = first_existing(tz, day, day.and_hms_milli_opt(23, 59, 59, 999)?, -minute)?;
    Some((start, end))
}

/// Walk from `local` by `step` until a local time of `day` exists in `tz`.
fn first_existing<Tz: TimeZone>(
    tz: &Tz,
    day: NaiveDate,
    mut local: NaiveDateTime,
    step: TimeDelta,
) -> Option<DateTime<Utc>> {
    while local.date() == day {
        let resolved = tz.from_local_datetime(&local);
        let instant = if step > TimeDelta::zero() {
            resolved.earliest()
        } else {
            resolved.latest()
        };
        if let Some(instant) = instant {
            return Some(instant.with_timezone(&Utc));
        }
        local += step;
    }
    None
}

/// Distinct note folders, in the order they first appear.
pub fn unique_folders(notes: &[Note]) -> Vec<String> {
    let mut folders: Vec<String> = Vec::new();
    for note in notes {
        if !folders.iter().any(|f| f == &note.folder) {
            folders.push(note.folder.clone());
        }
    }
    folders
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;
    use uuid::Uuid;

    fn note(title: &str, content: &str, folder: &str) -> Note {
        Note {
            id: Uuid::new_v4(),
            user_id: Uuid::nil(),
            title: title.to_string(),
            content: content.to_string(),
            folder: folder.to_string(),
            tags: vec![],
            image_url: None,
            drawing: None,
            schedule_date: None,
            is_starred: false,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_search_is_case_insensitive_over_title_and_content() {
        let notes = vec![
            note("Dinosaurs", "big lizards", "school"),
            note("Shopping", "buy a T-Rex toy", "home"),
            note("Piano", "practice scales", "home"),
        ];
        let filter = NoteFilter {
            search: "  t-rex ".into(),
            ..NoteFilter::default()
        };
        let hits = filter.apply(notes.clone());
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Shopping");

        let filter = NoteFilter {
            search: "DINO".into(),
            ..NoteFilter::default()
        };
        assert_eq!(filter.apply(notes.clone())[0].title, "Dinosaurs");

        assert_eq!(NoteFilter::default().apply(notes).len(), 3);
    }

    #[test]
    fn test_folder_toggle() {
        let notes = vec![note("a", "", "school"), note("b", "", "home")];
        let mut filter = NoteFilter::default();

        filter.toggle_folder("home");
        assert_eq!(filter.apply(notes.clone()).len(), 1);

        filter.toggle_folder("school");
        assert_eq!(filter.folder.as_deref(), Some("school"));

        filter.toggle_folder("school");
        assert!(filter.folder.is_none());
        assert_eq!(filter.apply(notes).len(), 2);
    }

    #[test]
    fn test_unique_folders_keep_first_seen_order() {
        let notes = vec![
            note("a", "", "school"),
            note("b", "", "main"),
            note("c", "", "school"),
            note("d", "", "home"),
        ];
        assert_eq!(unique_folders(&notes), vec!["school", "main", "home"]);
    }

    #[test]
    fn test_day_bounds_in_utc() {
        let day = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        let (start, end) = day_bounds(day, &Utc).unwrap();
        assert_eq!(start.to_rfc3339(), "2024-02-29T00:00:00+00:00");
        assert_eq!(end.to_rfc3339(), "2024-02-29T23:59:59.999+00:00");
    }

    #[test]
    fn test_day_bounds_follow_local_offset() {
        let tz = FixedOffset::east_opt(2 * 3600).unwrap();
        let day = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
        let (start, end) = day_bounds(day, &tz).unwrap();
        assert_eq!(start.to_rfc3339(), "2024-06-30T22:00:00+00:00");
        assert_eq!(end.to_rfc3339(), "2024-07-01T21:59:59.999+00:00");

        let filter = NoteFilter {
            day: Some(day),
            ..NoteFilter::default()
        };
        assert_eq!(filter.to_query(&tz).created_between, Some((start, end)));
        assert_eq!(NoteFilter::default().to_query(&tz).created_between, None);
    }

    #[test]
    fn test_day_bounds_when_midnight_is_skipped() {
        // Santiago springs forward at 00:00, so the day starts at 01:00 (-03)
        let tz = chrono_tz::America::Santiago;
        let day = NaiveDate::from_ymd_opt(2022, 9, 11).unwrap();
        let (start, end) = day_bounds(day, &tz).unwrap();
        assert_eq!(start.to_rfc3339(), "2022-09-11T04:00:00+00:00");
        assert_eq!(end.to_rfc3339(), "2022-09-12T02:59:59.999+00:00");

        let filter = NoteFilter {
            day: Some(day),
            ..NoteFilter::default()
        };
        assert_eq!(filter.to_query(&tz).created_between, Some((start, end)));
    }
}
