//! PostgREST query strings.
//!
//! Filters are query parameters of the form `column=op.value`; a column may
//! appear more than once (`created_at=gte.X&created_at=lte.Y`), so parameters
//! are kept as an ordered list of pairs rather than a map.

use chrono::{DateTime, SecondsFormat, Utc};
use store::{NoteQuery, TaskQuery};
use uuid::Uuid;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RestQuery {
    params: Vec<(String, String)>,
}

impl RestQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// `select=*`
    pub fn select_all() -> Self {
        Self::new().param("select", "*")
    }

    fn param(mut self, key: &str, value: impl Into<String>) -> Self {
        self.params.push((key.to_string(), value.into()));
        self
    }

    pub fn eq(self, column: &str, value: impl std::fmt::Display) -> Self {
        self.param(column, format!("eq.{value}"))
    }

    pub fn gte(self, column: &str, value: DateTime<Utc>) -> Self {
        self.param(column, format!("gte.{}", timestamp(value)))
    }

    pub fn lte(self, column: &str, value: DateTime<Utc>) -> Self {
        self.param(column, format!("lte.{}", timestamp(value)))
    }

    pub fn order_desc(self, column: &str) -> Self {
        self.param("order", format!("{column}.desc"))
    }

    pub fn by_id(id: Uuid) -> Self {
        Self::new().eq("id", id)
    }

    /// `select=*&id=eq.{id}`
    pub fn row(id: Uuid) -> Self {
        Self::select_all().eq("id", id)
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.params
    }

    /// Render as `a=b&c=d` without percent-encoding, for logs.
    pub fn describe(&self) -> String {
        self.params
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&")
    }

    pub fn notes(user_id: Uuid, query: &NoteQuery) -> Self {
        let mut q = Self::select_all().eq("user_id", user_id);
        if query.starred_only {
            q = q.eq("is_starred", true);
        }
        if let Some((from, to)) = query.created_between {
            q = q.gte("created_at", from).lte("created_at", to);
        }
        q.order_desc("created_at")
    }

    pub fn tasks(user_id: Uuid, query: &TaskQuery) -> Self {
        let mut q = Self::select_all().eq("user_id", user_id);
        if query.starred_only {
            q = q.eq("is_starred", true);
        }
        q.order_desc("created_at")
    }
}

fn timestamp(value: DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use store::filter::day_bounds;

    #[test]
    fn test_notes_query_for_day() {
        let user = Uuid::parse_str("6f1d2c1e-5a7b-4a43-9d1e-2f0c3b4a5d6e").unwrap();
        let day = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
        let query = NoteQuery {
            starred_only: false,
            created_between: day_bounds(day, &Utc),
        };
        assert_eq!(
            RestQuery::notes(user, &query).describe(),
            "select=*&user_id=eq.6f1d2c1e-5a7b-4a43-9d1e-2f0c3b4a5d6e\
             &created_at=gte.2024-03-04T00:00:00.000Z\
             &created_at=lte.2024-03-04T23:59:59.999Z\
             &order=created_at.desc"
        );
    }

    #[test]
    fn test_starred_filters() {
        let user = Uuid::nil();
        let notes = RestQuery::notes(user, &NoteQuery::starred());
        assert!(notes
            .pairs()
            .contains(&("is_starred".to_string(), "eq.true".to_string())));

        let tasks = RestQuery::tasks(user, &TaskQuery::default());
        assert_eq!(
            tasks.describe(),
            "select=*&user_id=eq.00000000-0000-0000-0000-000000000000&order=created_at.desc"
        );
    }

    #[test]
    fn test_by_id() {
        let id = Uuid::nil();
        assert_eq!(
            RestQuery::by_id(id).describe(),
            "id=eq.00000000-0000-0000-0000-000000000000"
        );
    }
}
