//! Calendar helpers: month grids, month navigation and task lookups by day.

use chrono::{Datelike, Months, NaiveDate};

use crate::models::Task;

/// A month view: weeks of seven cells, Sunday first; `None` pads outside days.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub weeks: Vec<[Option<NaiveDate>; 7]>,
}

impl MonthGrid {
    /// Returns `None` for an invalid year/month.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        let lead = first.weekday().num_days_from_sunday() as usize;

        let mut weeks = Vec::new();
        let mut week = [None; 7];
        let mut slot = lead;
        let mut day = Some(first);
        while let Some(d) = day.filter(|d| d.month() == month) {
            week[slot] = Some(d);
            slot += 1;
            if slot == 7 {
                weeks.push(week);
                week = [None; 7];
                slot = 0;
            }
            day = d.succ_opt();
        }
        if slot > 0 {
            weeks.push(week);
        }
        Some(Self { year, month, weeks })
    }

    pub fn containing(day: NaiveDate) -> Self {
        // A date's own year and month are always valid.
        Self::new(day.year(), day.month()).unwrap_or_else(|| Self {
            year: day.year(),
            month: day.month(),
            weeks: Vec::new(),
        })
    }

    fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    pub fn next(&self) -> Option<Self> {
        let next = self.first_day()?.checked_add_months(Months::new(1))?;
        Self::new(next.year(), next.month())
    }

    pub fn prev(&self) -> Option<Self> {
        let prev = self.first_day()?.checked_sub_months(Months::new(1))?;
        Self::new(prev.year(), prev.month())
    }

    /// e.g. "March 2024"
    pub fn title(&self) -> String {
        self.first_day()
            .map(|d| d.format("%B %Y").to_string())
            .unwrap_or_default()
    }
}

pub const WEEKDAY_LABELS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

pub fn tasks_due_on(tasks: &[Task], day: NaiveDate) -> Vec<&Task> {
    tasks.iter().filter(|t| t.due_date == Some(day)).collect()
}

/// Open tasks for the "Tasks To Do" card: due today or later by due date,
/// then undated ones, at most `limit`.
pub fn upcoming_tasks(tasks: &[Task], today: NaiveDate, limit: usize) -> Vec<Task> {
    let mut open: Vec<&Task> = tasks
        .iter()
        .filter(|t| !t.is_completed())
        .filter(|t| t.due_date.map_or(true, |due| due >= today))
        .collect();
    // `None` sorts before `Some`, so key undated tasks to the end.
    open.sort_by_key(|t| (t.due_date.is_none(), t.due_date));
    open.into_iter().take(limit).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskStatus;
    use chrono::Utc;
    use uuid::Uuid;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn task(title: &str, due: Option<NaiveDate>, status: Option<TaskStatus>) -> Task {
        Task {
            id: Uuid::new_v4(),
            user_id: Uuid::nil(),
            title: title.into(),
            description: None,
            due_date: due,
            status,
            priority: None,
            is_starred: false,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_month_grid_layout() {
        // 1 Sept 2024 is a Sunday, 30 days
        let grid = MonthGrid::new(2024, 9).unwrap();
        assert_eq!(grid.weeks.len(), 5);
        assert_eq!(grid.weeks[0][0], Some(ymd(2024, 9, 1)));
        assert_eq!(grid.weeks[4][1], Some(ymd(2024, 9, 30)));
        assert_eq!(grid.weeks[4][2], None);
        assert_eq!(grid.title(), "September 2024");

        // 1 Feb 2024 is a Thursday, leap year
        let grid = MonthGrid::new(2024, 2).unwrap();
        assert_eq!(grid.weeks[0][3], None);
        assert_eq!(grid.weeks[0][4], Some(ymd(2024, 2, 1)));
        let days: usize = grid.weeks.iter().flatten().flatten().count();
        assert_eq!(days, 29);

        assert!(MonthGrid::new(2024, 13).is_none());
    }

    #[test]
    fn test_month_navigation_wraps_years() {
        let dec = MonthGrid::new(2023, 12).unwrap();
        let jan = dec.next().unwrap();
        assert_eq!((jan.year, jan.month), (2024, 1));
        let back = jan.prev().unwrap();
        assert_eq!((back.year, back.month), (2023, 12));
        assert_eq!(MonthGrid::containing(ymd(2024, 5, 17)).month, 5);
    }

    #[test]
    fn test_tasks_due_on() {
        let day = ymd(2024, 5, 1);
        let tasks = vec![
            task("a", Some(day), None),
            task("b", Some(ymd(2024, 5, 2)), None),
            task("c", None, None),
        ];
        let due = tasks_due_on(&tasks, day);
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].title, "a");
    }

    #[test]
    fn test_upcoming_tasks_order_and_limit() {
        let today = ymd(2024, 5, 10);
        let tasks = vec![
            task("undated", None, None),
            task("later", Some(ymd(2024, 6, 1)), Some(TaskStatus::Pending)),
            task("overdue", Some(ymd(2024, 5, 1)), None),
            task("done", Some(ymd(2024, 5, 11)), Some(TaskStatus::Completed)),
            task("today", Some(today), Some(TaskStatus::InProgress)),
        ];

        let titles = |v: Vec<Task>| v.into_iter().map(|t| t.title).collect::<Vec<_>>();
        assert_eq!(titles(upcoming_tasks(&tasks, today, 10)), vec!["today", "later", "undated"]);
        assert_eq!(titles(upcoming_tasks(&tasks, today, 2)), vec!["today", "later"]);
        assert!(upcoming_tasks(&tasks, today, 0).is_empty());
    }
}
