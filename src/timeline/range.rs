use std::collections::HashSet;

use chrono::NaiveDate;
use uuid::Uuid;

use super::date_math::add_days;
use crate::model::{Milestone, Project, TimeScale};

/// Which items take part in range resolution and rendering.
#[derive(Debug, Clone, Copy)]
pub struct Visibility<'a> {
    pub hidden_project_ids: &'a HashSet<Uuid>,
    pub show_completed_items: bool,
}

impl<'a> Visibility<'a> {
    pub fn new(hidden_project_ids: &'a HashSet<Uuid>) -> Self {
        Self {
            hidden_project_ids,
            show_completed_items: true,
        }
    }

    pub fn is_project_hidden(&self, project: &Project) -> bool {
        self.hidden_project_ids.contains(&project.id)
    }

    pub fn is_milestone_shown(&self, milestone: &Milestone) -> bool {
        self.show_completed_items || !milestone.is_done()
    }
}

/// The visible span of the chart, both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// Window length in days; the fixed lookup for the scale.
    pub total_days: i64,
}

impl TimeWindow {
    /// A window of the scale's length starting at `start`.
    pub fn starting_at(start: NaiveDate, scale: TimeScale) -> Self {
        let total_days = scale.window_days();
        Self {
            start,
            end: add_days(start, total_days - 1),
            total_days,
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Resolve the visible window for the given items.
///
/// The window starts at the earliest date of any visible item, but never
/// more than 30% of the window length before `today`. With no visible
/// items it starts at `today`.
pub fn resolve_window(
    projects: &[Project],
    visibility: &Visibility<'_>,
    scale: TimeScale,
    today: NaiveDate,
) -> TimeWindow {
    let window_days = scale.window_days();

    let earliest_item = projects
        .iter()
        .filter(|p| !visibility.is_project_hidden(p))
        .flat_map(move |p| {
            let milestone_dates = p
                .milestones
                .iter()
                .filter(move |m| visibility.is_milestone_shown(m))
                .flat_map(|m| [m.start_date, m.end_date]);
            [Some(p.start_date), p.end_date]
                .into_iter()
                .flatten()
                .chain(milestone_dates)
        })
        .min();

    let start = match earliest_item {
        Some(earliest) => {
            let max_past_days = window_days * 3 / 10;
            let earliest_allowed = add_days(today, -max_past_days);
            earliest.max(earliest_allowed)
        }
        None => today,
    };

    TimeWindow::starting_at(start, scale)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_no_projects_anchors_at_today() {
        let hidden = HashSet::new();
        let window = resolve_window(&[], &Visibility::new(&hidden), TimeScale::Week, date(2024, 1, 10));
        assert_eq!(window.start, date(2024, 1, 10));
        assert_eq!(window.end, date(2024, 4, 8));
        assert_eq!(window.total_days, 90);
    }

    #[test]
    fn test_old_items_are_clamped_to_lookback_limit() {
        let hidden = HashSet::new();
        let projects = vec![Project::new("Old", date(2024, 1, 1), Some(date(2024, 1, 5)))];
        let window = resolve_window(&projects, &Visibility::new(&hidden), TimeScale::Day, date(2024, 6, 1));
        assert_eq!(window.start, date(2024, 5, 23));
        assert_eq!(window.end, date(2024, 6, 21));
    }

    #[test]
    fn test_recent_item_pulls_window_back() {
        let hidden = HashSet::new();
        let mut project = Project::new("Recent", date(2024, 6, 1), None);
        project.push_milestone(Milestone::new("Kickoff", date(2024, 5, 28), date(2024, 5, 30)));
        let window = resolve_window(&[project], &Visibility::new(&hidden), TimeScale::Day, date(2024, 6, 1));
        assert_eq!(window.start, date(2024, 5, 28));
    }

    #[test]
    fn test_future_items_start_window_in_future() {
        let hidden = HashSet::new();
        let projects = vec![Project::new("Later", date(2024, 9, 1), None)];
        let window = resolve_window(&projects, &Visibility::new(&hidden), TimeScale::Month, date(2024, 6, 1));
        assert_eq!(window.start, date(2024, 9, 1));
    }

    #[test]
    fn test_hidden_projects_do_not_contribute_dates() {
        let old = Project::new("Hidden", date(2024, 5, 25), None);
        let hidden: HashSet<Uuid> = [old.id].into_iter().collect();
        let projects = vec![old, Project::new("Shown", date(2024, 6, 3), None)];
        let window = resolve_window(&projects, &Visibility::new(&hidden), TimeScale::Day, date(2024, 6, 1));
        assert_eq!(window.start, date(2024, 6, 3));
        // the hidden project is still in the collection
        assert_eq!(projects.len(), 2);
    }

    #[test]
    fn test_completed_milestones_ignored_when_not_shown() {
        let hidden = HashSet::new();
        let mut project = Project::new("P", date(2024, 6, 1), None);
        let mut done = Milestone::new("Done", date(2024, 5, 25), date(2024, 5, 26));
        done.completed = true;
        project.push_milestone(done);

        let mut visibility = Visibility::new(&hidden);
        visibility.show_completed_items = false;
        let window = resolve_window(std::slice::from_ref(&project), &visibility, TimeScale::Day, date(2024, 6, 1));
        assert_eq!(window.start, date(2024, 6, 1));

        visibility.show_completed_items = true;
        let window = resolve_window(&[project], &visibility, TimeScale::Day, date(2024, 6, 1));
        assert_eq!(window.start, date(2024, 5, 25));
    }

    proptest! {
        #[test]
        fn prop_window_length_is_fixed_per_scale(
            scale_idx in 0usize..4,
            offset_start in -5000i64..5000,
            span in 0i64..2000,
        ) {
            let scale = TimeScale::ALL[scale_idx];
            let today = date(2024, 6, 1);
            let start = add_days(today, offset_start);
            let hidden = HashSet::new();
            let projects = vec![Project::new("P", start, Some(add_days(start, span)))];
            let window = resolve_window(&projects, &Visibility::new(&hidden), scale, today);
            prop_assert_eq!(window.total_days, scale.window_days());
            prop_assert_eq!((window.end - window.start).num_days() + 1, scale.window_days());
            prop_assert!(window.start >= add_days(today, -(scale.window_days() * 3 / 10)));
        }
    }
}
