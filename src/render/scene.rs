use chrono::{Datelike, NaiveDate};
use egui::{pos2, vec2, Color32, Rect};
use uuid::Uuid;

use super::palette;
use crate::config::TimelineSettings;
use crate::model::{Milestone, Project, TimeScale};
use crate::timeline::date_math::{add_days, is_weekend, quarter_of, same_month, same_quarter, same_week};
use crate::timeline::range::Visibility;
use crate::timeline::{
    band_units, compute_unit_width, generate_units, resolve_window, HeaderBand, LayoutGeometry,
    TimeWindow,
};

// ── Header rows ──────────────────────────────────────────────────────────────

pub const BAND_ROW_HEIGHT: f32 = 33.0;
pub const UNIT_ROW_HEIGHT: f32 = 32.0;
pub const HEADER_HEIGHT: f32 = BAND_ROW_HEIGHT + UNIT_ROW_HEIGHT;

// ── Body rows ────────────────────────────────────────────────────────────────

pub const ROW_PADDING_X: f32 = 8.0;
pub const ROW_PADDING_Y: f32 = 12.0;
/// Space left of every project bar for the visibility toggle.
pub const TOGGLE_GUTTER: f32 = 28.0;
pub const TOGGLE_SIZE: f32 = 24.0;
pub const PROJECT_BAR_HEIGHT: f32 = 32.0;
pub const PROJECT_BAR_GAP: f32 = 8.0;
pub const MILESTONE_INDENT: f32 = 16.0;
pub const MILESTONE_TOP_MARGIN: f32 = 4.0;
pub const MILESTONE_HEIGHT: f32 = 24.0;
pub const MILESTONE_GAP: f32 = 8.0;
pub const TAG_HEIGHT: f32 = 16.0;
pub const TAG_FONT_SIZE: f32 = 11.0;

/// Project titles only fit on bars wider than this.
pub const PROJECT_TITLE_MIN_WIDTH: f32 = 200.0;
/// Milestone titles only fit on bars wider than this.
pub const MILESTONE_TITLE_MIN_WIDTH: f32 = 60.0;
/// A bare checkmark fits on done milestones wider than this.
pub const MILESTONE_CHECK_MIN_WIDTH: f32 = 50.0;

pub const DONE_OPACITY: f32 = 0.7;
pub const HIDDEN_OPACITY: f32 = 0.3;

/// The inputs of one render pass.
#[derive(Debug, Clone, Copy)]
pub struct SceneInput<'a> {
    pub projects: &'a [Project],
    pub settings: &'a TimelineSettings,
    pub today: NaiveDate,
}

impl<'a> SceneInput<'a> {
    pub fn new(projects: &'a [Project], settings: &'a TimelineSettings, today: NaiveDate) -> Self {
        Self {
            projects,
            settings,
            today,
        }
    }

    fn visibility(&self) -> Visibility<'a> {
        Visibility {
            hidden_project_ids: &self.settings.hidden_project_ids,
            show_completed_items: self.settings.show_completed_items,
        }
    }

    /// Window and column dates. Independent of the viewport, so the host
    /// can learn the column count before measuring.
    pub fn resolve(&self) -> (TimeWindow, Vec<NaiveDate>) {
        let scale = self.settings.time_scale;
        let window = resolve_window(self.projects, &self.visibility(), scale, self.today);
        let units = generate_units(&window, scale);
        (window, units)
    }
}

/// One column of the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitCell {
    pub date: NaiveDate,
    pub x: f32,
    pub width: f32,
    pub label: String,
    /// Only set on the day scale.
    pub is_weekend: bool,
    pub is_today: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TodayMarker {
    pub x: f32,
    pub tooltip: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TagPill {
    pub name: String,
    pub color: Color32,
    pub rect: Rect,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectBar {
    pub rect: Rect,
    pub color: Color32,
    pub opacity: f32,
    pub title: String,
    pub show_title: bool,
}

/// What fits inside a milestone bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarContent {
    Title { checkmark: bool },
    Checkmark,
    Empty,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MilestoneBar {
    pub project_id: Uuid,
    pub milestone_id: Uuid,
    pub rect: Rect,
    pub color: Color32,
    pub opacity: f32,
    pub done: bool,
    pub title: String,
    pub content: BarContent,
    pub tooltip: String,
}

impl MilestoneBar {
    /// The hover-only edit affordance at the bar's right edge.
    pub fn edit_overlay(&self) -> Rect {
        let width = self.rect.height().min(self.rect.width());
        Rect::from_min_max(pos2(self.rect.right() - width, self.rect.top()), self.rect.max)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectRow {
    pub project_id: Uuid,
    /// Row bounds; y is measured from the top of the body, below the headers.
    pub rect: Rect,
    pub hidden: bool,
    pub toggle: Rect,
    pub toggle_tooltip: &'static str,
    pub bar: ProjectBar,
    pub tags: Vec<TagPill>,
    pub milestones: Vec<MilestoneBar>,
}

/// A fully laid out chart.
#[derive(Debug, Clone, PartialEq)]
pub struct GanttScene {
    pub scale: TimeScale,
    pub today: NaiveDate,
    pub window: TimeWindow,
    pub geometry: LayoutGeometry,
    pub bands: Vec<HeaderBand>,
    pub units: Vec<UnitCell>,
    pub today_marker: Option<TodayMarker>,
    pub rows: Vec<ProjectRow>,
    pub visible_projects: usize,
    pub body_height: f32,
}

impl GanttScene {
    /// Lay out the chart for a viewport `viewport_width` pixels wide.
    pub fn for_viewport(input: &SceneInput<'_>, viewport_width: f32) -> Self {
        let (window, units) = input.resolve();
        let unit_width = compute_unit_width(viewport_width, units.len(), input.settings.time_scale);
        Self::compose(input, window, units, unit_width)
    }

    /// Lay out the chart from an already resolved window and column width.
    pub fn compose(
        input: &SceneInput<'_>,
        window: TimeWindow,
        unit_dates: Vec<NaiveDate>,
        unit_width: f32,
    ) -> Self {
        let scale = input.settings.time_scale;
        let geometry = LayoutGeometry::new(window.start, unit_width, unit_dates.len(), scale);
        let bands = band_units(&unit_dates, scale, unit_width);

        let units = unit_dates
            .iter()
            .enumerate()
            .map(|(i, &date)| UnitCell {
                date,
                x: i as f32 * unit_width,
                width: unit_width,
                label: unit_label(date, scale),
                is_weekend: scale == TimeScale::Day && is_weekend(date),
                is_today: is_today_unit(date, input.today, scale),
            })
            .collect();

        let today_marker = window.contains(input.today).then(|| TodayMarker {
            x: geometry.position_for_date(input.today) + geometry.day_width / 2.0 - 0.5,
            tooltip: format!("Today: {}", input.today.format("%b %d, %Y")),
        });

        let visibility = input.visibility();
        let mut rows = Vec::new();
        let mut visible_projects = 0;
        let mut y = 0.0;
        for project in input.projects {
            let hidden = visibility.is_project_hidden(project);
            if !hidden {
                visible_projects += 1;
            } else if !input.settings.show_hidden_rows {
                continue;
            }
            let row = layout_row(project, hidden, &visibility, &geometry, y);
            y = row.rect.bottom();
            rows.push(row);
        }

        Self {
            scale,
            today: input.today,
            window,
            geometry,
            bands,
            units,
            today_marker,
            rows,
            visible_projects,
            body_height: y,
        }
    }

    pub fn header_height(&self) -> f32 {
        HEADER_HEIGHT
    }

    pub fn width(&self) -> f32 {
        self.geometry.total_width
    }

    pub fn height(&self) -> f32 {
        HEADER_HEIGHT + self.body_height
    }

    /// True when there is nothing visible to chart.
    pub fn is_empty(&self) -> bool {
        self.visible_projects == 0
    }

    pub fn milestone(&self, project_id: Uuid, milestone_id: Uuid) -> Option<&MilestoneBar> {
        self.rows
            .iter()
            .filter(|r| r.project_id == project_id)
            .flat_map(|r| r.milestones.iter())
            .find(|m| m.milestone_id == milestone_id)
    }
}

fn layout_row(
    project: &Project,
    hidden: bool,
    visibility: &Visibility<'_>,
    geometry: &LayoutGeometry,
    top: f32,
) -> ProjectRow {
    let bar_top = top + ROW_PADDING_Y;
    let bar_width = geometry.width_between_dates(project.start_date, project.end_date);
    let bar = ProjectBar {
        rect: Rect::from_min_size(
            pos2(
                ROW_PADDING_X + TOGGLE_GUTTER + geometry.position_for_date(project.start_date),
                bar_top,
            ),
            vec2(bar_width, PROJECT_BAR_HEIGHT),
        ),
        color: palette::project_color(project),
        opacity: if hidden { HIDDEN_OPACITY } else { 1.0 },
        title: project.display_title().to_string(),
        show_title: bar_width > PROJECT_TITLE_MIN_WIDTH,
    };

    let toggle = Rect::from_min_size(
        pos2(ROW_PADDING_X, bar_top + (PROJECT_BAR_HEIGHT - TOGGLE_SIZE) / 2.0),
        vec2(TOGGLE_SIZE, TOGGLE_SIZE),
    );

    let mut bottom = bar_top + PROJECT_BAR_HEIGHT + PROJECT_BAR_GAP;
    let mut milestones = Vec::new();
    if !hidden {
        bottom += MILESTONE_TOP_MARGIN;
        for milestone in project
            .milestones
            .iter()
            .filter(|m| visibility.is_milestone_shown(m))
        {
            milestones.push(layout_milestone(project, milestone, geometry, bottom));
            bottom += MILESTONE_HEIGHT + MILESTONE_GAP;
        }
    }
    bottom += ROW_PADDING_Y;

    let row_rect = Rect::from_min_max(pos2(0.0, top), pos2(geometry.total_width, bottom));
    let tags = layout_tags(project, row_rect);

    ProjectRow {
        project_id: project.id,
        rect: row_rect,
        hidden,
        toggle,
        toggle_tooltip: if hidden { "Show project" } else { "Hide project" },
        bar,
        tags,
        milestones,
    }
}

fn layout_milestone(
    project: &Project,
    milestone: &Milestone,
    geometry: &LayoutGeometry,
    top: f32,
) -> MilestoneBar {
    // Bars start one day after their start date.
    let x = ROW_PADDING_X + MILESTONE_INDENT + geometry.position_for_date(add_days(milestone.start_date, 1));
    let width = geometry.width_between_dates(milestone.start_date, Some(milestone.end_date));
    let done = milestone.is_done();

    let content = if width > MILESTONE_TITLE_MIN_WIDTH {
        BarContent::Title { checkmark: done }
    } else if width > MILESTONE_CHECK_MIN_WIDTH && done {
        BarContent::Checkmark
    } else {
        BarContent::Empty
    };

    MilestoneBar {
        project_id: project.id,
        milestone_id: milestone.id,
        rect: Rect::from_min_size(pos2(x, top), vec2(width, MILESTONE_HEIGHT)),
        color: palette::milestone_color(milestone, project),
        opacity: if done { DONE_OPACITY } else { 1.0 },
        done,
        title: milestone.title.clone(),
        content,
        tooltip: format!(
            "{} - {} to {} ({})",
            milestone.title,
            milestone.start_date.format("%b %d"),
            milestone.end_date.format("%b %d"),
            milestone.status_name()
        ),
    }
}

/// Tag pills sit right-aligned in the row's top padding.
fn layout_tags(project: &Project, row: Rect) -> Vec<TagPill> {
    let mut right = row.right() - ROW_PADDING_X;
    let top = row.top() + 2.0;
    let mut pills = Vec::with_capacity(project.tags.len());
    for tag in project.tags.iter().rev() {
        let width = estimate_text_width(&tag.name, TAG_FONT_SIZE) + 20.0;
        let rect = Rect::from_min_size(pos2(right - width, top), vec2(width, TAG_HEIGHT));
        right = rect.left() - 4.0;
        pills.push(TagPill {
            name: tag.name.clone(),
            color: tag.color,
            rect,
        });
    }
    pills.reverse();
    pills
}

/// Rough advance width of proportional text, for layout that must not
/// depend on a font backend.
pub fn estimate_text_width(text: &str, font_size: f32) -> f32 {
    text.chars().count() as f32 * font_size * 0.6
}

pub fn unit_label(date: NaiveDate, scale: TimeScale) -> String {
    match scale {
        TimeScale::Day => date.format("%d").to_string(),
        TimeScale::Week => format!("W{}", date.iso_week().week()),
        TimeScale::Month => date.format("%b").to_string(),
        TimeScale::Year => format!("Q{}", quarter_of(date)),
    }
}

pub fn is_today_unit(unit: NaiveDate, today: NaiveDate, scale: TimeScale) -> bool {
    match scale {
        TimeScale::Day => unit == today,
        TimeScale::Week => same_week(unit, today),
        TimeScale::Month => same_month(unit, today),
        TimeScale::Year => same_quarter(unit, today),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MilestoneStatus, Tag};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn settings(scale: TimeScale) -> TimelineSettings {
        TimelineSettings {
            time_scale: scale,
            ..Default::default()
        }
    }

    fn sample_project() -> Project {
        let mut project = Project::new("Platform rebuild", date(2024, 1, 10), Some(date(2024, 3, 1)));
        project.push_milestone(Milestone::new("Design", date(2024, 1, 10), date(2024, 1, 24)));
        let mut done = Milestone::new("Spike", date(2024, 1, 15), date(2024, 1, 20));
        done.set_status(MilestoneStatus::Completed);
        project.push_milestone(done);
        project
    }

    #[test]
    fn test_week_scale_without_projects() {
        let settings = settings(TimeScale::Week);
        let input = SceneInput::new(&[], &settings, date(2024, 1, 10));
        let scene = GanttScene::for_viewport(&input, 1400.0);

        assert!(scene.is_empty());
        assert_eq!(scene.window.start, date(2024, 1, 10));
        assert_eq!(scene.units.len(), 14);
        assert_eq!(scene.units[0].date, date(2024, 1, 8));
        assert_eq!(scene.units[0].label, "W2");
        assert!(scene.units[0].is_today);
        assert!(!scene.units[1].is_today);
        assert_eq!(scene.geometry.unit_width, 100.0);
        assert_eq!(scene.width(), 1400.0);
        assert_eq!(scene.body_height, 0.0);
    }

    #[test]
    fn test_today_marker_centred_on_today() {
        let settings = settings(TimeScale::Day);
        let project = Project::new("P", date(2024, 6, 1), None);
        let input = SceneInput::new(std::slice::from_ref(&project), &settings, date(2024, 6, 3));
        let scene = GanttScene::for_viewport(&input, 900.0);

        // window starts at the project, two days before today
        let marker = scene.today_marker.expect("today is inside the window");
        assert_eq!(marker.x, 2.0 * 30.0 + 15.0 - 0.5);
        assert_eq!(marker.tooltip, "Today: Jun 03, 2024");
    }

    #[test]
    fn test_today_marker_absent_when_window_in_future() {
        let settings = settings(TimeScale::Day);
        let project = Project::new("Later", date(2024, 9, 1), None);
        let input = SceneInput::new(std::slice::from_ref(&project), &settings, date(2024, 6, 1));
        let scene = GanttScene::for_viewport(&input, 900.0);
        assert!(scene.today_marker.is_none());
        assert!(scene.units.iter().all(|u| !u.is_today));
    }

    #[test]
    fn test_project_bar_geometry_and_title_threshold() {
        let settings = settings(TimeScale::Day);
        let project = sample_project();
        let input = SceneInput::new(std::slice::from_ref(&project), &settings, date(2024, 1, 10));
        let scene = GanttScene::for_viewport(&input, 900.0);
        let row = &scene.rows[0];

        assert_eq!(row.bar.rect.left(), ROW_PADDING_X + TOGGLE_GUTTER);
        assert_eq!(row.bar.rect.top(), ROW_PADDING_Y);
        // Jan 10 .. Mar 1 is 51 days at 30px
        assert_eq!(row.bar.rect.width(), 51.0 * 30.0);
        assert!(row.bar.show_title);
        assert_eq!(row.toggle_tooltip, "Hide project");

        let mut short = Project::new("Short", date(2024, 1, 10), Some(date(2024, 1, 14)));
        short.color = Some(Color32::RED);
        let input = SceneInput::new(std::slice::from_ref(&short), &settings, date(2024, 1, 10));
        let scene = GanttScene::for_viewport(&input, 900.0);
        assert_eq!(scene.rows[0].bar.rect.width(), 120.0);
        assert!(!scene.rows[0].bar.show_title);
        assert_eq!(scene.rows[0].bar.color, Color32::RED);
    }

    #[test]
    fn test_milestones_shift_one_day_and_stack() {
        let settings = settings(TimeScale::Day);
        let project = sample_project();
        let input = SceneInput::new(std::slice::from_ref(&project), &settings, date(2024, 1, 10));
        let scene = GanttScene::for_viewport(&input, 900.0);
        let row = &scene.rows[0];

        let design = &row.milestones[0];
        assert_eq!(design.rect.left(), ROW_PADDING_X + MILESTONE_INDENT + 30.0);
        assert_eq!(design.rect.width(), 14.0 * 30.0);
        assert_eq!(design.content, BarContent::Title { checkmark: false });
        assert_eq!(design.opacity, 1.0);
        assert_eq!(design.tooltip, "Design - Jan 10 to Jan 24 (not started)");

        let spike = &row.milestones[1];
        assert_eq!(spike.rect.top() - design.rect.top(), MILESTONE_HEIGHT + MILESTONE_GAP);
        assert!(spike.done);
        assert_eq!(spike.opacity, DONE_OPACITY);
        assert_eq!(spike.color, palette::STATUS_COMPLETED);
        assert_eq!(spike.content, BarContent::Title { checkmark: true });
        assert_eq!(spike.tooltip, "Spike - Jan 15 to Jan 20 (completed)");

        let expected_height = 2.0 * ROW_PADDING_Y
            + PROJECT_BAR_HEIGHT
            + PROJECT_BAR_GAP
            + MILESTONE_TOP_MARGIN
            + 2.0 * (MILESTONE_HEIGHT + MILESTONE_GAP);
        assert_eq!(row.rect.height(), expected_height);
        assert_eq!(scene.body_height, expected_height);
    }

    #[test]
    fn test_milestone_content_thresholds() {
        let settings = settings(TimeScale::Week);
        let mut project = Project::new("P", date(2024, 1, 1), None);
        // 10px per day at 70px weeks
        let mut check = Milestone::new("Six days", date(2024, 1, 2), date(2024, 1, 8));
        check.completed = true;
        let mut small_done = Milestone::new("Five days", date(2024, 1, 2), date(2024, 1, 7));
        small_done.completed = true;
        let open = Milestone::new("Six days open", date(2024, 1, 2), date(2024, 1, 8));
        project.push_milestone(check);
        project.push_milestone(small_done);
        project.push_milestone(open);

        let input = SceneInput::new(std::slice::from_ref(&project), &settings, date(2024, 1, 1));
        let (window, units) = input.resolve();
        let scene = GanttScene::compose(&input, window, units, 70.0);
        let bars = &scene.rows[0].milestones;
        assert_eq!(bars[0].rect.width(), 60.0);
        assert_eq!(bars[0].content, BarContent::Checkmark);
        assert_eq!(bars[1].content, BarContent::Empty);
        assert_eq!(bars[2].content, BarContent::Empty);
    }

    #[test]
    fn test_degenerate_milestone_is_half_a_day_wide() {
        let settings = settings(TimeScale::Day);
        let mut project = Project::new("P", date(2024, 1, 1), Some(date(2024, 1, 1)));
        project.push_milestone(Milestone::new("Backwards", date(2024, 1, 9), date(2024, 1, 3)));
        let input = SceneInput::new(std::slice::from_ref(&project), &settings, date(2024, 1, 1));
        let scene = GanttScene::for_viewport(&input, 900.0);
        assert_eq!(scene.rows[0].bar.rect.width(), 15.0);
        assert_eq!(scene.rows[0].milestones[0].rect.width(), 15.0);
    }

    #[test]
    fn test_hidden_projects_are_left_out() {
        let mut settings = settings(TimeScale::Day);
        let shown = sample_project();
        let hidden = sample_project();
        settings.hidden_project_ids.insert(hidden.id);
        let projects = vec![shown, hidden];

        let input = SceneInput::new(&projects, &settings, date(2024, 1, 10));
        let scene = GanttScene::for_viewport(&input, 900.0);
        assert_eq!(scene.rows.len(), 1);
        assert_eq!(scene.rows[0].project_id, projects[0].id);
        assert_eq!(scene.visible_projects, 1);
        assert_eq!(projects.len(), 2);
    }

    #[test]
    fn test_hidden_rows_render_dimmed_without_milestones() {
        let mut settings = settings(TimeScale::Day);
        settings.show_hidden_rows = true;
        let project = sample_project();
        settings.hidden_project_ids.insert(project.id);

        let input = SceneInput::new(std::slice::from_ref(&project), &settings, date(2024, 1, 10));
        let scene = GanttScene::for_viewport(&input, 900.0);
        assert!(scene.is_empty());
        let row = &scene.rows[0];
        assert!(row.hidden);
        assert!(row.milestones.is_empty());
        assert_eq!(row.bar.opacity, HIDDEN_OPACITY);
        assert_eq!(row.toggle_tooltip, "Show project");
    }

    #[test]
    fn test_completed_items_can_be_filtered() {
        let mut settings = settings(TimeScale::Day);
        settings.show_completed_items = false;
        let project = sample_project();
        let input = SceneInput::new(std::slice::from_ref(&project), &settings, date(2024, 1, 10));
        let scene = GanttScene::for_viewport(&input, 900.0);
        let titles: Vec<_> = scene.rows[0].milestones.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["Design"]);
    }

    #[test]
    fn test_weekend_flags_only_on_day_scale() {
        let settings = settings(TimeScale::Day);
        let input = SceneInput::new(&[], &settings, date(2024, 1, 10));
        let scene = GanttScene::for_viewport(&input, 900.0);
        let weekends: Vec<_> = scene.units.iter().filter(|u| u.is_weekend).map(|u| u.label.as_str()).collect();
        assert_eq!(weekends[..2], ["13", "14"]);

        let settings = TimelineSettings::default();
        let input = SceneInput::new(&[], &settings, date(2024, 1, 13));
        let scene = GanttScene::for_viewport(&input, 900.0);
        assert!(scene.units.iter().all(|u| !u.is_weekend));
    }

    #[test]
    fn test_tags_are_right_aligned_in_order() {
        let settings = settings(TimeScale::Day);
        let mut project = sample_project();
        for name in ["backend", "q1"] {
            project.tags.push(Tag {
                id: Uuid::new_v4(),
                name: name.to_string(),
                color: Color32::BLUE,
            });
        }
        let input = SceneInput::new(std::slice::from_ref(&project), &settings, date(2024, 1, 10));
        let scene = GanttScene::for_viewport(&input, 900.0);
        let tags = &scene.rows[0].tags;
        assert_eq!(tags[0].name, "backend");
        assert_eq!(tags[1].rect.right(), scene.width() - ROW_PADDING_X);
        assert!(tags[0].rect.right() < tags[1].rect.left());
    }

    #[test]
    fn test_unit_labels() {
        assert_eq!(unit_label(date(2024, 1, 5), TimeScale::Day), "05");
        assert_eq!(unit_label(date(2024, 12, 30), TimeScale::Week), "W1");
        assert_eq!(unit_label(date(2024, 3, 1), TimeScale::Month), "Mar");
        assert_eq!(unit_label(date(2024, 10, 1), TimeScale::Year), "Q4");
    }

    #[test]
    fn test_edit_overlay_sits_inside_bar() {
        let bar = MilestoneBar {
            project_id: Uuid::nil(),
            milestone_id: Uuid::nil(),
            rect: Rect::from_min_size(pos2(10.0, 0.0), vec2(100.0, 24.0)),
            color: Color32::WHITE,
            opacity: 1.0,
            done: false,
            title: String::new(),
            content: BarContent::Empty,
            tooltip: String::new(),
        };
        let overlay = bar.edit_overlay();
        assert_eq!(overlay.right(), 110.0);
        assert_eq!(overlay.width(), 24.0);
        assert!(bar.rect.contains_rect(overlay));
    }
}
