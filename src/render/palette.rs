use egui::Color32;

use crate::model::{Milestone, MilestoneStatus, Project};

pub const DEFAULT_BAR: Color32 = Color32::from_rgb(0x60, 0xA5, 0xFA);
pub const STATUS_COMPLETED: Color32 = Color32::from_rgb(0x10, 0xB9, 0x81);
pub const STATUS_AT_RISK: Color32 = Color32::from_rgb(0xEF, 0x44, 0x44);
pub const STATUS_ON_TRACK: Color32 = Color32::from_rgb(0x63, 0x66, 0xF1);
pub const STATUS_DEFAULT: Color32 = Color32::from_rgb(0x9C, 0xA3, 0xAF);

/// Colour implied by a milestone's status. `None` when the milestone
/// carries no status and is not marked completed.
pub fn status_color(milestone: &Milestone) -> Option<Color32> {
    match milestone.status {
        Some(MilestoneStatus::Completed) => Some(STATUS_COMPLETED),
        Some(MilestoneStatus::AtRisk) => Some(STATUS_AT_RISK),
        Some(MilestoneStatus::OnTrack) => Some(STATUS_ON_TRACK),
        Some(MilestoneStatus::NotStarted) => Some(STATUS_DEFAULT),
        None if milestone.completed => Some(STATUS_COMPLETED),
        None => None,
    }
}

/// Milestone colour: explicit colour, then status, then the project's
/// colour, then the default blue.
pub fn milestone_color(milestone: &Milestone, project: &Project) -> Color32 {
    milestone
        .color
        .or_else(|| status_color(milestone))
        .or(project.color)
        .unwrap_or(DEFAULT_BAR)
}

pub fn project_color(project: &Project) -> Color32 {
    project.color.unwrap_or(DEFAULT_BAR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn fixtures() -> (Project, Milestone) {
        let d = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        let mut project = Project::new("P", d, None);
        project.color = Some(Color32::from_rgb(1, 2, 3));
        (project, Milestone::new("M", d, d))
    }

    #[test]
    fn test_explicit_color_wins() {
        let (project, mut milestone) = fixtures();
        milestone.color = Some(Color32::from_rgb(9, 9, 9));
        milestone.status = Some(MilestoneStatus::AtRisk);
        assert_eq!(milestone_color(&milestone, &project), Color32::from_rgb(9, 9, 9));
    }

    #[test]
    fn test_status_colors() {
        let (project, mut milestone) = fixtures();
        let cases = [
            (MilestoneStatus::Completed, STATUS_COMPLETED),
            (MilestoneStatus::AtRisk, STATUS_AT_RISK),
            (MilestoneStatus::OnTrack, STATUS_ON_TRACK),
            (MilestoneStatus::NotStarted, STATUS_DEFAULT),
        ];
        for (status, expected) in cases {
            milestone.status = Some(status);
            assert_eq!(milestone_color(&milestone, &project), expected);
        }
    }

    #[test]
    fn test_completed_flag_without_status_is_green() {
        let (project, mut milestone) = fixtures();
        milestone.completed = true;
        assert_eq!(milestone_color(&milestone, &project), STATUS_COMPLETED);
    }

    #[test]
    fn test_falls_back_to_project_then_default() {
        let (mut project, milestone) = fixtures();
        assert_eq!(milestone_color(&milestone, &project), Color32::from_rgb(1, 2, 3));
        project.color = None;
        assert_eq!(milestone_color(&milestone, &project), DEFAULT_BAR);
    }
}
