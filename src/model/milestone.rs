use chrono::NaiveDate;
use egui::Color32;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::color::hex_color_opt;

/// Progress state of a milestone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MilestoneStatus {
    NotStarted,
    OnTrack,
    AtRisk,
    Completed,
}

impl MilestoneStatus {
    pub const ALL: [MilestoneStatus; 4] = [
        MilestoneStatus::NotStarted,
        MilestoneStatus::OnTrack,
        MilestoneStatus::AtRisk,
        MilestoneStatus::Completed,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MilestoneStatus::NotStarted => "not started",
            MilestoneStatus::OnTrack => "on track",
            MilestoneStatus::AtRisk => "at risk",
            MilestoneStatus::Completed => "completed",
        }
    }

    /// The stored form, as written in project files.
    pub fn as_str(self) -> &'static str {
        match self {
            MilestoneStatus::NotStarted => "not_started",
            MilestoneStatus::OnTrack => "on_track",
            MilestoneStatus::AtRisk => "at_risk",
            MilestoneStatus::Completed => "completed",
        }
    }
}

/// A dated bar nested under a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub id: Uuid,
    /// Owning project. A lookup key only; projects own their milestones.
    pub project_id: Uuid,
    pub title: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<MilestoneStatus>,
    #[serde(default, with = "hex_color_opt", skip_serializing_if = "Option::is_none")]
    pub color: Option<Color32>,
}

impl Milestone {
    pub fn new(title: impl Into<String>, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            project_id: Uuid::nil(),
            title: title.into(),
            start_date,
            end_date,
            completed: false,
            status: None,
            color: None,
        }
    }

    /// Either flag marks the milestone as done; the two may disagree in
    /// stored data.
    pub fn is_done(&self) -> bool {
        self.completed || self.status == Some(MilestoneStatus::Completed)
    }

    /// Set the status and keep the `completed` flag in step with it.
    pub fn set_status(&mut self, status: MilestoneStatus) {
        self.status = Some(status);
        self.completed = status == MilestoneStatus::Completed;
    }

    /// Stored status name, or "not started" when none is set.
    pub fn status_name(&self) -> &'static str {
        self.status.map_or("not started", MilestoneStatus::as_str)
    }
}
