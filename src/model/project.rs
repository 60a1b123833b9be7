use chrono::NaiveDate;
use egui::Color32;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::color::{hex_color, hex_color_opt};
use super::milestone::Milestone;

/// A label attached to a project, rendered as a coloured pill on its row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub id: Uuid,
    pub name: String,
    #[serde(with = "hex_color")]
    pub color: Color32,
}

/// A project row on the timeline, owning its milestones.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    #[serde(default, with = "hex_color_opt", skip_serializing_if = "Option::is_none")]
    pub color: Option<Color32>,
    pub start_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub milestones: Vec<Milestone>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
}

impl Project {
    pub fn new(title: impl Into<String>, start_date: NaiveDate, end_date: Option<NaiveDate>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            color: None,
            start_date,
            end_date,
            milestones: Vec::new(),
            tags: Vec::new(),
        }
    }

    /// Append a milestone, pointing its back-reference at this project.
    pub fn push_milestone(&mut self, mut milestone: Milestone) {
        milestone.project_id = self.id;
        self.milestones.push(milestone);
    }

    pub fn milestone(&self, id: Uuid) -> Option<&Milestone> {
        self.milestones.iter().find(|m| m.id == id)
    }

    pub fn milestone_mut(&mut self, id: Uuid) -> Option<&mut Milestone> {
        self.milestones.iter_mut().find(|m| m.id == id)
    }

    /// Title for display; blank titles read as "Untitled Project".
    pub fn display_title(&self) -> &str {
        if self.title.trim().is_empty() {
            "Untitled Project"
        } else {
            &self.title
        }
    }
}
