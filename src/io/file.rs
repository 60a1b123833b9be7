use std::path::Path;

use crate::error::Result;
use crate::model::Project;

/// Save the project collection to a JSON file.
pub fn save_projects(projects: &[Project], path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(projects)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Load a project collection from a JSON file.
///
/// Milestones whose back-reference disagrees with their owner are
/// re-pointed at the project that contains them.
pub fn load_projects(path: &Path) -> Result<Vec<Project>> {
    let json = std::fs::read_to_string(path)?;
    let mut projects: Vec<Project> = serde_json::from_str(&json)?;
    for project in &mut projects {
        let owner = project.id;
        for milestone in project.milestones.iter_mut().filter(|m| m.project_id != owner) {
            tracing::debug!(
                "Milestone '{}' referenced project {}, re-pointing to {}",
                milestone.title,
                milestone.project_id,
                owner
            );
            milestone.project_id = owner;
        }
    }
    tracing::info!("Loaded {} projects from {:?}", projects.len(), path);
    Ok(projects)
}
