pub mod color;
pub mod milestone;
pub mod project;
pub mod timeline;

pub use milestone::{Milestone, MilestoneStatus};
pub use project::{Project, Tag};
pub use timeline::TimeScale;
