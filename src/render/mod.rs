//! Composition of the engine output into a backend-neutral display list.
//!
//! [`GanttScene`] carries everything a painter needs: absolute geometry,
//! colours, opacity, labels and the ids behind each interactive region. The
//! egui chart and the image export both draw from it.

pub mod palette;
pub mod scene;

pub use scene::{
    BarContent, GanttScene, MilestoneBar, ProjectBar, ProjectRow, SceneInput, TagPill,
    TodayMarker, UnitCell,
};
