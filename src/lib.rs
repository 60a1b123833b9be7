//! Timeline Planner: projects and milestones laid out on a responsive
//! Gantt timeline.
//!
//! The layout engine in [`timeline`] and the scene composition in [`render`]
//! are pure and never fail. Everything that touches the outside world
//! (settings, project files, image export and the egui shell) sits around
//! them.

pub mod app;
pub mod config;
pub mod error;
pub mod export;
pub mod io;
pub mod model;
pub mod render;
pub mod timeline;
pub mod ui;

pub use error::{PlannerError, Result};
