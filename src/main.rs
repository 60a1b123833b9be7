#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use timeline_planner::app::TimelineApp;
use timeline_planner::config::SettingsStore;
use timeline_planner::export::{self, StaticSnapshot};
use timeline_planner::model::TimeScale;
use timeline_planner::render::{GanttScene, SceneInput};

/// Plan projects and milestones on a scalable timeline.
#[derive(Parser, Debug)]
#[command(name = "timeline-planner", version, about)]
struct Cli {
    /// Projects JSON file to open. A sample set is used when omitted.
    #[arg(value_name = "PROJECTS")]
    projects: Option<PathBuf>,

    /// Time scale to show: day, week, month or year.
    #[arg(long, value_name = "SCALE")]
    scale: Option<TimeScale>,

    /// Render the timeline to a PNG file and exit without opening a window.
    #[arg(long, value_name = "PATH")]
    export: Option<PathBuf>,

    /// Viewport width in pixels for headless export.
    #[arg(long, default_value_t = 1200.0)]
    width: f32,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let today = chrono::Local::now().date_naive();

    let projects = match &cli.projects {
        Some(path) => timeline_planner::io::load_projects(path)?,
        None => TimelineApp::sample_projects(today),
    };

    let mut store = SettingsStore::open();
    if let Some(scale) = cli.scale {
        store.settings.time_scale = scale;
    }

    if let Some(path) = cli.export {
        let input = SceneInput::new(&projects, &store.settings, today);
        let scene = GanttScene::for_viewport(&input, cli.width);
        export::write_snapshot(&StaticSnapshot::new(&scene), &path)?;
        return Ok(());
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_min_inner_size([800.0, 400.0])
            .with_title("Timeline Planner"),
        ..Default::default()
    };

    eframe::run_native(
        "Timeline Planner",
        options,
        Box::new(move |cc| Ok(Box::new(TimelineApp::new(cc, projects, cli.projects, store)))),
    )?;
    Ok(())
}
