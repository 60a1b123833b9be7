use std::path::PathBuf;
use std::time::{Duration, Instant};

use chrono::{Days, NaiveDate};
use egui::{Color32, Rect};
use uuid::Uuid;

use crate::config::{SettingsStore, TimelineSettings};
use crate::export::{self, ExportJob, ExportOutcome, JobStep, LiveCapture, SnapshotSource, StaticSnapshot};
use crate::model::{Milestone, MilestoneStatus, Project, Tag, TimeScale};
use crate::render::{GanttScene, SceneInput};
use crate::timeline::UnitWidthTracker;
use crate::ui;

/// Main application state.
pub struct TimelineApp {
    pub projects: Vec<Project>,
    pub project_path: Option<PathBuf>,
    pub store: SettingsStore,
    pub tracker: UnitWidthTracker,

    // Dialog state
    pub editing_milestone: Option<(Uuid, Uuid)>,
    pub show_about: bool,

    pub status_message: String,

    export: Option<ExportJob>,
}

impl TimelineApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        projects: Vec<Project>,
        project_path: Option<PathBuf>,
        store: SettingsStore,
    ) -> Self {
        ui::theme::install_fonts(&cc.egui_ctx);
        ui::theme::apply_theme(&cc.egui_ctx);
        Self::with_state(projects, project_path, store)
    }

    pub fn with_state(projects: Vec<Project>, project_path: Option<PathBuf>, store: SettingsStore) -> Self {
        let tracker = UnitWidthTracker::new(store.settings.time_scale);
        Self {
            projects,
            project_path,
            store,
            tracker,
            editing_milestone: None,
            show_about: false,
            status_message: "Ready".to_string(),
            export: None,
        }
    }

    /// Demonstration data used when no project file is given.
    pub fn sample_projects(today: NaiveDate) -> Vec<Project> {
        let day = |offset: i64| {
            let shifted = if offset >= 0 {
                today.checked_add_days(Days::new(offset as u64))
            } else {
                today.checked_sub_days(Days::new(offset.unsigned_abs()))
            };
            shifted.unwrap_or(today)
        };

        let mut website = Project::new("Website Relaunch", day(-10), Some(day(45)));
        website.color = Some(Color32::from_rgb(99, 102, 241));
        website.tags.push(Tag {
            id: Uuid::new_v4(),
            name: "Marketing".to_string(),
            color: Color32::from_rgb(236, 72, 153),
        });
        let mut research = Milestone::new("User research", day(-10), day(-2));
        research.set_status(MilestoneStatus::Completed);
        website.push_milestone(research);
        let mut design = Milestone::new("Visual design", day(-3), day(12));
        design.set_status(MilestoneStatus::OnTrack);
        website.push_milestone(design);
        let mut build = Milestone::new("Build and QA", day(10), day(40));
        build.set_status(MilestoneStatus::AtRisk);
        website.push_milestone(build);

        let mut mobile = Project::new("Mobile App", day(5), Some(day(80)));
        mobile.color = Some(Color32::from_rgb(16, 185, 129));
        mobile.tags.push(Tag {
            id: Uuid::new_v4(),
            name: "Product".to_string(),
            color: Color32::from_rgb(245, 158, 11),
        });
        mobile.push_milestone(Milestone::new("Prototype", day(5), day(25)));
        mobile.push_milestone(Milestone::new("Beta", day(30), day(60)));
        mobile.push_milestone(Milestone::new("Store launch", day(75), day(75)));

        let mut audit = Project::new("Security Audit", day(20), None);
        let mut scoping = Milestone::new("Scoping", day(20), day(27));
        scoping.color = Some(Color32::from_rgb(139, 92, 246));
        audit.push_milestone(scoping);

        vec![website, mobile, audit]
    }

    pub fn settings(&self) -> &TimelineSettings {
        &self.store.settings
    }

    pub fn is_exporting(&self) -> bool {
        self.export.is_some()
    }

    // --- Chart intents ---

    pub fn set_time_scale(&mut self, scale: TimeScale) {
        if self.store.settings.time_scale == scale {
            return;
        }
        self.store.settings.time_scale = scale;
        let today = chrono::Local::now().date_naive();
        let (_, units) = SceneInput::new(&self.projects, &self.store.settings, today).resolve();
        self.tracker.set_scale(scale, units.len());
        self.store.save_or_warn();
        self.status_message = format!("Time scale: {}", scale.label());
    }

    pub fn toggle_project_visibility(&mut self, project_id: Uuid) {
        let hidden = self.store.settings.toggle_project_visibility(project_id);
        self.store.save_or_warn();
        let title = self
            .projects
            .iter()
            .find(|p| p.id == project_id)
            .map(|p| p.display_title().to_string())
            .unwrap_or_default();
        self.status_message = if hidden {
            format!("Hid '{}'", title)
        } else {
            format!("Showing '{}'", title)
        };
    }

    pub fn edit_milestone(&mut self, project_id: Uuid, milestone_id: Uuid) {
        self.editing_milestone = Some((project_id, milestone_id));
    }

    pub fn set_show_completed_items(&mut self, show: bool) {
        self.store.settings.show_completed_items = show;
        self.store.save_or_warn();
    }

    pub fn set_show_hidden_rows(&mut self, show: bool) {
        self.store.settings.show_hidden_rows = show;
        self.store.save_or_warn();
    }

    pub fn set_milestone_status(&mut self, project_id: Uuid, milestone_id: Uuid, status: MilestoneStatus) {
        let Some(milestone) = self
            .projects
            .iter_mut()
            .find(|p| p.id == project_id)
            .and_then(|p| p.milestone_mut(milestone_id))
        else {
            return;
        };
        milestone.set_status(status);
        self.status_message = format!("'{}' is now {}", milestone.title, status.label());
        self.persist_projects();
    }

    // --- File operations ---

    pub fn open_projects(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Projects", &["json"])
            .pick_file()
        {
            match crate::io::load_projects(&path) {
                Ok(projects) => {
                    self.status_message = format!("Loaded {} projects", projects.len());
                    self.projects = projects;
                    self.project_path = Some(path);
                    self.editing_milestone = None;
                }
                Err(e) => {
                    tracing::error!("Failed to load {:?}: {}", path, e);
                    self.status_message = format!("Error loading: {}", e);
                }
            }
        }
    }

    pub fn save_projects_as(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Projects", &["json"])
            .set_file_name("projects.json")
            .save_file()
        {
            self.project_path = Some(path);
            self.persist_projects();
        }
    }

    fn persist_projects(&mut self) {
        let Some(path) = &self.project_path else {
            return;
        };
        if let Err(e) = crate::io::save_projects(&self.projects, path) {
            tracing::error!("Failed to save {:?}: {}", path, e);
            self.status_message = format!("Error saving: {}", e);
        }
    }

    // --- Export ---

    pub fn request_export(&mut self) {
        if self.export.is_some() {
            self.status_message = "An export is already in progress".to_string();
            return;
        }
        self.export = Some(ExportJob::start(export::default_export_path(), Instant::now()));
        self.status_message = export::job::PROGRESS_MESSAGE.to_string();
    }

    fn drive_export(&mut self, ctx: &egui::Context, scene: &GanttScene, chart_rect: Option<Rect>) {
        let Some(job) = self.export.as_mut() else {
            return;
        };

        let screenshot = ctx.input(|i| {
            i.raw.events.iter().find_map(|e| match e {
                egui::Event::Screenshot { image, .. } => Some(image.clone()),
                _ => None,
            })
        });
        let capture = match (&screenshot, chart_rect) {
            (Some(image), Some(region)) => Some(LiveCapture {
                image,
                region,
                pixels_per_point: ctx.pixels_per_point(),
            }),
            _ => None,
        };

        let primary = StaticSnapshot::new(scene);
        let step = job.poll(
            Instant::now(),
            &primary,
            capture.as_ref().map(|c| c as &dyn SnapshotSource),
        );
        match step {
            JobStep::Waiting => ctx.request_repaint_after(Duration::from_millis(50)),
            JobStep::RequestCapture => {
                ctx.send_viewport_cmd(egui::ViewportCommand::Screenshot);
                ctx.request_repaint();
            }
            JobStep::Finished(outcome) => {
                self.export = None;
                self.finish_export(outcome);
            }
        }
    }

    fn finish_export(&mut self, outcome: ExportOutcome) {
        match outcome {
            ExportOutcome::Saved { path, .. } => {
                self.status_message = format!("Exported timeline to {}", path.display());
            }
            ExportOutcome::Failed { message } => {
                rfd::MessageDialog::new()
                    .set_level(rfd::MessageLevel::Error)
                    .set_title("Export PNG")
                    .set_description(message.as_str())
                    .set_buttons(rfd::MessageButtons::Ok)
                    .show();
                self.status_message = message;
            }
        }
    }

    /// Resolve the window for `today`, feed the measured width to the
    /// tracker and compose the scene.
    pub fn layout_scene(&mut self, viewport_width: f32, today: NaiveDate) -> GanttScene {
        let input = SceneInput::new(&self.projects, &self.store.settings, today);
        let (window, units) = input.resolve();
        let scale = self.store.settings.time_scale;
        if self.tracker.scale() != scale {
            self.tracker.set_scale(scale, units.len());
        } else {
            self.tracker.set_unit_count(units.len());
        }
        self.tracker.on_resize(viewport_width);
        GanttScene::compose(&input, window, units, self.tracker.unit_width())
    }
}

impl eframe::App for TimelineApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let today = chrono::Local::now().date_naive();

        if ctx.input(|i| i.modifiers.command && i.key_pressed(egui::Key::E)) {
            self.request_export();
        }

        // Top panel: toolbar
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui::toolbar::show_toolbar(self, ui);
        });

        // Bottom panel: status bar
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(ui::theme::STATUS_BAR_HEIGHT)
            .frame(
                egui::Frame::default()
                    .fill(ui::theme::BG_PANEL)
                    .inner_margin(egui::Margin::symmetric(10.0, 0.0)),
            )
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.label(
                        egui::RichText::new(&self.status_message)
                            .font(ui::theme::font_status())
                            .color(ui::theme::TEXT_SECONDARY),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let hidden = self.store.settings.hidden_project_ids.len();
                        ui.label(
                            egui::RichText::new(format!("Projects: {} ({} hidden)", self.projects.len(), hidden))
                                .size(10.5)
                                .color(ui::theme::TEXT_DIM),
                        );
                    });
                });
            });

        // Left panel: project list
        let mut list_action = ui::project_list::ProjectListAction::None;
        egui::SidePanel::left("project_panel")
            .default_width(ui::theme::SIDE_PANEL_WIDTH)
            .resizable(true)
            .frame(
                egui::Frame::default()
                    .fill(ui::theme::BG_PANEL)
                    .inner_margin(egui::Margin::same(8.0))
                    .stroke(egui::Stroke::new(1.0, ui::theme::BORDER)),
            )
            .show(ctx, |ui| {
                list_action = ui::project_list::show_project_list(&self.projects, &self.store.settings, ui);
            });
        if let ui::project_list::ProjectListAction::ToggleVisibility(id) = list_action {
            self.toggle_project_visibility(id);
        }

        // Central panel: Gantt chart
        let chart_frame = egui::Frame::default()
            .fill(ui::theme::BG_CHART)
            .inner_margin(egui::Margin::ZERO);
        let (scene, interaction) = egui::CentralPanel::default()
            .frame(chart_frame)
            .show(ctx, |ui| {
                let scene = self.layout_scene(ui.available_width(), today);
                let interaction = ui::gantt_chart::show_gantt_chart(&scene, ui);
                (scene, interaction)
            })
            .inner;

        if let Some(project_id) = interaction.toggle_visibility {
            self.toggle_project_visibility(project_id);
        }
        if let Some((project_id, milestone_id)) = interaction.edit_milestone {
            self.edit_milestone(project_id, milestone_id);
        }

        self.drive_export(ctx, &scene, interaction.chart_rect);

        // Dialogs
        if self.editing_milestone.is_some() {
            ui::dialogs::show_milestone_dialog(self, ctx);
        }
        if self.show_about {
            ui::dialogs::show_about_dialog(self, ctx);
        }
        // Hidden while a live capture is pending so it does not end up in the image.
        if self.export.as_ref().is_some_and(|job| !job.is_awaiting_capture()) {
            ui::dialogs::show_export_progress(ctx);
        }
    }
}
