use crate::app::TimelineApp;
use crate::export::job::PROGRESS_MESSAGE;
use crate::model::MilestoneStatus;
use crate::ui::theme;
use egui::{Context, RichText, Window};

/// Render the milestone details dialog opened from the chart's edit overlay.
pub fn show_milestone_dialog(app: &mut TimelineApp, ctx: &Context) {
    let Some((project_id, milestone_id)) = app.editing_milestone else {
        return;
    };
    let Some(project) = app.projects.iter().find(|p| p.id == project_id) else {
        app.editing_milestone = None;
        return;
    };
    let Some(milestone) = project.milestone(milestone_id) else {
        app.editing_milestone = None;
        return;
    };

    let project_title = project.display_title().to_string();
    let title = milestone.title.clone();
    let start = milestone.start_date;
    let end = milestone.end_date;
    let current = milestone.status;
    let done = milestone.is_done();

    let mut should_close = false;
    let mut new_status = None;
    Window::new(RichText::new("Milestone").strong().size(14.0))
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .fixed_size([theme::DIALOG_WIDTH, 0.0])
        .show(ctx, |ui| {
            ui.add_space(4.0);
            egui::Grid::new("milestone_grid")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.label(RichText::new("Project").color(theme::TEXT_SECONDARY));
                    ui.label(&project_title);
                    ui.end_row();

                    ui.label(RichText::new("Title").color(theme::TEXT_SECONDARY));
                    ui.label(RichText::new(&title).strong());
                    ui.end_row();

                    ui.label(RichText::new("Dates").color(theme::TEXT_SECONDARY));
                    ui.label(format!("{} to {}", start.format("%b %d, %Y"), end.format("%b %d, %Y")));
                    ui.end_row();

                    ui.label(RichText::new("Status").color(theme::TEXT_SECONDARY));
                    let selected = current.map_or("not started", MilestoneStatus::label);
                    egui::ComboBox::from_id_salt("milestone_status")
                        .selected_text(selected)
                        .show_ui(ui, |ui| {
                            for status in MilestoneStatus::ALL {
                                if ui.selectable_label(current == Some(status), status.label()).clicked() {
                                    new_status = Some(status);
                                }
                            }
                        });
                    ui.end_row();

                    ui.label("");
                    ui.label(
                        RichText::new(if done { "Done" } else { "Open" })
                            .size(11.0)
                            .color(theme::TEXT_DIM),
                    );
                    ui.end_row();
                });

            ui.add_space(6.0);
            ui.separator();
            ui.add_space(4.0);
            if ui.add_sized([80.0, 28.0], egui::Button::new("Close")).clicked() {
                should_close = true;
            }
            ui.add_space(2.0);
        });

    if let Some(status) = new_status {
        app.set_milestone_status(project_id, milestone_id, status);
    }
    if should_close || ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        app.editing_milestone = None;
    }
}

/// Render the "About" dialog.
pub fn show_about_dialog(app: &mut TimelineApp, ctx: &Context) {
    let mut should_close = false;
    Window::new("About")
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .fixed_size([280.0, 160.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(12.0);
                ui.heading(RichText::new("Timeline Planner").strong());
                ui.add_space(2.0);
                ui.label(RichText::new(format!("Version {}", env!("CARGO_PKG_VERSION"))).color(theme::TEXT_SECONDARY));
                ui.add_space(10.0);
                ui.label("Projects and milestones on a scalable timeline,");
                ui.label("built with Rust and egui.");
                ui.add_space(14.0);
                if ui.add_sized([100.0, 28.0], egui::Button::new("Close")).clicked() {
                    should_close = true;
                }
            });
        });
    if should_close || ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        app.show_about = false;
    }
}

/// Progress indicator shown while an export is running.
pub fn show_export_progress(ctx: &Context) {
    egui::Area::new(egui::Id::new("export_progress"))
        .order(egui::Order::Foreground)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .interactable(false)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label(RichText::new(PROGRESS_MESSAGE).strong());
                });
            });
        });
}
