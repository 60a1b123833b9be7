use crate::config::TimelineSettings;
use crate::model::Project;
use crate::render::palette;
use crate::ui::theme;
use egui::{RichText, Ui};
use egui_phosphor::regular as icons;
use uuid::Uuid;

/// Actions that the project list can request.
pub enum ProjectListAction {
    None,
    ToggleVisibility(Uuid),
}

/// Render the left-side project list.
pub fn show_project_list(projects: &[Project], settings: &TimelineSettings, ui: &mut Ui) -> ProjectListAction {
    let mut action = ProjectListAction::None;

    ui.add_space(2.0);
    ui.horizontal(|ui| {
        ui.label(RichText::new("Projects").strong().size(15.0));
        ui.label(
            RichText::new(format!("({})", projects.len()))
                .size(11.0)
                .color(theme::TEXT_DIM),
        );
    });
    ui.add_space(4.0);
    ui.separator();

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for project in projects {
                let hidden = settings.is_hidden(project.id);
                ui.horizontal(|ui| {
                    let (icon, tip) = if hidden {
                        (icons::EYE_SLASH, "Show project")
                    } else {
                        (icons::EYE, "Hide project")
                    };
                    let toggle = ui.add(
                        egui::Button::new(RichText::new(icon).color(theme::TEXT_SECONDARY)).frame(false),
                    );
                    if toggle.on_hover_text(tip).clicked() {
                        action = ProjectListAction::ToggleVisibility(project.id);
                    }

                    let (dot, _) = ui.allocate_exact_size(egui::vec2(8.0, 8.0), egui::Sense::hover());
                    ui.painter()
                        .circle_filled(dot.center(), 4.0, palette::project_color(project));

                    let color = if hidden { theme::TEXT_DIM } else { theme::TEXT_PRIMARY };
                    ui.add(egui::Label::new(RichText::new(project.display_title()).color(color)).truncate());

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let done = project.milestones.iter().filter(|m| m.is_done()).count();
                        ui.label(
                            RichText::new(format!("{}/{}", done, project.milestones.len()))
                                .size(10.0)
                                .color(theme::TEXT_DIM),
                        )
                        .on_hover_text("Milestones done");
                    });
                });
            }
        });

    action
}
