use crate::app::TimelineApp;
use crate::model::TimeScale;
use crate::ui::theme;
use egui::{menu, RichText, Ui};
use egui_phosphor::regular as icons;

/// Render the top toolbar / menu bar.
pub fn show_toolbar(app: &mut TimelineApp, ui: &mut Ui) {
    menu::bar(ui, |ui| {
        ui.menu_button(RichText::new("  File  ").font(theme::font_menu()), |ui| {
            if ui.button("  Open Projects...").clicked() {
                app.open_projects();
                ui.close_menu();
            }
            if ui.button("  Save Projects As...").clicked() {
                app.save_projects_as();
                ui.close_menu();
            }
            ui.separator();
            if ui.button("  Export PNG").clicked() {
                app.request_export();
                ui.close_menu();
            }
            ui.separator();
            if ui.button("  Open Settings Folder").clicked() {
                let dir = crate::config::SettingsStore::config_dir();
                if let Err(e) = std::fs::create_dir_all(&dir).and_then(|_| open::that(&dir)) {
                    tracing::warn!("Failed to open settings folder {:?}: {}", dir, e);
                }
                ui.close_menu();
            }
        });

        ui.menu_button(RichText::new("  View  ").font(theme::font_menu()), |ui| {
            ui.label(RichText::new("Time Scale").small().weak());
            for scale in TimeScale::ALL {
                if ui.radio(app.settings().time_scale == scale, scale.label()).clicked() {
                    app.set_time_scale(scale);
                    ui.close_menu();
                }
            }
            ui.separator();
            let mut show_completed = app.settings().show_completed_items;
            if ui.checkbox(&mut show_completed, "Show completed items").changed() {
                app.set_show_completed_items(show_completed);
            }
            let mut show_hidden = app.settings().show_hidden_rows;
            if ui.checkbox(&mut show_hidden, "Show hidden projects as dimmed rows").changed() {
                app.set_show_hidden_rows(show_hidden);
            }
        });

        ui.menu_button(RichText::new("  Help  ").font(theme::font_menu()), |ui| {
            if ui.button("About").clicked() {
                app.show_about = true;
                ui.close_menu();
            }
        });

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let export = ui.add_enabled(
                !app.is_exporting(),
                egui::Button::new(format!("{} Export PNG", icons::DOWNLOAD_SIMPLE)),
            );
            if export.clicked() {
                app.request_export();
            }

            let current = app.settings().time_scale;
            egui::ComboBox::from_id_salt("time_scale")
                .selected_text(current.label())
                .show_ui(ui, |ui| {
                    for scale in TimeScale::ALL {
                        if ui.selectable_label(current == scale, scale.label()).clicked() {
                            app.set_time_scale(scale);
                        }
                    }
                });
            ui.label(RichText::new(icons::CALENDAR).font(theme::font_icon()));
        });
    });
}
