use crate::render::scene::{BAND_ROW_HEIGHT, HEADER_HEIGHT, UNIT_ROW_HEIGHT};
use crate::render::{BarContent, GanttScene, MilestoneBar, ProjectRow};
use crate::ui::theme;
use egui::{pos2, vec2, Align2, Color32, Painter, Pos2, Rect, Response, Rounding, Sense, Shape, Stroke, Ui};
use egui_phosphor::regular as icons;
use uuid::Uuid;

/// Intents raised by the chart during one frame.
#[derive(Debug, Clone, Default)]
pub struct ChartInteraction {
    pub toggle_visibility: Option<Uuid>,
    pub edit_milestone: Option<(Uuid, Uuid)>,
    /// On-screen area the chart occupied, used for live captures.
    pub chart_rect: Option<Rect>,
}

/// Paint the composed scene into the central panel.
pub fn show_gantt_chart(scene: &GanttScene, ui: &mut Ui) -> ChartInteraction {
    let mut interaction = ChartInteraction::default();

    if scene.is_empty() && scene.rows.is_empty() {
        interaction.chart_rect = Some(ui.max_rect());
        show_empty_state(ui);
        return interaction;
    }

    egui::ScrollArea::both()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            let size = vec2(scene.width(), scene.height());
            let (rect, _) = ui.allocate_exact_size(size, Sense::hover());
            let origin = rect.min;
            let clip = ui.clip_rect();
            let painter = ui.painter().clone();

            painter.rect_filled(rect, 0.0, theme::BG_CHART);

            // The header sticks to the top of the scroll viewport.
            let header_top = origin.y.max(clip.top());
            let body_clip = Rect::from_min_max(pos2(clip.left(), header_top + HEADER_HEIGHT), clip.max);
            let body_origin = pos2(origin.x, origin.y + HEADER_HEIGHT);

            // Back to front: grid, today marker, rows.
            draw_grid(&painter, scene, body_origin, rect.bottom());
            draw_today_marker(ui, &painter, scene, body_origin, rect.bottom(), body_clip);
            for row in &scene.rows {
                draw_row(ui, &painter, row, body_origin, body_clip, &mut interaction);
            }

            draw_header(&painter, scene, pos2(origin.x, header_top));

            interaction.chart_rect = Some(rect.intersect(clip));
        });

    interaction
}

fn show_empty_state(ui: &mut Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.35);
        ui.label(egui::RichText::new(icons::CALENDAR_BLANK).size(40.0).color(theme::TEXT_DIM));
        ui.add_space(8.0);
        ui.label(egui::RichText::new("No projects yet").strong().size(16.0));
        ui.label(
            egui::RichText::new("Create your first project to start planning your timeline.")
                .color(theme::TEXT_SECONDARY),
        );
    });
}

/// Interact with `rect` only where it is not under the sticky header.
fn hit(ui: &Ui, rect: Rect, body_clip: Rect, id: impl std::hash::Hash, sense: Sense) -> Option<Response> {
    let visible = rect.intersect(body_clip);
    if !visible.is_positive() {
        return None;
    }
    Some(ui.interact(visible, ui.make_persistent_id(id), sense))
}

fn draw_header(painter: &Painter, scene: &GanttScene, origin: Pos2) {
    let width = scene.width();
    painter.rect_filled(
        Rect::from_min_size(origin, vec2(width, HEADER_HEIGHT)),
        0.0,
        theme::BG_HEADER,
    );

    let mut x = origin.x;
    for band in &scene.bands {
        let cell = Rect::from_min_size(pos2(x, origin.y), vec2(band.pixel_width, BAND_ROW_HEIGHT));
        painter.line_segment([cell.right_top(), cell.right_bottom()], Stroke::new(1.0, theme::BORDER));
        painter.with_clip_rect(cell).text(
            cell.center(),
            Align2::CENTER_CENTER,
            &band.label,
            theme::font_header(),
            theme::TEXT_HEADER,
        );
        x += band.pixel_width;
    }
    let band_bottom = origin.y + BAND_ROW_HEIGHT;
    painter.line_segment(
        [pos2(origin.x, band_bottom), pos2(origin.x + width, band_bottom)],
        Stroke::new(1.0, theme::BORDER),
    );

    for unit in &scene.units {
        let cell = Rect::from_min_size(pos2(origin.x + unit.x, band_bottom), vec2(unit.width, UNIT_ROW_HEIGHT));
        let fill = if unit.is_today {
            theme::BG_TODAY
        } else if unit.is_weekend {
            theme::BG_WEEKEND
        } else {
            theme::BG_CHART
        };
        painter.rect_filled(cell, 0.0, fill);
        painter.line_segment([cell.right_top(), cell.right_bottom()], Stroke::new(1.0, theme::GRID_LINE));
        let color = if unit.is_today { theme::TEXT_TODAY } else { theme::TEXT_SECONDARY };
        painter.text(cell.center(), Align2::CENTER_CENTER, &unit.label, theme::font_header(), color);
    }
    painter.line_segment(
        [pos2(origin.x, origin.y + HEADER_HEIGHT), pos2(origin.x + width, origin.y + HEADER_HEIGHT)],
        Stroke::new(1.0, theme::BORDER),
    );
}

fn draw_grid(painter: &Painter, scene: &GanttScene, body_origin: Pos2, bottom: f32) {
    for unit in &scene.units {
        let x = body_origin.x + unit.x + unit.width;
        painter.line_segment(
            [pos2(x, body_origin.y), pos2(x, bottom)],
            Stroke::new(1.0, theme::GRID_LINE),
        );
    }
}

fn draw_today_marker(
    ui: &Ui,
    painter: &Painter,
    scene: &GanttScene,
    body_origin: Pos2,
    bottom: f32,
    body_clip: Rect,
) {
    let Some(marker) = &scene.today_marker else {
        return;
    };
    let x = body_origin.x + marker.x + 0.5;
    painter.extend(Shape::dashed_line(
        &[pos2(x, body_origin.y), pos2(x, bottom)],
        Stroke::new(1.0, theme::TODAY_LINE),
        theme::DASH_LENGTH,
        theme::DASH_LENGTH,
    ));
    let line_rect = Rect::from_min_max(pos2(x - 2.0, body_origin.y), pos2(x + 2.0, bottom));
    if let Some(response) = hit(ui, line_rect, body_clip, "today-marker", Sense::hover()) {
        response.on_hover_text(marker.tooltip.as_str());
    }
}

fn draw_row(
    ui: &Ui,
    painter: &Painter,
    row: &ProjectRow,
    body_origin: Pos2,
    body_clip: Rect,
    interaction: &mut ChartInteraction,
) {
    let offset = body_origin.to_vec2();
    let row_rect = row.rect.translate(offset);
    if row_rect.top() > body_origin.y {
        painter.line_segment(
            [row_rect.left_top(), row_rect.right_top()],
            Stroke::new(1.0, theme::GRID_LINE),
        );
    }

    // Visibility toggle
    let toggle = row.toggle.translate(offset);
    if let Some(response) = hit(ui, toggle, body_clip, ("toggle", row.project_id), Sense::click()) {
        let icon = if row.hidden { icons::EYE_SLASH } else { icons::EYE };
        let color = if response.hovered() { theme::TEXT_PRIMARY } else { theme::TEXT_DIM };
        painter.text(toggle.center(), Align2::CENTER_CENTER, icon, theme::font_icon(), color);
        if response.on_hover_text(row.toggle_tooltip).clicked() {
            interaction.toggle_visibility = Some(row.project_id);
        }
    }

    // Project bar
    let bar = &row.bar;
    let bar_rect = bar.rect.translate(offset);
    painter.rect_filled(bar_rect, Rounding::same(theme::BAR_ROUNDING), bar.color.gamma_multiply(bar.opacity));
    if bar.show_title {
        painter.with_clip_rect(bar_rect.intersect(painter.clip_rect())).text(
            bar_rect.center(),
            Align2::CENTER_CENTER,
            &bar.title,
            theme::font_project(),
            theme::TEXT_ON_BAR,
        );
    }
    if let Some(response) = hit(ui, bar_rect, body_clip, ("project-bar", row.project_id), Sense::hover()) {
        response.on_hover_text(bar.title.as_str());
    }

    for pill in &row.tags {
        let pill_rect = pill.rect.translate(offset);
        painter.rect_filled(pill_rect, Rounding::same(pill_rect.height() / 2.0), pill.color);
        painter.text(
            pill_rect.center(),
            Align2::CENTER_CENTER,
            &pill.name,
            theme::font_tag(),
            Color32::WHITE,
        );
    }

    for milestone in &row.milestones {
        draw_milestone(ui, painter, milestone, offset, body_clip, interaction);
    }
}

fn draw_milestone(
    ui: &Ui,
    painter: &Painter,
    milestone: &MilestoneBar,
    offset: egui::Vec2,
    body_clip: Rect,
    interaction: &mut ChartInteraction,
) {
    let rect = milestone.rect.translate(offset);
    painter.rect_filled(
        rect,
        Rounding::same(theme::BAR_ROUNDING),
        milestone.color.gamma_multiply(milestone.opacity),
    );

    let label = match milestone.content {
        BarContent::Title { checkmark: true } => Some(format!("{} {}", icons::CHECK, milestone.title)),
        BarContent::Title { checkmark: false } => Some(milestone.title.clone()),
        BarContent::Checkmark => Some(icons::CHECK.to_string()),
        BarContent::Empty => None,
    };
    if let Some(label) = label {
        painter.with_clip_rect(rect.intersect(painter.clip_rect())).text(
            rect.center(),
            Align2::CENTER_CENTER,
            label,
            theme::font_milestone(),
            theme::TEXT_ON_BAR,
        );
    }

    let ids = (milestone.project_id, milestone.milestone_id);
    let Some(bar_response) = hit(ui, rect, body_clip, ("milestone", ids), Sense::click()) else {
        return;
    };
    let bar_hovered = bar_response.hovered();
    if bar_response.on_hover_text(milestone.tooltip.as_str()).clicked() {
        interaction.edit_milestone = Some(ids);
    }

    // Registered after the bar so it sits on top and takes the click.
    let overlay = milestone.edit_overlay().translate(offset);
    if let Some(response) = hit(ui, overlay, body_clip, ("milestone-edit", ids), Sense::click()) {
        if bar_hovered || response.hovered() {
            painter.rect_filled(overlay.shrink(2.0), Rounding::same(3.0), theme::BG_OVERLAY_BUTTON);
            painter.text(
                overlay.center(),
                Align2::CENTER_CENTER,
                icons::PENCIL_SIMPLE,
                theme::font_milestone(),
                theme::TEXT_ON_BAR,
            );
        }
        if response.on_hover_text("Edit milestone").clicked() {
            interaction.edit_milestone = Some(ids);
        }
    }
}
