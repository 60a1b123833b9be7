use std::fmt::Write;

use egui::{Color32, Rect};

use crate::model::color::to_hex;
use crate::render::scene::{BAND_ROW_HEIGHT, HEADER_HEIGHT, UNIT_ROW_HEIGHT};
use crate::render::{BarContent, GanttScene};

const HEADER_BG: &str = "#F9FAFB";
const BORDER: &str = "#E5E7EB";
const GRID: &str = "#F3F4F6";
const TEXT_HEADER: &str = "#374151";
const TEXT_UNIT: &str = "#4B5563";
const TODAY_TEXT: &str = "#DC2626";
const TODAY_BG: &str = "#FEF2F2";
const TODAY_LINE: &str = "#EF4444";

/// Draw a static, non-interactive copy of the scene as an SVG document.
///
/// Visibility toggles and edit overlays are left out; colours are fixed
/// and the background is opaque white.
pub fn scene_to_svg(scene: &GanttScene) -> String {
    let width = scene.width().max(1.0);
    let height = scene.height().max(1.0);
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="sans-serif">"#,
        w = fmt_px(width),
        h = fmt_px(height)
    );
    let _ = writeln!(out, r##"<rect width="{}" height="{}" fill="#FFFFFF"/>"##, fmt_px(width), fmt_px(height));

    write_header(&mut out, scene, width);
    write_body(&mut out, scene, width, height);

    out.push_str("</svg>\n");
    out
}

fn write_header(out: &mut String, scene: &GanttScene, width: f32) {
    let _ = writeln!(
        out,
        r#"<rect x="0" y="0" width="{}" height="{}" fill="{HEADER_BG}"/>"#,
        fmt_px(width),
        fmt_px(BAND_ROW_HEIGHT)
    );
    let mut x = 0.0;
    for band in &scene.bands {
        let right = x + band.pixel_width;
        line(out, right, 0.0, right, BAND_ROW_HEIGHT, BORDER);
        text(
            out,
            x + band.pixel_width / 2.0,
            BAND_ROW_HEIGHT / 2.0,
            &band.label,
            12.0,
            TEXT_HEADER,
            true,
        );
        x = right;
    }
    line(out, 0.0, BAND_ROW_HEIGHT, width, BAND_ROW_HEIGHT, BORDER);

    for unit in &scene.units {
        let fill = if unit.is_today {
            Some(TODAY_BG)
        } else if unit.is_weekend {
            Some(HEADER_BG)
        } else {
            None
        };
        if let Some(fill) = fill {
            let _ = writeln!(
                out,
                r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{fill}"/>"#,
                fmt_px(unit.x),
                fmt_px(BAND_ROW_HEIGHT),
                fmt_px(unit.width),
                fmt_px(UNIT_ROW_HEIGHT)
            );
        }
        let right = unit.x + unit.width;
        line(out, right, BAND_ROW_HEIGHT, right, HEADER_HEIGHT, GRID);
        let color = if unit.is_today { TODAY_TEXT } else { TEXT_UNIT };
        text(
            out,
            unit.x + unit.width / 2.0,
            BAND_ROW_HEIGHT + UNIT_ROW_HEIGHT / 2.0,
            &unit.label,
            12.0,
            color,
            unit.is_today,
        );
    }
    line(out, 0.0, HEADER_HEIGHT, width, HEADER_HEIGHT, GRID);
}

fn write_body(out: &mut String, scene: &GanttScene, width: f32, height: f32) {
    for unit in &scene.units {
        let right = unit.x + unit.width;
        line(out, right, HEADER_HEIGHT, right, height, GRID);
    }

    if let Some(marker) = &scene.today_marker {
        let _ = writeln!(
            out,
            r#"<line x1="{x}" y1="{top}" x2="{x}" y2="{bottom}" stroke="{TODAY_LINE}" stroke-opacity="0.5" stroke-dasharray="4 4"/>"#,
            x = fmt_px(marker.x + 0.5),
            top = fmt_px(HEADER_HEIGHT),
            bottom = fmt_px(height)
        );
    }

    let _ = writeln!(out, r#"<g transform="translate(0 {})">"#, fmt_px(HEADER_HEIGHT));
    for (row_index, row) in scene.rows.iter().enumerate() {
        if row_index > 0 {
            line(out, 0.0, row.rect.top(), width, row.rect.top(), GRID);
        }

        let bar = &row.bar;
        let clip = format!("p{row_index}");
        rect(out, bar.rect, bar.color, bar.opacity, Some(&clip));
        if bar.show_title {
            text_clipped(out, bar.rect, &bar.title, 14.0, &clip);
        }

        for pill in &row.tags {
            let _ = writeln!(
                out,
                r##"<rect x="{}" y="{}" width="{}" height="{}" rx="{}" fill="{}"/>"##,
                fmt_px(pill.rect.left()),
                fmt_px(pill.rect.top()),
                fmt_px(pill.rect.width()),
                fmt_px(pill.rect.height()),
                fmt_px(pill.rect.height() / 2.0),
                to_hex(pill.color)
            );
            text(
                out,
                pill.rect.center().x,
                pill.rect.center().y,
                &pill.name,
                11.0,
                "#FFFFFF",
                false,
            );
        }

        for (i, milestone) in row.milestones.iter().enumerate() {
            let clip = format!("m{row_index}_{i}");
            rect(out, milestone.rect, milestone.color, milestone.opacity, Some(&clip));
            let label = match milestone.content {
                BarContent::Title { checkmark: true } => format!("\u{2713} {}", milestone.title),
                BarContent::Title { checkmark: false } => milestone.title.clone(),
                BarContent::Checkmark => "\u{2713}".to_string(),
                BarContent::Empty => continue,
            };
            text_clipped(out, milestone.rect, &label, 12.0, &clip);
        }
    }
    out.push_str("</g>\n");
}

fn rect(out: &mut String, r: Rect, color: Color32, opacity: f32, clip_id: Option<&str>) {
    if let Some(id) = clip_id {
        let _ = writeln!(
            out,
            r#"<clipPath id="{id}"><rect x="{}" y="{}" width="{}" height="{}"/></clipPath>"#,
            fmt_px(r.left()),
            fmt_px(r.top()),
            fmt_px(r.width()),
            fmt_px(r.height())
        );
    }
    let _ = writeln!(
        out,
        r#"<rect x="{}" y="{}" width="{}" height="{}" rx="2" fill="{}" fill-opacity="{}"/>"#,
        fmt_px(r.left()),
        fmt_px(r.top()),
        fmt_px(r.width()),
        fmt_px(r.height()),
        to_hex(color),
        opacity
    );
}

fn line(out: &mut String, x1: f32, y1: f32, x2: f32, y2: f32, color: &str) {
    let _ = writeln!(
        out,
        r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{color}" stroke-width="1"/>"#,
        fmt_px(x1),
        fmt_px(y1),
        fmt_px(x2),
        fmt_px(y2)
    );
}

fn text(out: &mut String, cx: f32, cy: f32, content: &str, size: f32, color: &str, bold: bool) {
    let weight = if bold { "bold" } else { "normal" };
    let _ = writeln!(
        out,
        r#"<text x="{}" y="{}" font-size="{}" font-weight="{weight}" fill="{color}" text-anchor="middle">{}</text>"#,
        fmt_px(cx),
        fmt_px(cy + size * 0.35),
        fmt_px(size),
        escape_xml(content)
    );
}

fn text_clipped(out: &mut String, r: Rect, content: &str, size: f32, clip_id: &str) {
    let _ = writeln!(
        out,
        r##"<text x="{}" y="{}" font-size="{}" font-weight="bold" fill="#FFFFFF" text-anchor="middle" clip-path="url(#{clip_id})">{}</text>"##,
        fmt_px(r.center().x),
        fmt_px(r.center().y + size * 0.35),
        fmt_px(size),
        escape_xml(content)
    );
}

fn fmt_px(value: f32) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    format!("{}", rounded)
}

fn escape_xml(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
