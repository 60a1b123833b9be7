use resvg::{tiny_skia, usvg};

use crate::error::{PlannerError, Result};
use crate::export::svg::scene_to_svg;
use crate::export::SnapshotSource;
use crate::render::GanttScene;

/// Off-screen rendering of a composed scene.
pub struct StaticSnapshot<'a> {
    scene: &'a GanttScene,
}

impl<'a> StaticSnapshot<'a> {
    pub fn new(scene: &'a GanttScene) -> Self {
        Self { scene }
    }
}

impl SnapshotSource for StaticSnapshot<'_> {
    fn name(&self) -> &'static str {
        "static snapshot"
    }

    fn render_png(&self, pixel_scale: f32) -> Result<Vec<u8>> {
        rasterize_svg(&scene_to_svg(self.scene), pixel_scale)
    }
}

/// Rasterise an SVG document onto an opaque white canvas and encode it as PNG.
pub fn rasterize_svg(svg: &str, pixel_scale: f32) -> Result<Vec<u8>> {
    let mut options = usvg::Options::default();
    options.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_str(svg, &options).map_err(|e| PlannerError::Svg(e.to_string()))?;

    let size = tree.size();
    let width = (size.width() * pixel_scale).ceil() as u32;
    let height = (size.height() * pixel_scale).ceil() as u32;
    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| PlannerError::Raster(format!("cannot allocate a {width}x{height} canvas")))?;
    pixmap.fill(tiny_skia::Color::WHITE);

    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(pixel_scale, pixel_scale),
        &mut pixmap.as_mut(),
    );
    tracing::debug!("Rasterised snapshot at {}x{}", width, height);

    pixmap.encode_png().map_err(|e| PlannerError::Encode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TimelineSettings;
    use crate::model::Project;
    use crate::render::SceneInput;
    use chrono::NaiveDate;
    use image::GenericImageView;

    const SQUARE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="8" viewBox="0 0 10 8">
<rect x="5" y="0" width="5" height="8" fill="#FF0000"/>
</svg>"##;

    #[test]
    fn test_rasterize_doubles_size_on_white() {
        let png = rasterize_svg(SQUARE, 2.0).unwrap();
        let img = image::load_from_memory(&png).unwrap();
        assert_eq!(img.dimensions(), (20, 16));
        assert_eq!(img.get_pixel(1, 1).0, [255, 255, 255, 255]);
        assert_eq!(img.get_pixel(15, 8).0, [255, 0, 0, 255]);
    }

    #[test]
    fn test_invalid_svg_is_reported() {
        let err = rasterize_svg("not svg", 2.0).unwrap_err();
        assert!(matches!(err, PlannerError::Svg(_)));
    }

    #[test]
    fn test_static_snapshot_of_scene() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let projects = vec![Project::new("Launch", today, None)];
        let settings = TimelineSettings::default();
        let input = SceneInput::new(&projects, &settings, today);
        let scene = GanttScene::for_viewport(&input, 640.0);

        let png = StaticSnapshot::new(&scene).render_png(2.0).unwrap();
        let img = image::load_from_memory(&png).unwrap();
        assert_eq!(img.width(), (scene.width() * 2.0).ceil() as u32);
        assert_eq!(img.height(), (scene.height() * 2.0).ceil() as u32);
    }
}
