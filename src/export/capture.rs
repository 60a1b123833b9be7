use std::io::Cursor;

use egui::{pos2, vec2, Color32, ColorImage, Rect};
use image::{imageops::FilterType, DynamicImage, ImageFormat, RgbaImage};

use crate::error::{PlannerError, Result};
use crate::export::SnapshotSource;

/// A screenshot of the running window, cropped to the chart.
///
/// Only what is currently on screen can be captured, so a scrolled chart
/// exports its visible part.
pub struct LiveCapture<'a> {
    pub image: &'a ColorImage,
    /// Chart area in points.
    pub region: Rect,
    pub pixels_per_point: f32,
}

impl SnapshotSource for LiveCapture<'_> {
    fn name(&self) -> &'static str {
        "live capture"
    }

    fn render_png(&self, pixel_scale: f32) -> Result<Vec<u8>> {
        let ppp = self.pixels_per_point.max(f32::EPSILON);
        let [w, h] = self.image.size;
        let bounds = Rect::from_min_size(pos2(0.0, 0.0), vec2(w as f32 / ppp, h as f32 / ppp));
        let region = self.region.intersect(bounds);
        if !region.is_positive() {
            return Err(PlannerError::CaptureUnavailable);
        }

        let cropped = self.image.region(&region, Some(ppp));
        let [cw, ch] = cropped.size;
        if cw == 0 || ch == 0 {
            return Err(PlannerError::CaptureUnavailable);
        }

        let bytes: Vec<u8> = cropped.pixels.iter().flat_map(|c| on_white(*c)).collect();
        let mut img = RgbaImage::from_raw(cw as u32, ch as u32, bytes)
            .ok_or_else(|| PlannerError::Encode("capture buffer has the wrong size".to_string()))?;

        let target_w = ((region.width() * pixel_scale).round() as u32).max(1);
        let target_h = ((region.height() * pixel_scale).round() as u32).max(1);
        if (target_w, target_h) != img.dimensions() {
            img = image::imageops::resize(&img, target_w, target_h, FilterType::Triangle);
        }

        let mut png = Vec::new();
        DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
            .map_err(|e| PlannerError::Encode(e.to_string()))?;
        Ok(png)
    }
}

/// Composite a premultiplied colour over opaque white.
fn on_white(color: Color32) -> [u8; 4] {
    let [r, g, b, a] = color.to_array();
    let blank = 255 - a;
    [
        r.saturating_add(blank),
        g.saturating_add(blank),
        b.saturating_add(blank),
        255,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::GenericImageView;

    #[test]
    fn test_capture_crops_and_scales() {
        let mut image = ColorImage::new([40, 30], Color32::WHITE);
        // Pixel scale of 2: a blue block at points (5..10, 5..10).
        for y in 10..20 {
            for x in 10..20 {
                image.pixels[y * 40 + x] = Color32::BLUE;
            }
        }
        let capture = LiveCapture {
            image: &image,
            region: Rect::from_min_max(pos2(5.0, 5.0), pos2(15.0, 12.0)),
            pixels_per_point: 2.0,
        };
        let png = capture.render_png(2.0).unwrap();
        let img = image::load_from_memory(&png).unwrap();
        assert_eq!(img.dimensions(), (20, 14));
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 255, 255]);
        assert_eq!(img.get_pixel(19, 13).0, [255, 255, 255, 255]);
    }

    #[test]
    fn test_region_outside_image_is_unavailable() {
        let image = ColorImage::new([10, 10], Color32::WHITE);
        let capture = LiveCapture {
            image: &image,
            region: Rect::from_min_max(pos2(50.0, 50.0), pos2(60.0, 60.0)),
            pixels_per_point: 1.0,
        };
        assert!(matches!(capture.render_png(2.0), Err(PlannerError::CaptureUnavailable)));
    }

    #[test]
    fn test_transparent_pixels_become_white() {
        assert_eq!(on_white(Color32::TRANSPARENT), [255, 255, 255, 255]);
        assert_eq!(on_white(Color32::BLACK), [0, 0, 0, 255]);
    }
}
