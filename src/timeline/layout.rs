use chrono::NaiveDate;

use super::date_math::days_between;
use crate::model::TimeScale;

/// Column width for a viewport of `container_width` pixels holding
/// `unit_count` columns.
///
/// Falls back to the scale's default when there is nothing to measure, and
/// never returns less than the scale's minimum: narrow viewports scroll
/// rather than squeeze columns.
pub fn compute_unit_width(container_width: f32, unit_count: usize, scale: TimeScale) -> f32 {
    if unit_count == 0 || container_width <= 0.0 || !container_width.is_finite() {
        return scale.fallback_unit_width();
    }
    (container_width / unit_count as f32).max(scale.min_unit_width())
}

/// Width of one calendar day at the given column width.
pub fn day_equivalent_width(unit_width: f32, scale: TimeScale) -> f32 {
    if unit_width == 0.0 {
        return 1.0;
    }
    unit_width / scale.days_per_unit()
}

/// Pixel geometry of the grid for one render pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutGeometry {
    pub window_start: NaiveDate,
    pub unit_width: f32,
    pub total_width: f32,
    pub day_width: f32,
}

impl LayoutGeometry {
    pub fn new(window_start: NaiveDate, unit_width: f32, unit_count: usize, scale: TimeScale) -> Self {
        Self {
            window_start,
            unit_width,
            total_width: unit_width * unit_count as f32,
            day_width: day_equivalent_width(unit_width, scale),
        }
    }

    /// Horizontal offset of `date` from the grid's left edge. Dates before
    /// the window clamp to zero.
    pub fn position_for_date(&self, date: NaiveDate) -> f32 {
        let days = days_between(self.window_start, date);
        if days <= 0 {
            return 0.0;
        }
        days as f32 * self.day_width
    }

    /// Bar width for an item running from `start` to `end` (or a single
    /// day when `end` is absent). The part before the window is cut off.
    /// Zero-length and inverted ranges get half a day so they stay visible.
    pub fn width_between_dates(&self, start: NaiveDate, end: Option<NaiveDate>) -> f32 {
        let end = end.unwrap_or(start);
        let effective_start = start.max(self.window_start);
        let days = days_between(effective_start, end);
        if days <= 0 {
            return self.day_width / 2.0;
        }
        days as f32 * self.day_width
    }
}

/// Tracks the measured column width across viewport resizes and scale
/// switches.
///
/// The host reports every viewport width it observes through
/// [`on_resize`](Self::on_resize). A scale switch drops straight to that
/// scale's fallback width until the next measurement arrives.
#[derive(Debug, Clone)]
pub struct UnitWidthTracker {
    scale: TimeScale,
    unit_count: usize,
    container_width: Option<f32>,
    unit_width: f32,
}

impl UnitWidthTracker {
    pub fn new(scale: TimeScale) -> Self {
        Self {
            scale,
            unit_count: 0,
            container_width: None,
            unit_width: scale.fallback_unit_width(),
        }
    }

    pub fn unit_width(&self) -> f32 {
        self.unit_width
    }

    pub fn scale(&self) -> TimeScale {
        self.scale
    }

    /// Record a new viewport width. Non-positive widths are ignored, as a
    /// collapsed surface says nothing about the real space available.
    /// Returns true when the column width changed.
    pub fn on_resize(&mut self, container_width: f32) -> bool {
        if container_width <= 0.0 || self.container_width == Some(container_width) {
            return false;
        }
        self.container_width = Some(container_width);
        self.recompute()
    }

    /// Switch scale, resetting to the fallback width immediately.
    pub fn set_scale(&mut self, scale: TimeScale, unit_count: usize) {
        if scale == self.scale && unit_count == self.unit_count {
            return;
        }
        tracing::debug!(?scale, unit_count, "time scale changed, resetting unit width");
        self.scale = scale;
        self.unit_count = unit_count;
        self.container_width = None;
        self.unit_width = scale.fallback_unit_width();
    }

    /// Update the column count for the current scale.
    pub fn set_unit_count(&mut self, unit_count: usize) -> bool {
        if unit_count == self.unit_count {
            return false;
        }
        self.unit_count = unit_count;
        self.recompute()
    }

    fn recompute(&mut self) -> bool {
        let Some(width) = self.container_width else {
            return false;
        };
        if self.unit_count == 0 {
            return false;
        }
        let unit_width = compute_unit_width(width, self.unit_count, self.scale);
        let changed = unit_width != self.unit_width;
        if changed {
            tracing::debug!(
                container_width = width,
                unit_count = self.unit_count,
                unit_width,
                "recomputed unit width"
            );
        }
        self.unit_width = unit_width;
        changed
    }
}
