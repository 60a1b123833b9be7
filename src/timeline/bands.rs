use chrono::NaiveDate;

use crate::model::TimeScale;

/// A label in the upper header row spanning a run of columns.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderBand {
    pub label: String,
    pub start_unit_index: usize,
    pub unit_span: usize,
    pub pixel_width: f32,
}

/// The coarser period a column is grouped under.
pub fn band_label(unit: NaiveDate, scale: TimeScale) -> String {
    match scale {
        TimeScale::Day | TimeScale::Week => unit.format("%b %Y").to_string(),
        TimeScale::Month | TimeScale::Year => unit.format("%Y").to_string(),
    }
}

/// Group consecutive columns sharing a band label.
pub fn band_units(units: &[NaiveDate], scale: TimeScale, unit_width: f32) -> Vec<HeaderBand> {
    let mut bands = Vec::new();
    let Some(first) = units.first() else {
        return bands;
    };

    let mut close = |label: String, start: usize, end: usize| {
        let unit_span = end - start;
        bands.push(HeaderBand {
            label,
            start_unit_index: start,
            unit_span,
            pixel_width: unit_span as f32 * unit_width,
        });
    };

    let mut current_label = band_label(*first, scale);
    let mut band_start = 0;
    for (i, unit) in units.iter().enumerate().skip(1) {
        let label = band_label(*unit, scale);
        if label != current_label {
            close(std::mem::replace(&mut current_label, label), band_start, i);
            band_start = i;
        }
    }
    // The trailing run, including a last unit that shares the open label.
    close(current_label, band_start, units.len());

    bands
}
