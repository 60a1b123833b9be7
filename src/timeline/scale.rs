use chrono::NaiveDate;

use super::date_math::{
    add_days, add_months, add_quarters, add_years, end_of_month, end_of_week, start_of_month,
    start_of_quarter, start_of_week,
};
use super::range::TimeWindow;
use crate::model::TimeScale;

/// Loop guards. Normal windows never get near these; hitting one truncates.
const MAX_WEEK_UNITS: usize = 200;
const MAX_MONTH_UNITS: usize = 72;
const QUARTER_UNITS: u32 = 4;
const MAX_QUARTER_UNITS: usize = 5;

/// Produce the column start dates covering `window` at `scale`.
pub fn generate_units(window: &TimeWindow, scale: TimeScale) -> Vec<NaiveDate> {
    match scale {
        TimeScale::Day => day_units(window),
        TimeScale::Week => week_units(window),
        TimeScale::Month => month_units(window),
        TimeScale::Year => quarter_units(window),
    }
}

fn day_units(window: &TimeWindow) -> Vec<NaiveDate> {
    (0..window.total_days.max(0))
        .map(|i| add_days(window.start, i))
        .collect()
}

fn week_units(window: &TimeWindow) -> Vec<NaiveDate> {
    let last = end_of_week(window.end);
    let mut units = Vec::new();
    let mut current = start_of_week(window.start);
    while current <= last && units.len() < MAX_WEEK_UNITS {
        units.push(current);
        current = add_days(current, 7);
    }
    units
}

fn month_units(window: &TimeWindow) -> Vec<NaiveDate> {
    let last = end_of_month(window.end);
    let mut units = Vec::new();
    let mut current = start_of_month(window.start);
    while current <= last && units.len() < MAX_MONTH_UNITS {
        units.push(current);
        current = add_months(current, 1);
    }
    units
}

/// Four quarters from the one containing the window start. Quarters more
/// than a year outside the window are skipped, so at least one unit is
/// forced in.
fn quarter_units(window: &TimeWindow) -> Vec<NaiveDate> {
    let first = start_of_quarter(window.start);
    let upper = add_years(window.end, 1);
    let lower = add_years(window.start, -1);

    let mut units: Vec<NaiveDate> = Vec::new();
    for i in 0..QUARTER_UNITS {
        let quarter = add_quarters(first, i);
        if quarter < upper && quarter > lower && !units.contains(&quarter) {
            units.push(quarter);
        }
    }
    if units.is_empty() {
        units.push(first);
    }
    units.truncate(MAX_QUARTER_UNITS);
    units
}
