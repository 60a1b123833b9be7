use serde::{Deserialize, Serialize};

/// Controls the granularity of the timeline columns and how many days the
/// window covers.
///
/// `Year` lays the window out in quarters: one column per quarter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeScale {
    Day,
    #[default]
    Week,
    Month,
    Year,
}

impl TimeScale {
    pub const ALL: [TimeScale; 4] = [
        TimeScale::Day,
        TimeScale::Week,
        TimeScale::Month,
        TimeScale::Year,
    ];

    /// Length of the visible window in days.
    pub fn window_days(self) -> i64 {
        match self {
            TimeScale::Day => 30,
            TimeScale::Week => 90,
            TimeScale::Month => 180,
            TimeScale::Year => 365,
        }
    }

    /// Column width used before a viewport measurement is available.
    pub fn fallback_unit_width(self) -> f32 {
        match self {
            TimeScale::Day => 30.0,
            TimeScale::Week => 70.0,
            TimeScale::Month => 100.0,
            TimeScale::Year => 120.0,
        }
    }

    /// Columns never get narrower than this; the chart scrolls instead.
    pub fn min_unit_width(self) -> f32 {
        match self {
            TimeScale::Day => 25.0,
            TimeScale::Week => 60.0,
            TimeScale::Month => 80.0,
            TimeScale::Year => 100.0,
        }
    }

    /// Average number of days in one column.
    pub fn days_per_unit(self) -> f32 {
        match self {
            TimeScale::Day => 1.0,
            TimeScale::Week => 7.0,
            TimeScale::Month => 30.4375,
            TimeScale::Year => 91.3125,
        }
    }

    /// Label for the scale selector.
    pub fn label(self) -> &'static str {
        match self {
            TimeScale::Day => "30 Days (Day)",
            TimeScale::Week => "90 Days (Week)",
            TimeScale::Month => "180 Days (Month)",
            TimeScale::Year => "1 Year (Quarter)",
        }
    }
}

impl std::str::FromStr for TimeScale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "day" | "days" => Ok(TimeScale::Day),
            "week" | "weeks" => Ok(TimeScale::Week),
            "month" | "months" => Ok(TimeScale::Month),
            "year" | "years" | "quarter" => Ok(TimeScale::Year),
            other => Err(format!(
                "unknown time scale '{}': expected day, week, month or year",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_is_never_below_minimum() {
        for scale in TimeScale::ALL {
            assert!(scale.fallback_unit_width() >= scale.min_unit_width());
        }
    }

    #[test]
    fn test_from_str_accepts_quarter_alias() {
        assert_eq!("quarter".parse::<TimeScale>(), Ok(TimeScale::Year));
        assert_eq!(" Week ".parse::<TimeScale>(), Ok(TimeScale::Week));
        assert!("fortnight".parse::<TimeScale>().is_err());
    }

    #[test]
    fn test_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&TimeScale::Year).unwrap(), "\"year\"");
    }
}
