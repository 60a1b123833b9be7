use chrono::{Datelike, Duration, Months, NaiveDate, Weekday};

/// Monday of the week containing `date`.
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// Sunday of the week containing `date`.
pub fn end_of_week(date: NaiveDate) -> NaiveDate {
    start_of_week(date) + Duration::days(6)
}

pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub fn end_of_month(date: NaiveDate) -> NaiveDate {
    add_months(start_of_month(date), 1)
        .pred_opt()
        .unwrap_or(date)
}

/// Add calendar months, clamping the day to the end of the target month.
/// Saturates at the end of chrono's supported range.
pub fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_add_months(Months::new(months))
        .unwrap_or(NaiveDate::MAX)
}

/// Quarter number, 1 through 4.
pub fn quarter_of(date: NaiveDate) -> u32 {
    date.month0() / 3 + 1
}

pub fn start_of_quarter(date: NaiveDate) -> NaiveDate {
    let month = (quarter_of(date) - 1) * 3 + 1;
    NaiveDate::from_ymd_opt(date.year(), month, 1).unwrap_or(date)
}

pub fn add_quarters(date: NaiveDate, quarters: u32) -> NaiveDate {
    add_months(date, quarters * 3)
}

pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    date.checked_add_signed(Duration::days(days))
        .unwrap_or(if days < 0 { NaiveDate::MIN } else { NaiveDate::MAX })
}

pub fn add_years(date: NaiveDate, years: i32) -> NaiveDate {
    if years >= 0 {
        add_months(date, years as u32 * 12)
    } else {
        date.checked_sub_months(Months::new(years.unsigned_abs() * 12))
            .unwrap_or(NaiveDate::MIN)
    }
}

/// Whole days from `from` to `to`; negative when `to` is earlier.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

pub fn same_week(a: NaiveDate, b: NaiveDate) -> bool {
    start_of_week(a) == start_of_week(b)
}

pub fn same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

pub fn same_quarter(a: NaiveDate, b: NaiveDate) -> bool {
    start_of_quarter(a) == start_of_quarter(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_week_boundaries_start_on_monday() {
        // 2024-01-10 is a Wednesday
        assert_eq!(start_of_week(date(2024, 1, 10)), date(2024, 1, 8));
        assert_eq!(end_of_week(date(2024, 1, 10)), date(2024, 1, 14));
        // Sunday belongs to the week that started six days earlier
        assert_eq!(start_of_week(date(2024, 1, 14)), date(2024, 1, 8));
        assert_eq!(start_of_week(date(2024, 1, 8)), date(2024, 1, 8));
    }

    #[test]
    fn test_month_boundaries_handle_leap_february() {
        assert_eq!(start_of_month(date(2024, 2, 17)), date(2024, 2, 1));
        assert_eq!(end_of_month(date(2024, 2, 17)), date(2024, 2, 29));
        assert_eq!(end_of_month(date(2023, 12, 5)), date(2023, 12, 31));
    }

    #[test]
    fn test_quarters() {
        assert_eq!(quarter_of(date(2024, 3, 31)), 1);
        assert_eq!(quarter_of(date(2024, 4, 1)), 2);
        assert_eq!(quarter_of(date(2024, 12, 1)), 4);
        assert_eq!(start_of_quarter(date(2024, 8, 20)), date(2024, 7, 1));
        assert_eq!(add_quarters(date(2024, 10, 1), 1), date(2025, 1, 1));
        assert!(same_quarter(date(2024, 7, 1), date(2024, 9, 30)));
        assert!(!same_quarter(date(2024, 6, 30), date(2024, 7, 1)));
    }

    #[test]
    fn test_days_between_is_signed() {
        assert_eq!(days_between(date(2024, 1, 1), date(2024, 1, 31)), 30);
        assert_eq!(days_between(date(2024, 1, 31), date(2024, 1, 1)), -30);
    }

    #[test]
    fn test_add_years_both_directions() {
        assert_eq!(add_years(date(2024, 2, 29), 1), date(2025, 2, 28));
        assert_eq!(add_years(date(2024, 5, 1), -1), date(2023, 5, 1));
    }

    #[test]
    fn test_weekend_and_same_period_checks() {
        assert!(is_weekend(date(2024, 1, 13)));
        assert!(is_weekend(date(2024, 1, 14)));
        assert!(!is_weekend(date(2024, 1, 15)));
        assert!(same_week(date(2024, 1, 8), date(2024, 1, 14)));
        assert!(!same_week(date(2024, 1, 14), date(2024, 1, 15)));
        assert!(same_month(date(2024, 1, 1), date(2024, 1, 31)));
        assert!(!same_month(date(2024, 1, 1), date(2025, 1, 1)));
    }
}
