//! Calendar cell dates for the week and month views.

use chrono::{Datelike, Duration, NaiveDate};

pub const WEEK_LEN: usize = 7;
/// Six rows of seven days, whatever the month length.
pub const MONTH_CELLS: usize = 42;

/// Korean weekday names, Sunday first.
pub const DAY_NAMES: [&str; WEEK_LEN] = ["일", "월", "화", "수", "목", "금", "토"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Week,
    Month,
}

impl ViewMode {
    pub fn toggle(&self) -> Self {
        match self {
            ViewMode::Week => ViewMode::Month,
            ViewMode::Month => ViewMode::Week,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::Week => "주간",
            ViewMode::Month => "월간",
        }
    }
}

/// Sunday on or before `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_sunday() as i64)
}

pub fn week_days(date: NaiveDate) -> [NaiveDate; WEEK_LEN] {
    let start = week_start(date);
    std::array::from_fn(|i| start + Duration::days(i as i64))
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.day0() as i64)
}

pub fn month_days(date: NaiveDate) -> [NaiveDate; MONTH_CELLS] {
    let start = week_start(first_of_month(date));
    std::array::from_fn(|i| start + Duration::days(i as i64))
}

/// Dates rendered by `mode` for the given reference date.
pub fn grid_days(mode: ViewMode, date: NaiveDate) -> Vec<NaiveDate> {
    match mode {
        ViewMode::Week => week_days(date).to_vec(),
        ViewMode::Month => month_days(date).to_vec(),
    }
}

pub fn is_same_month(date: NaiveDate, reference: NaiveDate) -> bool {
    date.year() == reference.year() && date.month() == reference.month()
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .and_then(|next| {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|first| next.signed_duration_since(first).num_days() as u32)
    })
    .unwrap_or(31)
}

/// Same day-of-month `months` away, clamped to the target month's length.
pub fn shift_months(date: NaiveDate, months: i32) -> NaiveDate {
    let index = date.year() * 12 + date.month0() as i32 + months;
    let year = index.div_euclid(12);
    let month = index.rem_euclid(12) as u32 + 1;
    let day = date.day().min(days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(date)
}

/// Heading in Korean long form, e.g. `2024년 3월`.
pub fn month_title(date: NaiveDate) -> String {
    format!("{}년 {}월", date.year(), date.month())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn week_of_a_friday() {
        let days = week_days(date(2024, 3, 15));
        assert_eq!(days[0], date(2024, 3, 10));
        assert_eq!(days[6], date(2024, 3, 16));
    }

    #[test]
    fn week_of_a_sunday_starts_on_itself() {
        assert_eq!(week_start(date(2024, 3, 10)), date(2024, 3, 10));
    }

    #[test]
    fn week_across_year_boundary() {
        let days = week_days(date(2025, 1, 1));
        assert_eq!(days[0], date(2024, 12, 29));
        assert_eq!(days[6], date(2025, 1, 4));
    }

    #[test]
    fn week_grid_properties_hold_for_a_whole_year() {
        let mut day = date(2024, 1, 1);
        while day.year() == 2024 {
            let days = week_days(day);
            assert_eq!(days[0].weekday(), Weekday::Sun);
            assert!(days.contains(&day));
            for pair in days.windows(2) {
                assert_eq!(pair[1] - pair[0], Duration::days(1));
            }
            day = day.succ_opt().unwrap();
        }
    }

    #[test]
    fn month_grid_for_march_2024() {
        let days = month_days(date(2024, 3, 15));
        assert_eq!(days.len(), 42);
        assert_eq!(days[0], date(2024, 2, 25));
        assert_eq!(days[41], date(2024, 4, 5));
    }

    #[test]
    fn month_starting_on_sunday_has_no_leading_days() {
        // September 2024 starts on a Sunday.
        assert_eq!(month_days(date(2024, 9, 30))[0], date(2024, 9, 1));
    }

    #[test]
    fn month_grid_properties_hold_for_every_month() {
        for year in [2023, 2024, 2100] {
            for month in 1..=12 {
                let reference = date(year, month, 1);
                let days = month_days(reference);
                assert_eq!(days[0].weekday(), Weekday::Sun);
                assert!(days[0] <= reference);
                assert!(reference - days[0] < Duration::days(7));
                for pair in days.windows(2) {
                    assert_eq!(pair[1] - pair[0], Duration::days(1));
                }
                let last = date(year, month, days_in_month(year, month));
                assert!(days.contains(&last));
            }
        }
    }

    #[test]
    fn days_in_month_handles_leap_years() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2100, 2), 28);
        assert_eq!(days_in_month(2024, 12), 31);
    }

    #[test]
    fn shifting_months_clamps_the_day() {
        assert_eq!(shift_months(date(2024, 1, 31), 1), date(2024, 2, 29));
        assert_eq!(shift_months(date(2024, 3, 31), -1), date(2024, 2, 29));
        assert_eq!(shift_months(date(2024, 12, 15), 1), date(2025, 1, 15));
        assert_eq!(shift_months(date(2024, 1, 15), -1), date(2023, 12, 15));
    }

    #[test]
    fn month_title_is_korean_long_form() {
        assert_eq!(month_title(date(2024, 3, 15)), "2024년 3월");
    }
}
