//! Subscription cut-off arithmetic.

use chrono::{Datelike, NaiveDate};

/// Next date on which unpaid accounts get limited. The cut falls on
/// `due_day` of each month; if today's cut already passed, the next one
/// is a month ahead. Short months clamp the day (due day 31 in February
/// becomes the 28th/29th).
pub fn next_cut_date(today: NaiveDate, due_day: u32) -> NaiveDate {
    let (year, month) = if today.day() < due_day {
        (today.year(), today.month())
    } else if today.month() == 12 {
        (today.year() + 1, 1)
    } else {
        (today.year(), today.month() + 1)
    };

    let last_day = days_in_month(year, month);
    NaiveDate::from_ymd_opt(year, month, due_day.min(last_day))
        .unwrap_or(today)
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map(|last| last.day())
        .unwrap_or(28)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn before_the_due_day_cuts_this_month() {
        assert_eq!(next_cut_date(date(2025, 3, 5), 8), date(2025, 3, 8));
    }

    #[test]
    fn on_or_after_the_due_day_cuts_next_month() {
        assert_eq!(next_cut_date(date(2025, 3, 8), 8), date(2025, 4, 8));
        assert_eq!(next_cut_date(date(2025, 3, 20), 8), date(2025, 4, 8));
    }

    #[test]
    fn december_rolls_into_january() {
        assert_eq!(next_cut_date(date(2025, 12, 15), 8), date(2026, 1, 8));
    }

    #[test]
    fn short_months_clamp_the_day() {
        assert_eq!(next_cut_date(date(2025, 1, 31), 31), date(2025, 2, 28));
        assert_eq!(next_cut_date(date(2024, 1, 31), 31), date(2024, 2, 29));
    }
}
