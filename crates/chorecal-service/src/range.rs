//! View-range derivation.
//!
//! Each calendar view queries the expansion engine over a closed interval
//! of calendar days: a single day, a Sunday-through-Saturday week, or the
//! visible month grid including the overflow days that pad the first and
//! last weeks.

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};

use chorecal_core::types::CalendarView;

use crate::error::{ServiceError, ServiceResult};

/// A closed, inclusive interval of calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// ## Errors
    /// Returns a validation error when `start` is after `end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> ServiceResult<Self> {
        if start > end {
            return Err(ServiceError::ValidationError(format!(
                "range start {start} is after range end {end}"
            )));
        }
        Ok(Self { start, end })
    }

    /// The single-day range `[date, date]`.
    #[must_use]
    pub const fn day(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// Sunday through Saturday of the week containing `date`.
    #[must_use]
    pub fn week(date: NaiveDate) -> Self {
        let week = date.week(Weekday::Sun);
        Self {
            start: week.first_day(),
            end: week.last_day(),
        }
    }

    /// The visible month grid for `date`'s month: from the Sunday at or
    /// before the first of the month through the Saturday at or after the
    /// last day of the month.
    #[must_use]
    pub fn month_grid(date: NaiveDate) -> Self {
        let start = first_of_month(date).week(Weekday::Sun).first_day();
        let end = last_of_month(date).week(Weekday::Sun).last_day();
        Self { start, end }
    }

    /// The range queried by `view` around `date`.
    #[must_use]
    pub fn for_view(view: CalendarView, date: NaiveDate) -> Self {
        match view {
            CalendarView::Day => Self::day(date),
            CalendarView::Week => Self::week(date),
            CalendarView::Month => Self::month_grid(date),
        }
    }

    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Every day in the range, in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let end = self.end;
        self.start.iter_days().take_while(move |day| *day <= end)
    }
}

/// Reference date one view-step after `date` (next day, week, or month).
#[must_use]
pub fn next_reference(view: CalendarView, date: NaiveDate) -> NaiveDate {
    match view {
        CalendarView::Day => date.checked_add_days(Days::new(1)).unwrap_or(date),
        CalendarView::Week => date.checked_add_days(Days::new(7)).unwrap_or(date),
        CalendarView::Month => date.checked_add_months(Months::new(1)).unwrap_or(date),
    }
}

/// Reference date one view-step before `date`.
#[must_use]
pub fn prev_reference(view: CalendarView, date: NaiveDate) -> NaiveDate {
    match view {
        CalendarView::Day => date.checked_sub_days(Days::new(1)).unwrap_or(date),
        CalendarView::Week => date.checked_sub_days(Days::new(7)).unwrap_or(date),
        CalendarView::Month => date.checked_sub_months(Months::new(1)).unwrap_or(date),
    }
}

// Day 1 exists in every valid month; the fallback is only reachable at the
// NaiveDate boundaries.
fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

fn last_of_month(date: NaiveDate) -> NaiveDate {
    first_of_month(date)
        .checked_add_months(Months::new(1))
        .and_then(|first_of_next| first_of_next.pred_opt())
        .unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        chorecal_core::util::date::parse_date(s).expect("valid date")
    }

    #[test]
    fn test_new_rejects_inverted_bounds() {
        assert!(DateRange::new(date("2024-01-02"), date("2024-01-01")).is_err());
        assert!(DateRange::new(date("2024-01-01"), date("2024-01-01")).is_ok());
    }

    #[test]
    fn test_week_is_sunday_through_saturday() {
        // 2024-03-06 is a Wednesday.
        let range = DateRange::week(date("2024-03-06"));
        assert_eq!(range.start(), date("2024-03-03"));
        assert_eq!(range.end(), date("2024-03-09"));

        // A Sunday is its own week start.
        let range = DateRange::week(date("2024-03-03"));
        assert_eq!(range.start(), date("2024-03-03"));
    }

    #[test]
    fn test_month_grid_includes_overflow_days() {
        // February 2024: the 1st is a Thursday, the 29th a Thursday.
        let range = DateRange::month_grid(date("2024-02-15"));
        assert_eq!(range.start(), date("2024-01-28"));
        assert_eq!(range.end(), date("2024-03-02"));
    }

    #[test]
    fn test_month_grid_exact_weeks() {
        // 35 days for February 2024 (five rows of seven).
        let range = DateRange::month_grid(date("2024-02-15"));
        assert_eq!(range.days().count(), 35);
    }

    #[test]
    fn test_day_range_is_single_day() {
        let range = DateRange::day(date("2024-06-10"));
        assert_eq!(range.days().collect::<Vec<_>>(), vec![date("2024-06-10")]);
    }

    #[test]
    fn test_navigation_steps() {
        let d = date("2024-01-31");
        assert_eq!(next_reference(CalendarView::Day, d), date("2024-02-01"));
        assert_eq!(next_reference(CalendarView::Week, d), date("2024-02-07"));
        // Month navigation clamps to the shorter month.
        assert_eq!(next_reference(CalendarView::Month, d), date("2024-02-29"));
        assert_eq!(prev_reference(CalendarView::Month, d), date("2023-12-31"));
    }
}
