//! Occurrence expansion and date indexing for chore series.
//!
//! Two pure functions drive every calendar render: [`expand`] turns one
//! chore and a closed date range into the ordered list of occurrence dates,
//! and [`index_by_date`] aggregates a whole chore list into a
//! date-to-chores map. Neither touches I/O or shared state, so callers can
//! re-run or memoize them freely.

use std::collections::BTreeMap;

use chrono::{Days, Months, NaiveDate};

use chorecal_core::types::Frequency;
use chorecal_core::util::date::{date_key, parse_date};
use chorecal_store::model::Chore;

use crate::error::{ServiceError, ServiceResult};
use crate::range::DateRange;

/// A chore that could not be expanded, with the error that stopped it.
#[derive(Debug)]
pub struct ExpandFailure {
    pub chore_id: uuid::Uuid,
    pub error: ServiceError,
}

/// Date-indexed view of a chore list over one range.
///
/// Keys are canonical `YYYY-MM-DD` occurrence keys and exist only for
/// dates with at least one occurrence. Within a key, chores keep the order
/// they had in the input slice; a reshuffled map would make the rendered
/// lists jump between frames.
#[derive(Debug, Default)]
pub struct RangeIndex<'a> {
    pub by_date: BTreeMap<String, Vec<&'a Chore>>,
    /// Chores excluded from `by_date` because their dates failed to parse.
    pub failures: Vec<ExpandFailure>,
}

impl<'a> RangeIndex<'a> {
    /// Chores occurring on `key`, in input order. Empty for dates with no
    /// occurrences.
    #[must_use]
    pub fn chores_on(&self, key: &str) -> &[&'a Chore] {
        self.by_date.get(key).map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_date.is_empty()
    }

    /// Occurrence keys in ascending date order. Equal-width ISO keys sort
    /// lexicographically, which is chronological.
    pub fn dates(&self) -> impl Iterator<Item = &str> {
        self.by_date.keys().map(String::as_str)
    }
}

/// ## Summary
/// Expands one chore into the ordered dates on which it occurs within
/// `range` (both bounds inclusive).
///
/// A chore without a recurrence rule yields its anchor date when the
/// anchor falls inside the range, otherwise nothing. A recurring chore
/// yields every step of its series that lands inside the range and at or
/// before the rule's inclusive end date. The result is strictly
/// increasing.
///
/// ## Errors
/// Returns an error when the chore's anchor date or the rule's end date
/// is not a valid `YYYY-MM-DD` string.
pub fn expand(chore: &Chore, range: DateRange) -> ServiceResult<Vec<NaiveDate>> {
    let anchor = parse_date(&chore.date)?;

    let Some(rule) = chore.recurrence.as_ref() else {
        return Ok(if range.contains(anchor) {
            vec![anchor]
        } else {
            Vec::new()
        });
    };

    let series_end = rule.end_date.as_deref().map(parse_date).transpose()?;

    tracing::trace!(
        chore_id = %chore.id,
        anchor = %anchor,
        frequency = %rule.frequency,
        range_start = %range.start(),
        range_end = %range.end(),
        "Expanding recurring chore"
    );

    let mut cursor = fast_forward(anchor, rule.frequency, range.start());
    let mut dates = Vec::new();

    while cursor <= range.end() && series_end.is_none_or(|end| cursor <= end) {
        if cursor >= range.start() {
            dates.push(cursor);
        }
        let Some(next) = step(cursor, rule.frequency) else {
            // Calendar boundary; the series cannot continue.
            break;
        };
        cursor = next;
    }

    Ok(dates)
}

/// ## Summary
/// Indexes every chore's occurrences within `range` by date.
///
/// Chores are processed in slice order and borrowed into the index, so
/// each date's list preserves input order. A chore whose dates fail to
/// parse is recorded under `failures` and skipped; it never prevents the
/// remaining chores from being indexed.
#[must_use]
pub fn index_by_date<'a>(chores: &'a [Chore], range: DateRange) -> RangeIndex<'a> {
    let mut index = RangeIndex::default();

    for chore in chores {
        match expand(chore, range) {
            Ok(dates) => {
                for date in dates {
                    index.by_date.entry(date_key(date)).or_default().push(chore);
                }
            }
            Err(error) => {
                tracing::warn!(
                    chore_id = %chore.id,
                    error = %error,
                    "Excluding chore from range index"
                );
                index.failures.push(ExpandFailure {
                    chore_id: chore.id,
                    error,
                });
            }
        }
    }

    index
}

/// One recurrence step from `date`. `None` only at the calendar boundary.
///
/// Monthly stepping is true calendar-month addition with end-of-month
/// clamping (Jan 31 + 1 month = Feb 29 in a leap year), and each step
/// starts from the clamped cursor: a series anchored on the 31st drifts to
/// the 29th after February and stays there.
fn step(date: NaiveDate, frequency: Frequency) -> Option<NaiveDate> {
    match frequency {
        Frequency::Daily => date.checked_add_days(Days::new(1)),
        Frequency::Weekly => date.checked_add_days(Days::new(7)),
        Frequency::Biweekly => date.checked_add_days(Days::new(14)),
        Frequency::Monthly => date.checked_add_months(Months::new(1)),
    }
}

/// Advance from the anchor to the first occurrence at or after
/// `range_start` without visiting each step.
///
/// Fixed-width frequencies skip in closed form; monthly steps iteratively
/// because clamping makes the arithmetic shortcut unsound. Either way the
/// result is exactly the cursor the naive from-anchor loop would reach:
/// never past an in-range occurrence, never short of one the naive loop
/// would exclude.
fn fast_forward(anchor: NaiveDate, frequency: Frequency, range_start: NaiveDate) -> NaiveDate {
    if anchor >= range_start {
        return anchor;
    }

    match fixed_step_days(frequency) {
        Some(step_days) => {
            let gap = range_start.signed_duration_since(anchor).num_days();
            // gap > 0 here, so this is a plain ceiling division.
            let steps = (gap + step_days - 1) / step_days;
            u64::try_from(steps * step_days)
                .ok()
                .and_then(|offset| anchor.checked_add_days(Days::new(offset)))
                // Falling back to the anchor only costs iteration; the
                // collection loop still filters by range_start.
                .unwrap_or(anchor)
        }
        None => {
            let mut cursor = anchor;
            while cursor < range_start {
                let Some(next) = step(cursor, frequency) else {
                    break;
                };
                cursor = next;
            }
            cursor
        }
    }
}

const fn fixed_step_days(frequency: Frequency) -> Option<i64> {
    match frequency {
        Frequency::Daily => Some(1),
        Frequency::Weekly => Some(7),
        Frequency::Biweekly => Some(14),
        Frequency::Monthly => None,
    }
}
