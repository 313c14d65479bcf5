//! Plain-text rendering of calendar views.
//!
//! The layout follows the original views: the day view lists one date, the
//! week view always shows all seven columns, and the month view walks the
//! full grid (overflow days included) but compacts each cell to a few
//! chores and a "+N more" marker.

use std::fmt::Write as _;

use chrono::NaiveDate;

use chorecal_core::types::CalendarView;
use chorecal_core::util::date::date_key;
use chorecal_service::range::DateRange;
use chorecal_service::recurrence::{RangeIndex, index_by_date};
use chorecal_store::model::Chore;

/// Most chores shown per month cell before collapsing to "+N more".
const MAX_VISIBLE: usize = 3;

/// Render `view` around `reference` for the given chores.
#[must_use]
pub fn render_view(view: CalendarView, reference: NaiveDate, chores: &[Chore]) -> String {
    let range = DateRange::for_view(view, reference);
    let index = index_by_date(chores, range);

    let mut out = String::new();
    let _ = writeln!(out, "{}", view_title(view, reference));

    match view {
        CalendarView::Day => render_day(&mut out, range.start(), &index),
        CalendarView::Week => {
            for day in range.days() {
                render_day(&mut out, day, &index);
            }
        }
        CalendarView::Month => {
            for day in range.days() {
                render_month_cell(&mut out, day, &index);
            }
        }
    }

    for failure in &index.failures {
        let _ = writeln!(
            out,
            "warning: chore {} skipped: {}",
            failure.chore_id, failure.error
        );
    }

    out
}

/// One-line listing of every chore, for `list`.
#[must_use]
pub fn render_chore_list(chores: &[Chore]) -> String {
    let mut out = String::new();
    if chores.is_empty() {
        let _ = writeln!(out, "No chores yet.");
        return out;
    }
    for chore in chores {
        let _ = writeln!(
            out,
            "{}  {}  anchored {}{}",
            chore.id,
            chore.title,
            chore.date,
            rule_suffix(chore)
        );
    }
    out
}

fn view_title(view: CalendarView, reference: NaiveDate) -> String {
    match view {
        CalendarView::Day => reference.format("%A, %B %-d, %Y").to_string(),
        CalendarView::Week => reference.format("Week of %b %-d, %Y").to_string(),
        CalendarView::Month => reference.format("%B %Y").to_string(),
    }
}

fn render_day(out: &mut String, day: NaiveDate, index: &RangeIndex<'_>) {
    let key = date_key(day);
    let _ = writeln!(out, "{}", day.format("%a %Y-%m-%d"));

    let chores = index.chores_on(&key);
    if chores.is_empty() {
        let _ = writeln!(out, "  (none)");
        return;
    }
    for chore in chores {
        let _ = writeln!(out, "  {}", chore_line(chore, &key));
    }
}

fn render_month_cell(out: &mut String, day: NaiveDate, index: &RangeIndex<'_>) {
    let key = date_key(day);
    let chores = index.chores_on(&key);
    // Empty cells are omitted; a terminal month listing with 35 blank
    // lines would drown the content.
    if chores.is_empty() {
        return;
    }

    let _ = writeln!(out, "{}", day.format("%a %Y-%m-%d"));
    for chore in chores.iter().take(MAX_VISIBLE) {
        let _ = writeln!(out, "  {}", chore_line(chore, &key));
    }
    if chores.len() > MAX_VISIBLE {
        let _ = writeln!(out, "  +{} more", chores.len() - MAX_VISIBLE);
    }
}

fn chore_line(chore: &Chore, key: &str) -> String {
    let marker = if chore.is_completed_on(key) { "x" } else { " " };
    format!("[{marker}] {}{}", chore.title, rule_suffix(chore))
}

fn rule_suffix(chore: &Chore) -> String {
    match chore.recurrence.as_ref() {
        None => String::new(),
        Some(rule) => match rule.end_date.as_deref() {
            None => format!(" ({})", rule.frequency),
            Some(end) => format!(" ({} until {end})", rule.frequency),
        },
    }
}
