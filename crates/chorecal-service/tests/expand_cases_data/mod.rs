use std::collections::HashMap;

use chorecal_core::types::Frequency;
use chorecal_core::util::date::{date_key, parse_date};
use chorecal_service::range::DateRange;
use chorecal_service::recurrence::expand;
use chorecal_store::model::{Chore, RecurrenceRule};

pub struct ExpandCase {
    pub name: &'static str,
    pub anchor: &'static str,
    pub frequency: Option<Frequency>,
    pub end_date: Option<&'static str>,
    pub range_start: &'static str,
    pub range_end: &'static str,
    pub expected: &'static [&'static str],
}

pub fn expand_cases() -> Vec<ExpandCase> {
    vec![
        ExpandCase {
            name: "one_off_inside",
            anchor: "2024-01-15",
            frequency: None,
            end_date: None,
            range_start: "2024-01-01",
            range_end: "2024-01-31",
            expected: &["2024-01-15"],
        },
        ExpandCase {
            name: "one_off_before_range",
            anchor: "2023-12-31",
            frequency: None,
            end_date: None,
            range_start: "2024-01-01",
            range_end: "2024-01-31",
            expected: &[],
        },
        ExpandCase {
            name: "daily_clipped_week",
            anchor: "2024-01-01",
            frequency: Some(Frequency::Daily),
            end_date: None,
            range_start: "2024-03-03",
            range_end: "2024-03-09",
            expected: &[
                "2024-03-03",
                "2024-03-04",
                "2024-03-05",
                "2024-03-06",
                "2024-03-07",
                "2024-03-08",
                "2024-03-09",
            ],
        },
        ExpandCase {
            name: "weekly_end_date_inclusive",
            anchor: "2024-01-01",
            frequency: Some(Frequency::Weekly),
            end_date: Some("2024-01-15"),
            range_start: "2024-01-01",
            range_end: "2024-01-31",
            expected: &["2024-01-01", "2024-01-08", "2024-01-15"],
        },
        ExpandCase {
            name: "weekly_midrange_clip",
            anchor: "2024-01-01",
            frequency: Some(Frequency::Weekly),
            end_date: None,
            range_start: "2024-01-10",
            range_end: "2024-01-20",
            expected: &["2024-01-15"],
        },
        ExpandCase {
            name: "biweekly_basic",
            anchor: "2024-01-01",
            frequency: Some(Frequency::Biweekly),
            end_date: None,
            range_start: "2024-01-01",
            range_end: "2024-02-01",
            expected: &["2024-01-01", "2024-01-15", "2024-01-29"],
        },
        ExpandCase {
            name: "biweekly_old_anchor_fast_forward",
            anchor: "2019-06-03",
            frequency: Some(Frequency::Biweekly),
            end_date: None,
            range_start: "2024-03-01",
            range_end: "2024-03-31",
            // 2019-06-03 + 124 * 14 days = 2024-03-04.
            expected: &["2024-03-04", "2024-03-18"],
        },
        ExpandCase {
            name: "monthly_leap_clamp",
            anchor: "2024-01-31",
            frequency: Some(Frequency::Monthly),
            end_date: None,
            range_start: "2024-01-01",
            range_end: "2024-04-30",
            expected: &["2024-01-31", "2024-02-29", "2024-03-29", "2024-04-29"],
        },
        ExpandCase {
            name: "monthly_no_leap_clamp",
            anchor: "2023-01-31",
            frequency: Some(Frequency::Monthly),
            end_date: None,
            range_start: "2023-01-01",
            range_end: "2023-04-30",
            expected: &["2023-01-31", "2023-02-28", "2023-03-28", "2023-04-28"],
        },
        ExpandCase {
            name: "monthly_mid_month_stable",
            anchor: "2023-11-15",
            frequency: Some(Frequency::Monthly),
            end_date: None,
            range_start: "2024-01-01",
            range_end: "2024-03-31",
            expected: &["2024-01-15", "2024-02-15", "2024-03-15"],
        },
        ExpandCase {
            name: "end_date_before_anchor",
            anchor: "2024-06-01",
            frequency: Some(Frequency::Weekly),
            end_date: Some("2024-05-01"),
            range_start: "2024-01-01",
            range_end: "2024-12-31",
            expected: &[],
        },
        ExpandCase {
            name: "single_day_range_hit",
            anchor: "2024-01-01",
            frequency: Some(Frequency::Weekly),
            end_date: None,
            range_start: "2024-01-22",
            range_end: "2024-01-22",
            expected: &["2024-01-22"],
        },
        ExpandCase {
            name: "single_day_range_miss",
            anchor: "2024-01-01",
            frequency: Some(Frequency::Weekly),
            end_date: None,
            range_start: "2024-01-23",
            range_end: "2024-01-23",
            expected: &[],
        },
        ExpandCase {
            name: "series_ends_before_range",
            anchor: "2024-01-01",
            frequency: Some(Frequency::Daily),
            end_date: Some("2024-01-31"),
            range_start: "2024-02-01",
            range_end: "2024-02-29",
            expected: &[],
        },
    ]
}

pub fn assert_case(case: &ExpandCase) {
    let chore = Chore {
        id: uuid::Uuid::new_v4(),
        title: case.name.to_string(),
        description: String::new(),
        date: case.anchor.to_string(),
        color: "#0078d4".to_string(),
        recurrence: case.frequency.map(|frequency| RecurrenceRule {
            frequency,
            end_date: case.end_date.map(String::from),
        }),
        completed: HashMap::new(),
    };

    let range = DateRange::new(
        parse_date(case.range_start).expect("valid range start"),
        parse_date(case.range_end).expect("valid range end"),
    )
    .expect("valid range");

    let dates = expand(&chore, range).expect("case expands");
    let keys: Vec<String> = dates.into_iter().map(date_key).collect();
    assert_eq!(keys, case.expected, "case `{}`", case.name);
}
