//! Month-block layout: one calendar block per month, weeks stacked.

use super::{DAYS_PER_WEEK, DayCell, WeekRow};
use crate::{content::PostMetadata, utils::date::Date};
use serde::Serialize;
use std::collections::BTreeMap;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Full month name, `month` in `1..=12`.
pub fn month_name(month: u8) -> &'static str {
    MONTH_NAMES[(month - 1) as usize]
}

/// One month's calendar block.
///
/// Week rows run Sunday..Saturday; `None` pads the first row up to the
/// weekday of day 1 and the last row past the final day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthBlock {
    /// 1 = January ... 12 = December
    pub month: u8,
    pub name: &'static str,
    pub weeks: Vec<WeekRow>,
}

/// Build one month's block from the year's day buckets.
///
/// Buckets are keyed by `YYYY-MM-DD`, so only this month's days can match;
/// days without a bucket become cells with `count == 0`.
pub fn build_month(
    year: u16,
    month: u8,
    buckets: &BTreeMap<String, Vec<PostMetadata>>,
) -> MonthBlock {
    let days_in_month = Date::days_in_month(year, month);
    let first_weekday = Date::new(year, month, 1).weekday() as usize;

    let mut weeks = Vec::new();
    let mut week = WeekRow::default();
    let mut slot = first_weekday;

    for day in 1..=days_in_month {
        let date = Date::new(year, month, day);
        let posts = buckets.get(&date.key()).cloned().unwrap_or_default();
        week[slot] = Some(DayCell::new(date, posts));

        slot += 1;
        if slot == DAYS_PER_WEEK {
            weeks.push(std::mem::take(&mut week));
            slot = 0;
        }
    }

    if slot > 0 {
        weeks.push(week);
    }

    MonthBlock {
        month,
        name: month_name(month),
        weeks,
    }
}
