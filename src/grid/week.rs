//! Week-column layout: 53 fixed columns, GitHub-contributions style.

use super::{DayCell, MonthLabel, WeekRow};
use crate::{content::PostMetadata, utils::date::Date};
use std::collections::BTreeMap;

/// Fixed column count; covers every Gregorian year
/// (366 days starting mid-week still fit in ceil(366 / 7) + 1 = 53 slots).
pub const WEEK_SLOTS: usize = 53;

/// Week index of a date within its year.
#[inline]
fn week_number(date: Date) -> usize {
    (date.ordinal() as usize - 1) / 7
}

/// Build the 53 week columns for a year.
///
/// Each day lands at `[week_number][weekday]`; slots no day maps to stay
/// `None`. Also returns one label per month carrying the week index of
/// the month's first day, so a renderer can align labels without
/// recomputing calendar math.
pub fn build_week_columns(
    year: u16,
    buckets: &BTreeMap<String, Vec<PostMetadata>>,
) -> (Vec<WeekRow>, Vec<MonthLabel>) {
    let mut weeks = vec![WeekRow::default(); WEEK_SLOTS];
    let mut month_labels = Vec::with_capacity(12);

    for month in 1..=12 {
        let first = Date::new(year, month, 1);
        month_labels.push(MonthLabel {
            month,
            index: week_number(first),
        });

        for day in 1..=Date::days_in_month(year, month) {
            let date = Date::new(year, month, day);
            let posts = buckets.get(&date.key()).cloned().unwrap_or_default();
            weeks[week_number(date)][date.weekday() as usize] = Some(DayCell::new(date, posts));
        }
    }

    (weeks, month_labels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{content::PostKind, grid::bucket::bucket_by_day};

    fn post(slug: &str, date: Date) -> PostMetadata {
        PostMetadata {
            slug: slug.into(),
            title: slug.to_uppercase(),
            description: None,
            date,
            image: None,
            kind: PostKind::Blog,
        }
    }

    fn all_cells(weeks: &[WeekRow]) -> Vec<&DayCell> {
        weeks
            .iter()
            .flatten()
            .filter_map(|cell| cell.as_ref())
            .collect()
    }

    #[test]
    fn test_fixed_slot_count() {
        let (weeks, _) = build_week_columns(2024, &BTreeMap::new());
        assert_eq!(weeks.len(), WEEK_SLOTS);
    }

    #[test]
    fn test_every_day_exactly_once() {
        let (weeks, _) = build_week_columns(2024, &BTreeMap::new());
        let cells = all_cells(&weeks);
        assert_eq!(cells.len(), 366);

        let mut keys: Vec<String> = cells.iter().map(|c| c.date.key()).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), 366);

        let (weeks, _) = build_week_columns(2023, &BTreeMap::new());
        assert_eq!(all_cells(&weeks).len(), 365);
    }

    #[test]
    fn test_day_placement() {
        let (weeks, _) = build_week_columns(2024, &BTreeMap::new());

        // Jan 1 (ordinal 1) -> week 0; 2024-01-01 was a Monday
        let jan1 = weeks[0][1].as_ref().unwrap();
        assert_eq!(jan1.date, Date::new(2024, 1, 1));

        // Dec 31 (ordinal 366) -> week 52; a Tuesday
        let dec31 = weeks[52][2].as_ref().unwrap();
        assert_eq!(dec31.date, Date::new(2024, 12, 31));
    }

    #[test]
    fn test_month_labels_record_first_week() {
        let (_, labels) = build_week_columns(2024, &BTreeMap::new());
        assert_eq!(labels.len(), 12);

        // January starts at week 0
        assert_eq!(labels[0], MonthLabel { month: 1, index: 0 });

        // Mar 1, 2024 has ordinal 61 -> week 8
        assert_eq!(labels[2], MonthLabel { month: 3, index: 8 });

        // Dec 1, 2024 has ordinal 336 -> week 47
        assert_eq!(labels[11], MonthLabel { month: 12, index: 47 });
    }

    #[test]
    fn test_counts_from_buckets() {
        let posts = vec![
            post("a", Date::new(2024, 3, 5)),
            post("b", Date::new(2024, 3, 5)),
        ];
        let buckets = bucket_by_day(&posts);
        let (weeks, _) = build_week_columns(2024, &buckets);

        // Mar 5, 2024: ordinal 65 -> week 9, a Tuesday
        let cell = weeks[9][2].as_ref().unwrap();
        assert_eq!(cell.date, Date::new(2024, 3, 5));
        assert_eq!(cell.count, 2);
    }

    #[test]
    fn test_unused_slots_stay_null() {
        let (weeks, _) = build_week_columns(2023, &BTreeMap::new());

        // 2023 has 365 days: only Dec 31 (ordinal 365) reaches week 52,
        // the rest of the column stays None
        let populated = weeks[52].iter().filter(|c| c.is_some()).count();
        assert_eq!(populated, 1);
    }
}
