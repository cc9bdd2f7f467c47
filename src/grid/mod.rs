//! Calendar grid construction.
//!
//! Turns the corpus into calendar-shaped, render-ready structures:
//!
//! | Module   | Role                                              |
//! |----------|---------------------------------------------------|
//! | `bucket` | Group posts by calendar-day key                   |
//! | `month`  | Month-block layout (weeks stacked per month)      |
//! | `week`   | Week-column layout (53 fixed GitHub-style columns)|
//! | `year`   | Year discovery and per-year grid assembly         |
//!
//! Everything here is a pure transformation over the corpus passed in:
//! no wall clock, no I/O, no shared state. Building the same `(year,
//! posts)` twice yields structurally equal output.

pub mod bucket;
pub mod month;
pub mod week;
pub mod year;

pub use month::MonthBlock;
pub use year::{YearGrid, YearLayout, generate_activity_data, years_with_posts};

use crate::{content::PostMetadata, utils::date::Date};
use serde::{Deserialize, Serialize};

/// Slots per week row/column.
pub const DAYS_PER_WEEK: usize = 7;

/// Seven day slots; `None` marks a slot outside the month/year range.
pub type WeekRow = [Option<DayCell>; DAYS_PER_WEEK];

/// Layout strategy for a year's grid.
///
/// `month-block` is the canonical default; `week-column` stays selectable
/// through `[grid] layout` so the algorithm remains swappable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutKind {
    #[default]
    MonthBlock,
    WeekColumn,
}

/// One calendar day and the posts published on it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayCell {
    pub date: Date,
    pub day_of_month: u8,
    pub posts: Vec<PostMetadata>,
    pub count: usize,
}

impl DayCell {
    /// `count` is derived, keeping the `count == posts.len()` invariant
    /// by construction.
    pub fn new(date: Date, posts: Vec<PostMetadata>) -> Self {
        Self {
            date,
            day_of_month: date.day,
            count: posts.len(),
            posts,
        }
    }

    pub fn has_activity(&self) -> bool {
        self.count > 0
    }
}

/// Position of a month's first occurrence within the chosen structure:
/// block index for the month layout, week index of the month's first day
/// for the column layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthLabel {
    pub month: u8,
    pub index: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PostKind;

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

    #[test]
    fn test_day_cell_count_invariant() {
        let date = Date::new(2024, 3, 5);
        let cell = DayCell::new(date, vec![post("a", date), post("b", date)]);
        assert_eq!(cell.count, cell.posts.len());
        assert_eq!(cell.day_of_month, 5);
        assert!(cell.has_activity());

        let empty = DayCell::new(date, vec![]);
        assert_eq!(empty.count, 0);
        assert!(!empty.has_activity());
    }

    #[test]
    fn test_layout_kind_serde_names() {
        assert_eq!(
            serde_json::to_string(&LayoutKind::MonthBlock).unwrap(),
            "\"month-block\""
        );
        assert_eq!(
            serde_json::to_string(&LayoutKind::WeekColumn).unwrap(),
            "\"week-column\""
        );
    }
}
