//! Year discovery and per-year grid assembly.

use super::{
    LayoutKind, MonthBlock, MonthLabel, WeekRow,
    bucket::bucket_by_day,
    month::build_month,
    week::build_week_columns,
};
use crate::content::ActivityCorpus;
use serde::Serialize;
use std::collections::BTreeSet;

/// A full year of activity in one of the two layouts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearGrid {
    pub year: u16,
    #[serde(flatten)]
    pub layout: YearLayout,
    pub month_labels: Vec<MonthLabel>,
}

/// The calendar structure of a [`YearGrid`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "layout", rename_all = "kebab-case")]
pub enum YearLayout {
    /// Twelve blocks, December first (reverse chronological)
    MonthBlock { months: Vec<MonthBlock> },
    /// 53 fixed week columns, January first
    WeekColumn { weeks: Vec<WeekRow> },
}

/// Build one year's grid.
///
/// Deterministic for a given `(year, corpus, layout)`; a year with zero
/// posts produces the complete grid with every `count` at zero.
pub fn build_year(year: u16, corpus: &ActivityCorpus, layout: LayoutKind) -> YearGrid {
    let buckets = bucket_by_day(corpus.posts().iter().filter(|p| p.date.year == year));

    match layout {
        LayoutKind::MonthBlock => {
            // December first, like the rendered page
            let months: Vec<MonthBlock> = (1..=12)
                .rev()
                .map(|month| build_month(year, month, &buckets))
                .collect();
            let month_labels = months
                .iter()
                .enumerate()
                .map(|(index, block)| MonthLabel {
                    month: block.month,
                    index,
                })
                .collect();

            YearGrid {
                year,
                layout: YearLayout::MonthBlock { months },
                month_labels,
            }
        }
        LayoutKind::WeekColumn => {
            let (weeks, month_labels) = build_week_columns(year, &buckets);
            YearGrid {
                year,
                layout: YearLayout::WeekColumn { weeks },
                month_labels,
            }
        }
    }
}

/// Distinct years that have at least one post, newest first.
///
/// Gap years are simply absent, never zero-filled.
pub fn years_with_posts(corpus: &ActivityCorpus) -> Vec<u16> {
    let years: BTreeSet<u16> = corpus.posts().iter().map(|p| p.date.year).collect();
    years.into_iter().rev().collect()
}

/// Build one grid per discovered year, newest first.
pub fn generate_activity_data(corpus: &ActivityCorpus, layout: LayoutKind) -> Vec<YearGrid> {
    years_with_posts(corpus)
        .into_iter()
        .map(|year| build_year(year, corpus, layout))
        .collect()
}
