//! Content corpus loading.
//!
//! Converts the content-collection export (a JSON array of entries) into an
//! immutable [`ActivityCorpus`]. Conversion is per-entry: a malformed entry
//! is logged and skipped, never fatal, so one bad date cannot take down the
//! whole generation pass.

mod types;

pub use types::{PostKind, PostMetadata, RawEntry, RawEntryData};

use crate::{log, utils::date::Date};
use anyhow::{Context, Result};
use rayon::prelude::*;
use regex::Regex;
use std::{fs, path::Path, sync::LazyLock};

/// The read-only set of posts a generation pass works from.
///
/// Built once from the entry list; insertion order is preserved so
/// bucketing stays stable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivityCorpus {
    posts: Vec<PostMetadata>,
}

impl ActivityCorpus {
    pub fn new(posts: Vec<PostMetadata>) -> Self {
        Self { posts }
    }

    pub fn posts(&self) -> &[PostMetadata] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

/// Counts from one corpus-loading pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorpusStats {
    /// Entries found in the export
    pub total: usize,
    /// Entries converted into posts
    pub kept: usize,
    /// Entries dropped (drafts, malformed, undatable)
    pub skipped: usize,
}

/// Load and convert an entries file.
pub fn load_corpus(path: &Path) -> Result<(ActivityCorpus, CorpusStats)> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read entries file: {}", path.display()))?;
    corpus_from_json(&json)
}

/// Convert an entries JSON array into a corpus.
///
/// The array itself must parse; each element is then converted
/// independently (in parallel), with failures skipped and logged.
pub fn corpus_from_json(json: &str) -> Result<(ActivityCorpus, CorpusStats)> {
    let raw: Vec<serde_json::Value> =
        serde_json::from_str(json).context("Entries file is not a JSON array")?;
    let total = raw.len();

    let posts: Vec<PostMetadata> = raw
        .into_par_iter()
        .map(convert_entry)
        .collect::<Vec<_>>()
        .into_iter()
        .flatten()
        .collect();

    let kept = posts.len();
    let stats = CorpusStats {
        total,
        kept,
        skipped: total - kept,
    };

    Ok((ActivityCorpus::new(posts), stats))
}

/// Convert one raw entry; `None` means skip.
fn convert_entry(value: serde_json::Value) -> Option<PostMetadata> {
    let entry: RawEntry = match serde_json::from_value(value) {
        Ok(entry) => entry,
        Err(err) => {
            log!("content"; "skipping malformed entry: {err}");
            return None;
        }
    };

    if entry.data.draft {
        return None;
    }

    let Some(date) = parse_entry_date(entry.data.date.as_deref()) else {
        log!("content"; "skipping `{}`: missing or invalid date", entry.slug);
        return None;
    };

    Some(PostMetadata {
        slug: entry.slug,
        title: entry.data.title,
        description: entry.data.description,
        date,
        image: entry.data.image,
        kind: entry.data.kind,
    })
}

/// Parse a date string to day precision.
///
/// Accepts `YYYY-MM-DD` and `YYYY-MM-DDTHH:MM:SSZ`; the time part is
/// dropped so same-day posts collide into the same bucket regardless of
/// their original timestamps.
fn parse_entry_date(date: Option<&str>) -> Option<Date> {
    static RE_YYYY_MM_DD: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"^(?P<y>\d{4})-(?P<m>\d{2})-(?P<d>\d{2})$").unwrap());
    static RE_RFC3339: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"^(?P<y>\d{4})-(?P<m>\d{2})-(?P<d>\d{2})T(?P<H>\d{2}):(?P<M>\d{2}):(?P<S>\d{2})Z$").unwrap()
    });

    let date_str = date?;

    let caps = RE_RFC3339
        .captures(date_str)
        .or_else(|| RE_YYYY_MM_DD.captures(date_str))?;

    let date = Date::new(
        caps["y"].parse().ok()?,
        caps["m"].parse().ok()?,
        caps["d"].parse().ok()?,
    );

    if let Err(err) = date.validate() {
        log!("content"; "{err}");
        return None;
    }

    Some(date)
}
