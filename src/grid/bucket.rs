//! Date bucketing: group posts by calendar-day key.

use crate::content::PostMetadata;
use std::collections::BTreeMap;

/// Group posts by their `YYYY-MM-DD` key.
///
/// Day precision is structural (dates carry no time-of-day), so two posts
/// published at different hours of the same day always land in the same
/// bucket. Relative order within a bucket is first-seen order; posts are
/// not deduplicated by slug. Callers filter beforehand with iterator
/// adaptors (per-year, per-month, ...).
///
/// Pure and idempotent: same input, same map.
pub fn bucket_by_day<'a, I>(posts: I) -> BTreeMap<String, Vec<PostMetadata>>
where
    I: IntoIterator<Item = &'a PostMetadata>,
{
    let mut buckets: BTreeMap<String, Vec<PostMetadata>> = BTreeMap::new();

    for post in posts {
        buckets
            .entry(post.date.key())
            .or_default()
            .push(post.clone());
    }

    buckets
}
