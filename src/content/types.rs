//! Data types for the content-collection input contract.
//!
//! Raw entries mirror the collection export shape; `PostMetadata` is the
//! engine's own immutable view of one post.

use crate::utils::date::Date;
use serde::{Deserialize, Serialize};

/// Content type of a post.
///
/// Closed set; the URL prefix mapping is a total lookup so a new variant
/// cannot compile without routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostKind {
    Blog,
    Learn,
    Project,
}

impl PostKind {
    /// Path prefix of the post's display URL (e.g., "/projects/my-slug")
    pub const fn url_prefix(self) -> &'static str {
        match self {
            Self::Blog => "blog",
            Self::Learn => "learn",
            Self::Project => "projects",
        }
    }

    /// Short label shown on preview cards
    pub const fn label(self) -> &'static str {
        match self {
            Self::Blog => "blog",
            Self::Learn => "learn",
            Self::Project => "project",
        }
    }
}

/// Metadata for a single post, as exposed to the grid and preview layers.
///
/// Created once per generation pass from the raw entries; never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostMetadata {
    /// URL slug within its section
    pub slug: String,

    /// Post title (from metadata)
    pub title: String,

    /// Optional summary/description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Publication date, day precision
    pub date: Date,

    /// Optional cover image path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Content type discriminator
    #[serde(rename = "type")]
    pub kind: PostKind,
}

impl PostMetadata {
    /// Display URL for this post, e.g. `/blog/hello-world`.
    pub fn href(&self) -> String {
        format!("/{}/{}", self.kind.url_prefix(), self.slug)
    }
}

/// One raw entry from the content-collection export.
#[derive(Debug, Clone, Deserialize)]
pub struct RawEntry {
    pub slug: String,
    pub data: RawEntryData,
}

/// The `data` payload of a raw entry.
///
/// The collection schema carries many more fields (tags, difficulty,
/// journey, tech stack, ...); only the ones the engine reads are modeled,
/// everything else is ignored on deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct RawEntryData {
    pub title: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Date string, `YYYY-MM-DD` or RFC 3339; absent or malformed
    /// makes the entry unbucketable
    #[serde(default)]
    pub date: Option<String>,

    #[serde(default)]
    pub image: Option<String>,

    #[serde(rename = "type")]
    pub kind: PostKind,

    #[serde(default)]
    pub draft: bool,
}
