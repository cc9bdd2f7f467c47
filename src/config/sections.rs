//! Section structs for `glowgrid.toml`.

use super::defaults;
use crate::grid::LayoutKind;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[input]` section - where the content-collection export lives.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct InputConfig {
    /// Path to the entries JSON exported by the content collection.
    #[serde(default = "defaults::input::entries")]
    #[educe(Default = defaults::input::entries())]
    pub entries: PathBuf,
}

/// `[output]` section - where generated data files land.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Path of the activity data JSON consumed by templates.
    #[serde(default = "defaults::output::activity")]
    #[educe(Default = defaults::output::activity())]
    pub activity: PathBuf,
}

/// `[grid]` section - calendar layout selection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GridSection {
    /// Layout strategy: `month-block` (default) or `week-column`.
    #[serde(default)]
    pub layout: LayoutKind,
}

/// `[viewport]` section - device classification.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ViewportConfig {
    /// Widths below this value classify as mobile.
    #[serde(default = "defaults::viewport::mobile_breakpoint")]
    #[educe(Default = defaults::viewport::mobile_breakpoint())]
    pub mobile_breakpoint: f32,
}

/// `[preview]` section - hover preview card geometry.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct PreviewConfig {
    #[serde(default = "defaults::preview::width")]
    #[educe(Default = defaults::preview::width())]
    pub width: f32,

    #[serde(default = "defaults::preview::height")]
    #[educe(Default = defaults::preview::height())]
    pub height: f32,

    /// Gap between pointer and the card's anchor edge.
    #[serde(default = "defaults::preview::offset")]
    #[educe(Default = defaults::preview::offset())]
    pub offset: f32,
}
