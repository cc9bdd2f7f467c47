//! Visual emphasis tiers from post count.

use serde::Serialize;

/// Decorations a renderer layers onto a day cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Decoration {
    Pulse,
    ThickBorder,
    Sparkle,
    Glow,
    RainbowBorder,
}

impl Decoration {
    /// CSS class the site stylesheet keys on.
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Pulse => "pulse-effect",
            Self::ThickBorder => "thick-border",
            Self::Sparkle => "sparkle-effect",
            Self::Glow => "glow-effect",
            Self::RainbowBorder => "rainbow-border",
        }
    }
}

/// Emphasis tier of a day cell, a total function of its post count.
///
/// Decoration sets are cumulative: each tier carries everything below it,
/// so a busier day is never decorated less than a quieter one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmphasisTier {
    /// 0 or 1 posts: the base cell style carries the signal
    #[default]
    None,
    /// 2 posts
    Tier2,
    /// 3 posts
    Tier3,
    /// 4 or more posts: the maximal set
    Tier4,
}

const TIER2_DECORATIONS: [Decoration; 2] = [Decoration::Pulse, Decoration::ThickBorder];
const TIER3_DECORATIONS: [Decoration; 4] = [
    Decoration::Pulse,
    Decoration::ThickBorder,
    Decoration::Sparkle,
    Decoration::Glow,
];
const TIER4_DECORATIONS: [Decoration; 5] = [
    Decoration::Pulse,
    Decoration::ThickBorder,
    Decoration::Sparkle,
    Decoration::Glow,
    Decoration::RainbowBorder,
];

impl EmphasisTier {
    pub const fn for_count(count: usize) -> Self {
        match count {
            0 | 1 => Self::None,
            2 => Self::Tier2,
            3 => Self::Tier3,
            _ => Self::Tier4,
        }
    }

    pub const fn decorations(self) -> &'static [Decoration] {
        match self {
            Self::None => &[],
            Self::Tier2 => &TIER2_DECORATIONS,
            Self::Tier3 => &TIER3_DECORATIONS,
            Self::Tier4 => &TIER4_DECORATIONS,
        }
    }
}
