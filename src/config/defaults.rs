//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// [input] Section Defaults
// ============================================================================

pub mod input {
    use std::path::PathBuf;

    pub fn entries() -> PathBuf {
        "content/entries.json".into()
    }
}

// ============================================================================
// [output] Section Defaults
// ============================================================================

pub mod output {
    use std::path::PathBuf;

    pub fn activity() -> PathBuf {
        "public/_data/activity.json".into()
    }
}

// ============================================================================
// [viewport] Section Defaults
// ============================================================================

pub mod viewport {
    pub fn mobile_breakpoint() -> f32 {
        768.
    }
}

// ============================================================================
// [preview] Section Defaults
// ============================================================================
//
// Preview card geometry: "[preview] width/height" is the floating card's
// box, "offset" is the gap between the pointer and the card's anchor edge.

pub mod preview {
    pub fn width() -> f32 {
        350.
    }

    pub fn height() -> f32 {
        200.
    }

    pub fn offset() -> f32 {
        20.
    }
}
