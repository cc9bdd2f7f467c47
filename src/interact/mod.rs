//! Interaction layer for the rendered heatmap.
//!
//! A pure, event-driven state machine: the UI shell feeds pointer, tap,
//! resize and close events in delivery order; the controller answers with
//! effects (show/move/hide a preview, open/close a modal) and never touches
//! a real viewport. Everything is testable headless.
//!
//! | Module       | Role                                          |
//! |--------------|-----------------------------------------------|
//! | `controller` | Idle / HoverPreview / TapModal state machine  |
//! | `device`     | Mobile/desktop classification from width      |
//! | `placement`  | Preview anchoring with viewport-edge flipping |
//! | `tier`       | Visual emphasis tiers from post count         |

pub mod controller;
pub mod device;
pub mod placement;
pub mod tier;

pub use controller::{ActivityController, ControllerSettings, Effect, InteractionEvent, PreviewState};
pub use device::DeviceClass;
pub use tier::{Decoration, EmphasisTier};

use serde::Serialize;

/// A point in viewport coordinates (CSS pixels).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// A box size in viewport coordinates (CSS pixels).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

/// The minimal cross-tree signal toward the UI shell: whether an overlay
/// (the tap modal here, the search overlay at the site level) is open.
/// Everything richer stays inside the owning component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToggleSignal {
    pub is_open: bool,
}
