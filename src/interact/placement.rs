//! Preview placement with viewport-edge flipping.

use super::{Point, Size};

/// Anchor a box at `pointer + offset` with no overflow handling.
///
/// Used when no viewport is known (headless evaluation).
pub fn anchored(pointer: Point, offset: f32) -> Point {
    Point {
        x: pointer.x + offset,
        y: pointer.y + offset,
    }
}

/// Place a preview box near the pointer, flipping each axis independently
/// when the anchored box would overflow the viewport's right or bottom
/// edge.
pub fn place_preview(pointer: Point, viewport: Size, preview: Size, offset: f32) -> Point {
    let mut left = pointer.x + offset;
    if left + preview.width > viewport.width {
        left = pointer.x - preview.width - offset;
    }

    let mut top = pointer.y + offset;
    if top + preview.height > viewport.height {
        top = pointer.y - preview.height - offset;
    }

    Point { x: left, y: top }
}
