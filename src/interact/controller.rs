//! The hover/tap preview state machine.

use super::{
    DeviceClass, Point, Size, ToggleSignal,
    placement::{anchored, place_preview},
};
use crate::grid::DayCell;

/// Geometry and breakpoint settings, usually taken from
/// `GridConfig::controller_settings`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControllerSettings {
    pub mobile_breakpoint: f32,
    pub preview: Size,
    pub offset: f32,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            mobile_breakpoint: 768.,
            preview: Size {
                width: 350.,
                height: 200.,
            },
            offset: 20.,
        }
    }
}

/// Current display state of the heatmap's preview layer.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PreviewState {
    #[default]
    Idle,
    /// Desktop: a floating card follows the pointer
    HoverPreview { cell: DayCell, pointer: Point },
    /// Mobile: a modal sheet, open until explicitly closed
    TapModal { cell: DayCell },
}

/// One interaction from the UI shell, delivered in DOM order.
#[derive(Debug, Clone, PartialEq)]
pub enum InteractionEvent {
    /// Pointer entered a day cell
    Enter { cell: DayCell, pointer: Point },
    /// Pointer left the hovered cell (fires before any new Enter)
    Leave,
    /// Pointer moved within the hovered cell
    Move { pointer: Point },
    /// Tap or click on a day cell
    Tap { cell: DayCell },
    /// Viewport size changed; `None` means no viewport is available
    Resize { viewport: Option<Size> },
    /// Backdrop click, close control, or Escape
    Close,
}

/// What the shell must do after a transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    ShowPreview(Point),
    MovePreview(Point),
    HidePreview,
    OpenModal,
    CloseModal,
}

/// State machine over Idle / HoverPreview / TapModal.
///
/// Events are handled to completion one at a time, so transitions never
/// race; a later event simply supersedes an unresolved preview. Device
/// class is re-derived only on resize events and never forces a
/// transition by itself.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityController {
    settings: ControllerSettings,
    state: PreviewState,
    device: DeviceClass,
    viewport: Option<Size>,
}

impl ActivityController {
    /// Start idle with no known viewport (safe for headless evaluation:
    /// desktop classification, anchor-only placement).
    pub fn new(settings: ControllerSettings) -> Self {
        Self {
            settings,
            state: PreviewState::Idle,
            device: DeviceClass::Desktop,
            viewport: None,
        }
    }

    pub fn state(&self) -> &PreviewState {
        &self.state
    }

    pub fn device(&self) -> DeviceClass {
        self.device
    }

    /// The cell a preview or modal is currently showing, if any.
    pub fn active_cell(&self) -> Option<&DayCell> {
        match &self.state {
            PreviewState::Idle => None,
            PreviewState::HoverPreview { cell, .. } | PreviewState::TapModal { cell } => Some(cell),
        }
    }

    /// The open/closed boundary signal for the shell.
    pub fn modal_signal(&self) -> ToggleSignal {
        ToggleSignal {
            is_open: matches!(self.state, PreviewState::TapModal { .. }),
        }
    }

    /// Handle one event; the returned effect is what changed.
    pub fn handle_event(&mut self, event: InteractionEvent) -> Option<Effect> {
        match event {
            InteractionEvent::Enter { cell, pointer } => self.on_enter(cell, pointer),
            InteractionEvent::Leave => self.on_leave(),
            InteractionEvent::Move { pointer } => self.on_move(pointer),
            InteractionEvent::Tap { cell } => self.on_tap(cell),
            InteractionEvent::Resize { viewport } => {
                self.viewport = viewport;
                self.device = DeviceClass::classify(
                    viewport.map(|v| v.width),
                    self.settings.mobile_breakpoint,
                );
                // Reclassification never forces a transition; the next
                // interaction obeys the new class
                None
            }
            InteractionEvent::Close => self.on_close(),
        }
    }

    fn on_enter(&mut self, cell: DayCell, pointer: Point) -> Option<Effect> {
        if self.device.is_mobile() || matches!(self.state, PreviewState::TapModal { .. }) {
            return None;
        }

        if !cell.has_activity() {
            // Hovering an empty cell hides any lingering preview
            if matches!(self.state, PreviewState::HoverPreview { .. }) {
                self.state = PreviewState::Idle;
                return Some(Effect::HidePreview);
            }
            return None;
        }

        let placement = self.placement(pointer);
        self.state = PreviewState::HoverPreview { cell, pointer };
        Some(Effect::ShowPreview(placement))
    }

    fn on_leave(&mut self) -> Option<Effect> {
        match self.state {
            PreviewState::HoverPreview { .. } => {
                self.state = PreviewState::Idle;
                Some(Effect::HidePreview)
            }
            _ => None,
        }
    }

    fn on_move(&mut self, pointer: Point) -> Option<Effect> {
        match &mut self.state {
            PreviewState::HoverPreview {
                pointer: tracked, ..
            } => *tracked = pointer,
            _ => return None,
        }
        Some(Effect::MovePreview(self.placement(pointer)))
    }

    fn on_tap(&mut self, cell: DayCell) -> Option<Effect> {
        if !self.device.is_mobile()
            || !cell.has_activity()
            || matches!(self.state, PreviewState::TapModal { .. })
        {
            return None;
        }

        self.state = PreviewState::TapModal { cell };
        Some(Effect::OpenModal)
    }

    fn on_close(&mut self) -> Option<Effect> {
        match self.state {
            PreviewState::TapModal { .. } => {
                self.state = PreviewState::Idle;
                Some(Effect::CloseModal)
            }
            _ => None,
        }
    }

    fn placement(&self, pointer: Point) -> Point {
        match self.viewport {
            Some(viewport) => {
                place_preview(pointer, viewport, self.settings.preview, self.settings.offset)
            }
            None => anchored(pointer, self.settings.offset),
        }
    }
}
