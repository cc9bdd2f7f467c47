//! Device classification from viewport width.

/// Mobile vs. desktop, decided by viewport width against the configured
/// breakpoint. Injected into the controller and recomputed on resize
/// signals only, so interaction logic never polls a real viewport.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DeviceClass {
    /// Hover-capable; previews follow the pointer
    #[default]
    Desktop,
    /// Touch-first; taps open a modal
    Mobile,
}

impl DeviceClass {
    /// Classify a viewport width.
    ///
    /// `None` means no viewport is available (headless or server-side
    /// evaluation); that classifies as desktop rather than failing.
    pub fn classify(viewport_width: Option<f32>, breakpoint: f32) -> Self {
        match viewport_width {
            Some(width) if width < breakpoint => Self::Mobile,
            _ => Self::Desktop,
        }
    }

    pub const fn is_mobile(self) -> bool {
        matches!(self, Self::Mobile)
    }
}
