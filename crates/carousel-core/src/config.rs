//! Slider configuration.
//!
//! Externally supplied, immutable per render pass. The engine does not
//! validate it beyond what is needed to avoid panics: a configuration with
//! `visible_slides > total_slides` or non-positive natural sizes will not
//! render sensibly, but it will not crash the engine either.

use crate::geometry::Orientation;

/// Read-only configuration for one carousel instance.
#[derive(Clone, Debug, PartialEq)]
pub struct SliderConfig {
    pub orientation: Orientation,
    /// Total number of slides in the tray.
    pub total_slides: usize,
    /// Number of slides visible at once.
    pub visible_slides: usize,
    /// Intrinsic slide width, used for the vertical aspect-ratio wrapper.
    pub natural_slide_width: f32,
    /// Intrinsic slide height, used for the vertical aspect-ratio wrapper.
    pub natural_slide_height: f32,
    /// Tray width as a percentage of the viewport.
    pub slide_tray_size: f32,
    /// Fraction of the tray occupied by one slide, as a percentage.
    pub slide_size: f32,
    /// Whether touch drag gestures are enabled.
    pub touch_enabled: bool,
    /// Whether the master spinner gate is active.
    pub has_master_spinner: bool,
    /// Tab index of the carousel root; `None` defaults to 0 at the widget
    /// boundary.
    pub tab_index: Option<i32>,
}

impl SliderConfig {
    /// Creates a configuration with the given slide counts and the same
    /// defaults the original widget ships with.
    pub fn new(orientation: Orientation, total_slides: usize, visible_slides: usize) -> Self {
        let visible = visible_slides.max(1);
        Self {
            orientation,
            total_slides,
            visible_slides: visible,
            natural_slide_width: 100.0,
            natural_slide_height: 100.0,
            slide_tray_size: if total_slides > 0 {
                total_slides as f32 * 100.0 / visible as f32
            } else {
                100.0
            },
            slide_size: if total_slides > 0 {
                100.0 / total_slides as f32
            } else {
                100.0
            },
            touch_enabled: true,
            has_master_spinner: false,
            tab_index: None,
        }
    }

    /// The largest valid slide index: `total - min(total, visible)`.
    pub fn max_slide(&self) -> usize {
        self.total_slides - self.total_slides.min(self.visible_slides)
    }
}
