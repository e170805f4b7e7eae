//! Tray transform renderer.
//!
//! A pure projection from `(configuration, current slide, drag state)` to a
//! renderer-agnostic style descriptor. It holds no state of its own: the
//! same inputs always yield the same descriptor, which makes the visual
//! output trivially testable without any rendering technology.

use carousel_core::{Orientation, Pct, Px, SliderConfig};
use carousel_foundation::DragState;

/// One link of a transform chain along the tray's main axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Translation {
    /// Percentage translation, relative to the tray's own extent.
    Percent(Pct),
    /// Pixel translation.
    Pixels(Px),
}

/// Whether positioning may be animated by the rendering layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// The rendering layer's default transition applies.
    Default,
    /// Instantaneous positioning; used while a finger is down so the tray
    /// never lags behind it.
    None,
}

/// Style of the wrapper element around the tray.
///
/// Only the vertical orientation touches the wrapper: height is forced to
/// zero and the bottom padding carries the aspect ratio of the visible
/// slides (the padding trick).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TrayWrapStyle {
    pub height: Option<Px>,
    pub padding_bottom: Option<Pct>,
    pub width: Option<Pct>,
}

/// Style of the tray element itself.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrayStyle {
    /// Axis the translations apply to.
    pub axis: Orientation,
    pub width: Pct,
    /// Percentage translation to the current slide, chained with the live
    /// drag delta in pixels.
    pub translate: [Translation; 2],
    pub transition: Transition,
}

/// Complete visual output for one render pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrayProjection {
    pub wrapper: TrayWrapStyle,
    pub tray: TrayStyle,
}

/// Derives the tray styles for the given slide index and in-flight drag.
pub fn project_tray(
    config: &SliderConfig,
    current_slide: usize,
    drag: &DragState,
) -> TrayProjection {
    let base_offset = Pct(config.slide_size * current_slide as f32 * -1.0);
    let transition = if drag.is_dragging {
        Transition::None
    } else {
        Transition::Default
    };

    match config.orientation {
        Orientation::Horizontal => TrayProjection {
            wrapper: TrayWrapStyle::default(),
            tray: TrayStyle {
                axis: Orientation::Horizontal,
                width: Pct(config.slide_tray_size),
                translate: [
                    Translation::Percent(base_offset),
                    Translation::Pixels(Px(drag.delta.x)),
                ],
                transition,
            },
        },
        Orientation::Vertical => TrayProjection {
            wrapper: TrayWrapStyle {
                height: Some(Px(0.0)),
                padding_bottom: Some(Pct(
                    config.natural_slide_height * 100.0 * config.visible_slides as f32
                        / config.natural_slide_width,
                )),
                width: Some(Pct(100.0)),
            },
            tray: TrayStyle {
                axis: Orientation::Vertical,
                width: Pct(100.0),
                translate: [
                    Translation::Percent(base_offset),
                    Translation::Pixels(Px(drag.delta.y)),
                ],
                transition,
            },
        },
    }
}
