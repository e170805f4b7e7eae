//! Pure geometry resolution: drag distances to slide counts.
//!
//! These functions are the quantization step between continuous pointer
//! deltas and the discrete slide index. They carry no state; the drag
//! tracker feeds them live tray dimensions at gesture end.

use carousel_core::{Orientation, Point, Size};

/// Returns the pixel size of one slide along the tray's main axis.
///
/// Precondition: `total_slides > 0`. A zero count divides to infinity, so
/// callers must short-circuit before resolving geometry.
pub fn slide_size_in_px(orientation: Orientation, tray: Size, total_slides: usize) -> f32 {
    tray.main_extent(orientation) / total_slides as f32
}

/// Returns the whole number of slides a drag delta represents.
///
/// Sign convention: dragging content left/up (negative delta) moves the
/// current slide forward, so the ratio is negated. Rounding is half away
/// from zero.
pub fn slides_moved(orientation: Orientation, delta: Point, slide_size_px: f32) -> i32 {
    -(delta.main_axis(orientation) / slide_size_px).round() as i32
}

/// Clamps a candidate index into `[0, total - min(total, visible)]`.
///
/// Shared by the drag and keyboard paths so an out-of-range index is never
/// written to the store, no matter how large the overshoot was.
pub fn clamp_slide(candidate: i64, total_slides: usize, visible_slides: usize) -> usize {
    let max_slide = total_slides - total_slides.min(visible_slides);
    candidate.clamp(0, max_slide as i64) as usize
}
