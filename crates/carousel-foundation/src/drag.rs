//! Drag tracker: converts touch gestures into slide index writes.
//!
//! The tracker is a two-state machine, Idle and Dragging, driven by
//! discrete touch events. While dragging it accumulates a raw pixel delta
//! with no bounds clamping (visual overshoot is allowed); when the last
//! contact lifts it quantizes the delta through the geometry resolver,
//! clamps the result, and issues exactly one store write.

use std::rc::Rc;

use carousel_core::{CarouselStore, Orientation, Point, Size, StateUpdate};

use crate::geometry::{clamp_slide, slide_size_in_px, slides_moved};
use crate::input::{TouchEvent, TouchPhase};
use crate::page_scroll::{PageScroll, OVERFLOW_HIDDEN};

/// In-flight drag state, owned by the tracker and read-only elsewhere.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragState {
    /// Contact position at gesture start.
    pub start: Point,
    /// Signed pixel offset from the start position.
    pub delta: Point,
    /// Whether a gesture is currently in flight.
    pub is_dragging: bool,
}

/// Pointer input node that tracks tray drag gestures.
///
/// The live tray bounds are passed with every event rather than captured at
/// construction, so resolution always uses the dimensions the tray had when
/// the gesture ended.
pub struct TrayDragNode {
    store: Rc<dyn CarouselStore>,
    page_scroll: Rc<dyn PageScroll>,
    orientation: Orientation,
    total_slides: usize,
    visible_slides: usize,
    touch_enabled: bool,
    drag: DragState,
    // Single-slot save of the page overflow value. Only the outermost save
    // across the Idle -> Dragging -> Idle cycle is kept.
    saved_overflow: Option<String>,
}

impl TrayDragNode {
    pub fn new(
        store: Rc<dyn CarouselStore>,
        page_scroll: Rc<dyn PageScroll>,
        orientation: Orientation,
        total_slides: usize,
        visible_slides: usize,
        touch_enabled: bool,
    ) -> Self {
        Self {
            store,
            page_scroll,
            orientation,
            total_slides,
            visible_slides,
            touch_enabled,
            drag: DragState::default(),
            saved_overflow: None,
        }
    }

    /// The current drag state.
    pub fn drag_state(&self) -> &DragState {
        &self.drag
    }

    /// Feeds one touch event through the tracker.
    ///
    /// `bounds` are the tray's live pixel dimensions. Returns whether the
    /// event was handled.
    pub fn on_touch_event(&mut self, event: &TouchEvent, bounds: Size) -> bool {
        if !self.touch_enabled {
            return false;
        }

        match event.phase {
            TouchPhase::Start => {
                let Some(touch) = event.first_touch() else {
                    return false;
                };
                if self.saved_overflow.is_none() {
                    self.saved_overflow = Some(self.page_scroll.overflow());
                }
                self.page_scroll.set_overflow(OVERFLOW_HIDDEN);
                self.drag = DragState {
                    start: touch,
                    delta: Point::ZERO,
                    is_dragging: true,
                };
                true
            }
            TouchPhase::Move => {
                if !self.drag.is_dragging {
                    log::debug!("ignoring touch move outside an active gesture");
                    return false;
                }
                let Some(touch) = event.first_touch() else {
                    return false;
                };
                self.drag.delta =
                    Point::new(touch.x - self.drag.start.x, touch.y - self.drag.start.y);
                true
            }
            TouchPhase::End => {
                // Partial lift: other contacts remain, the gesture goes on.
                if !event.touches.is_empty() {
                    return false;
                }
                if !self.drag.is_dragging {
                    return false;
                }
                self.resolve_current_slide(bounds);
                self.finish_gesture();
                true
            }
            TouchPhase::Cancel => {
                if !self.drag.is_dragging {
                    return false;
                }
                self.finish_gesture();
                true
            }
        }
    }

    /// Quantizes the accumulated delta into a slide index and writes it.
    fn resolve_current_slide(&mut self, bounds: Size) {
        if self.total_slides == 0 {
            log::warn!("skipping drag resolution: tray has no slides");
            return;
        }

        let slide_px = slide_size_in_px(self.orientation, bounds, self.total_slides);
        if !(slide_px.is_finite() && slide_px > 0.0) {
            log::warn!("skipping drag resolution: degenerate tray bounds {bounds:?}");
            return;
        }

        let moved = slides_moved(self.orientation, self.drag.delta, slide_px);
        let current = self.store.state().current_slide;
        let candidate = current as i64 + i64::from(moved);
        let resolved = clamp_slide(candidate, self.total_slides, self.visible_slides);

        self.store.set_state(StateUpdate::with_current_slide(resolved));
    }

    /// Restores the suppressed page scroll and resets to Idle.
    fn finish_gesture(&mut self) {
        if let Some(saved) = self.saved_overflow.take() {
            self.page_scroll.set_overflow(&saved);
        }
        self.drag = DragState::default();
    }
}
