//! Touch contact events.

use carousel_core::Point;
use smallvec::SmallVec;

/// Phase of a touch event within a gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchPhase {
    /// A contact touched down.
    Start,
    /// One or more contacts moved.
    Move,
    /// A contact lifted; the event carries the contacts that remain.
    End,
    /// The gesture was cancelled by the platform.
    Cancel,
}

/// A touch event with the list of active contact points.
///
/// Contacts are in tray-local pixel coordinates. Only the first contact
/// drives the drag gesture; additional contacts are carried so the tracker
/// can distinguish a partial lift from the end of the gesture.
#[derive(Clone, Debug)]
pub struct TouchEvent {
    pub phase: TouchPhase,
    pub touches: SmallVec<[Point; 2]>,
}

impl TouchEvent {
    pub fn new(phase: TouchPhase, touches: impl IntoIterator<Item = Point>) -> Self {
        Self {
            phase,
            touches: touches.into_iter().collect(),
        }
    }

    /// Start event with a single contact.
    pub fn start(point: Point) -> Self {
        Self::new(TouchPhase::Start, [point])
    }

    /// Move event with a single contact.
    pub fn move_to(point: Point) -> Self {
        Self::new(TouchPhase::Move, [point])
    }

    /// End event with no remaining contacts (last finger lifted).
    pub fn end() -> Self {
        Self {
            phase: TouchPhase::End,
            touches: SmallVec::new(),
        }
    }

    /// End event with contacts still on the surface (partial lift).
    pub fn end_with_remaining(remaining: impl IntoIterator<Item = Point>) -> Self {
        Self::new(TouchPhase::End, remaining)
    }

    /// Cancel event.
    pub fn cancel() -> Self {
        Self {
            phase: TouchPhase::Cancel,
            touches: SmallVec::new(),
        }
    }

    /// The first active contact, if any.
    pub fn first_touch(&self) -> Option<Point> {
        self.touches.first().copied()
    }
}
