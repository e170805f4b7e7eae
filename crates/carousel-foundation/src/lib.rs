//! Foundation layer for the carousel tray engine: input event types, the
//! pure geometry resolver, the drag tracker, and keyboard navigation.

pub mod drag;
pub mod geometry;
pub mod input;
pub mod navigation;
pub mod page_scroll;

#[cfg(test)]
mod tests;

pub use drag::{DragState, TrayDragNode};
pub use input::{KeyCode, KeyEvent, KeyEventType, TouchEvent, TouchPhase};
pub use navigation::{KeyOutcome, KeyboardNavigator};
pub use page_scroll::{NoopPageScroll, PageScroll};
