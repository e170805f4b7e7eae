//! Platform-independent input event types consumed by the engine.

mod key;
mod touch;

pub use key::{KeyCode, KeyEvent, KeyEventType};
pub use touch::{TouchEvent, TouchPhase};
