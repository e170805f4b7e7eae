//! Keyboard input event types.
//!
//! Key codes are named identifiers independent of keyboard layout. The
//! classic numeric codes used by browser key events can be mapped through
//! [`KeyCode::from_legacy`].

use std::cell::Cell;
use std::rc::Rc;

/// Type of keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEventType {
    /// Key was pressed down.
    KeyDown,
    /// Key was released.
    KeyUp,
}

/// Named key identifiers of interest to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    PageUp,
    PageDown,
    Enter,
    Space,
    Tab,
    Escape,
}

impl KeyCode {
    /// Maps a legacy numeric key code (the browser `keyCode` scheme) to a
    /// named identifier. Returns `None` for codes the engine does not
    /// recognise.
    pub fn from_legacy(code: u32) -> Option<Self> {
        match code {
            9 => Some(Self::Tab),
            13 => Some(Self::Enter),
            27 => Some(Self::Escape),
            32 => Some(Self::Space),
            33 => Some(Self::PageUp),
            34 => Some(Self::PageDown),
            35 => Some(Self::End),
            36 => Some(Self::Home),
            37 => Some(Self::ArrowLeft),
            38 => Some(Self::ArrowUp),
            39 => Some(Self::ArrowRight),
            40 => Some(Self::ArrowDown),
            _ => None,
        }
    }
}

/// A keyboard event with consumption tracking.
///
/// Consuming an event is the engine's equivalent of suppressing the default
/// platform action and stopping further propagation. The flag is shared via
/// `Rc<Cell>` so consumption is visible across clones of the event.
#[derive(Clone, Debug)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub event_type: KeyEventType,
    consumed: Rc<Cell<bool>>,
}

impl KeyEvent {
    pub fn new(code: KeyCode, event_type: KeyEventType) -> Self {
        Self {
            code,
            event_type,
            consumed: Rc::new(Cell::new(false)),
        }
    }

    /// Key-down event for the given code.
    pub fn key_down(code: KeyCode) -> Self {
        Self::new(code, KeyEventType::KeyDown)
    }

    /// Marks this event as consumed, preventing default handling and
    /// further propagation.
    pub fn consume(&self) {
        self.consumed.set(true);
    }

    /// Whether this event has been consumed by a handler.
    pub fn is_consumed(&self) -> bool {
        self.consumed.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_codes_map_to_arrows() {
        assert_eq!(KeyCode::from_legacy(37), Some(KeyCode::ArrowLeft));
        assert_eq!(KeyCode::from_legacy(39), Some(KeyCode::ArrowRight));
        assert_eq!(KeyCode::from_legacy(1000), None);
    }

    #[test]
    fn consumption_is_shared_across_clones() {
        let event = KeyEvent::key_down(KeyCode::ArrowLeft);
        let copy = event.clone();
        copy.consume();
        assert!(event.is_consumed());
    }
}
