//! Keyboard-driven discrete slide stepping.
//!
//! Arrow keys step the current slide by one in either direction, bounds
//! aware: at a boundary the key is still swallowed (no default action, no
//! propagation) but no store write happens.

use std::rc::Rc;

use carousel_core::{CarouselStore, StateUpdate};

use crate::input::{KeyCode, KeyEvent, KeyEventType};

/// Result of dispatching a key event to the navigator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeyOutcome {
    /// Whether focus should move to the carousel root element.
    pub focus_requested: bool,
}

/// Keyboard navigation controller for one carousel instance.
pub struct KeyboardNavigator {
    store: Rc<dyn CarouselStore>,
    total_slides: usize,
    visible_slides: usize,
}

impl KeyboardNavigator {
    pub fn new(store: Rc<dyn CarouselStore>, total_slides: usize, visible_slides: usize) -> Self {
        Self {
            store,
            total_slides,
            visible_slides,
        }
    }

    /// Handles one key event.
    ///
    /// Consumes the event for the navigation keys (the equivalent of
    /// preventing the default action and stopping propagation) and issues
    /// at most one store write per qualifying press.
    pub fn on_key(&self, event: &KeyEvent) -> KeyOutcome {
        if event.event_type != KeyEventType::KeyDown {
            return KeyOutcome::default();
        }
        // Nothing to navigate when every slide is already visible.
        if self.total_slides <= self.visible_slides {
            return KeyOutcome::default();
        }

        let current_slide = self.store.state().current_slide;

        match event.code {
            KeyCode::ArrowLeft => {
                event.consume();
                if current_slide > 0 {
                    self.store
                        .set_state(StateUpdate::with_current_slide(current_slide - 1));
                }
                KeyOutcome {
                    focus_requested: true,
                }
            }
            KeyCode::ArrowRight => {
                event.consume();
                if current_slide < self.total_slides - self.visible_slides {
                    self.store
                        .set_state(StateUpdate::with_current_slide(current_slide + 1));
                }
                KeyOutcome {
                    focus_requested: true,
                }
            }
            _ => KeyOutcome::default(),
        }
    }
}
