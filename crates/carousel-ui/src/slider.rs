//! Slider assembly.
//!
//! Wires one carousel instance together: configuration, the shared store,
//! the drag tracker, keyboard navigation, focus, and the spinner gate.
//! Rendering of slide content, class names, and the spinner child stay
//! outside; the slider's output is the tray projection plus the gate
//! decision.

use std::rc::Rc;

use carousel_core::{CarouselStore, Size, SliderConfig};
use carousel_foundation::{
    DragState, KeyEvent, KeyboardNavigator, PageScroll, TouchEvent, TrayDragNode,
};

use crate::focus::{FocusId, FocusManager};
use crate::spinner::MasterSpinnerGate;
use crate::tray_transform::{project_tray, TrayProjection};

/// One carousel tray instance.
pub struct Slider {
    config: SliderConfig,
    store: Rc<dyn CarouselStore>,
    drag_node: TrayDragNode,
    navigator: KeyboardNavigator,
    spinner_gate: MasterSpinnerGate,
    focus_id: FocusId,
}

impl Slider {
    pub fn new(
        config: SliderConfig,
        store: Rc<dyn CarouselStore>,
        page_scroll: Rc<dyn PageScroll>,
        focus: &mut FocusManager,
    ) -> Self {
        if config.visible_slides > config.total_slides {
            log::warn!(
                "carousel configured with visible_slides {} > total_slides {}; \
                 navigation and drag resolution will pin to index 0",
                config.visible_slides,
                config.total_slides
            );
        }

        let drag_node = TrayDragNode::new(
            Rc::clone(&store),
            page_scroll,
            config.orientation,
            config.total_slides,
            config.visible_slides,
            config.touch_enabled,
        );
        let navigator = KeyboardNavigator::new(
            Rc::clone(&store),
            config.total_slides,
            config.visible_slides,
        );
        let spinner_gate = MasterSpinnerGate::new(config.has_master_spinner);
        let focus_id = focus.allocate_focus_id();

        Self {
            config,
            store,
            drag_node,
            navigator,
            spinner_gate,
            focus_id,
        }
    }

    /// Installs the master spinner notification hook.
    pub fn set_master_spinner_notification(&mut self, callback: Rc<dyn Fn()>) {
        self.spinner_gate.set_notification(callback);
    }

    /// Feeds one touch event through the drag tracker.
    ///
    /// `bounds` are the tray's live pixel dimensions at the time of the
    /// event. Returns whether the event was handled.
    pub fn handle_touch(&mut self, event: &TouchEvent, bounds: Size) -> bool {
        self.drag_node.on_touch_event(event, bounds)
    }

    /// Dispatches a key event, moving focus to the slider root when the
    /// navigator asks for it. Returns whether the event was consumed.
    pub fn handle_key(&mut self, event: &KeyEvent, focus: &mut FocusManager) -> bool {
        let outcome = self.navigator.on_key(event);
        if outcome.focus_requested {
            focus.request_focus(self.focus_id);
        }
        event.is_consumed()
    }

    /// Derives the tray styles from the store's current slide and the
    /// in-flight drag delta.
    pub fn tray_projection(&self) -> TrayProjection {
        project_tray(
            &self.config,
            self.store.state().current_slide,
            self.drag_node.drag_state(),
        )
    }

    /// Whether the master spinner child should be rendered. Fires the
    /// notification hook when it is.
    pub fn should_show_master_spinner(&self) -> bool {
        self.spinner_gate
            .evaluate(self.store.state().spinner_telemetry())
    }

    pub fn drag_state(&self) -> &DragState {
        self.drag_node.drag_state()
    }

    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    pub fn focus_id(&self) -> FocusId {
        self.focus_id
    }

    /// Tab index of the carousel root; unset defaults to 0.
    pub fn tab_index(&self) -> i32 {
        self.config.tab_index.unwrap_or(0)
    }
}
