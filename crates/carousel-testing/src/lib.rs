//! Headless harness that wraps a [`Slider`] to enable black-box robot
//! style tests against the full engine.
//!
//! The robot exposes touch interactions (down, move, up, cancel), key
//! presses, and snapshotting of the tray projection, the store, and the
//! page-scroll state, so tests can assert on observable behavior without
//! any rendering backend.

use std::cell::RefCell;
use std::rc::Rc;

use carousel_core::{
    CarouselStore, Point, Size, SliderConfig, SliderStateStore, StoreState,
};
use carousel_foundation::{KeyCode, KeyEvent, PageScroll, TouchEvent};
use carousel_ui::{FocusManager, Slider, TrayProjection};

/// Page scroll fake that records every overflow value written to it.
pub struct FakePageScroll {
    overflow: RefCell<String>,
    history: RefCell<Vec<String>>,
}

impl FakePageScroll {
    pub fn new(initial: &str) -> Rc<Self> {
        Rc::new(Self {
            overflow: RefCell::new(initial.to_owned()),
            history: RefCell::new(Vec::new()),
        })
    }

    /// The overflow value as the page currently sees it.
    pub fn current(&self) -> String {
        self.overflow.borrow().clone()
    }

    /// Every value written since construction, in order.
    pub fn history(&self) -> Vec<String> {
        self.history.borrow().clone()
    }
}

impl PageScroll for FakePageScroll {
    fn overflow(&self) -> String {
        self.overflow.borrow().clone()
    }

    fn set_overflow(&self, value: &str) {
        *self.overflow.borrow_mut() = value.to_owned();
        self.history.borrow_mut().push(value.to_owned());
    }
}

/// Robot-controlled slider for end-to-end tests.
pub struct SliderRobot {
    slider: Slider,
    store: SliderStateStore,
    focus: FocusManager,
    page_scroll: Rc<FakePageScroll>,
    bounds: Size,
    store_writes: Rc<RefCell<usize>>,
}

impl SliderRobot {
    /// Launches a slider with the given configuration and fixed tray
    /// bounds, backed by a fresh store and a fake page.
    pub fn launch(config: SliderConfig, bounds: Size) -> Self {
        Self::launch_with_store(config, bounds, SliderStateStore::default())
    }

    /// Launches a slider sharing an existing store, for tests that model
    /// concurrent writers such as autoplay.
    pub fn launch_with_store(config: SliderConfig, bounds: Size, store: SliderStateStore) -> Self {
        let page_scroll = FakePageScroll::new("auto");
        let mut focus = FocusManager::new();

        let store_writes = Rc::new(RefCell::new(0));
        let writes = Rc::clone(&store_writes);
        store.subscribe(Rc::new(move || {
            *writes.borrow_mut() += 1;
        }));

        let slider = Slider::new(
            config,
            Rc::new(store.clone()),
            Rc::clone(&page_scroll) as Rc<dyn PageScroll>,
            &mut focus,
        );

        Self {
            slider,
            store,
            focus,
            page_scroll,
            bounds,
            store_writes,
        }
    }

    /// Touches down at the given tray-local coordinates.
    pub fn touch_down(&mut self, x: f32, y: f32) -> bool {
        self.slider
            .handle_touch(&TouchEvent::start(Point::new(x, y)), self.bounds)
    }

    /// Moves the active contact.
    pub fn touch_move(&mut self, x: f32, y: f32) -> bool {
        self.slider
            .handle_touch(&TouchEvent::move_to(Point::new(x, y)), self.bounds)
    }

    /// Lifts the last contact, ending the gesture.
    pub fn touch_up(&mut self) -> bool {
        self.slider.handle_touch(&TouchEvent::end(), self.bounds)
    }

    /// Lifts one contact while others remain on the surface.
    pub fn touch_up_partial(&mut self, remaining: impl IntoIterator<Item = Point>) -> bool {
        self.slider
            .handle_touch(&TouchEvent::end_with_remaining(remaining), self.bounds)
    }

    /// Cancels the in-flight gesture.
    pub fn touch_cancel(&mut self) -> bool {
        self.slider.handle_touch(&TouchEvent::cancel(), self.bounds)
    }

    /// Convenience helper for a full down-move-up swipe.
    pub fn swipe(&mut self, from: Point, to: Point) {
        self.touch_down(from.x, from.y);
        self.touch_move(to.x, to.y);
        self.touch_up();
    }

    /// Presses a key. Returns whether the event was consumed.
    pub fn press_key(&mut self, code: KeyCode) -> bool {
        let event = KeyEvent::key_down(code);
        self.slider.handle_key(&event, &mut self.focus)
    }

    /// The store's current slide index.
    pub fn current_slide(&self) -> usize {
        self.store.state().current_slide
    }

    /// Snapshot of the full store state.
    pub fn store_state(&self) -> StoreState {
        self.store.state()
    }

    /// Number of store writes observed since launch.
    pub fn store_write_count(&self) -> usize {
        *self.store_writes.borrow()
    }

    /// The tray projection for the current state.
    pub fn tray_projection(&self) -> TrayProjection {
        self.slider.tray_projection()
    }

    /// Whether the slider root currently holds focus.
    pub fn slider_has_focus(&self) -> bool {
        self.focus.is_focused(self.slider.focus_id())
    }

    /// The page's current overflow value.
    pub fn page_overflow(&self) -> String {
        self.page_scroll.current()
    }

    /// Every overflow value written to the page, in order.
    pub fn page_overflow_history(&self) -> Vec<String> {
        self.page_scroll.history()
    }

    /// Direct handle onto the shared store, for sibling writers.
    pub fn store(&self) -> SliderStateStore {
        self.store.clone()
    }

    /// Mutable access to the slider under test.
    pub fn slider_mut(&mut self) -> &mut Slider {
        &mut self.slider
    }

    pub fn slider(&self) -> &Slider {
        &self.slider
    }
}
