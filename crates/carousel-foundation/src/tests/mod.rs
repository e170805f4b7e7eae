mod navigation_tests;

use std::cell::RefCell;
use std::rc::Rc;

use carousel_core::{CarouselStore, StateUpdate, StoreState, SubscriptionId};

use crate::page_scroll::PageScroll;

/// Store double that records every write it receives.
pub(crate) struct RecordingStore {
    state: RefCell<StoreState>,
    writes: RefCell<Vec<StateUpdate>>,
}

impl RecordingStore {
    pub(crate) fn with_current_slide(current_slide: usize) -> Rc<Self> {
        Rc::new(Self {
            state: RefCell::new(StoreState {
                current_slide,
                ..StoreState::default()
            }),
            writes: RefCell::new(Vec::new()),
        })
    }

    pub(crate) fn write_count(&self) -> usize {
        self.writes.borrow().len()
    }

    pub(crate) fn last_write(&self) -> Option<StateUpdate> {
        self.writes.borrow().last().cloned()
    }
}

impl CarouselStore for RecordingStore {
    fn state(&self) -> StoreState {
        self.state.borrow().clone()
    }

    fn set_state(&self, update: StateUpdate) {
        update.apply_to(&mut self.state.borrow_mut());
        self.writes.borrow_mut().push(update);
    }

    fn subscribe(&self, _callback: Rc<dyn Fn()>) -> SubscriptionId {
        0
    }

    fn unsubscribe(&self, _id: SubscriptionId) {}
}

/// Page scroll double that records every overflow value written to it.
pub(crate) struct RecordingPageScroll {
    overflow: RefCell<String>,
    history: RefCell<Vec<String>>,
}

impl RecordingPageScroll {
    pub(crate) fn with_overflow(initial: &str) -> Rc<Self> {
        Rc::new(Self {
            overflow: RefCell::new(initial.to_owned()),
            history: RefCell::new(Vec::new()),
        })
    }

    pub(crate) fn current(&self) -> String {
        self.overflow.borrow().clone()
    }

    pub(crate) fn history(&self) -> Vec<String> {
        self.history.borrow().clone()
    }
}

impl PageScroll for RecordingPageScroll {
    fn overflow(&self) -> String {
        self.overflow.borrow().clone()
    }

    fn set_overflow(&self, value: &str) {
        *self.overflow.borrow_mut() = value.to_owned();
        self.history.borrow_mut().push(value.to_owned());
    }
}
