//! Shared position store.
//!
//! The authoritative current-slide index does not live in any single
//! component; it lives in an externally owned store that several writers
//! (drag gestures, keyboard navigation, buttons, autoplay timers) mutate
//! through partial updates. The engine only ever issues [`StateUpdate`]s
//! and never reads back its own write synchronously; updates are assumed
//! visible to the next render pass. With multiple writers the last write
//! wins, and that race is an accepted property of the design, not a bug.

use std::cell::RefCell;
use std::rc::Rc;

/// Identifier returned by [`CarouselStore::subscribe`].
pub type SubscriptionId = u64;

/// Counters reported by the slide-image loading collaborator.
///
/// Used only to decide whether the master spinner should be shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SpinnerTelemetry {
    pub error_count: usize,
    pub success_count: usize,
    pub subscription_count: usize,
}

/// Full state held by the store.
///
/// `current_slide` is the leading visible slide. The remaining fields are
/// sibling state owned by other collaborators; the engine carries them
/// untouched through partial updates.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StoreState {
    pub current_slide: usize,
    pub is_playing: bool,
    pub master_spinner_error_count: usize,
    pub master_spinner_success_count: usize,
    pub master_spinner_subscription_count: usize,
}

impl StoreState {
    pub fn spinner_telemetry(&self) -> SpinnerTelemetry {
        SpinnerTelemetry {
            error_count: self.master_spinner_error_count,
            success_count: self.master_spinner_success_count,
            subscription_count: self.master_spinner_subscription_count,
        }
    }
}

/// Partial update merged into [`StoreState`].
///
/// `None` fields are left untouched (shallow-merge semantics).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StateUpdate {
    pub current_slide: Option<usize>,
    pub is_playing: Option<bool>,
    pub master_spinner_error_count: Option<usize>,
    pub master_spinner_success_count: Option<usize>,
    pub master_spinner_subscription_count: Option<usize>,
}

impl StateUpdate {
    /// Update carrying only a new current-slide index.
    pub fn with_current_slide(current_slide: usize) -> Self {
        Self {
            current_slide: Some(current_slide),
            ..Self::default()
        }
    }

    /// Merges this update into `state`, leaving unset fields alone.
    pub fn apply_to(&self, state: &mut StoreState) {
        if let Some(current_slide) = self.current_slide {
            state.current_slide = current_slide;
        }
        if let Some(is_playing) = self.is_playing {
            state.is_playing = is_playing;
        }
        if let Some(count) = self.master_spinner_error_count {
            state.master_spinner_error_count = count;
        }
        if let Some(count) = self.master_spinner_success_count {
            state.master_spinner_success_count = count;
        }
        if let Some(count) = self.master_spinner_subscription_count {
            state.master_spinner_subscription_count = count;
        }
    }
}

/// Interface through which the engine reads and mutates shared position
/// state.
///
/// The store is trusted infrastructure: writes are not verified or retried,
/// and no locking is performed against concurrent writers.
pub trait CarouselStore {
    /// Returns a snapshot of the current state.
    fn state(&self) -> StoreState;

    /// Merges a partial update into the state and notifies subscribers.
    fn set_state(&self, update: StateUpdate);

    /// Registers a callback invoked after every `set_state`.
    fn subscribe(&self, callback: Rc<dyn Fn()>) -> SubscriptionId;

    /// Removes a previously registered callback.
    fn unsubscribe(&self, id: SubscriptionId);
}

struct StoreInner {
    state: StoreState,
    subscribers: Vec<(SubscriptionId, Rc<dyn Fn()>)>,
    next_subscription_id: SubscriptionId,
}

/// Default store implementation.
///
/// Cloning yields another handle onto the same underlying state, so the
/// store can be handed to the slider, autoplay timers, and buttons alike.
#[derive(Clone)]
pub struct SliderStateStore {
    inner: Rc<RefCell<StoreInner>>,
}

impl SliderStateStore {
    pub fn new(initial: StoreState) -> Self {
        Self {
            inner: Rc::new(RefCell::new(StoreInner {
                state: initial,
                subscribers: Vec::new(),
                next_subscription_id: 1,
            })),
        }
    }

    /// Records one slide image registering with the master spinner.
    pub fn record_master_spinner_subscription(&self) {
        let count = self.state().master_spinner_subscription_count + 1;
        self.set_state(StateUpdate {
            master_spinner_subscription_count: Some(count),
            ..StateUpdate::default()
        });
    }

    /// Records one slide image finishing its load successfully.
    pub fn record_master_spinner_success(&self) {
        let count = self.state().master_spinner_success_count + 1;
        self.set_state(StateUpdate {
            master_spinner_success_count: Some(count),
            ..StateUpdate::default()
        });
    }

    /// Records one slide image failing its load.
    pub fn record_master_spinner_error(&self) {
        let count = self.state().master_spinner_error_count + 1;
        self.set_state(StateUpdate {
            master_spinner_error_count: Some(count),
            ..StateUpdate::default()
        });
    }
}

impl Default for SliderStateStore {
    fn default() -> Self {
        Self::new(StoreState::default())
    }
}

impl CarouselStore for SliderStateStore {
    fn state(&self) -> StoreState {
        self.inner.borrow().state.clone()
    }

    fn set_state(&self, update: StateUpdate) {
        update.apply_to(&mut self.inner.borrow_mut().state);

        // Clone callbacks out before invoking them so no borrow is held if
        // a subscriber issues another set_state.
        let callbacks: Vec<Rc<dyn Fn()>> = self
            .inner
            .borrow()
            .subscribers
            .iter()
            .map(|(_, cb)| Rc::clone(cb))
            .collect();
        for callback in callbacks {
            callback();
        }
    }

    fn subscribe(&self, callback: Rc<dyn Fn()>) -> SubscriptionId {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_subscription_id;
        inner.next_subscription_id += 1;
        inner.subscribers.push((id, callback));
        id
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        self.inner
            .borrow_mut()
            .subscribers
            .retain(|(sub_id, _)| *sub_id != id);
    }
}
