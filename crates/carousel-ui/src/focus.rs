//! Minimal focus management.
//!
//! Keyboard navigation moves focus to the carousel root on every handled
//! arrow key. This manager tracks the single active focus target; it is a
//! much reduced cousin of a full focus-traversal system, which the engine
//! does not need.

/// Unique identifier for focusable elements.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FocusId(usize);

impl FocusId {
    pub fn as_usize(self) -> usize {
        self.0
    }
}

/// Tracks the currently focused element.
#[derive(Debug)]
pub struct FocusManager {
    active: Option<FocusId>,
    next_id: usize,
}

impl Default for FocusManager {
    fn default() -> Self {
        Self::new()
    }
}

impl FocusManager {
    pub fn new() -> Self {
        Self {
            active: None,
            next_id: 1,
        }
    }

    /// Allocates a new unique focus ID.
    pub fn allocate_focus_id(&mut self) -> FocusId {
        let id = FocusId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Moves focus to the given element.
    pub fn request_focus(&mut self, id: FocusId) {
        self.active = Some(id);
    }

    /// Clears focus entirely.
    pub fn clear_focus(&mut self) {
        self.active = None;
    }

    /// Returns the currently focused element, if any.
    pub fn active_focus_id(&self) -> Option<FocusId> {
        self.active
    }

    /// Whether the given element currently holds focus.
    pub fn is_focused(&self, id: FocusId) -> bool {
        self.active == Some(id)
    }
}
