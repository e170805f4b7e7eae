//! Page scroll suppression capability.
//!
//! While a drag gesture is in flight the surrounding page must not scroll.
//! The host environment exposes its scroll-overflow setting through this
//! trait; the drag tracker saves the prior value once per gesture and
//! restores it when the gesture ends.

/// Host capability for reading and writing the page's scroll-overflow
/// setting.
pub trait PageScroll {
    /// Returns the current overflow value.
    fn overflow(&self) -> String;

    /// Replaces the overflow value.
    fn set_overflow(&self, value: &str);
}

/// Overflow value written while a gesture is active.
pub const OVERFLOW_HIDDEN: &str = "hidden";

/// No-op implementation for embeddings without a scrollable page.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopPageScroll;

impl PageScroll for NoopPageScroll {
    fn overflow(&self) -> String {
        String::new()
    }

    fn set_overflow(&self, _value: &str) {}
}
