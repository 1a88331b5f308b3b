//! # Session State
//!
//! The single source of truth for "what is currently shown".
//!
//! ```text
//! SessionState
//! └── current: Option<Item>     // exactly one slot, no history
//! ```
//!
//! The slot has exactly one writer (the renderer, once per received item)
//! and is read synchronously by the action dispatcher within the same turn
//! of the event loop, so there is no locking. Anyone introducing overlapping
//! requests must revisit that contract before adding a second writer.

use crate::core::item::Item;

/// The single-slot record of the currently displayed item.
///
/// Starts empty; `set` always overwrites. There is deliberately no way to
/// clear it — reaching the end of the feed leaves the last item addressable
/// for a residual open action.
#[derive(Debug, Default)]
pub struct SessionState {
    current: Option<Item>,
}

impl SessionState {
    pub fn new() -> Self {
        Self { current: None }
    }

    /// Unconditional overwrite. Always succeeds.
    pub fn set(&mut self, item: Item) {
        self.current = Some(item);
    }

    /// Current item, or `None` before the first render.
    pub fn get(&self) -> Option<&Item> {
        self.current.as_ref()
    }
}

/// Where the controller is in the request/render cycle.
///
/// `Pending` covers the gap between an outbound `init`/`next` and the
/// host's answer. A host that never answers leaves us here forever; the
/// protocol has no timeout and no correlation IDs, and this type does not
/// pretend otherwise.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Empty,
    Pending,
    Showing,
    /// End of feed. Terminal: further `next` requests are dropped.
    Done,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_item;

    #[test]
    fn test_starts_empty() {
        let state = SessionState::new();
        assert!(state.get().is_none());
    }

    #[test]
    fn test_set_overwrites() {
        let mut state = SessionState::new();
        state.set(test_item("Post A", "http://x/a", "<p>A</p>"));
        state.set(test_item("Post B", "http://x/b", "<p>B</p>"));
        assert_eq!(state.get().unwrap().title, "Post B");
    }
}
