//! Keyboard focus with per-frame change detection.
//!
//! `begin_frame` snapshots the focused id, so `focus_changed` answers "did
//! focus move since this frame started" no matter how many `set_focus`
//! calls happened in between. That is enough to restart a cursor blink or
//! scroll a newly focused field into view without extra bookkeeping.

/// Focused element id plus its value at the start of the current frame.
/// `0` means nothing is focused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FocusTracker {
    focused_id: u32,
    prev_focused_id: u32,
}

impl FocusTracker {
    pub const fn new() -> Self {
        Self {
            focused_id: 0,
            prev_focused_id: 0,
        }
    }

    /// Call once per frame before any focus query or change.
    #[inline]
    pub fn begin_frame(&mut self) {
        self.prev_focused_id = self.focused_id;
    }

    #[inline]
    pub fn set_focus(&mut self, id: u32) {
        self.focused_id = id;
    }

    #[inline]
    pub fn clear_focus(&mut self) {
        self.set_focus(0);
    }

    #[inline]
    pub fn has_focus(&self, id: u32) -> bool {
        id != 0 && id == self.focused_id
    }

    #[inline]
    pub fn focus_changed(&self) -> bool {
        self.focused_id != self.prev_focused_id
    }

    #[inline]
    pub fn focused(&self) -> u32 {
        self.focused_id
    }

    #[inline]
    pub fn prev_focused(&self) -> u32 {
        self.prev_focused_id
    }

    /// Moves focus to the element after the focused one in `order`,
    /// wrapping around. With nothing focused, or a focused id missing from
    /// `order`, the first element gets focus.
    pub fn focus_next(&mut self, order: &[u32]) {
        let current = order.iter().position(|&id| id != 0 && id == self.focused_id);
        let candidates = order.len();
        let start = current.map_or(0, |i| i + 1);
        if let Some(id) = (0..candidates)
            .map(|step| order[(start + step) % candidates])
            .find(|&id| id != 0)
        {
            self.focused_id = id;
        }
    }

    /// Mirror of [`focus_next`](Self::focus_next): wraps to the last element.
    pub fn focus_prev(&mut self, order: &[u32]) {
        let current = order.iter().position(|&id| id != 0 && id == self.focused_id);
        let candidates = order.len();
        let start = current.unwrap_or(0) + candidates;
        if let Some(id) = (1..=candidates)
            .map(|step| order[(start - step) % candidates])
            .find(|&id| id != 0)
        {
            self.focused_id = id;
        }
    }
}
