//! Zero-allocation component state for immediate-mode UIs.
//!
//! Each frame the application lays out and paints its widgets with whatever
//! layout engine it uses, and asks this crate for the bits of state that
//! must outlive a frame:
//!
//! - [`registry`]: per-element records (flags + a float) in a caller-owned slice
//! - [`focus`]: the focused element and whether it changed this frame
//! - [`text_input`]: single-line editing over a caller-owned byte buffer
//! - [`theme`]: palette and size scales components style themselves with
//!
//! ```
//! use ply_kit::prelude::*;
//!
//! let theme = Theme::LIGHT;
//! let mut slots = [State::default(); 64];
//! let mut ctx = Context::new(&theme, &mut slots);
//!
//! let mut buf = [0u8; 32];
//! let mut field = InputState::new(&mut buf);
//! let field_id = Id::new("Name");
//!
//! // one frame
//! ctx.begin_frame();
//! ctx.set_focus(field_id.0);
//! if ctx.has_focus(field_id.0) {
//!     field.handle_char('H' as u32);
//!     field.handle_char('i' as u32);
//! }
//! assert!(ctx.focus_changed());
//! assert_eq!(field.as_str(), Some("Hi"));
//!
//! let slider = ctx.get_or_create_state(Id::new("Volume").0).unwrap();
//! slider.value = 0.75;
//! ```

pub mod color;
pub mod errors;
pub mod focus;
pub mod id;
pub mod prelude;
pub mod registry;
pub mod text;
pub mod text_input;
pub mod theme;

pub use color::Color;
pub use errors::InputError;
pub use focus::FocusTracker;
pub use id::Id;
pub use registry::{IndexedRegistry, State, StateRegistry, StateStore};
pub use text::{cursor_from_x, Dimensions, MonospaceMeasure, TextMeasure};
pub use text_input::{InputFlags, InputState, Key, Modifiers};
pub use theme::{ColorScheme, Size, Theme};

#[cfg(feature = "macroquad")]
pub use text::MacroquadMeasure;

/// Cursor blink period in seconds: visible for the first half, hidden for the second.
pub const CURSOR_BLINK_PERIOD: f32 = 1.06;

/// Everything the kit keeps for one UI session. Owned by the application
/// and passed through its update loop; nothing here is global.
#[derive(Debug)]
pub struct Context<'a> {
    theme: &'a Theme,
    states: StateRegistry<'a>,
    focus: FocusTracker,
    /// Seconds since the last blink reset. Only the caller advances it.
    pub elapsed: f32,
}

impl<'a> Context<'a> {
    /// Binds `theme` and the state slice. Every record in `states` is zeroed.
    pub fn new(theme: &'a Theme, states: &'a mut [State]) -> Self {
        Self {
            theme,
            states: StateRegistry::new(states),
            focus: FocusTracker::new(),
            elapsed: 0.0,
        }
    }

    #[inline]
    pub fn theme(&self) -> &'a Theme {
        self.theme
    }

    /// Read access to the registry, for iteration and capacity checks.
    #[inline]
    pub fn states(&self) -> &StateRegistry<'a> {
        &self.states
    }

    #[inline]
    pub fn focus(&self) -> &FocusTracker {
        &self.focus
    }

    // ------------------------------------------------------------------
    // State
    // ------------------------------------------------------------------

    pub fn get_state(&self, id: u32) -> Option<&State> {
        self.states.get(id)
    }

    pub fn get_state_mut(&mut self, id: u32) -> Option<&mut State> {
        self.states.get_mut(id)
    }

    /// `None` once every slot is taken; the component should fall back to
    /// stateless behavior.
    pub fn get_or_create_state(&mut self, id: u32) -> Option<&mut State> {
        self.states.get_or_create(id)
    }

    // ------------------------------------------------------------------
    // Focus
    // ------------------------------------------------------------------

    /// Starts a frame. Call once, before any focus query.
    pub fn begin_frame(&mut self) {
        self.focus.begin_frame();
    }

    pub fn set_focus(&mut self, id: u32) {
        self.focus.set_focus(id);
    }

    pub fn clear_focus(&mut self) {
        self.focus.clear_focus();
    }

    pub fn has_focus(&self, id: u32) -> bool {
        self.focus.has_focus(id)
    }

    pub fn focus_changed(&self) -> bool {
        self.focus.focus_changed()
    }

    pub fn focused(&self) -> u32 {
        self.focus.focused()
    }

    /// Tab: next id in `order`, wrapping.
    pub fn focus_next(&mut self, order: &[u32]) {
        self.focus.focus_next(order);
    }

    /// Shift+Tab: previous id in `order`, wrapping.
    pub fn focus_prev(&mut self, order: &[u32]) {
        self.focus.focus_prev(order);
    }

    // ------------------------------------------------------------------
    // Time
    // ------------------------------------------------------------------

    #[inline]
    pub fn advance_time(&mut self, dt: f32) {
        self.elapsed += dt;
    }

    /// Makes the cursor visible right away, e.g. after a keystroke or a
    /// focus change.
    #[inline]
    pub fn reset_blink(&mut self) {
        self.elapsed = 0.0;
    }

    pub fn cursor_visible(&self) -> bool {
        self.elapsed.rem_euclid(CURSOR_BLINK_PERIOD) < CURSOR_BLINK_PERIOD * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_context() {
        let theme = Theme::LIGHT;
        let mut slots = [State {
            id: 7,
            flags: 7,
            value: 7.0,
        }; 16];
        let ctx = Context::new(&theme, &mut slots);
        assert_eq!(ctx.states().capacity(), 16);
        assert_eq!(ctx.states().len(), 0);
        assert_eq!(ctx.focused(), 0);
        assert_eq!(ctx.focus().prev_focused(), 0);
        assert_eq!(ctx.elapsed, 0.0);
        assert!(core::ptr::eq(ctx.theme(), &theme));
        drop(ctx);
        assert!(slots.iter().all(|s| *s == State::default()));
    }

    #[test]
    fn test_state_through_context() {
        let theme = Theme::DARK;
        let mut slots = [State::default(); 2];
        let mut ctx = Context::new(&theme, &mut slots);
        ctx.get_or_create_state(1).unwrap().value = 0.5;
        assert_eq!(ctx.get_state(1).unwrap().value, 0.5);
        ctx.get_state_mut(1).unwrap().flags = 3;
        assert_eq!(ctx.get_or_create_state(1).unwrap().flags, 3);
        assert!(ctx.get_or_create_state(2).is_some());
        assert!(ctx.get_or_create_state(3).is_none());
        assert_eq!(ctx.states().len(), 2);
    }

    #[test]
    fn test_focus_edges_across_frames() {
        let theme = Theme::LIGHT;
        let mut slots = [State::default(); 4];
        let mut ctx = Context::new(&theme, &mut slots);

        ctx.begin_frame();
        ctx.set_focus(42);
        assert!(ctx.focus_changed());
        assert!(ctx.has_focus(42));

        ctx.begin_frame();
        assert!(!ctx.focus_changed());

        ctx.focus_next(&[42, 43]);
        assert!(ctx.has_focus(43));
        ctx.focus_prev(&[42, 43]);
        assert!(ctx.has_focus(42));
        assert!(!ctx.focus_changed());

        ctx.clear_focus();
        assert!(ctx.focus_changed());
    }

    #[test]
    fn test_cursor_blink() {
        let theme = Theme::LIGHT;
        let mut slots = [State::default(); 1];
        let mut ctx = Context::new(&theme, &mut slots);
        assert!(ctx.cursor_visible());
        ctx.advance_time(0.6);
        assert!(!ctx.cursor_visible());
        ctx.advance_time(0.5);
        assert!(ctx.cursor_visible());
        ctx.advance_time(0.5);
        assert!(!ctx.cursor_visible());
        ctx.reset_blink();
        assert!(ctx.cursor_visible());
    }
}
