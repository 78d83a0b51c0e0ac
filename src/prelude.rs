//! The kit prelude: one import for the types most programs need.
//!
//! ```rust
//! use ply_kit::prelude::*;
//! ```

// Core types
pub use crate::Context;
pub use crate::id::Id;
pub use crate::registry::{IndexedRegistry, State, StateRegistry, StateStore};
pub use crate::focus::FocusTracker;

// Text editing
pub use crate::text_input::{InputFlags, InputState, Key, Modifiers};
pub use crate::text::{cursor_from_x, Dimensions, MonospaceMeasure, TextMeasure};
pub use crate::errors::InputError;

// Styling
pub use crate::color::Color;
pub use crate::theme::{ColorScheme, Size, Theme};

#[cfg(feature = "macroquad")]
pub use crate::text::MacroquadMeasure;
