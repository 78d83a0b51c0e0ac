//! Single-line text editing over a caller-owned byte buffer.
//!
//! [`InputState`] borrows the buffer and tracks length, cursor and selection
//! anchor. Every operation is a single in-place transformation: it either
//! applies fully or leaves buffer and offsets byte-for-byte unchanged. The
//! engine never allocates and never writes past `cap - 1`, so the caller can
//! always append a terminator after `len`.
//!
//! Contents are bytes, not grapheme clusters: one inserted character is one
//! printable ASCII byte, and cursor motion steps one byte at a time.

use bitflags::bitflags;
use log::trace;

use crate::errors::InputError;
use crate::text::{cursor_from_x, TextMeasure};

bitflags! {
    /// Per-field flags. Bit values match the toolkit's C layout.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct InputFlags: u8 {
        const FOCUSED  = 1 << 0;
        /// Rendering hint only; the engine edits the real bytes.
        const PASSWORD = 1 << 1;
        /// Cursor moves, content does not change.
        const READONLY = 1 << 2;
        /// Nothing changes.
        const DISABLED = 1 << 3;
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u32 {
        const SHIFT = 1 << 0;
        const CTRL  = 1 << 1;
        /// Accepted, no effect on editing.
        const ALT   = 1 << 2;
    }
}

/// Editing keys. The caller maps platform key codes onto these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Key {
    Backspace = 1,
    Delete = 2,
    Left = 3,
    Right = 4,
    Home = 5,
    End = 6,
    /// Submitting is up to the caller; the engine ignores it.
    Enter = 7,
    /// Focus traversal is up to the caller; the engine ignores it.
    Tab = 8,
}

impl Key {
    /// Maps a numeric key code (`1..=8`) to a key. `0` and unknown codes
    /// are `None`.
    pub fn from_code(code: u32) -> Option<Key> {
        Some(match code {
            1 => Key::Backspace,
            2 => Key::Delete,
            3 => Key::Left,
            4 => Key::Right,
            5 => Key::Home,
            6 => Key::End,
            7 => Key::Enter,
            8 => Key::Tab,
            _ => return None,
        })
    }
}

/// Word motion treats every byte up to and including ASCII space as blank.
#[inline]
fn is_space(b: u8) -> bool {
    b <= 0x20
}

/// Start of the word left of `pos`: skips blanks, then the word before them.
pub fn find_word_boundary_left(text: &[u8], pos: usize) -> usize {
    let mut i = pos.min(text.len());
    while i > 0 && is_space(text[i - 1]) {
        i -= 1;
    }
    while i > 0 && !is_space(text[i - 1]) {
        i -= 1;
    }
    i
}

/// Start of the next word right of `pos`: skips the rest of the current
/// word, then the blanks after it.
pub fn find_word_boundary_right(text: &[u8], pos: usize) -> usize {
    let len = text.len();
    let mut i = pos.min(len);
    while i < len && !is_space(text[i]) {
        i += 1;
    }
    while i < len && is_space(text[i]) {
        i += 1;
    }
    i
}

/// Editing state of one text field over a borrowed buffer.
///
/// Invariants after every operation: `len <= cap - 1`,
/// `cursor <= len`, `select_start <= len`. There is no selection when
/// `select_start == cursor`.
#[derive(Debug)]
pub struct InputState<'a> {
    buf: &'a mut [u8],
    len: usize,
    cursor: usize,
    select_start: usize,
    pub flags: InputFlags,
}

impl<'a> InputState<'a> {
    /// Empty field over `buf`. `buf.len()` is the capacity, one byte of
    /// which stays reserved.
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self::from_parts(buf, 0, 0, 0)
    }

    /// Field whose first `len` bytes of `buf` are already content; the
    /// cursor sits at the end.
    pub fn with_len(buf: &'a mut [u8], len: usize) -> Self {
        Self::from_parts(buf, len, len, len)
    }

    /// Field with explicit offsets. Offsets outside the invariants are a
    /// caller bug: they trip a debug assertion and are clamped otherwise.
    pub fn from_parts(buf: &'a mut [u8], len: usize, cursor: usize, select_start: usize) -> Self {
        let mut state = Self {
            buf,
            len,
            cursor,
            select_start,
            flags: InputFlags::empty(),
        };
        state.debug_check();
        state.len = state.len.min(state.max_len());
        state.cursor = state.cursor.min(state.len);
        state.select_start = state.select_start.min(state.len);
        state
    }

    #[inline]
    fn debug_check(&self) {
        debug_assert!(
            self.len <= self.max_len(),
            "input len {} exceeds usable capacity {}",
            self.len,
            self.max_len()
        );
        debug_assert!(
            self.cursor <= self.len,
            "cursor {} past len {}",
            self.cursor,
            self.len
        );
        debug_assert!(
            self.select_start <= self.len,
            "selection anchor {} past len {}",
            self.select_start,
            self.len
        );
    }

    /// Total buffer size in bytes, terminator slot included.
    #[inline]
    pub fn cap(&self) -> usize {
        self.buf.len()
    }

    /// Most content bytes the field will hold.
    #[inline]
    pub fn max_len(&self) -> usize {
        self.buf.len().saturating_sub(1)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[inline]
    pub fn select_start(&self) -> usize {
        self.select_start
    }

    /// Current contents, `buf[..len]`.
    #[inline]
    pub fn text(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Contents as `&str` when they are valid UTF-8, which anything typed
    /// through [`handle_char`](Self::handle_char) is.
    pub fn as_str(&self) -> Option<&str> {
        core::str::from_utf8(self.text()).ok()
    }

    #[inline]
    pub fn has_selection(&self) -> bool {
        self.cursor != self.select_start
    }

    /// Ordered `(lo, hi)` of the selection, half-open.
    pub fn selection_range(&self) -> Option<(usize, usize)> {
        self.has_selection().then(|| {
            (
                self.cursor.min(self.select_start),
                self.cursor.max(self.select_start),
            )
        })
    }

    pub fn selected_text(&self) -> &[u8] {
        match self.selection_range() {
            Some((lo, hi)) => &self.buf[lo..hi],
            None => &[],
        }
    }

    /// Writes a 0 byte right after the contents. There is always room.
    pub fn terminate(&mut self) {
        if let Some(slot) = self.buf.get_mut(self.len) {
            *slot = 0;
        }
    }

    fn check_editable(&self) -> Result<(), InputError> {
        if self.flags.contains(InputFlags::DISABLED) {
            Err(InputError::Disabled)
        } else if self.flags.contains(InputFlags::READONLY) {
            Err(InputError::ReadOnly)
        } else {
            Ok(())
        }
    }

    #[inline]
    fn can_move(&self) -> bool {
        !self.flags.contains(InputFlags::DISABLED)
    }

    /// Removes `buf[lo..hi]` and collapses cursor and anchor onto `lo`.
    fn delete_range(&mut self, lo: usize, hi: usize) {
        self.buf.copy_within(hi..self.len, lo);
        self.len -= hi - lo;
        self.cursor = lo;
        self.select_start = lo;
    }

    /// Deletes the selected bytes. Returns false when there was nothing
    /// selected or the field does not accept edits.
    pub fn delete_selection(&mut self) -> bool {
        self.debug_check();
        if self.check_editable().is_err() {
            return false;
        }
        match self.selection_range() {
            Some((lo, hi)) => {
                self.delete_range(lo, hi);
                true
            }
            None => false,
        }
    }

    /// Inserts one printable ASCII character at the cursor, replacing the
    /// selection if there is one.
    pub fn try_insert_char(&mut self, codepoint: u32) -> Result<(), InputError> {
        self.debug_check();
        self.check_editable()?;
        if codepoint < 0x20 || codepoint == 0x7F {
            trace!("rejected control character {:#04x}", codepoint);
            return Err(InputError::ControlCharacter(codepoint));
        }
        if codepoint > 0x7E {
            trace!("rejected non-ASCII codepoint U+{:04X}", codepoint);
            return Err(InputError::NonAscii(codepoint));
        }

        // A non-empty selection frees at least one byte, so once it is gone
        // the capacity check below cannot fail.
        if let Some((lo, hi)) = self.selection_range() {
            self.delete_range(lo, hi);
        }
        if self.len + 1 > self.max_len() {
            trace!("input full at {} bytes", self.len);
            return Err(InputError::CapacityExceeded {
                len: self.len,
                cap: self.cap(),
            });
        }

        self.buf.copy_within(self.cursor..self.len, self.cursor + 1);
        self.buf[self.cursor] = codepoint as u8;
        self.len += 1;
        self.cursor += 1;
        self.select_start = self.cursor;
        Ok(())
    }

    /// [`try_insert_char`](Self::try_insert_char) without the reason.
    #[inline]
    pub fn handle_char(&mut self, codepoint: u32) -> bool {
        self.try_insert_char(codepoint).is_ok()
    }

    /// Applies an editing key. Returns true when content, cursor or
    /// selection changed.
    ///
    /// CTRL turns Left/Right into word jumps; on Backspace, Delete, Home and
    /// End it is ignored. SHIFT keeps the selection anchor while the cursor
    /// moves.
    pub fn handle_key(&mut self, key: Key, mods: Modifiers) -> bool {
        self.debug_check();
        let extend = mods.contains(Modifiers::SHIFT);
        let ctrl = mods.contains(Modifiers::CTRL);

        match key {
            Key::Backspace => {
                if self.check_editable().is_err() {
                    return false;
                }
                if let Some((lo, hi)) = self.selection_range() {
                    self.delete_range(lo, hi);
                    true
                } else if self.cursor > 0 {
                    self.delete_range(self.cursor - 1, self.cursor);
                    true
                } else {
                    false
                }
            }
            Key::Delete => {
                if self.check_editable().is_err() {
                    return false;
                }
                if let Some((lo, hi)) = self.selection_range() {
                    self.delete_range(lo, hi);
                    true
                } else if self.cursor < self.len {
                    self.delete_range(self.cursor, self.cursor + 1);
                    true
                } else {
                    false
                }
            }
            Key::Left => {
                let target = if ctrl {
                    find_word_boundary_left(self.text(), self.cursor)
                } else {
                    self.cursor.saturating_sub(1)
                };
                self.move_cursor_to(target, extend)
            }
            Key::Right => {
                let target = if ctrl {
                    find_word_boundary_right(self.text(), self.cursor)
                } else {
                    (self.cursor + 1).min(self.len)
                };
                self.move_cursor_to(target, extend)
            }
            Key::Home => self.move_cursor_to(0, extend),
            Key::End => self.move_cursor_to(self.len, extend),
            Key::Enter | Key::Tab => false,
        }
    }

    /// Moves the cursor to `offset`, clamped to the contents. With
    /// `extend` the anchor stays put and the selection grows or shrinks;
    /// otherwise the selection collapses onto the cursor.
    pub fn move_cursor_to(&mut self, offset: usize, extend: bool) -> bool {
        if !self.can_move() {
            return false;
        }
        let before = (self.cursor, self.select_start);
        self.cursor = offset.min(self.len);
        if !extend {
            self.select_start = self.cursor;
        }
        (self.cursor, self.select_start) != before
    }

    /// Places the cursor at `offset` with no selection.
    #[inline]
    pub fn set_cursor(&mut self, offset: usize) -> bool {
        self.move_cursor_to(offset, false)
    }

    /// Selects `anchor..cursor`, both clamped to the contents.
    pub fn set_selection(&mut self, anchor: usize, cursor: usize) -> bool {
        if !self.can_move() {
            return false;
        }
        let before = (self.cursor, self.select_start);
        self.select_start = anchor.min(self.len);
        self.cursor = cursor.min(self.len);
        (self.cursor, self.select_start) != before
    }

    pub fn select_all(&mut self) -> bool {
        self.set_selection(0, self.len)
    }

    /// Empties the field.
    pub fn clear(&mut self) -> bool {
        if self.check_editable().is_err() || self.len == 0 {
            return false;
        }
        self.delete_range(0, self.len);
        true
    }

    /// Replaces the contents with as much of `text` as fits and puts the
    /// cursor at the end. Returns the number of bytes copied. Bytes are
    /// copied verbatim; no character filtering happens here.
    pub fn set_text(&mut self, text: &[u8]) -> usize {
        if self.check_editable().is_err() {
            return 0;
        }
        let n = text.len().min(self.max_len());
        self.buf[..n].copy_from_slice(&text[..n]);
        self.len = n;
        self.cursor = n;
        self.select_start = n;
        n
    }

    /// Byte offset nearest to `x` pixels from the start of the rendered
    /// contents. Typically fed to [`move_cursor_to`](Self::move_cursor_to)
    /// after a click.
    pub fn cursor_from_x(
        &self,
        font_id: u16,
        font_size: u16,
        x: f32,
        measure: &impl TextMeasure,
    ) -> usize {
        cursor_from_x(self.text(), font_id, font_size, x, measure)
    }
}
