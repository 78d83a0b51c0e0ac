use thiserror::Error;

/// Why a text edit was refused. Every refusal leaves the input untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    /// Codepoints below 0x20 and DEL; newline and tab included, the field is single-line.
    #[error("control character {0:#04x} rejected")]
    ControlCharacter(u32),
    /// Codepoints that do not fit in one printable ASCII byte.
    #[error("codepoint U+{0:04X} is not printable ASCII")]
    NonAscii(u32),
    /// One byte of the buffer is always kept free for a terminator.
    #[error("input buffer full ({len} of {cap} bytes, one reserved)")]
    CapacityExceeded { len: usize, cap: usize },
    #[error("input is read-only")]
    ReadOnly,
    #[error("input is disabled")]
    Disabled,
}
