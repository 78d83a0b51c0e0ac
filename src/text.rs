//! Text measurement capability and click-to-offset mapping.
//!
//! The kit does not manage fonts. Whoever renders text provides a
//! [`TextMeasure`] and assigns font ids; the kit only measures prefixes of
//! input contents to place the cursor under a click.

#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Dimensions {
    pub width: f32,
    pub height: f32,
}

impl Dimensions {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl From<(f32, f32)> for Dimensions {
    fn from(value: (f32, f32)) -> Self {
        Self::new(value.0, value.1)
    }
}

/// Measures a run of bytes in a given font. Must be deterministic for fixed
/// inputs within a frame.
pub trait TextMeasure {
    fn measure(&self, text: &[u8], font_id: u16, font_size: u16) -> Dimensions;
}

impl<F> TextMeasure for F
where
    F: Fn(&[u8], u16, u16) -> Dimensions,
{
    #[inline]
    fn measure(&self, text: &[u8], font_id: u16, font_size: u16) -> Dimensions {
        self(text, font_id, font_size)
    }
}

/// Fixed advance per byte, as a multiple of the font size. Good enough for
/// monospace fonts and terminal cells (`advance = 1.0, font_size = 1`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMeasure {
    pub advance: f32,
    pub line_height: f32,
}

impl MonospaceMeasure {
    pub const fn new(advance: f32) -> Self {
        Self {
            advance,
            line_height: 1.0,
        }
    }
}

impl Default for MonospaceMeasure {
    fn default() -> Self {
        Self::new(0.6)
    }
}

impl TextMeasure for MonospaceMeasure {
    fn measure(&self, text: &[u8], _font_id: u16, font_size: u16) -> Dimensions {
        let size = font_size as f32;
        Dimensions::new(
            text.len() as f32 * size * self.advance,
            size * self.line_height,
        )
    }
}

/// Measures with macroquad's font rasterizer. `font_id` indexes `fonts`;
/// unknown ids fall back to macroquad's built-in font.
#[cfg(feature = "macroquad")]
pub struct MacroquadMeasure {
    fonts: Vec<macroquad::text::Font>,
    letter_spacing: f32,
}

#[cfg(feature = "macroquad")]
impl MacroquadMeasure {
    pub fn new(fonts: Vec<macroquad::text::Font>) -> Self {
        Self {
            fonts,
            letter_spacing: 0.0,
        }
    }

    pub fn letter_spacing(mut self, spacing: f32) -> Self {
        self.letter_spacing = spacing;
        self
    }
}

#[cfg(feature = "macroquad")]
impl TextMeasure for MacroquadMeasure {
    fn measure(&self, text: &[u8], font_id: u16, font_size: u16) -> Dimensions {
        let text = core::str::from_utf8(text).unwrap_or_default();
        let measured = macroquad::text::measure_text(
            text,
            self.fonts.get(font_id as usize),
            font_size,
            1.0,
        );
        let added_space = (text.len().max(1) - 1) as f32 * self.letter_spacing;
        Dimensions::new(measured.width + added_space, measured.height)
    }
}

/// Byte offset in `text` whose rendered boundary is closest to `x`, the
/// horizontal distance from the start of the rendered text.
///
/// Boundary `i` wins while `x` is left of the midpoint between boundaries
/// `i` and `i + 1`; ties go to the lower offset. The result is clamped to
/// `[0, text.len()]` and never decreases as `x` grows. Measures at most
/// `text.len()` prefixes and allocates nothing.
pub fn cursor_from_x(
    text: &[u8],
    font_id: u16,
    font_size: u16,
    x: f32,
    measure: &impl TextMeasure,
) -> usize {
    if x <= 0.0 {
        return 0;
    }
    let mut prev_width = 0.0;
    for end in 1..=text.len() {
        let width = measure.measure(&text[..end], font_id, font_size).width;
        if x <= (prev_width + width) * 0.5 {
            return end - 1;
        }
        prev_width = width;
    }
    text.len()
}
