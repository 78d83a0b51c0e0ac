use crate::color::Color;

/// Size variant shared by every component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Size {
    Xs,
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
}

/// Which palette entry a component is tinted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum ColorScheme {
    #[default]
    Primary,
    Secondary,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpacingScale {
    pub xs: u16,
    pub sm: u16,
    pub md: u16,
    pub lg: u16,
    pub xl: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RadiusScale {
    pub sm: u16,
    pub md: u16,
    pub lg: u16,
    /// Large enough to turn any box into a pill.
    pub full: u16,
}

/// Font ids are assigned by whoever loads fonts; the theme only records
/// which id plays which role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FontIds {
    pub body: u16,
    pub heading: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FontSizeScale {
    pub xs: u16,
    pub sm: u16,
    pub md: u16,
    pub lg: u16,
    pub xl: u16,
}

/// Palette and scales every component reads its styling from. The kit only
/// borrows a theme; swap it by handing a different one to the context.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Theme {
    pub primary: Color,
    pub secondary: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,

    pub bg: Color,
    pub fg: Color,
    pub border: Color,
    pub muted: Color,

    pub spacing: SpacingScale,
    pub radius: RadiusScale,
    pub font_id: FontIds,
    pub font_size: FontSizeScale,
}

const SPACING: SpacingScale = SpacingScale {
    xs: 4,
    sm: 8,
    md: 16,
    lg: 24,
    xl: 32,
};

const RADIUS: RadiusScale = RadiusScale {
    sm: 4,
    md: 8,
    lg: 12,
    full: 9999,
};

const FONT_SIZE: FontSizeScale = FontSizeScale {
    xs: 12,
    sm: 14,
    md: 16,
    lg: 18,
    xl: 24,
};

impl Theme {
    pub const LIGHT: Theme = Theme {
        primary: Color::u_rgb(66, 133, 244),
        secondary: Color::u_rgb(156, 163, 175),
        success: Color::u_rgb(34, 197, 94),
        warning: Color::u_rgb(251, 191, 36),
        error: Color::u_rgb(239, 68, 68),

        bg: Color::u_rgb(255, 255, 255),
        fg: Color::u_rgb(17, 24, 39),
        border: Color::u_rgb(229, 231, 235),
        muted: Color::u_rgb(107, 114, 128),

        spacing: SPACING,
        radius: RADIUS,
        font_id: FontIds { body: 0, heading: 0 },
        font_size: FONT_SIZE,
    };

    pub const DARK: Theme = Theme {
        primary: Color::u_rgb(96, 165, 250),
        secondary: Color::u_rgb(156, 163, 175),
        success: Color::u_rgb(74, 222, 128),
        warning: Color::u_rgb(251, 191, 36),
        error: Color::u_rgb(248, 113, 113),

        bg: Color::u_rgb(17, 24, 39),
        fg: Color::u_rgb(249, 250, 251),
        border: Color::u_rgb(55, 65, 81),
        muted: Color::u_rgb(156, 163, 175),

        spacing: SPACING,
        radius: RADIUS,
        font_id: FontIds { body: 0, heading: 0 },
        font_size: FONT_SIZE,
    };

    pub fn scheme_color(&self, scheme: ColorScheme) -> Color {
        match scheme {
            ColorScheme::Primary => self.primary,
            ColorScheme::Secondary => self.secondary,
            ColorScheme::Success => self.success,
            ColorScheme::Warning => self.warning,
            ColorScheme::Error => self.error,
        }
    }

    pub fn spacing(&self, size: Size) -> u16 {
        match size {
            Size::Xs => self.spacing.xs,
            Size::Sm => self.spacing.sm,
            Size::Md => self.spacing.md,
            Size::Lg => self.spacing.lg,
            Size::Xl => self.spacing.xl,
        }
    }

    pub fn font_size(&self, size: Size) -> u16 {
        match size {
            Size::Xs => self.font_size.xs,
            Size::Sm => self.font_size.sm,
            Size::Md => self.font_size.md,
            Size::Lg => self.font_size.lg,
            Size::Xl => self.font_size.xl,
        }
    }

    /// The radius scale has three steps, so the extreme sizes share them.
    pub fn radius(&self, size: Size) -> u16 {
        match size {
            Size::Xs | Size::Sm => self.radius.sm,
            Size::Md => self.radius.md,
            Size::Lg | Size::Xl => self.radius.lg,
        }
    }

    /// Sets the primary color.
    #[inline]
    pub fn primary(&mut self, color: impl Into<Color>) -> &mut Self {
        self.primary = color.into();
        self
    }

    /// Sets the background color.
    #[inline]
    pub fn bg(&mut self, color: impl Into<Color>) -> &mut Self {
        self.bg = color.into();
        self
    }

    /// Sets the foreground (text) color.
    #[inline]
    pub fn fg(&mut self, color: impl Into<Color>) -> &mut Self {
        self.fg = color.into();
        self
    }

    /// Sets the font ids for body and heading text.
    #[inline]
    pub fn fonts(&mut self, body: u16, heading: u16) -> &mut Self {
        self.font_id = FontIds { body, heading };
        self
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::LIGHT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_colors() {
        let t = Theme::LIGHT;
        assert_eq!(t.scheme_color(ColorScheme::Primary), t.primary);
        assert_eq!(t.scheme_color(ColorScheme::Secondary), t.secondary);
        assert_eq!(t.scheme_color(ColorScheme::Success), t.success);
        assert_eq!(t.scheme_color(ColorScheme::Warning), t.warning);
        assert_eq!(t.scheme_color(ColorScheme::Error), t.error);
        assert_eq!(t.scheme_color(ColorScheme::default()), t.primary);
    }

    #[test]
    fn test_spacing_and_font_sizes() {
        let t = Theme::LIGHT;
        let sizes = [Size::Xs, Size::Sm, Size::Md, Size::Lg, Size::Xl];
        let spacing: Vec<u16> = sizes.iter().map(|&s| t.spacing(s)).collect();
        assert_eq!(spacing, [4, 8, 16, 24, 32]);
        let fonts: Vec<u16> = sizes.iter().map(|&s| t.font_size(s)).collect();
        assert_eq!(fonts, [12, 14, 16, 18, 24]);
        assert_eq!(t.spacing(Size::default()), t.spacing.md);
    }

    #[test]
    fn test_radius_folds_extremes() {
        let t = Theme::LIGHT;
        assert_eq!(t.radius(Size::Xs), t.radius.sm);
        assert_eq!(t.radius(Size::Sm), t.radius.sm);
        assert_eq!(t.radius(Size::Md), t.radius.md);
        assert_eq!(t.radius(Size::Lg), t.radius.lg);
        assert_eq!(t.radius(Size::Xl), t.radius.lg);
    }

    #[test]
    fn test_presets() {
        let light = Theme::LIGHT;
        assert_eq!(light.bg, Color::u_rgb(255, 255, 255));
        assert_eq!(light.spacing.md, 16);
        assert_eq!(light.radius.md, 8);
        assert_eq!(light.font_size.md, 16);

        let dark = Theme::DARK;
        assert_eq!(dark.bg, Color::u_rgb(17, 24, 39));
        assert_eq!(dark.spacing, light.spacing);
        assert_ne!(dark.primary, light.primary);
    }

    #[test]
    fn test_builder_setters() {
        let mut t = Theme::DARK;
        t.primary(0xFF0000u32).fonts(1, 2);
        assert_eq!(t.primary, Color::u_rgb(255, 0, 0));
        assert_eq!(t.font_id, FontIds { body: 1, heading: 2 });
        assert_eq!(t.bg, Theme::DARK.bg);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_theme_from_json() {
        let json = serde_json::to_string(&Theme::DARK).unwrap();
        let loaded: Theme = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, Theme::DARK);
    }
}
