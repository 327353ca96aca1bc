//! Theme support module for the Qawaid lesson viewer
//!
//! Maps the user's display preferences onto a concrete colour palette. Four
//! user-selectable variants exist (Green, Teal, Crimson Night, Sunset Crimson),
//! each with a light and dark form, plus fixed palettes owned by the particle,
//! noun and verb sections which ignore the user's choice.
//!
//! # Examples
//!
//! ```
//! use qawaid::theme::{resolve, with_opacity, ThemeVariant};
//!
//! let palette = resolve(ThemeVariant::Teal, false);
//! let overlay = with_opacity(palette.primary, 0.25);
//! assert_eq!(overlay.a, 64);
//! ```

use egui::Color32;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An sRGB colour with straight (non-premultiplied) alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Builds an opaque colour from a `0xRRGGBB` literal.
    pub const fn hex(rgb: u32) -> Self {
        Self::rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    /// Formats as `#rrggbb`, or `#rrggbbaa` when not fully opaque.
    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }

    /// Converts to egui's premultiplied representation.
    pub fn to_color32(self) -> Color32 {
        Color32::from_rgba_unmultiplied(self.r, self.g, self.b, self.a)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Returns `color` with its alpha scaled by `alpha` (clamped to `0.0..=1.0`).
///
/// The RGB channels are kept, so `alpha = 0.0` yields a fully transparent
/// colour of the same hue and `alpha = 1.0` returns `color` unchanged.
pub fn with_opacity(color: Color, alpha: f32) -> Color {
    let alpha = if alpha.is_nan() { 1.0 } else { alpha.clamp(0.0, 1.0) };
    let a = (f32::from(color.a) * alpha).round() as u8;
    Color { a, ..color }
}

/// Fully resolved set of colours for one `(variant, dark mode)` combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
    pub background: Color,
    pub surface: Color,
    pub card: Color,
    pub border: Color,
    pub text: Color,
    pub text_secondary: Color,
    pub shadow: Color,
}

impl Palette {
    /// Every colour slot paired with its name, in declaration order.
    pub fn entries(&self) -> [(&'static str, Color); 10] {
        [
            ("primary", self.primary),
            ("secondary", self.secondary),
            ("accent", self.accent),
            ("background", self.background),
            ("surface", self.surface),
            ("card", self.card),
            ("border", self.border),
            ("text", self.text),
            ("textSecondary", self.text_secondary),
            ("shadow", self.shadow),
        ]
    }
}

/// Named colour scheme.
///
/// The first four variants are offered to the user; the remaining ones back
/// the section-fixed palettes and can only be reached through [`resolve_fixed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ThemeVariant {
    Green,
    #[default]
    Teal,
    CrimsonNight,
    SunsetCrimson,
    Particles,
    Nouns,
    Verbs,
}

impl ThemeVariant {
    pub const ALL: [ThemeVariant; 7] = [
        ThemeVariant::Green,
        ThemeVariant::Teal,
        ThemeVariant::CrimsonNight,
        ThemeVariant::SunsetCrimson,
        ThemeVariant::Particles,
        ThemeVariant::Nouns,
        ThemeVariant::Verbs,
    ];

    /// Variants shown in the theme picker, in display order.
    pub fn selectable() -> &'static [ThemeVariant] {
        &Self::ALL[..4]
    }

    pub fn is_user_selectable(self) -> bool {
        Self::selectable().contains(&self)
    }

    /// Persistence name, matching the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeVariant::Green => "green",
            ThemeVariant::Teal => "teal",
            ThemeVariant::CrimsonNight => "crimsonNight",
            ThemeVariant::SunsetCrimson => "sunsetCrimson",
            ThemeVariant::Particles => "particles",
            ThemeVariant::Nouns => "nouns",
            ThemeVariant::Verbs => "verbs",
        }
    }

    /// Human readable name for pickers.
    pub fn label(self) -> &'static str {
        match self {
            ThemeVariant::Green => "Green",
            ThemeVariant::Teal => "Teal",
            ThemeVariant::CrimsonNight => "Crimson Night",
            ThemeVariant::SunsetCrimson => "Sunset Crimson",
            ThemeVariant::Particles => "Particles",
            ThemeVariant::Nouns => "Nouns",
            ThemeVariant::Verbs => "Verbs",
        }
    }
}

impl fmt::Display for ThemeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a persisted variant name is not part of the enumeration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme variant '{0}'")]
pub struct UnknownVariant(pub String);

impl FromStr for ThemeVariant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ThemeVariant::ALL
            .iter()
            .copied()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| UnknownVariant(s.to_string()))
    }
}

/// Content sections that render with their own palette regardless of the
/// user's selected variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FixedSection {
    Particles,
    Nouns,
    Verbs,
}

impl FixedSection {
    pub const ALL: [FixedSection; 3] = [FixedSection::Particles, FixedSection::Nouns, FixedSection::Verbs];

    /// The internal variant backing this section's palette.
    pub fn variant(self) -> ThemeVariant {
        match self {
            FixedSection::Particles => ThemeVariant::Particles,
            FixedSection::Nouns => ThemeVariant::Nouns,
            FixedSection::Verbs => ThemeVariant::Verbs,
        }
    }
}

/// Resolves the palette for a variant in light or dark mode.
pub fn resolve(variant: ThemeVariant, is_dark_mode: bool) -> Palette {
    match (variant, is_dark_mode) {
        (ThemeVariant::Green, false) => green_light(),
        (ThemeVariant::Green, true) => green_dark(),
        (ThemeVariant::Teal, false) => teal_light(),
        (ThemeVariant::Teal, true) => teal_dark(),
        (ThemeVariant::CrimsonNight, false) => crimson_night_light(),
        (ThemeVariant::CrimsonNight, true) => crimson_night_dark(),
        (ThemeVariant::SunsetCrimson, false) => sunset_crimson_light(),
        (ThemeVariant::SunsetCrimson, true) => sunset_crimson_dark(),
        (ThemeVariant::Particles, false) => particles_light(),
        (ThemeVariant::Particles, true) => particles_dark(),
        (ThemeVariant::Nouns, false) => nouns_light(),
        (ThemeVariant::Nouns, true) => nouns_dark(),
        (ThemeVariant::Verbs, false) => verbs_light(),
        (ThemeVariant::Verbs, true) => verbs_dark(),
    }
}

/// Resolves a section's own palette, ignoring the user's variant.
pub fn resolve_fixed(section: FixedSection, is_dark_mode: bool) -> Palette {
    resolve(section.variant(), is_dark_mode)
}

// Light palettes share neutral surfaces; dark ones share the slate base below.
const LIGHT_SHADOW: Color = Color::rgba(0, 0, 0, 40);
const DARK_SHADOW: Color = Color::rgba(0, 0, 0, 120);

fn light_base(primary: Color, secondary: Color, accent: Color, background: Color) -> Palette {
    Palette {
        primary,
        secondary,
        accent,
        background,
        surface: Color::hex(0xffffff),
        card: Color::hex(0xffffff),
        border: Color::hex(0xe2e8f0),
        text: Color::hex(0x1e293b),
        text_secondary: Color::hex(0x64748b),
        shadow: LIGHT_SHADOW,
    }
}

fn dark_base(primary: Color, secondary: Color, accent: Color, background: Color, surface: Color) -> Palette {
    Palette {
        primary,
        secondary,
        accent,
        background,
        surface,
        card: surface,
        border: Color::hex(0x334155),
        text: Color::hex(0xf1f5f9),
        text_secondary: Color::hex(0x94a3b8),
        shadow: DARK_SHADOW,
    }
}

fn green_light() -> Palette {
    light_base(Color::hex(0x15803d), Color::hex(0x22c55e), Color::hex(0xca8a04), Color::hex(0xf0fdf4))
}

fn green_dark() -> Palette {
    dark_base(
        Color::hex(0x22c55e),
        Color::hex(0x15803d),
        Color::hex(0xfacc15),
        Color::hex(0x052e16),
        Color::hex(0x14532d),
    )
}

fn teal_light() -> Palette {
    light_base(Color::hex(0x0f766e), Color::hex(0x14b8a6), Color::hex(0xf59e0b), Color::hex(0xf0fdfa))
}

fn teal_dark() -> Palette {
    dark_base(
        Color::hex(0x2dd4bf),
        Color::hex(0x0f766e),
        Color::hex(0xfbbf24),
        Color::hex(0x0f172a),
        Color::hex(0x1e293b),
    )
}

fn crimson_night_light() -> Palette {
    light_base(Color::hex(0x9f1239), Color::hex(0xe11d48), Color::hex(0x1e3a8a), Color::hex(0xfff1f2))
}

fn crimson_night_dark() -> Palette {
    dark_base(
        Color::hex(0xfb7185),
        Color::hex(0x9f1239),
        Color::hex(0x93c5fd),
        Color::hex(0x0c0a1d),
        Color::hex(0x1c1433),
    )
}

fn sunset_crimson_light() -> Palette {
    light_base(Color::hex(0xc2410c), Color::hex(0xdc2626), Color::hex(0x7c3aed), Color::hex(0xfff7ed))
}

fn sunset_crimson_dark() -> Palette {
    dark_base(
        Color::hex(0xfb923c),
        Color::hex(0xb91c1c),
        Color::hex(0xc4b5fd),
        Color::hex(0x1c0f0a),
        Color::hex(0x2d1810),
    )
}

fn particles_light() -> Palette {
    Palette {
        card: Color::hex(0xfdf4ff),
        ..light_base(Color::hex(0x7e22ce), Color::hex(0xa855f7), Color::hex(0xdb2777), Color::hex(0xfaf5ff))
    }
}

fn particles_dark() -> Palette {
    dark_base(
        Color::hex(0xc084fc),
        Color::hex(0x7e22ce),
        Color::hex(0xf472b6),
        Color::hex(0x1a0b2e),
        Color::hex(0x2e1065),
    )
}

fn nouns_light() -> Palette {
    Palette {
        card: Color::hex(0xeff6ff),
        ..light_base(Color::hex(0x1d4ed8), Color::hex(0x3b82f6), Color::hex(0x0891b2), Color::hex(0xf8fafc))
    }
}

fn nouns_dark() -> Palette {
    dark_base(
        Color::hex(0x60a5fa),
        Color::hex(0x1d4ed8),
        Color::hex(0x22d3ee),
        Color::hex(0x0b1120),
        Color::hex(0x172554),
    )
}

fn verbs_light() -> Palette {
    Palette {
        card: Color::hex(0xfffbeb),
        ..light_base(Color::hex(0xb45309), Color::hex(0xf59e0b), Color::hex(0x059669), Color::hex(0xfefce8))
    }
}

fn verbs_dark() -> Palette {
    dark_base(
        Color::hex(0xfbbf24),
        Color::hex(0xb45309),
        Color::hex(0x34d399),
        Color::hex(0x1c1204),
        Color::hex(0x422006),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_combination_resolves_full_palette() {
        for variant in ThemeVariant::ALL {
            for dark in [false, true] {
                let palette = resolve(variant, dark);
                for (name, color) in palette.entries() {
                    if name != "shadow" {
                        assert_eq!(color.a, 255, "{variant} dark={dark} {name} should be opaque");
                    } else {
                        assert!(color.a > 0, "{variant} dark={dark} shadow should be visible");
                    }
                }
                assert_ne!(palette.text, palette.background);
                assert_ne!(palette.text_secondary, palette.background);
            }
        }
    }

    #[test]
    fn test_dark_differs_from_light() {
        for variant in ThemeVariant::ALL {
            assert_ne!(resolve(variant, false), resolve(variant, true), "{variant}");
        }
    }

    #[test]
    fn test_fixed_section_ignores_user_variant() {
        let nouns = resolve_fixed(FixedSection::Nouns, true);
        assert_eq!(nouns, resolve(ThemeVariant::Nouns, true));
        assert_ne!(nouns, resolve(ThemeVariant::Teal, true));
    }

    #[test]
    fn test_with_opacity_identity_and_transparent() {
        let c = Color::hex(0x0f766e);
        assert_eq!(with_opacity(c, 1.0), c);

        let clear = with_opacity(c, 0.0);
        assert_eq!(clear.a, 0);
        assert_eq!((clear.r, clear.g, clear.b), (c.r, c.g, c.b));

        assert_eq!(with_opacity(c, 0.5).a, 128);
        assert_eq!(with_opacity(c, 7.0), c);
        assert_eq!(with_opacity(c, -1.0).a, 0);
    }

    #[test]
    fn test_with_opacity_scales_translucent_colour() {
        let shadow = Color::rgba(0, 0, 0, 120);
        assert_eq!(with_opacity(shadow, 1.0), shadow);
        assert_eq!(with_opacity(shadow, 0.5).a, 60);
    }

    #[test]
    fn test_variant_names_round_trip() {
        for variant in ThemeVariant::ALL {
            assert_eq!(variant.as_str().parse::<ThemeVariant>(), Ok(variant));
            let json = serde_json::to_string(&variant).unwrap();
            assert_eq!(json, format!("\"{}\"", variant.as_str()));
        }
        assert!("blackwhite".parse::<ThemeVariant>().is_err());
    }

    #[test]
    fn test_only_four_variants_selectable() {
        assert_eq!(ThemeVariant::selectable().len(), 4);
        assert!(ThemeVariant::Teal.is_user_selectable());
        assert!(!ThemeVariant::Verbs.is_user_selectable());
        assert_eq!(ThemeVariant::default(), ThemeVariant::Teal);
    }

    #[test]
    fn test_hex_formatting() {
        assert_eq!(Color::hex(0x0f766e).to_hex(), "#0f766e");
        assert_eq!(Color::rgba(0, 0, 0, 40).to_string(), "#00000028");
    }
}
