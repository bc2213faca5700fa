//! Storefront themes and their design tokens.
//!
//! Every theme renders the same page set through shared templates; what
//! differs is the token set below (colors, fonts, shape) plus the hero
//! layout and the demo catalog attached to the theme.

use serde::{Deserialize, Serialize};

/// The storefront themes a store can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeKind {
    Minimal,
    Tech,
    Modern,
    Luxe,
    Vibrant,
    Appliances,
    Toys,
    Software,
}

impl ThemeKind {
    /// All themes in display order.
    pub const ALL: [Self; 8] = [
        Self::Minimal,
        Self::Tech,
        Self::Modern,
        Self::Luxe,
        Self::Vibrant,
        Self::Appliances,
        Self::Toys,
        Self::Software,
    ];

    /// URL/config slug.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Minimal => "minimal",
            Self::Tech => "tech",
            Self::Modern => "modern",
            Self::Luxe => "luxe",
            Self::Vibrant => "vibrant",
            Self::Appliances => "appliances",
            Self::Toys => "toys",
            Self::Software => "software",
        }
    }

    /// Parse a theme from its slug.
    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.slug() == slug)
    }

    /// Arabic display name shown in the builder and store directory.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Minimal => "بسيط",
            Self::Tech => "تقني",
            Self::Modern => "عصري",
            Self::Luxe => "فاخر",
            Self::Vibrant => "نابض بالحياة",
            Self::Appliances => "أجهزة منزلية",
            Self::Toys => "ألعاب",
            Self::Software => "برمجيات",
        }
    }

    /// Default design tokens for the theme.
    #[must_use]
    pub const fn tokens(self) -> ThemeTokens {
        match self {
            Self::Minimal => ThemeTokens {
                primary: "#111827",
                secondary: "#6b7280",
                accent: "#f59e0b",
                background: "#ffffff",
                text: "#111827",
                heading_font: "Tajawal",
                body_font: "Tajawal",
                radius_px: 4,
                hero_style: HeroStyle::Centered,
                button_style: ButtonStyle::Square,
                slide_interval_ms: 6000,
            },
            Self::Tech => ThemeTokens {
                primary: "#2563eb",
                secondary: "#0f172a",
                accent: "#22d3ee",
                background: "#0b1120",
                text: "#e2e8f0",
                heading_font: "Cairo",
                body_font: "Cairo",
                radius_px: 12,
                hero_style: HeroStyle::Split,
                button_style: ButtonStyle::Rounded,
                slide_interval_ms: 5000,
            },
            Self::Modern => ThemeTokens {
                primary: "#7c3aed",
                secondary: "#1f2937",
                accent: "#ec4899",
                background: "#f9fafb",
                text: "#1f2937",
                heading_font: "Almarai",
                body_font: "Almarai",
                radius_px: 16,
                hero_style: HeroStyle::FullBleed,
                button_style: ButtonStyle::Pill,
                slide_interval_ms: 5000,
            },
            Self::Luxe => ThemeTokens {
                primary: "#b08d57",
                secondary: "#1c1917",
                accent: "#d6c6a5",
                background: "#faf8f5",
                text: "#1c1917",
                heading_font: "Amiri",
                body_font: "Noto Naskh Arabic",
                radius_px: 0,
                hero_style: HeroStyle::FullBleed,
                button_style: ButtonStyle::Square,
                slide_interval_ms: 7000,
            },
            Self::Vibrant => ThemeTokens {
                primary: "#f43f5e",
                secondary: "#facc15",
                accent: "#10b981",
                background: "#fff7ed",
                text: "#27272a",
                heading_font: "Lalezar",
                body_font: "Cairo",
                radius_px: 20,
                hero_style: HeroStyle::Gradient,
                button_style: ButtonStyle::Pill,
                slide_interval_ms: 4000,
            },
            Self::Appliances => ThemeTokens {
                primary: "#0369a1",
                secondary: "#334155",
                accent: "#f97316",
                background: "#f1f5f9",
                text: "#0f172a",
                heading_font: "IBM Plex Sans Arabic",
                body_font: "IBM Plex Sans Arabic",
                radius_px: 8,
                hero_style: HeroStyle::Split,
                button_style: ButtonStyle::Rounded,
                slide_interval_ms: 5000,
            },
            Self::Toys => ThemeTokens {
                primary: "#f97316",
                secondary: "#8b5cf6",
                accent: "#22c55e",
                background: "#fffbeb",
                text: "#3f3f46",
                heading_font: "Baloo Bhaijaan 2",
                body_font: "Cairo",
                radius_px: 24,
                hero_style: HeroStyle::Gradient,
                button_style: ButtonStyle::Pill,
                slide_interval_ms: 4000,
            },
            Self::Software => ThemeTokens {
                primary: "#4f46e5",
                secondary: "#111827",
                accent: "#14b8a6",
                background: "#ffffff",
                text: "#111827",
                heading_font: "Readex Pro",
                body_font: "Readex Pro",
                radius_px: 10,
                hero_style: HeroStyle::Centered,
                button_style: ButtonStyle::Rounded,
                slide_interval_ms: 6000,
            },
        }
    }
}

impl std::fmt::Display for ThemeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

/// Hero section layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeroStyle {
    /// Image fills the section, copy overlaid.
    FullBleed,
    /// Copy on the start side, image on the end side.
    Split,
    /// Copy centered over a plain background.
    Centered,
    /// Copy over a primary-to-accent gradient.
    Gradient,
}

impl HeroStyle {
    /// CSS modifier class used by the templates.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::FullBleed => "hero--full-bleed",
            Self::Split => "hero--split",
            Self::Centered => "hero--centered",
            Self::Gradient => "hero--gradient",
        }
    }
}

/// Button shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonStyle {
    Square,
    Rounded,
    Pill,
}

impl ButtonStyle {
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Square => "btn--square",
            Self::Rounded => "btn--rounded",
            Self::Pill => "btn--pill",
        }
    }
}

/// Design tokens a theme ships with.
///
/// Colors are `#rrggbb`. The Theme Builder's settings are seeded from these
/// and can override every color and font.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeTokens {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub background: &'static str,
    pub text: &'static str,
    pub heading_font: &'static str,
    pub body_font: &'static str,
    pub radius_px: u16,
    pub hero_style: HeroStyle,
    pub button_style: ButtonStyle,
    /// Hero slider auto-advance interval.
    pub slide_interval_ms: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_roundtrip_for_every_theme() {
        for theme in ThemeKind::ALL {
            assert_eq!(ThemeKind::from_slug(theme.slug()), Some(theme));
        }
        assert_eq!(ThemeKind::from_slug("brutalist"), None);
    }

    #[test]
    fn test_token_colors_are_hex() {
        for theme in ThemeKind::ALL {
            let tokens = theme.tokens();
            for color in [
                tokens.primary,
                tokens.secondary,
                tokens.accent,
                tokens.background,
                tokens.text,
            ] {
                assert_eq!(color.len(), 7, "{theme}: {color}");
                assert!(color.starts_with('#'));
                assert!(color.chars().skip(1).all(|c| c.is_ascii_hexdigit()));
            }
        }
    }

    #[test]
    fn test_serde_uses_slug() {
        let json = serde_json::to_string(&ThemeKind::Appliances).unwrap_or_default();
        assert_eq!(json, "\"appliances\"");
    }
}
