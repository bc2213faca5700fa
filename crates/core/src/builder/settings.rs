//! Theme settings edited in the Theme Builder.
//!
//! Settings are grouped into six categories. Every editable field is listed
//! in [`FIELDS`] with its kind and bounds; [`ThemeSettings::set_field`] and
//! [`ThemeSettings::validate`] both work from that table.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::theme::{ButtonStyle, HeroStyle, ThemeKind};

/// A `#rrggbb` color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor([u8; 3]);

impl HexColor {
    /// Parse `#rrggbb` (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::InvalidColor` for anything else, including
    /// the `#rgb` shorthand.
    pub fn parse(s: &str) -> Result<Self, SettingsError> {
        let invalid = || SettingsError::InvalidColor(s.to_owned());
        let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |i: usize| {
            hex.get(i..i + 2)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .ok_or_else(invalid)
        };
        Ok(Self([channel(0)?, channel(2)?, channel(4)?]))
    }

    /// Parse a compile-time token color. Falls back to black.
    fn from_token(token: &str) -> Self {
        Self::parse(token).unwrap_or(Self([0, 0, 0]))
    }

    #[must_use]
    pub const fn rgb(self) -> [u8; 3] {
        self.0
    }
}

impl std::fmt::Display for HexColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}

impl TryFrom<String> for HexColor {
    type Error = SettingsError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColorSettings {
    pub primary: HexColor,
    pub secondary: HexColor,
    pub accent: HexColor,
    pub background: HexColor,
    pub text: HexColor,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypographySettings {
    pub heading_font: String,
    pub body_font: String,
    pub base_size_px: u16,
    pub heading_weight: u16,
    pub line_height_percent: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpacingSettings {
    pub section_padding_px: u16,
    pub container_width_px: u16,
    pub radius_px: u16,
    pub grid_gap_px: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EffectsSettings {
    pub hero_style: HeroStyle,
    pub button_style: ButtonStyle,
    pub shadows: bool,
    pub animations: bool,
    pub hover_zoom: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WidgetSettings {
    pub show_announcement: bool,
    pub show_whatsapp: bool,
    pub show_wishlist: bool,
    pub show_ratings: bool,
    pub slider_autoplay: bool,
    pub slide_interval_ms: u32,
    pub featured_count: u16,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AdvancedSettings {
    pub custom_css: String,
    pub custom_js: String,
    pub logo_url: String,
    pub favicon_url: String,
    pub announcement_text: String,
}

impl AdvancedSettings {
    /// Custom CSS safe to place inside a `<style>` element.
    #[must_use]
    pub fn safe_css(&self) -> String {
        self.custom_css.replace("</", "<\\/")
    }

    /// Custom JS safe to place inside a `<script>` element.
    #[must_use]
    pub fn safe_js(&self) -> String {
        self.custom_js.replace("</", "<\\/")
    }
}

/// All builder settings for one store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeSettings {
    pub colors: ColorSettings,
    pub typography: TypographySettings,
    pub spacing: SpacingSettings,
    pub effects: EffectsSettings,
    pub widgets: WidgetSettings,
    pub advanced: AdvancedSettings,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self::for_theme(ThemeKind::Minimal)
    }
}

/// Settings category; the first path segment of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingsCategory {
    Colors,
    Typography,
    Spacing,
    Effects,
    Widgets,
    Advanced,
}

impl SettingsCategory {
    pub const ALL: [Self; 6] = [
        Self::Colors,
        Self::Typography,
        Self::Spacing,
        Self::Effects,
        Self::Widgets,
        Self::Advanced,
    ];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Colors => "colors",
            Self::Typography => "typography",
            Self::Spacing => "spacing",
            Self::Effects => "effects",
            Self::Widgets => "widgets",
            Self::Advanced => "advanced",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.key() == key)
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Colors => "الألوان",
            Self::Typography => "الخطوط",
            Self::Spacing => "المسافات",
            Self::Effects => "التأثيرات",
            Self::Widgets => "الإضافات",
            Self::Advanced => "متقدم",
        }
    }

    /// Fields in this category, in panel order.
    pub fn fields(self) -> impl Iterator<Item = &'static FieldSpec> {
        FIELDS.iter().filter(move |f| f.category == self)
    }
}

/// Font families the builder offers.
pub const FONT_CHOICES: &[&str] = &[
    "Tajawal",
    "Cairo",
    "Almarai",
    "Amiri",
    "Noto Naskh Arabic",
    "Lalezar",
    "IBM Plex Sans Arabic",
    "Baloo Bhaijaan 2",
    "Readex Pro",
];

const HERO_CHOICES: &[&str] = &["full_bleed", "split", "centered", "gradient"];
const BUTTON_CHOICES: &[&str] = &["square", "rounded", "pill"];

/// How a field is edited and validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Color,
    Number { min: i64, max: i64, step: i64 },
    Toggle,
    Choice(&'static [&'static str]),
    Text { max_len: usize, multiline: bool },
    /// Empty, site-relative (`/…`) or `https://`.
    Url { max_len: usize },
}

/// One editable settings field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub category: SettingsCategory,
    pub field: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

const fn spec(
    category: SettingsCategory,
    field: &'static str,
    label: &'static str,
    kind: FieldKind,
) -> FieldSpec {
    FieldSpec {
        category,
        field,
        label,
        kind,
    }
}

const fn number(min: i64, max: i64, step: i64) -> FieldKind {
    FieldKind::Number { min, max, step }
}

use SettingsCategory as C;

/// Every editable field.
pub const FIELDS: &[FieldSpec] = &[
    spec(C::Colors, "primary", "اللون الأساسي", FieldKind::Color),
    spec(C::Colors, "secondary", "اللون الثانوي", FieldKind::Color),
    spec(C::Colors, "accent", "لون التمييز", FieldKind::Color),
    spec(C::Colors, "background", "لون الخلفية", FieldKind::Color),
    spec(C::Colors, "text", "لون النص", FieldKind::Color),
    spec(C::Typography, "heading_font", "خط العناوين", FieldKind::Choice(FONT_CHOICES)),
    spec(C::Typography, "body_font", "خط النص", FieldKind::Choice(FONT_CHOICES)),
    spec(C::Typography, "base_size_px", "حجم الخط الأساسي", number(12, 24, 1)),
    spec(C::Typography, "heading_weight", "سماكة العناوين", number(300, 900, 100)),
    spec(C::Typography, "line_height_percent", "ارتفاع السطر", number(100, 250, 5)),
    spec(C::Spacing, "section_padding_px", "هوامش الأقسام", number(0, 160, 4)),
    spec(C::Spacing, "container_width_px", "عرض المحتوى", number(960, 1920, 20)),
    spec(C::Spacing, "radius_px", "استدارة الزوايا", number(0, 48, 1)),
    spec(C::Spacing, "grid_gap_px", "المسافة بين العناصر", number(0, 64, 2)),
    spec(C::Effects, "hero_style", "نمط الشرائح", FieldKind::Choice(HERO_CHOICES)),
    spec(C::Effects, "button_style", "شكل الأزرار", FieldKind::Choice(BUTTON_CHOICES)),
    spec(C::Effects, "shadows", "الظلال", FieldKind::Toggle),
    spec(C::Effects, "animations", "الحركات", FieldKind::Toggle),
    spec(C::Effects, "hover_zoom", "تكبير الصور عند المرور", FieldKind::Toggle),
    spec(C::Widgets, "show_announcement", "شريط الإعلانات", FieldKind::Toggle),
    spec(C::Widgets, "show_whatsapp", "زر واتساب", FieldKind::Toggle),
    spec(C::Widgets, "show_wishlist", "المفضلة", FieldKind::Toggle),
    spec(C::Widgets, "show_ratings", "التقييمات", FieldKind::Toggle),
    spec(C::Widgets, "slider_autoplay", "تشغيل الشرائح تلقائياً", FieldKind::Toggle),
    spec(C::Widgets, "slide_interval_ms", "مدة الشريحة (ملي ثانية)", number(2000, 15000, 500)),
    spec(C::Widgets, "featured_count", "عدد المنتجات المميزة", number(2, 16, 1)),
    spec(
        C::Advanced,
        "custom_css",
        "CSS مخصص",
        FieldKind::Text {
            max_len: 20_000,
            multiline: true,
        },
    ),
    spec(
        C::Advanced,
        "custom_js",
        "JavaScript مخصص",
        FieldKind::Text {
            max_len: 20_000,
            multiline: true,
        },
    ),
    spec(C::Advanced, "logo_url", "رابط الشعار", FieldKind::Url { max_len: 500 }),
    spec(C::Advanced, "favicon_url", "رابط الأيقونة", FieldKind::Url { max_len: 500 }),
    spec(
        C::Advanced,
        "announcement_text",
        "نص الإعلان",
        FieldKind::Text {
            max_len: 200,
            multiline: false,
        },
    ),
];

/// Look up a field by category and name.
#[must_use]
pub fn field_spec(category: SettingsCategory, field: &str) -> Option<&'static FieldSpec> {
    FIELDS
        .iter()
        .find(|f| f.category == category && f.field == field)
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("unknown settings category: {0}")]
    UnknownCategory(String),
    #[error("unknown field {category}.{field}")]
    UnknownField { category: String, field: String },
    #[error("invalid color {0:?}, expected #rrggbb")]
    InvalidColor(String),
    #[error("{field} must be a whole number")]
    InvalidNumber { field: String },
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },
    #[error("{field} must be on or off")]
    InvalidToggle { field: String },
    #[error("{value:?} is not an allowed value for {field}")]
    InvalidChoice { field: String, value: String },
    #[error("{field} is longer than {max} characters")]
    TooLong { field: String, max: usize },
    #[error("{field} must be a site path or an https URL")]
    InvalidUrl { field: String },
    #[error("settings could not be applied: {0}")]
    Malformed(String),
}

fn parse_toggle(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "on" | "1" | "yes" => Some(true),
        "false" | "off" | "0" | "no" | "" => Some(false),
        _ => None,
    }
}

fn url_allowed(url: &str) -> bool {
    url.is_empty()
        || (url.starts_with('/') && !url.starts_with("//"))
        || url.starts_with("https://")
}

impl FieldSpec {
    /// Convert raw form input into the JSON value stored for this field.
    ///
    /// # Errors
    ///
    /// Returns the matching `SettingsError` if the input does not fit the
    /// field's kind or bounds.
    pub fn parse_input(&self, raw: &str) -> Result<Value, SettingsError> {
        let field = || self.field.to_owned();
        match self.kind {
            FieldKind::Color => Ok(Value::String(HexColor::parse(raw)?.to_string())),
            FieldKind::Number { min, max, .. } => {
                let n: i64 = raw
                    .trim()
                    .parse()
                    .map_err(|_| SettingsError::InvalidNumber { field: field() })?;
                if !(min..=max).contains(&n) {
                    return Err(SettingsError::OutOfRange {
                        field: field(),
                        min,
                        max,
                    });
                }
                Ok(Value::from(n))
            }
            FieldKind::Toggle => parse_toggle(raw)
                .map(Value::Bool)
                .ok_or(SettingsError::InvalidToggle { field: field() }),
            FieldKind::Choice(choices) => {
                let value = raw.trim();
                if choices.contains(&value) {
                    Ok(Value::String(value.to_owned()))
                } else {
                    Err(SettingsError::InvalidChoice {
                        field: field(),
                        value: value.to_owned(),
                    })
                }
            }
            FieldKind::Text { max_len, .. } => {
                if raw.chars().count() > max_len {
                    return Err(SettingsError::TooLong {
                        field: field(),
                        max: max_len,
                    });
                }
                Ok(Value::String(raw.to_owned()))
            }
            FieldKind::Url { max_len } => {
                let url = raw.trim();
                if url.chars().count() > max_len {
                    return Err(SettingsError::TooLong {
                        field: field(),
                        max: max_len,
                    });
                }
                if !url_allowed(url) {
                    return Err(SettingsError::InvalidUrl { field: field() });
                }
                Ok(Value::String(url.to_owned()))
            }
        }
    }

    /// Check a stored value against this field's bounds.
    fn check(&self, value: &Value) -> Result<(), SettingsError> {
        let raw = match value {
            Value::String(s) => s.clone(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            _ => {
                return Err(SettingsError::Malformed(format!(
                    "{}.{} has an unexpected type",
                    self.category.key(),
                    self.field
                )));
            }
        };
        self.parse_input(&raw).map(|_| ())
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

impl ThemeSettings {
    /// Defaults derived from a theme's tokens.
    #[must_use]
    pub fn for_theme(theme: ThemeKind) -> Self {
        let tokens = theme.tokens();
        Self {
            colors: ColorSettings {
                primary: HexColor::from_token(tokens.primary),
                secondary: HexColor::from_token(tokens.secondary),
                accent: HexColor::from_token(tokens.accent),
                background: HexColor::from_token(tokens.background),
                text: HexColor::from_token(tokens.text),
            },
            typography: TypographySettings {
                heading_font: tokens.heading_font.to_owned(),
                body_font: tokens.body_font.to_owned(),
                base_size_px: 16,
                heading_weight: 700,
                line_height_percent: 170,
            },
            spacing: SpacingSettings {
                section_padding_px: 64,
                container_width_px: 1280,
                radius_px: tokens.radius_px,
                grid_gap_px: 24,
            },
            effects: EffectsSettings {
                hero_style: tokens.hero_style,
                button_style: tokens.button_style,
                shadows: true,
                animations: true,
                hover_zoom: true,
            },
            widgets: WidgetSettings {
                show_announcement: false,
                show_whatsapp: true,
                show_wishlist: true,
                show_ratings: true,
                slider_autoplay: true,
                slide_interval_ms: tokens.slide_interval_ms,
                featured_count: 8,
            },
            advanced: AdvancedSettings::default(),
        }
    }

    /// Set one field from raw form input.
    ///
    /// The value is checked against [`FIELDS`], written into a JSON copy of
    /// the settings and deserialized back. Nothing changes unless every step
    /// succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown category or field, or a value that
    /// does not fit the field.
    pub fn set_field(&mut self, category: &str, field: &str, raw: &str) -> Result<(), SettingsError> {
        let category_id = SettingsCategory::from_key(category)
            .ok_or_else(|| SettingsError::UnknownCategory(category.to_owned()))?;
        let spec = field_spec(category_id, field).ok_or_else(|| SettingsError::UnknownField {
            category: category.to_owned(),
            field: field.to_owned(),
        })?;
        let value = spec.parse_input(raw)?;

        let mut tree =
            serde_json::to_value(&*self).map_err(|e| SettingsError::Malformed(e.to_string()))?;
        let slot = tree
            .get_mut(category_id.key())
            .and_then(|group| group.get_mut(spec.field))
            .ok_or_else(|| SettingsError::Malformed(format!("{category}.{field} missing")))?;
        *slot = value;

        let updated: Self =
            serde_json::from_value(tree).map_err(|e| SettingsError::Malformed(e.to_string()))?;
        *self = updated;
        Ok(())
    }

    /// Current value of a field as form text.
    #[must_use]
    pub fn field_value(&self, category: SettingsCategory, field: &str) -> Option<String> {
        let tree = serde_json::to_value(self).ok()?;
        tree.get(category.key())
            .and_then(|group| group.get(field))
            .map(value_text)
    }

    /// Check every field against its bounds. Used for imported documents.
    ///
    /// # Errors
    ///
    /// Returns the first field that is out of bounds.
    pub fn validate(&self) -> Result<(), SettingsError> {
        let tree = serde_json::to_value(self).map_err(|e| SettingsError::Malformed(e.to_string()))?;
        for spec in FIELDS {
            let value = tree
                .get(spec.category.key())
                .and_then(|group| group.get(spec.field))
                .ok_or_else(|| {
                    SettingsError::Malformed(format!("{}.{} missing", spec.category.key(), spec.field))
                })?;
            spec.check(value)?;
        }
        Ok(())
    }

    /// CSS custom properties for `:root`.
    #[must_use]
    pub fn css_variables(&self) -> String {
        let c = &self.colors;
        let t = &self.typography;
        let s = &self.spacing;
        format!(
            "--color-primary:{};--color-secondary:{};--color-accent:{};--color-bg:{};--color-text:{};\
             --font-heading:'{}',sans-serif;--font-body:'{}',sans-serif;--font-size-base:{}px;\
             --heading-weight:{};--line-height:{}%;--section-padding:{}px;--container-width:{}px;\
             --radius:{}px;--grid-gap:{}px;",
            c.primary,
            c.secondary,
            c.accent,
            c.background,
            c.text,
            t.heading_font,
            t.body_font,
            t.base_size_px,
            t.heading_weight,
            t.line_height_percent,
            s.section_padding_px,
            s.container_width_px,
            s.radius_px,
            s.grid_gap_px,
        )
    }

    /// Body classes toggled by the effects group.
    #[must_use]
    pub fn body_classes(&self) -> String {
        let e = &self.effects;
        let mut classes = vec![e.button_style.css_class()];
        if e.shadows {
            classes.push("fx-shadows");
        }
        if e.animations {
            classes.push("fx-animations");
        }
        if e.hover_zoom {
            classes.push("fx-hover-zoom");
        }
        classes.join(" ")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_color_parse() {
        assert_eq!(HexColor::parse("#FFaa00").unwrap().to_string(), "#ffaa00");
        assert!(HexColor::parse("#fff").is_err());
        assert!(HexColor::parse("ffaa00").is_err());
        assert!(HexColor::parse("#ggaa00").is_err());
    }

    #[test]
    fn test_defaults_follow_theme_tokens() {
        for theme in ThemeKind::ALL {
            let settings = ThemeSettings::for_theme(theme);
            assert_eq!(settings.colors.primary.to_string(), theme.tokens().primary);
            assert_eq!(settings.effects.hero_style, theme.tokens().hero_style);
            settings.validate().unwrap();
        }
    }

    #[test]
    fn test_set_color_field() {
        let mut settings = ThemeSettings::default();
        settings.set_field("colors", "primary", "#FF0000").unwrap();
        assert_eq!(settings.colors.primary.to_string(), "#ff0000");
    }

    #[test]
    fn test_invalid_color_leaves_settings_unchanged() {
        let mut settings = ThemeSettings::default();
        let before = settings.clone();
        let err = settings.set_field("colors", "primary", "red").unwrap_err();
        assert!(matches!(err, SettingsError::InvalidColor(_)));
        assert_eq!(settings, before);
    }

    #[test]
    fn test_number_range_enforced() {
        let mut settings = ThemeSettings::default();
        settings.set_field("spacing", "radius_px", "12").unwrap();
        assert_eq!(settings.spacing.radius_px, 12);

        let before = settings.clone();
        assert!(matches!(
            settings.set_field("spacing", "radius_px", "400"),
            Err(SettingsError::OutOfRange { min: 0, max: 48, .. })
        ));
        assert!(matches!(
            settings.set_field("spacing", "radius_px", "twelve"),
            Err(SettingsError::InvalidNumber { .. })
        ));
        assert_eq!(settings, before);
    }

    #[test]
    fn test_toggle_and_choice_fields() {
        let mut settings = ThemeSettings::default();
        settings.set_field("effects", "shadows", "off").unwrap();
        assert!(!settings.effects.shadows);
        settings.set_field("effects", "hero_style", "gradient").unwrap();
        assert_eq!(settings.effects.hero_style, HeroStyle::Gradient);
        assert!(settings.set_field("effects", "hero_style", "parallax").is_err());
        settings.set_field("typography", "heading_font", "Amiri").unwrap();
        assert_eq!(settings.typography.heading_font, "Amiri");
        assert!(settings.set_field("typography", "heading_font", "Comic Sans").is_err());
    }

    #[test]
    fn test_unknown_category_or_field_rejected() {
        let mut settings = ThemeSettings::default();
        assert_eq!(
            settings.set_field("sounds", "volume", "3"),
            Err(SettingsError::UnknownCategory("sounds".to_owned()))
        );
        assert!(matches!(
            settings.set_field("colors", "border", "#000000"),
            Err(SettingsError::UnknownField { .. })
        ));
    }

    #[test]
    fn test_url_fields() {
        let mut settings = ThemeSettings::default();
        settings
            .set_field("advanced", "logo_url", "/static/images/logo.svg")
            .unwrap();
        settings
            .set_field("advanced", "favicon_url", "https://cdn.example.com/f.ico")
            .unwrap();
        assert!(
            settings
                .set_field("advanced", "logo_url", "javascript:alert(1)")
                .is_err()
        );
        assert!(settings.set_field("advanced", "logo_url", "//evil.example").is_err());
    }

    #[test]
    fn test_field_value_reads_current() {
        let settings = ThemeSettings::for_theme(ThemeKind::Tech);
        assert_eq!(
            settings.field_value(SettingsCategory::Colors, "primary").as_deref(),
            Some("#2563eb")
        );
        assert_eq!(
            settings.field_value(SettingsCategory::Effects, "shadows").as_deref(),
            Some("true")
        );
    }

    #[test]
    fn test_every_field_is_settable_to_its_current_value() {
        let mut settings = ThemeSettings::for_theme(ThemeKind::Luxe);
        for spec in FIELDS {
            let current = settings.field_value(spec.category, spec.field).unwrap();
            settings
                .set_field(spec.category.key(), spec.field, &current)
                .unwrap();
        }
        assert_eq!(settings, ThemeSettings::for_theme(ThemeKind::Luxe));
    }

    #[test]
    fn test_validate_catches_out_of_range_import() {
        let mut settings = ThemeSettings::default();
        settings.typography.base_size_px = 99;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_custom_code_cannot_close_its_tag() {
        let advanced = AdvancedSettings {
            custom_css: "body{}</style><script>x</script>".to_owned(),
            ..AdvancedSettings::default()
        };
        assert!(!advanced.safe_css().contains("</"));
    }

    #[test]
    fn test_css_variables_include_colors() {
        let css = ThemeSettings::for_theme(ThemeKind::Tech).css_variables();
        assert!(css.contains("--color-primary:#2563eb;"));
        assert!(css.contains("--radius:12px;"));
    }
}
