//! Device preview presets and scaling.

use serde::{Deserialize, Serialize};

/// Device the live preview imitates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreviewDevice {
    #[default]
    Desktop,
    Tablet,
    Mobile,
}

impl PreviewDevice {
    pub const ALL: [Self; 3] = [Self::Desktop, Self::Tablet, Self::Mobile];

    /// Fixed viewport `(width, height)` in CSS pixels.
    #[must_use]
    pub const fn viewport(self) -> (u32, u32) {
        match self {
            Self::Desktop => (1280, 800),
            Self::Tablet => (768, 1024),
            Self::Mobile => (375, 667),
        }
    }

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Desktop => "desktop",
            Self::Tablet => "tablet",
            Self::Mobile => "mobile",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.key() == key.trim())
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Desktop => "سطح المكتب",
            Self::Tablet => "جهاز لوحي",
            Self::Mobile => "جوال",
        }
    }
}

/// Preview zoom in percent, always within 25..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "i64", into = "u8")]
pub struct PreviewScale(u8);

impl PreviewScale {
    pub const MIN: u8 = 25;
    pub const MAX: u8 = 100;

    /// Clamp any integer into range.
    #[must_use]
    pub fn new(percent: i64) -> Self {
        let clamped = percent.clamp(i64::from(Self::MIN), i64::from(Self::MAX));
        Self(u8::try_from(clamped).unwrap_or(Self::MAX))
    }

    #[must_use]
    pub const fn percent(self) -> u8 {
        self.0
    }

    /// Scale factor for a CSS transform, e.g. `0.75`.
    #[must_use]
    pub fn css_factor(self) -> String {
        format!("{}.{:02}", self.0 / 100, self.0 % 100)
    }

    /// Apply to a pixel length, rounding down.
    #[must_use]
    pub fn apply(self, px: u32) -> u32 {
        px * u32::from(self.0) / 100
    }
}

impl Default for PreviewScale {
    fn default() -> Self {
        Self(Self::MAX)
    }
}

impl From<i64> for PreviewScale {
    fn from(percent: i64) -> Self {
        Self::new(percent)
    }
}

impl From<PreviewScale> for u8 {
    fn from(scale: PreviewScale) -> Self {
        scale.0
    }
}

/// Preview controls kept in the builder draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewOptions {
    pub device: PreviewDevice,
    pub scale: PreviewScale,
    pub auto_preview: bool,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            device: PreviewDevice::default(),
            scale: PreviewScale::default(),
            auto_preview: true,
        }
    }
}

/// Geometry of the preview frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewFrame {
    /// Unscaled viewport width.
    pub width: u32,
    /// Unscaled viewport height.
    pub height: u32,
    pub scale: PreviewScale,
    /// Footprint after scaling, for the wrapping box.
    pub outer_width: u32,
    pub outer_height: u32,
}

impl PreviewFrame {
    /// Inline style for the frame element.
    #[must_use]
    pub fn style(&self) -> String {
        format!(
            "width:{}px;height:{}px;transform:scale({});transform-origin:top left;",
            self.width,
            self.height,
            self.scale.css_factor()
        )
    }

    /// Inline style for the wrapper that reserves the scaled footprint.
    #[must_use]
    pub fn outer_style(&self) -> String {
        format!(
            "width:{}px;height:{}px;",
            self.outer_width, self.outer_height
        )
    }
}

impl PreviewOptions {
    #[must_use]
    pub fn frame(&self) -> PreviewFrame {
        let (width, height) = self.device.viewport();
        PreviewFrame {
            width,
            height,
            scale: self.scale,
            outer_width: self.scale.apply(width),
            outer_height: self.scale.apply(height),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_device_presets() {
        assert_eq!(PreviewDevice::Desktop.viewport(), (1280, 800));
        assert_eq!(PreviewDevice::Tablet.viewport(), (768, 1024));
        assert_eq!(PreviewDevice::Mobile.viewport(), (375, 667));
    }

    #[test]
    fn test_switching_device_changes_frame() {
        let mut options = PreviewOptions::default();
        let desktop = options.frame();
        options.device = PreviewDevice::Mobile;
        let mobile = options.frame();
        assert_eq!((desktop.width, desktop.height), (1280, 800));
        assert_eq!((mobile.width, mobile.height), (375, 667));
        assert!(mobile.style().contains("width:375px;height:667px;"));
    }

    #[test]
    fn test_scale_clamped() {
        assert_eq!(PreviewScale::new(10).percent(), 25);
        assert_eq!(PreviewScale::new(250).percent(), 100);
        assert_eq!(PreviewScale::new(75).css_factor(), "0.75");
        assert_eq!(PreviewScale::default().css_factor(), "1.00");
    }

    #[test]
    fn test_scaled_footprint() {
        let options = PreviewOptions {
            device: PreviewDevice::Tablet,
            scale: PreviewScale::new(50),
            auto_preview: true,
        };
        let frame = options.frame();
        assert_eq!((frame.outer_width, frame.outer_height), (384, 512));
        assert_eq!((frame.width, frame.height), (768, 1024));
    }

    #[test]
    fn test_scale_deserialize_clamps() {
        let scale: PreviewScale = serde_json::from_str("5").unwrap();
        assert_eq!(scale.percent(), 25);
    }
}
