//! Right-to-left layout helpers.

use serde::{Deserialize, Serialize};

/// Text direction of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Rtl,
    Ltr,
}

impl Direction {
    /// Value for the HTML `dir` attribute.
    #[must_use]
    pub const fn attr(self) -> &'static str {
        match self {
            Self::Rtl => "rtl",
            Self::Ltr => "ltr",
        }
    }

    #[must_use]
    pub const fn is_rtl(self) -> bool {
        matches!(self, Self::Rtl)
    }

    /// Physical side where lines start.
    #[must_use]
    pub const fn start_side(self) -> &'static str {
        match self {
            Self::Rtl => "right",
            Self::Ltr => "left",
        }
    }

    /// Physical side where lines end.
    #[must_use]
    pub const fn end_side(self) -> &'static str {
        match self {
            Self::Rtl => "left",
            Self::Ltr => "right",
        }
    }

    /// Chevron pointing "forward" in reading order.
    #[must_use]
    pub const fn next_chevron(self) -> &'static str {
        match self {
            Self::Rtl => "‹",
            Self::Ltr => "›",
        }
    }

    /// Chevron pointing "back" in reading order.
    #[must_use]
    pub const fn prev_chevron(self) -> &'static str {
        match self {
            Self::Rtl => "›",
            Self::Ltr => "‹",
        }
    }
}

/// Replace ASCII digits with Arabic-Indic digits (٠١٢٣٤٥٦٧٨٩).
///
/// A `.` between two digits becomes the Arabic decimal separator `٫`.
/// Other characters pass through.
#[must_use]
pub fn to_arabic_digits(input: &str) -> String {
    let mut out = String::with_capacity(input.len() * 2);
    let mut chars = input.chars().peekable();
    let mut prev_digit = false;
    while let Some(c) = chars.next() {
        match c {
            '0'..='9' => {
                out.push(char::from_u32(0x0660 + (c as u32 - '0' as u32)).unwrap_or(c));
                prev_digit = true;
                continue;
            }
            '.' if prev_digit && chars.peek().is_some_and(char::is_ascii_digit) => out.push('٫'),
            _ => out.push(c),
        }
        prev_digit = false;
    }
    out
}
