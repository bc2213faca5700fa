//! Type-safe price representation using decimal arithmetic.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (riyals, not halalas).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Create a price in Saudi riyals from a whole amount.
    #[must_use]
    pub fn sar(amount: i64) -> Self {
        Self::new(Decimal::from(amount), CurrencyCode::SAR)
    }

    /// Create a zero price in the given currency.
    #[must_use]
    pub const fn zero(currency_code: CurrencyCode) -> Self {
        Self::new(Decimal::ZERO, currency_code)
    }

    /// Round to two decimal places, half away from zero.
    #[must_use]
    pub fn rounded(self) -> Self {
        Self::new(
            self.amount
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
            self.currency_code,
        )
    }

    /// Format for display with the currency symbol after the amount,
    /// e.g. `299.00 ر.س`.
    #[must_use]
    pub fn display(&self) -> String {
        format!(
            "{:.2} {}",
            self.rounded().amount,
            self.currency_code.symbol()
        )
    }

    /// Percentage saved against an original price, if this price is lower.
    #[must_use]
    pub fn discount_percent_from(&self, original: &Self) -> Option<u32> {
        if original.amount <= self.amount || original.amount.is_zero() {
            return None;
        }
        let saved = (original.amount - self.amount) * Decimal::from(100) / original.amount;
        saved
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_u32()
    }
}

/// ISO 4217 currency codes used by Gulf storefronts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    SAR,
    AED,
    KWD,
    USD,
}

impl CurrencyCode {
    /// Display symbol for Arabic storefronts.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::SAR => "ر.س",
            Self::AED => "د.إ",
            Self::KWD => "د.ك",
            Self::USD => "$",
        }
    }

    /// ISO code string.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::SAR => "SAR",
            Self::AED => "AED",
            Self::KWD => "KWD",
            Self::USD => "USD",
        }
    }
}
