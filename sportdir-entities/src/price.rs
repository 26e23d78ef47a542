use std::fmt;

/// A monetary amount in minor currency units (two decimals).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price(i64);

const MINOR_UNITS_PER_MAJOR: i64 = 100;

impl Price {
    pub const fn from_minor_units(amount: i64) -> Self {
        Self(amount)
    }

    pub const fn from_major_units(amount: i64) -> Self {
        Self(amount * MINOR_UNITS_PER_MAJOR)
    }

    /// Converts a decimal amount as submitted by clients.
    ///
    /// Returns `None` for amounts that are not finite or negative.
    pub fn try_from_decimal(amount: f64) -> Option<Self> {
        if !amount.is_finite() || amount < 0.0 {
            return None;
        }
        let minor = (amount * MINOR_UNITS_PER_MAJOR as f64).round();
        if minor > i64::MAX as f64 {
            return None;
        }
        Some(Self(minor as i64))
    }

    pub fn to_decimal(self) -> f64 {
        self.0 as f64 / MINOR_UNITS_PER_MAJOR as f64
    }

    pub const fn minor_units(self) -> i64 {
        self.0
    }

    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{:02}",
            self.0 / MINOR_UNITS_PER_MAJOR,
            (self.0 % MINOR_UNITS_PER_MAJOR).abs()
        )
    }
}

/// A named price, e.g. "weekend" or "10 lessons".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceTier {
    pub name: String,
    pub price: Option<Price>,
}

/// The price that represents a list of tiers if no
/// explicit price has been given: the first tier with a price.
pub fn first_tier_price(tiers: &[PriceTier]) -> Option<Price> {
    tiers.iter().find_map(|tier| tier.price)
}
