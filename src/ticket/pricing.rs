//! Ticket prices in tenths of a unit
//!
//! Prices only ever take one decimal place, so they are kept as integer
//! tenths and never touch floating point.

use std::fmt;
use std::str::FromStr;

use crate::codec::attributes::AttributeSet;
use crate::io::configuration::{ATTRIBUTE_PRICE_TENTHS, BASE_PRICE_TENTHS, LOCKED_AMOUNT_TENTHS};
use crate::io::error::{GenerationError, Result, format_error, invalid_parameter};

/// Amount with one decimal place
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(u64);

impl Price {
    /// Wrap an amount given in tenths
    pub const fn from_tenths(tenths: u64) -> Self {
        Self(tenths)
    }

    /// Amount in tenths
    pub const fn tenths(self) -> u64 {
        self.0
    }

    /// Price of a ticket requesting `attributes`
    ///
    /// The base price plus a flat surcharge per requested attribute other
    /// than the tip, plus the tip in whole units.
    pub fn for_attributes(attributes: &AttributeSet) -> Self {
        let surcharge = attributes.priced_field_count() * ATTRIBUTE_PRICE_TENTHS;
        let tip = attributes.tip.map_or(0, |tip| u64::from(tip) * 10);
        Self(BASE_PRICE_TENTHS + surcharge + tip)
    }

    /// Total a payer sends: the price plus the amount locked with the ticket
    #[must_use]
    pub const fn with_locked_amount(self) -> Self {
        Self(self.0 + LOCKED_AMOUNT_TENTHS)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.0 / 10, self.0 % 10)
    }
}

impl FromStr for Price {
    type Err = GenerationError;

    /// Parse `"12"`, `"12.5"` or `"12.50"`; at most one significant decimal
    fn from_str(text: &str) -> Result<Self> {
        let invalid = || format_error("price", &format!("'{text}' is not a one-decimal amount"));
        let (whole, fraction) = text.trim().split_once('.').unwrap_or((text.trim(), ""));
        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        if !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let mut digits = fraction.bytes().map(|b| u64::from(b - b'0'));
        let tenth = digits.next().unwrap_or(0);
        if digits.any(|d| d != 0) {
            return Err(invalid());
        }

        let whole: u64 = whole.parse().map_err(|_overflow| invalid())?;
        whole
            .checked_mul(10)
            .and_then(|w| w.checked_add(tenth))
            .map(Self)
            .ok_or_else(invalid)
    }
}

/// Check a caller's expected payment against the computed price
///
/// Returns the ticket price on success.
///
/// # Errors
///
/// Returns an invalid parameter error unless `expected` equals the price
/// plus the locked amount
pub fn verify_expected_price(attributes: &AttributeSet, expected: Price) -> Result<Price> {
    let price = Price::for_attributes(attributes);
    if price.with_locked_amount() == expected {
        Ok(price)
    } else {
        Err(invalid_parameter(
            "expected_price",
            &expected,
            &format!("ticket costs {price} plus {} locked", Price(LOCKED_AMOUNT_TENTHS)),
        ))
    }
}
