//! Conversion between stored integer cents and API decimal amounts.

use rust_decimal::{prelude::ToPrimitive, Decimal};

/// Converts a stored cent amount into a two-decimal money value.
pub fn from_cents(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

/// Converts a money value into whole cents.
///
/// Callers validate the scale first; any fraction of a cent is truncated.
///
/// # Returns
/// - `Some(i64)` - Amount in cents
/// - `None` - Amount does not fit in an `i64`
pub fn to_cents(amount: Decimal) -> Option<i64> {
    amount.checked_mul(Decimal::ONE_HUNDRED)?.trunc().to_i64()
}

/// Returns true when the value has at most two significant fractional digits.
pub fn has_valid_scale(amount: Decimal) -> bool {
    amount.normalize().scale() <= 2
}
