//! Pricing

use rusty_money::{Money, MoneyError, iso::Currency};
use thiserror::Error;

/// Errors that can occur while calculating line or cart totals.
#[derive(Debug, Error, PartialEq)]
pub enum PricingError {
    /// Multiplying a price by a quantity overflowed.
    #[error("line total overflowed for {quantity} x {minor_units} minor units")]
    Overflow {
        /// Unit price in minor units
        minor_units: i64,
        /// Quantity on the line
        quantity: u32,
    },

    /// Summing line totals overflowed.
    #[error("total overflowed after {minor_units} minor units")]
    TotalOverflow {
        /// Running total in minor units before the failing line
        minor_units: i64,
    },

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// An amount given in whole currency units (`85_000` naira), saturating at the
/// largest representable minor amount.
pub fn whole_units(amount: i64, currency: &Currency) -> Money<'_, Currency> {
    let scale = 10_i64.saturating_pow(currency.exponent);

    Money::from_minor(amount.saturating_mul(scale), currency)
}

/// Price of `quantity` units at `price`.
///
/// # Errors
///
/// Returns [`PricingError::Overflow`] if the product does not fit in minor units.
pub fn line_total<'a>(
    price: &Money<'a, Currency>,
    quantity: u32,
) -> Result<Money<'a, Currency>, PricingError> {
    let minor_units = price.to_minor_units();

    let total = minor_units
        .checked_mul(i64::from(quantity))
        .ok_or(PricingError::Overflow {
            minor_units,
            quantity,
        })?;

    Ok(Money::from_minor(total, price.currency()))
}

/// Sums `(price, quantity)` pairs, starting from zero in `currency`.
///
/// # Errors
///
/// - [`PricingError::Overflow`]: a line total does not fit in minor units.
/// - [`PricingError::TotalOverflow`]: the sum does not fit in minor units.
/// - [`PricingError::Money`]: a line is priced in a different currency.
pub fn total_price<'a, 'b, I>(
    lines: I,
    currency: &'a Currency,
) -> Result<Money<'a, Currency>, PricingError>
where
    'a: 'b,
    I: IntoIterator<Item = (&'b Money<'a, Currency>, u32)>,
{
    let total = lines
        .into_iter()
        .try_fold(0_i64, |acc, (price, quantity)| {
            if price.currency() != currency {
                return Err(PricingError::Money(MoneyError::CurrencyMismatch {
                    expected: currency.iso_alpha_code,
                    actual: price.currency().iso_alpha_code,
                }));
            }

            acc.checked_add(line_total(price, quantity)?.to_minor_units())
                .ok_or(PricingError::TotalOverflow { minor_units: acc })
        })?;

    Ok(Money::from_minor(total, currency))
}

/// Formats an amount for display: currency symbol, thousands separators, and
/// minor units only when non-zero (`₦85,000`, `£12.50`).
pub fn format_amount(amount: &Money<'_, Currency>) -> String {
    let currency = amount.currency();
    let minor_units = amount.to_minor_units();
    let scale = 10_i64.saturating_pow(currency.exponent);

    let sign = if minor_units < 0 { "-" } else { "" };
    let magnitude = minor_units.unsigned_abs();
    let scale = scale.unsigned_abs().max(1);
    let major = magnitude / scale;
    let minor = magnitude % scale;

    let mut formatted = format!("{sign}{}{}", currency.symbol, group_thousands(major));

    if minor != 0 {
        formatted.push_str(&format!(
            ".{minor:0width$}",
            width = usize::try_from(currency.exponent).unwrap_or(2)
        ));
    }

    formatted
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (idx, digit) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }

        grouped.push(digit);
    }

    grouped
}
