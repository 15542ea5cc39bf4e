//! Pricing
//!
//! Tax arithmetic for catalog items. All calculations run on minor units
//! (cents); floats never touch money.

use decimal_percentage::Percentage;
use rust_decimal::{
    Decimal, RoundingStrategy,
    prelude::{FromPrimitive, ToPrimitive},
};
use rusty_money::{Money, iso::Currency};
use thiserror::Error;

/// Errors specific to price calculations.
#[derive(Debug, Error)]
pub enum PricingError {
    /// Percentage calculation could not be safely converted.
    #[error("percentage conversion overflowed or was not finite")]
    PercentConversion,
}

/// Combined state and city sales tax rate applied to taxable items (8.875%).
pub fn sales_tax_rate() -> Percentage {
    Percentage::from(0.08875)
}

/// Calculate a percentage of a minor unit amount, rounded half-away-from-zero
/// to whole minor units.
///
/// # Errors
///
/// Returns an error if:
/// - The percentage calculation overflows or cannot be safely represented (`PricingError::PercentConversion`).
pub fn percent_of_minor(percent: &Percentage, minor: i64) -> Result<i64, PricingError> {
    let minor = Decimal::from_i64(minor).ok_or(PricingError::PercentConversion)?;

    ((*percent) * Decimal::ONE) // decimal_percentage crate doesn't actually expose the underlying Decimal
        .checked_mul(minor)
        .ok_or(PricingError::PercentConversion)?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .ok_or(PricingError::PercentConversion)
}

/// Calculate the tax-inclusive price for an item.
///
/// Taxable items pay [`sales_tax_rate`] on top of the shelf price, rounded to
/// whole cents; exempt items keep their shelf price unchanged.
///
/// # Errors
///
/// Returns a [`PricingError`] if the tax calculation overflows.
pub fn full_price<'a>(
    price: &Money<'a, Currency>,
    taxable: bool,
) -> Result<Money<'a, Currency>, PricingError> {
    if !taxable {
        return Ok(*price);
    }

    let minor = price.to_minor_units();

    let taxed = minor
        .checked_add(percent_of_minor(&sales_tax_rate(), minor)?)
        .ok_or(PricingError::PercentConversion)?;

    Ok(Money::from_minor(taxed, price.currency()))
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::USD;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn percent_of_minor_overflow_returns_error() {
        let percent = Percentage::from(2.0);
        let result = percent_of_minor(&percent, i64::MAX);

        assert!(matches!(result, Err(PricingError::PercentConversion)));
    }

    #[test]
    fn percent_of_minor_calculates_correctly() -> TestResult {
        let percent = Percentage::from(0.25);
        let result = percent_of_minor(&percent, 200)?;

        assert_eq!(result, 50);

        Ok(())
    }

    #[test]
    fn full_price_of_taxable_dollar_is_one_oh_nine() -> TestResult {
        let price = Money::from_minor(100, USD);
        let taxed = full_price(&price, true)?;

        assert_eq!(taxed, Money::from_minor(109, USD));

        Ok(())
    }

    #[test]
    fn full_price_rounds_sub_cent_tax_half_away_from_zero() -> TestResult {
        // 199 * 0.08875 = 17.66 cents, which rounds to 18.
        let price = Money::from_minor(199, USD);
        let taxed = full_price(&price, true)?;

        assert_eq!(taxed, Money::from_minor(217, USD));

        Ok(())
    }

    #[test]
    fn full_price_of_exempt_item_is_unchanged() -> TestResult {
        let price = Money::from_minor(1149, USD);
        let untaxed = full_price(&price, false)?;

        assert_eq!(untaxed, price);

        Ok(())
    }

    #[test]
    fn full_price_of_zero_is_zero() -> TestResult {
        let price = Money::from_minor(0, USD);

        assert_eq!(full_price(&price, true)?, Money::from_minor(0, USD));

        Ok(())
    }
}
