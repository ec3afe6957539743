//! Transaction types for the change maker
//!
//! This module defines the validated transaction built from owed/paid
//! amount text. A transaction is ephemeral: it is parsed, its change is
//! decomposed, and it is dropped. Nothing is persisted.
//!
//! # Rounding policy
//!
//! Minor units are derived from decimal amounts by multiplying by 100
//! and rounding half away from zero (the usual commercial rule). The
//! change is rounded from the decimal difference `paid - owed`, never
//! computed as a difference of two already-rounded amounts, so sub-cent
//! inputs cannot leak a spurious cent into the change.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

use super::currency::MinorUnits;
use super::error::ChangeError;

/// A validated transaction awaiting change decomposition
///
/// Invariants: all amounts are non-negative and paid covers owed.
/// `Transaction::parse` is the only constructor, so violating inputs
/// never produce a value of this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transaction {
    /// Amount owed, in minor units
    pub owed_minor_units: MinorUnits,

    /// Amount paid, in minor units
    pub paid_minor_units: MinorUnits,

    /// Change due, in minor units, rounded from the decimal difference
    pub change_minor_units: MinorUnits,
}

impl Transaction {
    /// Parse owed and paid amounts from decimal text
    ///
    /// Inputs are trimmed before parsing. Amounts must be plain decimal
    /// numbers; scientific notation, infinities and negative values are
    /// rejected. Sufficiency is checked on the exact decimal values,
    /// before any rounding.
    ///
    /// # Arguments
    ///
    /// * `owed_text` - The amount owed, e.g. "2.13"
    /// * `paid_text` - The amount paid, e.g. "3.00"
    ///
    /// # Errors
    ///
    /// * `InvalidNumberFormat` - an input does not parse, is negative,
    ///   or does not fit in 64-bit minor units
    /// * `InsufficientPayment` - paid is less than owed
    pub fn parse(owed_text: &str, paid_text: &str) -> Result<Self, ChangeError> {
        let owed = parse_amount(owed_text)?;
        let paid = parse_amount(paid_text)?;

        if paid < owed {
            return Err(ChangeError::insufficient_payment(owed, paid));
        }

        Ok(Transaction {
            owed_minor_units: to_minor_units(owed, owed_text)?,
            paid_minor_units: to_minor_units(paid, paid_text)?,
            change_minor_units: to_minor_units(paid - owed, paid_text)?,
        })
    }
}

/// Parse one amount as a non-negative decimal
fn parse_amount(text: &str) -> Result<Decimal, ChangeError> {
    let trimmed = text.trim();
    let amount =
        Decimal::from_str(trimmed).map_err(|_| ChangeError::invalid_number_format(trimmed))?;

    if amount < Decimal::ZERO {
        return Err(ChangeError::invalid_number_format(trimmed));
    }

    Ok(amount)
}

/// Convert a decimal major-unit amount to minor units
///
/// Multiplies by 100 and rounds half away from zero. Amounts whose
/// minor units do not fit in i64 are reported as invalid input rather
/// than panicking.
fn to_minor_units(amount: Decimal, input: &str) -> Result<MinorUnits, ChangeError> {
    amount
        .checked_mul(Decimal::ONE_HUNDRED)
        .map(|cents| cents.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|cents| cents.to_i64())
        .ok_or_else(|| ChangeError::invalid_number_format(input.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::exact_cents("2.13", "3.00", 213, 300, 87)]
    #[case::whole_amounts("5", "10", 500, 1000, 500)]
    #[case::no_change("5.00", "5.00", 500, 500, 0)]
    #[case::zero_owed("0", "0.75", 0, 75, 75)]
    #[case::whitespace_trimmed("  2.13  ", " 3.00", 213, 300, 87)]
    fn test_parse_valid(
        #[case] owed: &str,
        #[case] paid: &str,
        #[case] owed_minor: MinorUnits,
        #[case] paid_minor: MinorUnits,
        #[case] change_minor: MinorUnits,
    ) {
        let transaction = Transaction::parse(owed, paid).unwrap();
        assert_eq!(transaction.owed_minor_units, owed_minor);
        assert_eq!(transaction.paid_minor_units, paid_minor);
        assert_eq!(transaction.change_minor_units, change_minor);
    }

    #[rstest]
    #[case::alphabetic_owed("abc", "3.00", "abc")]
    #[case::alphabetic_paid("3.00", "xyz", "xyz")]
    #[case::empty_owed("", "3.00", "")]
    #[case::double_dot("1.2.3", "3.00", "1.2.3")]
    #[case::scientific_notation("1e3", "2000", "1e3")]
    #[case::negative_owed("-1.00", "2.00", "-1.00")]
    #[case::negative_paid("2.00", "-1.00", "-1.00")]
    fn test_parse_invalid_number(#[case] owed: &str, #[case] paid: &str, #[case] input: &str) {
        let error = Transaction::parse(owed, paid).unwrap_err();
        assert_eq!(
            error,
            ChangeError::InvalidNumberFormat {
                input: input.to_string()
            }
        );
    }

    #[test]
    fn test_parse_insufficient_payment() {
        let error = Transaction::parse("5.00", "3.00").unwrap_err();
        assert!(matches!(error, ChangeError::InsufficientPayment { .. }));
        assert_eq!(
            error.to_string(),
            "Insufficient payment: paid 3.00, owed 5.00"
        );
    }

    #[test]
    fn test_sub_cent_amounts_round_half_away_from_zero() {
        // 200.5 owed cents rounds up to 201; the change (0.995 major
        // units) rounds from its own difference to exactly 100.
        let transaction = Transaction::parse("2.005", "3.00").unwrap();
        assert_eq!(transaction.owed_minor_units, 201);
        assert_eq!(transaction.paid_minor_units, 300);
        assert_eq!(transaction.change_minor_units, 100);
    }

    #[test]
    fn test_change_rounds_from_difference_not_rounded_minors() {
        // Rounded minors differ by one cent, but the exact difference
        // (0.004) rounds to zero change.
        let transaction = Transaction::parse("1.004", "1.008").unwrap();
        assert_eq!(transaction.owed_minor_units, 100);
        assert_eq!(transaction.paid_minor_units, 101);
        assert_eq!(transaction.change_minor_units, 0);
    }

    #[test]
    fn test_amount_too_large_for_minor_units() {
        let error = Transaction::parse("79000000000000000000", "79000000000000000001").unwrap_err();
        assert!(matches!(error, ChangeError::InvalidNumberFormat { .. }));
    }

    #[test]
    fn test_sufficiency_compared_before_rounding() {
        // Both round to the same minor amount, but paid is a hair short
        // of owed as a decimal.
        let error = Transaction::parse("1.001", "1.0005").unwrap_err();
        assert!(matches!(error, ChangeError::InsufficientPayment { .. }));
    }
}
