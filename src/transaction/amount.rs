//! Money types with exactly two fractional digits.
//!
//! Amounts are held as a whole number of cents so that sums computed by the
//! database are exact.

use std::{fmt, ops::Sub, str::FromStr};

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};

use crate::Error;

/// The number of fractional digits kept for money values.
const CENTS_SCALE: u32 = 2;

/// The largest amount of a single transaction in cents, 99999999.99.
///
/// At this size the database can sum roughly 900 million rows of one kind
/// before the running total leaves the range of `i64`.
pub const MAX_AMOUNT_CENTS: i64 = 9_999_999_999;

/// The amount of a single transaction, always greater than zero and at most
/// [MAX_AMOUNT_CENTS].
///
/// Parsing with [str::parse] applies the validation rules for user input:
/// the text must be a plain decimal number, it is rounded to the nearest cent
/// (half away from zero) and the rounded value must be in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(i64);

impl Amount {
    /// The largest amount accepted, 99999999.99.
    pub const MAX: Amount = Amount(MAX_AMOUNT_CENTS);

    /// Create an amount from a number of cents.
    ///
    /// # Errors
    /// Returns [Error::InvalidAmount] if `cents` is not greater than zero or
    /// is larger than [MAX_AMOUNT_CENTS].
    pub fn from_cents(cents: i64) -> Result<Self, Error> {
        if (1..=MAX_AMOUNT_CENTS).contains(&cents) {
            Ok(Self(cents))
        } else {
            Err(Error::InvalidAmount(Decimal::new(cents, CENTS_SCALE).to_string()))
        }
    }

    /// The amount as a whole number of cents.
    pub fn cents(&self) -> i64 {
        self.0
    }

    /// The amount as a decimal with two fractional digits.
    pub fn as_decimal(&self) -> Decimal {
        Decimal::new(self.0, CENTS_SCALE)
    }
}

impl FromStr for Amount {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let text = text.trim();
        let invalid = || Error::InvalidAmount(text.to_owned());

        let value = Decimal::from_str(text).map_err(|_| invalid())?;
        let cents = value
            .round_dp_with_strategy(CENTS_SCALE, RoundingStrategy::MidpointAwayFromZero)
            .checked_mul(Decimal::ONE_HUNDRED)
            .and_then(|cents| cents.to_i64())
            .ok_or_else(invalid)?;

        if !(1..=MAX_AMOUNT_CENTS).contains(&cents) {
            return Err(invalid());
        }

        Ok(Self(cents))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_decimal())
    }
}

impl ToSql for Amount {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.0))
    }
}

impl FromSql for Amount {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let cents = i64::column_result(value)?;

        Amount::from_cents(cents).map_err(|error| FromSqlError::Other(Box::new(error)))
    }
}

/// A sum of money with two fractional digits, e.g. the total income.
///
/// Unlike [Amount], a total may be zero or negative.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Total(i64);

impl Total {
    /// A total of zero.
    pub const ZERO: Total = Total(0);

    /// Create a total from a number of cents.
    pub fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// The total as a whole number of cents.
    pub fn cents(&self) -> i64 {
        self.0
    }

    /// The total as a decimal with two fractional digits.
    pub fn as_decimal(&self) -> Decimal {
        Decimal::new(self.0, CENTS_SCALE)
    }
}

impl From<Amount> for Total {
    fn from(amount: Amount) -> Self {
        Self(amount.0)
    }
}

impl Sub for Total {
    type Output = Total;

    fn sub(self, rhs: Self) -> Self::Output {
        Total(self.0 - rhs.0)
    }
}

impl fmt::Display for Total {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_decimal())
    }
}

impl FromSql for Total {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        i64::column_result(value).map(Total)
    }
}
