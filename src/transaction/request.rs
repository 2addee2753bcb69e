//! The raw input for a new transaction and the rules for validating it.

use std::fmt;

use serde::Deserialize;
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

use crate::{
    Error,
    transaction::{Amount, NewTransaction, TransactionKind},
};

const DATE_FORMAT: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

/// The text fields of the transaction form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// The amount field.
    Amount,
    /// The category field.
    Category,
    /// The date field.
    Date,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Amount => "amount",
            Field::Category => "category",
            Field::Date => "date",
        })
    }
}

/// The values entered in the transaction form, exactly as the user typed them.
///
/// Missing form fields deserialize to empty strings so that they are reported
/// as [Error::MissingField] rather than as a malformed request.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TransactionRequest {
    /// The amount, e.g. "12.50".
    #[serde(default)]
    pub amount: String,
    /// The category label, e.g. "Groceries".
    #[serde(default)]
    pub category: String,
    /// The date in the format `YYYY-MM-DD`.
    #[serde(default)]
    pub date: String,
    /// Whether money was earned or spent.
    #[serde(default)]
    pub kind: TransactionKind,
}

impl TransactionRequest {
    /// Create a request from raw field values.
    pub fn new(amount: &str, category: &str, date: &str, kind: TransactionKind) -> Self {
        Self {
            amount: amount.to_owned(),
            category: category.to_owned(),
            date: date.to_owned(),
            kind,
        }
    }

    /// Check the request and convert it into a [NewTransaction].
    ///
    /// The checks run in order and stop at the first failure:
    /// 1. amount, category and date must not be blank,
    /// 2. the amount must be a number greater than zero,
    /// 3. the date must be a real date in the format `YYYY-MM-DD`.
    ///
    /// The category is trimmed but otherwise kept as typed.
    ///
    /// # Errors
    /// Returns [Error::MissingField], [Error::InvalidAmount] or
    /// [Error::InvalidDate] for the first check that fails.
    pub fn validate(&self) -> Result<NewTransaction, Error> {
        let amount = self.amount.trim();
        let category = self.category.trim();
        let date = self.date.trim();

        for (field, value) in [
            (Field::Amount, amount),
            (Field::Category, category),
            (Field::Date, date),
        ] {
            if value.is_empty() {
                return Err(Error::MissingField(field));
            }
        }

        let amount = amount.parse::<Amount>()?;
        let date = parse_date(date)?;

        Ok(NewTransaction {
            amount,
            category: category.to_owned(),
            date,
            kind: self.kind,
        })
    }
}

/// Parse a date that must be written exactly as `YYYY-MM-DD`.
///
/// # Errors
/// Returns [Error::InvalidDate] if `text` does not have four year digits and
/// two month and day digits separated by dashes, or is not a calendar date
/// (e.g. "2024-02-30").
pub fn parse_date(text: &str) -> Result<Date, Error> {
    let is_iso_shape = text.len() == 10
        && text.bytes().enumerate().all(|(i, byte)| match i {
            4 | 7 => byte == b'-',
            _ => byte.is_ascii_digit(),
        });

    if !is_iso_shape {
        return Err(Error::InvalidDate(text.to_owned()));
    }

    Date::parse(text, DATE_FORMAT).map_err(|_| Error::InvalidDate(text.to_owned()))
}
