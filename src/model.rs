// Core structs: Row, Table, error enums
use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::utils::parse_date;

/// Closing price column in a price row.
pub const CLOSE_FIELD: usize = 4;
/// Payout amount column in a dividend row.
pub const DIVIDEND_FIELD: usize = 1;

/// One record from the source file. Field 0 is an ISO-8601 date,
/// the remaining fields are decimal-formatted numbers (open, high,
/// low, close, adjusted close and volume for price rows; the payout
/// amount for dividend rows).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub fields: Vec<String>,
}

impl Row {
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    /// Parsed date from field 0.
    pub fn date(&self) -> Result<NaiveDate, AnalyticsError> {
        let text = self.fields.first().ok_or(AnalyticsError::MissingField(0))?;
        Ok(parse_date(text)?)
    }

    /// Field `idx` parsed as an exact decimal.
    pub fn decimal(&self, idx: usize) -> Result<Decimal, AnalyticsError> {
        let text = self.fields.get(idx).ok_or(AnalyticsError::MissingField(idx))?;
        Ok(text.parse::<Decimal>()?)
    }

    /// True when any field contains `needle` as a substring.
    pub fn contains(&self, needle: &str) -> bool {
        self.fields.iter().any(|field| field.contains(needle))
    }
}

/// An in-memory source file: rows in file order, immutable once
/// loaded and held for the process lifetime.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub rows: Vec<Row>,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read source file: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum AnalyticsError {
    #[error("malformed date field: {0}")]
    Date(#[from] chrono::ParseError),
    #[error("malformed numeric field: {0}")]
    Number(#[from] rust_decimal::Error),
    #[error("invalid year argument: {0}")]
    Year(#[from] std::num::ParseIntError),
    #[error("row has no field {0}")]
    MissingField(usize),
}
