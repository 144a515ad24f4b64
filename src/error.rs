use std::path::PathBuf;

use thiserror::Error;

/// Failures while locating or reading a symbol's price file.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("no symbol supplied")]
    NoSymbol,
    #[error("invalid symbol: {0:?}")]
    InvalidSymbol(String),
    #[error("no price file for symbol {symbol} at {}", path.display())]
    MissingSymbol { symbol: String, path: PathBuf },
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("unparseable date {value:?} on line {line}")]
    UnparseableDate { value: String, line: u64 },
    #[error("capital {0} is too large to project")]
    CapitalOutOfRange(rust_decimal::Decimal),
    #[error("unparseable date input {0:?}, expected YYYY-MM-DD")]
    InvalidDateInput(String),
    #[error("unparseable close price {value:?} on line {line}")]
    UnparseablePrice { value: String, line: u64 },
    #[error("missing required column: {0}")]
    MissingColumn(&'static str),
    #[error("price file for {0} has no rows")]
    EmptySeries(String),
}

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("cannot chart an empty series")]
    NoPoints,
    #[error("failed to render chart: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, DataError>;
