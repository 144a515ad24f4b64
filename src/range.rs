use std::path::Path;

use crate::error::{DataError, Result};
use crate::structs::{DateRange, Symbol, TimeSeries};

pub const NO_SELECTION: &str = "Select a stock";

/// Earliest and latest dates available for `symbol`.
pub fn resolve_range(dir: &Path, symbol: &Symbol) -> Result<DateRange> {
    let series = TimeSeries::load(dir, symbol)?;
    series
        .range()
        .ok_or_else(|| DataError::EmptySeries(symbol.to_string()))
}

/// Text for the "Available Date Range" field.
pub fn describe_range(dir: &Path, symbol: Option<&str>) -> Result<String> {
    let symbol = match symbol.map(Symbol::parse) {
        None | Some(Err(DataError::NoSymbol)) => return Ok(NO_SELECTION.to_string()),
        Some(parsed) => parsed?,
    };
    Ok(resolve_range(dir, &symbol)?.to_string())
}
