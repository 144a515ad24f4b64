use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DataError, Result};
use crate::loader;
use crate::structs::{DateRange, PricePoint, Symbol};

/// Full price history for one symbol, in file order.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct TimeSeries {
    symbol: Symbol,
    data: Vec<PricePoint>,
}

impl TimeSeries {
    pub fn new(symbol: Symbol, data: Vec<PricePoint>) -> Self {
        Self { symbol, data }
    }

    /// Reads `<dir>/<symbol>.csv`. A missing file is `MissingSymbol`.
    pub fn load(dir: &Path, symbol: &Symbol) -> Result<Self> {
        let path = symbol.file_in(dir);
        if !path.is_file() {
            return Err(DataError::MissingSymbol {
                symbol: symbol.to_string(),
                path,
            });
        }
        let data = loader::load_points(&path)?;
        Ok(Self::new(symbol.clone(), data))
    }

    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    pub fn data(&self) -> &[PricePoint] {
        &self.data
    }

    /// Earliest and latest dates present, regardless of row order.
    pub fn range(&self) -> Option<DateRange> {
        let first = self.data.first()?.date;
        let (min, max) = self
            .data
            .iter()
            .fold((first, first), |(lo, hi), p| (lo.min(p.date), hi.max(p.date)));
        Some(DateRange::new(min, max))
    }

    /// Points inside `window`, keeping file order.
    pub fn between(&self, window: &DateRange) -> Vec<PricePoint> {
        self.data
            .iter()
            .filter(|p| window.contains_timestamp(p.timestamp()))
            .copied()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn point(day: u32, close: f64) -> PricePoint {
        PricePoint::new(NaiveDate::from_ymd_opt(2020, 1, day).unwrap(), close)
    }

    fn series() -> TimeSeries {
        TimeSeries::new(
            Symbol::parse("MSFT").unwrap(),
            vec![point(4, 4.0), point(1, 1.0), point(9, 9.0), point(2, 2.0)],
        )
    }

    #[test]
    fn range_ignores_row_order() {
        let range = series().range().unwrap();
        assert_eq!(range.start(), NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
        assert_eq!(range.end(), NaiveDate::from_ymd_opt(2020, 1, 9).unwrap());
    }

    #[test]
    fn empty_series_has_no_range() {
        let empty = TimeSeries::new(Symbol::parse("X").unwrap(), vec![]);
        assert_eq!(empty.range(), None);
    }

    #[test]
    fn between_filters_inclusively_in_file_order() {
        let window = DateRange::new(
            NaiveDate::from_ymd_opt(2020, 1, 2).unwrap(),
            NaiveDate::from_ymd_opt(2020, 1, 4).unwrap(),
        );
        let picked = series().between(&window);
        assert_eq!(picked, vec![point(4, 4.0), point(2, 2.0)]);
    }

    #[test]
    fn missing_file_is_missing_symbol() {
        let dir = tempfile::tempdir().unwrap();
        let err = TimeSeries::load(dir.path(), &Symbol::parse("NOPE").unwrap()).unwrap_err();
        assert!(matches!(err, DataError::MissingSymbol { .. }));
    }
}
