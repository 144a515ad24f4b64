use std::fmt;
use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::chart::Chart;
use crate::error::{DataError, Result};
use crate::loader;
use crate::simulation::{format_currency, project_capital};
use crate::structs::{DateRange, Symbol, TimeSeries};

pub const MISSING_INPUTS: &str = "Missing inputs";
pub const EMPTY_SELECTION: &str = "No data for selected range";

/// Raw form input. Empty strings count as absent.
#[derive(Deserialize, Clone, Debug, Default)]
pub struct ReportRequest {
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub capital: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

impl ReportRequest {
    pub fn new(symbol: &str, capital: &str, start_date: &str, end_date: &str) -> Self {
        Self {
            symbol: Some(symbol.to_string()),
            capital: Some(capital.to_string()),
            start_date: Some(start_date.to_string()),
            end_date: Some(end_date.to_string()),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    pub symbol: Symbol,
    pub initial_capital: Decimal,
    pub final_capital: Decimal,
    pub chart: Chart,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Symbol: {}", self.symbol)?;
        writeln!(f, "Initial Capital: {}", format_currency(self.initial_capital))?;
        write!(f, "Final Capital (demo): {}", format_currency(self.final_capital))
    }
}

/// What the results panel shows. Only `Ready` carries a chart.
#[derive(Clone, Debug, PartialEq)]
pub enum ReportOutcome {
    Ready(Report),
    MissingInputs,
    EmptySelection,
}

impl ReportOutcome {
    pub fn summary(&self) -> String {
        match self {
            ReportOutcome::Ready(report) => report.to_string(),
            ReportOutcome::MissingInputs => MISSING_INPUTS.to_string(),
            ReportOutcome::EmptySelection => EMPTY_SELECTION.to_string(),
        }
    }

    pub fn chart(&self) -> Option<&Chart> {
        match self {
            ReportOutcome::Ready(report) => Some(&report.chart),
            _ => None,
        }
    }
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn parse_input_date(raw: &str) -> Result<chrono::NaiveDate> {
    loader::parse_date(raw).ok_or_else(|| DataError::InvalidDateInput(raw.to_string()))
}

/// Builds the report for one form submission.
///
/// Missing fields and an empty window come back as outcomes; an unknown
/// symbol, a bad date or a broken price file are errors for the caller.
pub fn generate(dir: &Path, request: &ReportRequest) -> Result<ReportOutcome> {
    let (Some(raw_symbol), Some(raw_start), Some(raw_end)) = (
        present(&request.symbol),
        present(&request.start_date),
        present(&request.end_date),
    ) else {
        return Ok(ReportOutcome::MissingInputs);
    };
    let Some(initial_capital) = present(&request.capital).and_then(|c| c.parse::<Decimal>().ok())
    else {
        return Ok(ReportOutcome::MissingInputs);
    };

    let final_capital =
        project_capital(initial_capital).ok_or(DataError::CapitalOutOfRange(initial_capital))?;

    let symbol = Symbol::parse(raw_symbol)?;
    let series = TimeSeries::load(dir, &symbol)?;
    let window = DateRange::new(parse_input_date(raw_start)?, parse_input_date(raw_end)?);

    let points = series.between(&window);
    if points.is_empty() {
        return Ok(ReportOutcome::EmptySelection);
    }

    Ok(ReportOutcome::Ready(Report {
        final_capital,
        chart: Chart::price_history(&symbol, points),
        symbol,
        initial_capital,
    }))
}
