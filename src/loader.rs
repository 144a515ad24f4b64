//! Reads per-symbol price files.
//!
//! A file needs a `Date` column and a `Close` column; anything else in the
//! row (Open, High, Volume, ...) is ignored. Rows keep their file order.

use std::io;
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use csv::StringRecord;

use crate::error::{DataError, Result};
use crate::structs::PricePoint;

pub const DATE_COLUMN: &str = "Date";
pub const CLOSE_COLUMN: &str = "Close";

pub const DATE_FORMAT: &str = "%Y-%m-%d";
const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Accepts `2020-01-03` (taken as midnight) as well as `2020-01-03 16:00:00`.
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .map(|d| d.and_time(NaiveTime::MIN))
        .or_else(|_| NaiveDateTime::parse_from_str(s, DATE_TIME_FORMAT))
        .ok()
}

/// Calendar date part of [`parse_timestamp`].
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    parse_timestamp(s).map(|dt| dt.date())
}

pub fn load_points(path: &Path) -> Result<Vec<PricePoint>> {
    let reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_path(path)?;
    read_points(reader)
}

pub fn read_points<R: io::Read>(mut reader: csv::Reader<R>) -> Result<Vec<PricePoint>> {
    let headers = reader.headers()?.clone();
    let date_col = column(&headers, DATE_COLUMN)?;
    let close_col = column(&headers, CLOSE_COLUMN)?;

    let mut points = Vec::new();
    for result in reader.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();

        let raw_date = record.get(date_col).unwrap_or("");
        let timestamp = parse_timestamp(raw_date).ok_or_else(|| DataError::UnparseableDate {
            value: raw_date.to_string(),
            line,
        })?;

        let raw_close = record.get(close_col).unwrap_or("");
        let close = raw_close
            .parse::<f64>()
            .map_err(|_| DataError::UnparseablePrice {
                value: raw_close.to_string(),
                line,
            })?;

        points.push(PricePoint::at(timestamp, close));
    }
    Ok(points)
}

fn column(headers: &StringRecord, name: &'static str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or(DataError::MissingColumn(name))
}
