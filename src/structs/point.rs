use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// One observation of a series: when it was taken and its closing price.
///
/// Date-only rows are stamped at midnight.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub close: f64,
}

impl PricePoint {
    pub fn new(date: NaiveDate, close: f64) -> Self {
        Self {
            date,
            time: NaiveTime::MIN,
            close,
        }
    }

    pub fn at(timestamp: NaiveDateTime, close: f64) -> Self {
        Self {
            date: timestamp.date(),
            time: timestamp.time(),
            close,
        }
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }
}
