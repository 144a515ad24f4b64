mod point;
mod symbol;
mod time_range;
mod time_series;

pub use point::PricePoint;
pub use symbol::{Symbol, DATA_EXTENSION};
pub use time_range::DateRange;
pub use time_series::TimeSeries;
