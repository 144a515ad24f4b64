mod projection;

pub use projection::{format_currency, project_capital, PLACEHOLDER_MULTIPLIER};
