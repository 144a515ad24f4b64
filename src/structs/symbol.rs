use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::DataError;

pub const DATA_EXTENSION: &str = "csv";

/// Ticker identifier; maps one-to-one onto `<dir>/<SYMBOL>.csv`.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    /// Rejects blanks and anything that could step outside the data directory.
    pub fn parse(raw: &str) -> Result<Self, DataError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(DataError::NoSymbol);
        }
        if raw == "." || raw == ".." || raw.contains(['/', '\\', '\0']) {
            return Err(DataError::InvalidSymbol(raw.to_string()));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn file_in(&self, dir: &Path) -> PathBuf {
        dir.join(format!("{}.{}", self.0, DATA_EXTENSION))
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
