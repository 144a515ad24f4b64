use std::path::Path;

use tracing::{debug, warn};

use crate::structs::{Symbol, DATA_EXTENSION};

/// Symbols with a `<SYMBOL>.csv` file directly under `dir`, sorted.
///
/// Never fails: an unreadable or missing directory yields an empty list so
/// the form simply offers no choices.
pub fn list_symbols(dir: &Path) -> Vec<Symbol> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("symbol catalog {} unavailable: {}", dir.display(), e);
            return Vec::new();
        }
    };

    let mut symbols: Vec<Symbol> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().map(|t| t.is_file()).unwrap_or(false))
        .filter_map(|entry| {
            let path = entry.path();
            if path.extension()? != DATA_EXTENSION {
                return None;
            }
            Symbol::parse(path.file_stem()?.to_str()?).ok()
        })
        .collect();
    symbols.sort();

    debug!("found {} symbols in {}", symbols.len(), dir.display());
    symbols
}
