//! `park-config` — loading park layouts and run parameters.
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`map`]      | `load_map` / `load_map_reader` — one ride per CSV row      |
//! | [`params`]   | `load_params` / `load_params_reader` — `key,value` rows    |
//! | [`defaults`] | `default_rides` — the layout used without a map file      |
//! | [`error`]    | `ConfigError`, `ConfigResult<T>`                          |
//!
//! Both file formats are header-less CSV.  Lines starting with `#` and blank
//! lines are skipped, and every field is trimmed.  Errors carry the 1-based
//! line number of the offending row.

use std::io::Read;

use csv::StringRecord;

pub mod defaults;
pub mod error;
pub mod map;
pub mod params;

#[cfg(test)]
mod tests;

pub use defaults::default_rides;
pub use error::{ConfigError, ConfigResult};
pub use map::{load_map, load_map_reader};
pub use params::{load_params, load_params_reader};

/// The data rows of `reader`, each paired with its 1-based physical line.
///
/// Blank lines and `#` comments are dropped here rather than by the csv
/// reader, so line numbers count every line of the file.  A row is one line;
/// quoted fields may not span lines.
pub(crate) fn data_rows<R: Read>(mut reader: R) -> ConfigResult<Vec<(u64, StringRecord)>> {
    let mut text = String::new();
    reader.read_to_string(&mut text).map_err(csv::Error::from)?;

    let mut rows = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut record = StringRecord::new();
        csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(line.as_bytes())
            .read_record(&mut record)?;
        rows.push((index as u64 + 1, record));
    }
    Ok(rows)
}

/// Strip the record/line prefix csv adds to deserialize errors; the caller
/// reports the line itself.
pub(crate) fn describe(err: &csv::Error) -> String {
    match err.kind() {
        csv::ErrorKind::Deserialize { err, .. } => err.to_string(),
        _ => err.to_string(),
    }
}
