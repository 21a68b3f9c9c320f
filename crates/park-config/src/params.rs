//! CSV run-parameter loader.
//!
//! # CSV format
//!
//! ```csv
//! park_width,200
//! park_height,200
//! max_timesteps,400
//! initial_patrons,10
//! seed,42
//! ```
//!
//! Keys not listed here are ignored with a warning.  Keys that are absent
//! keep their [`ParkConfig::default`] values.

use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use park_core::ParkConfig;

use crate::{ConfigError, ConfigResult, data_rows};

/// Load run parameters from a file, starting from [`ParkConfig::default`].
pub fn load_params(path: &Path) -> ConfigResult<ParkConfig> {
    let file = std::fs::File::open(path).map_err(|source| ConfigError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    load_params_reader(file)
}

/// Like [`load_params`] but accepts any `Read` source.
///
/// The result is validated before it is returned.
pub fn load_params_reader<R: Read>(reader: R) -> ConfigResult<ParkConfig> {
    let mut config = ParkConfig::default();

    for (line, record) in data_rows(reader)? {
        let (Some(key), Some(value)) = (record.get(0), record.get(1)) else {
            return Err(ConfigError::Line {
                line,
                message: "expected `key,value`".into(),
            });
        };

        match key {
            "park_width"      => config.width = parse(key, value, line)?,
            "park_height"     => config.height = parse(key, value, line)?,
            "max_timesteps"   => config.max_ticks = parse(key, value, line)?,
            "initial_patrons" => config.initial_patrons = parse(key, value, line)?,
            "seed"            => config.seed = Some(parse(key, value, line)?),
            _ => tracing::warn!(line, key, "unknown parameter ignored"),
        }
    }

    config.validate()?;
    Ok(config)
}

fn parse<T: FromStr>(key: &str, value: &str, line: u64) -> ConfigResult<T> {
    value.parse().map_err(|_| ConfigError::Line {
        line,
        message: format!("invalid value {value:?} for {key}"),
    })
}
