// ============================================================================
// Config Multiplier
// Loads the integer scale factor from a plain-text config file
// ============================================================================

use std::fs;
use std::path::Path;

use crate::numeric::{NumericError, NumericResult};

/// Read and parse the multiplier at `path`.
///
/// The file is read in full on every call; there is no caching, so external
/// modification is visible to the next call. Surrounding whitespace is
/// trimmed and the remainder parsed as a base-10, optionally signed integer.
/// No other format is recognized.
pub(crate) fn load_multiplier(path: &Path) -> NumericResult<i32> {
    let raw = fs::read_to_string(path).map_err(|source| NumericError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    let multiplier = raw
        .trim()
        .parse::<i32>()
        .map_err(|source| NumericError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
    tracing::debug!("loaded multiplier {} from {}", multiplier, path.display());
    Ok(multiplier)
}

/// Multiply `value` by the multiplier stored at `config_path`.
///
/// The product wraps on overflow, like [`crate::numeric::multiply`].
///
/// # Errors
/// Returns `ConfigRead` when the file cannot be read and `ConfigParse` when
/// its content is not a valid integer; both carry the file path and the
/// underlying cause.
pub fn multiply_with_config(value: i32, config_path: &Path) -> NumericResult<i32> {
    let multiplier = load_multiplier(config_path)?;
    Ok(value.wrapping_mul(multiplier))
}
