// ============================================================================
// Batch Scaling
// Applies the config multiplier to every element of a sequence or mapping
// ============================================================================

use std::collections::HashMap;
use std::path::Path;

use super::multiplier::load_multiplier;
use crate::numeric::{ElementRef, NumericError, NumericResult};

const I32_MAX: i64 = i32::MAX as i64;
const I32_MIN: i64 = i32::MIN as i64;

/// Scale one element, or `None` when the product would leave the 32-bit
/// range.
///
/// The bound comparisons are division-based and sign-aware: the operators
/// flip when the multiplier is negative, mirroring how division bounds
/// invert under a negative divisor. A zero multiplier needs no check.
fn scale_element(value: i32, multiplier: i64) -> Option<i32> {
    let v = value as i64;
    if multiplier > 0 {
        if v > I32_MAX / multiplier || v < I32_MIN / multiplier {
            return None;
        }
    } else if multiplier < 0 && (v < I32_MAX / multiplier || v > I32_MIN / multiplier) {
        return None;
    }
    Some((v * multiplier) as i32)
}

/// Scale every element of `numbers` by the multiplier at `config_path`.
///
/// Returns a new vector of the same length and order. The operation is
/// atomic: the first offending element fails the whole call and no partial
/// result is surfaced.
///
/// # Errors
/// - `InvalidInput` (value 0) when `numbers` is empty, before any file
///   access.
/// - The multiplier load failure, wrapped with "get multiplier" context.
/// - `ElementOverflow` naming the index of the first element whose scaled
///   value would leave the 32-bit range.
pub fn multiply_slice(numbers: &[i32], config_path: &Path) -> NumericResult<Vec<i32>> {
    if numbers.is_empty() {
        return Err(NumericError::InvalidInput { value: 0.0 });
    }
    let multiplier = load_multiplier(config_path).map_err(|source| NumericError::Multiplier {
        source: Box::new(source),
    })?;

    let m = multiplier as i64;
    let mut result = Vec::with_capacity(numbers.len());
    for (index, &n) in numbers.iter().enumerate() {
        match scale_element(n, m) {
            Some(scaled) => result.push(scaled),
            None => {
                return Err(NumericError::ElementOverflow {
                    element: ElementRef::Index(index),
                    value: n,
                })
            }
        }
    }
    tracing::debug!("scaled {} elements by {}", result.len(), multiplier);
    Ok(result)
}

/// Scale every value of `values` by the multiplier at `config_path`.
///
/// Identical contract to [`multiply_slice`] over a mapping; the offending
/// key is named in the error instead of an index. Returns a new map.
///
/// # Errors
/// See [`multiply_slice`].
pub fn multiply_map(
    values: &HashMap<String, i32>,
    config_path: &Path,
) -> NumericResult<HashMap<String, i32>> {
    if values.is_empty() {
        return Err(NumericError::InvalidInput { value: 0.0 });
    }
    let multiplier = load_multiplier(config_path).map_err(|source| NumericError::Multiplier {
        source: Box::new(source),
    })?;

    let m = multiplier as i64;
    let mut result = HashMap::with_capacity(values.len());
    for (key, &value) in values {
        match scale_element(value, m) {
            Some(scaled) => {
                result.insert(key.clone(), scaled);
            }
            None => {
                return Err(NumericError::ElementOverflow {
                    element: ElementRef::Key(key.clone()),
                    value,
                })
            }
        }
    }
    tracing::debug!("scaled {} entries by {}", result.len(), multiplier);
    Ok(result)
}
