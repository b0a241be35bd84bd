//! Nearest-support selection.
//!
//! Carriers only write a handful of discrete limits and deductibles. A
//! requested value is snapped onto the closest value the carrier supports.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Supported set is empty")]
    EmptySupportedSet,

    #[error("Supported set is not ascending at index {0}")]
    NotAscending(usize),
}

/// Snap `requested` onto the nearest value of an ascending `supported` set.
///
/// - at or above the maximum: the maximum
/// - at or below the minimum: the minimum
/// - otherwise the closer bracketing value; an exact tie goes to the upper one
pub fn select_nearest(requested: u64, supported: &[u64]) -> Result<u64, SelectionError> {
    let (&min, &max) = match (supported.first(), supported.last()) {
        (Some(min), Some(max)) => (min, max),
        _ => return Err(SelectionError::EmptySupportedSet),
    };
    if let Some(index) = supported.windows(2).position(|pair| pair[0] > pair[1]) {
        return Err(SelectionError::NotAscending(index + 1));
    }

    let Some(upper_index) = supported.iter().position(|&value| value > requested) else {
        return Ok(max);
    };
    if upper_index == 0 {
        return Ok(min);
    }

    let lower = supported[upper_index - 1];
    let upper = supported[upper_index];
    if requested - lower < upper - requested {
        Ok(lower)
    } else {
        Ok(upper)
    }
}
