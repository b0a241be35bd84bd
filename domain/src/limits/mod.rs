//! Limits, deductibles and nearest-support selection.

pub mod nearest;
pub mod supported;

pub use nearest::{SelectionError, select_nearest};
pub use supported::{LimitAxis, Limits, SupportedLimits};
