//! Requested limits and a carrier's supported limit sets.

use super::nearest::{SelectionError, select_nearest};
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One axis of a compound limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LimitAxis {
    PerOccurrence,
    Aggregate,
    EachAccident,
    DiseaseEachEmployee,
    DiseasePolicy,
}

impl LimitAxis {
    pub fn as_str(&self) -> &'static str {
        match self {
            LimitAxis::PerOccurrence => "per_occurrence",
            LimitAxis::Aggregate => "aggregate",
            LimitAxis::EachAccident => "each_accident",
            LimitAxis::DiseaseEachEmployee => "disease_each_employee",
            LimitAxis::DiseasePolicy => "disease_policy",
        }
    }
}

impl std::fmt::Display for LimitAxis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for LimitAxis {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "per_occurrence" => LimitAxis::PerOccurrence,
            "aggregate" => LimitAxis::Aggregate,
            "each_accident" => LimitAxis::EachAccident,
            "disease_each_employee" => LimitAxis::DiseaseEachEmployee,
            "disease_policy" => LimitAxis::DiseasePolicy,
            other => return Err(DomainError::UnknownLimitAxis(other.to_string())),
        })
    }
}

/// Requested or returned limits, one amount per axis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Limits(BTreeMap<LimitAxis, u64>);

impl Limits {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, axis: LimitAxis, amount: u64) -> Self {
        self.0.insert(axis, amount);
        self
    }

    pub fn get(&self, axis: LimitAxis) -> Option<u64> {
        self.0.get(&axis).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (LimitAxis, u64)> + '_ {
        self.0.iter().map(|(axis, amount)| (*axis, *amount))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The discrete limit and deductible values one carrier writes for one
/// policy type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportedLimits {
    #[serde(default)]
    pub axes: BTreeMap<LimitAxis, Vec<u64>>,
    #[serde(default)]
    pub deductibles: Vec<u64>,
}

impl SupportedLimits {
    pub fn with_axis(mut self, axis: LimitAxis, mut values: Vec<u64>) -> Self {
        values.sort_unstable();
        values.dedup();
        self.axes.insert(axis, values);
        self
    }

    pub fn with_deductibles(mut self, mut values: Vec<u64>) -> Self {
        values.sort_unstable();
        values.dedup();
        self.deductibles = values;
        self
    }

    /// Snap every requested axis independently onto its own supported set.
    ///
    /// Axes the carrier does not list are passed through untouched.
    pub fn select_limits(&self, requested: &Limits) -> Result<Limits, SelectionError> {
        let mut selected = Limits::new();
        for (axis, amount) in requested.iter() {
            let value = match self.axes.get(&axis) {
                Some(supported) => select_nearest(amount, supported)?,
                None => amount,
            };
            selected = selected.with(axis, value);
        }
        Ok(selected)
    }

    /// Snap a flat deductible. `None` when the carrier lists no deductibles.
    pub fn select_deductible(&self, requested: u64) -> Result<Option<u64>, SelectionError> {
        if self.deductibles.is_empty() {
            return Ok(None);
        }
        select_nearest(requested, &self.deductibles).map(Some)
    }
}
