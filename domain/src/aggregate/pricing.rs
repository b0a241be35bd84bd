//! Price-indication aggregation.

use crate::dispatch::task::TaskResult;
use crate::quote::entities::ApplicationId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aggregated indicative pricing across every eligible carrier.
///
/// When no carrier returned a usable price, `got_pricing` is false and all
/// price fields are `None`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PricingSummary {
    pub got_pricing: bool,
    /// At least one carrier declined the risk
    pub out_of_appetite: bool,
    /// At least one carrier failed or was unavailable
    pub pricing_error: bool,
    pub low_price: Option<Decimal>,
    pub high_price: Option<Decimal>,
    /// Mean of the usable prices
    pub price: Option<Decimal>,
    pub priced_count: usize,
}

impl PricingSummary {
    /// Reduce price results; tasks without a usable price are ignored for the
    /// min/max/mean.
    pub fn from_results(results: &[TaskResult]) -> Self {
        let prices: Vec<Decimal> = results
            .iter()
            .filter_map(|r| r.outcome.usable_price())
            .collect();

        let out_of_appetite = results.iter().any(|r| r.status().is_decline());
        let pricing_error = results.iter().any(|r| r.status().is_failure());

        let (Some(low), Some(high)) = (prices.iter().min(), prices.iter().max()) else {
            return Self {
                out_of_appetite,
                pricing_error,
                ..Self::default()
            };
        };

        let total: Decimal = prices.iter().copied().sum();
        let mean = (total / Decimal::from(prices.len())).round_dp(2);

        Self {
            got_pricing: true,
            out_of_appetite,
            pricing_error,
            low_price: Some(*low),
            high_price: Some(*high),
            price: Some(mean),
            priced_count: prices.len(),
        }
    }
}

/// Complete result of a pricing run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingReport {
    pub application_id: ApplicationId,
    pub summary: PricingSummary,
    pub results: Vec<TaskResult>,
}

impl PricingReport {
    pub fn new(application_id: ApplicationId, results: Vec<TaskResult>) -> Self {
        Self {
            application_id,
            summary: PricingSummary::from_results(&results),
            results,
        }
    }
}
