//! Run Pricing use case
//!
//! Indicative pricing ignores tiers: every eligible adapter, pricing-only
//! carriers included, is asked once and the answers are reduced into a
//! [`PricingSummary`](quoting_domain::PricingSummary).

use super::run_quoting::{RunQuotingError, check_preconditions};
use super::shared::{AdapterCall, run_batch};
use crate::ports::quote_recorder::{NoQuoteRecorder, QuoteRecorder};
use crate::registry::AdapterRegistry;
use quoting_domain::{
    ApplicationId, ApplicationStatus, DispatchMode, PricingReport, QuoteRequestContext,
    build_task_set,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RunPricingError {
    #[error("Application {0} has no policies to price")]
    NoPolicies(ApplicationId),

    #[error("Application {application} is {status}, past its quotable window")]
    NotQuotable {
        application: ApplicationId,
        status: ApplicationStatus,
    },

    #[error("No eligible adapters for application {0}")]
    NoEligibleAdapters(ApplicationId),
}

impl From<RunQuotingError> for RunPricingError {
    fn from(error: RunQuotingError) -> Self {
        match error {
            RunQuotingError::NoPolicies(id) => RunPricingError::NoPolicies(id),
            RunQuotingError::NotQuotable {
                application,
                status,
            } => RunPricingError::NotQuotable {
                application,
                status,
            },
            RunQuotingError::NoEligibleAdapters(id) => RunPricingError::NoEligibleAdapters(id),
        }
    }
}

/// Use case for collecting price indications
pub struct RunPricingUseCase {
    registry: Arc<AdapterRegistry>,
    recorder: Arc<dyn QuoteRecorder>,
}

impl RunPricingUseCase {
    pub fn new(registry: Arc<AdapterRegistry>) -> Self {
        Self {
            registry,
            recorder: Arc::new(NoQuoteRecorder),
        }
    }

    pub fn with_recorder(mut self, recorder: Arc<dyn QuoteRecorder>) -> Self {
        self.recorder = recorder;
        self
    }

    pub async fn execute(
        &self,
        context: &QuoteRequestContext,
    ) -> Result<PricingReport, RunPricingError> {
        let application_id = context.application.id.clone();
        check_preconditions(context)?;

        let tasks = build_task_set(context, DispatchMode::Price);
        if tasks.is_empty() {
            warn!("No eligible pricing adapters for application {}", application_id);
            return Err(RunPricingError::NoEligibleAdapters(application_id));
        }

        info!(
            "Pricing application {} across {} tasks",
            application_id,
            tasks.len()
        );
        let results = run_batch(&self.registry, context, tasks, AdapterCall::Price, |result| {
            self.recorder.record_result(&application_id, result);
        })
        .await;

        let report = PricingReport::new(application_id, results);
        match (report.summary.low_price, report.summary.high_price) {
            (Some(low), Some(high)) => info!(
                "Pricing for {} ranges {} to {} over {} carriers",
                report.application_id, low, high, report.summary.priced_count
            ),
            _ => info!("No pricing available for {}", report.application_id),
        }
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::insurer_adapter::{AdapterError, AdapterFactory, InsurerAdapter};
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use quoting_domain::{
        AdapterKey, AdapterTask, Application, Capabilities, Insurer, InsurerPolicyConfig, Policy,
        PolicyType, QuoteOutcome, Tier,
    };
    use rust_decimal::Decimal;
    use std::sync::Mutex;

    /// Prices from `price`, and records whether `quote` was ever used instead
    struct PriceAdapter {
        answer: Option<QuoteOutcome>,
        quote_calls: Arc<Mutex<usize>>,
    }

    #[async_trait]
    impl InsurerAdapter for PriceAdapter {
        async fn quote(
            &self,
            _task: &AdapterTask,
            _context: &QuoteRequestContext,
        ) -> Result<QuoteOutcome, AdapterError> {
            *self.quote_calls.lock().unwrap() += 1;
            Err(AdapterError::Other("quote called during pricing".to_string()))
        }

        async fn price(
            &self,
            _task: &AdapterTask,
            _context: &QuoteRequestContext,
        ) -> Result<QuoteOutcome, AdapterError> {
            self.answer.clone().ok_or(AdapterError::Timeout)
        }
    }

    struct Setup {
        insurers: Vec<Insurer>,
        registry: AdapterRegistry,
        quote_calls: Arc<Mutex<usize>>,
    }

    impl Setup {
        fn new() -> Self {
            Self {
                insurers: Vec::new(),
                registry: AdapterRegistry::new(),
                quote_calls: Arc::new(Mutex::new(0)),
            }
        }

        fn carrier(mut self, slug: &str, tier: u32, config: InsurerPolicyConfig, answer: Option<QuoteOutcome>) -> Self {
            let config = config.with_tier(Tier::new(tier).unwrap());
            self.insurers
                .push(Insurer::new(slug, slug, slug).supporting(PolicyType::Gl, config));
            let quote_calls = Arc::clone(&self.quote_calls);
            let factory: AdapterFactory = Arc::new(move || {
                Box::new(PriceAdapter {
                    answer: answer.clone(),
                    quote_calls: Arc::clone(&quote_calls),
                }) as Box<dyn InsurerAdapter>
            });
            self.registry = self
                .registry
                .register(AdapterKey::new(slug, PolicyType::Gl), factory)
                .unwrap();
            self
        }

        fn context(&self) -> QuoteRequestContext {
            QuoteRequestContext::new(
                Application::new("app-7", "Harbor Cafe", "agency-2"),
                vec![Policy::new(
                    PolicyType::Gl,
                    NaiveDate::from_ymd_opt(2026, 12, 1).unwrap(),
                )],
                self.insurers.clone(),
            )
        }

        async fn run(&self) -> Result<PricingReport, RunPricingError> {
            RunPricingUseCase::new(Arc::new(self.registry.clone()))
                .execute(&self.context())
                .await
        }
    }

    fn price(amount: i64) -> Option<QuoteOutcome> {
        Some(QuoteOutcome::quoted(Decimal::from(amount)))
    }

    #[tokio::test]
    async fn test_every_tier_runs_once() {
        let setup = Setup::new()
            .carrier("alpha", 1, InsurerPolicyConfig::default(), price(1_000))
            .carrier("beta", 3, InsurerPolicyConfig::default(), price(2_000))
            .carrier("gamma", 7, InsurerPolicyConfig::default(), price(1_500));

        let report = setup.run().await.unwrap();

        assert_eq!(report.results.len(), 3);
        assert!(report.summary.got_pricing);
        assert_eq!(report.summary.low_price, Some(Decimal::from(1_000)));
        assert_eq!(report.summary.high_price, Some(Decimal::from(2_000)));
        assert_eq!(report.summary.price, Some(Decimal::from(1_500)));
        assert_eq!(*setup.quote_calls.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_pricing_only_carriers_are_included() {
        let pricing_only = InsurerPolicyConfig::default().with_capabilities(Capabilities {
            pricing_only: true,
            ..Capabilities::default()
        });
        let setup = Setup::new().carrier("alpha", 1, pricing_only, price(800));

        let report = setup.run().await.unwrap();

        assert_eq!(report.summary.priced_count, 1);
        assert_eq!(report.summary.price, Some(Decimal::from(800)));
    }

    #[tokio::test]
    async fn test_flags_without_prices() {
        let setup = Setup::new()
            .carrier(
                "alpha",
                1,
                InsurerPolicyConfig::default(),
                Some(QuoteOutcome::declined(vec!["roofing".to_string()])),
            )
            .carrier("beta", 1, InsurerPolicyConfig::default(), None);

        let report = setup.run().await.unwrap();

        assert!(!report.summary.got_pricing);
        assert!(report.summary.out_of_appetite);
        assert!(report.summary.pricing_error);
        assert_eq!(report.summary.price, None);
        assert_eq!(report.summary.low_price, None);
    }

    #[tokio::test]
    async fn test_no_eligible_adapters() {
        let setup = Setup::new().carrier(
            "alpha",
            1,
            InsurerPolicyConfig::default().disabled(),
            price(100),
        );

        let err = setup.run().await.unwrap_err();

        assert_eq!(err, RunPricingError::NoEligibleAdapters(ApplicationId::new("app-7")));
    }

    #[tokio::test]
    async fn test_expired_application_is_rejected() {
        let setup = Setup::new().carrier("alpha", 1, InsurerPolicyConfig::default(), price(100));
        let mut context = setup.context();
        context.application = context.application.with_status(ApplicationStatus::Expired);

        let err = RunPricingUseCase::new(Arc::new(setup.registry.clone()))
            .execute(&context)
            .await
            .unwrap_err();

        assert!(matches!(err, RunPricingError::NotQuotable { .. }));
    }
}
