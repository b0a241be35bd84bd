//! Configuration-driven carrier adapter.

use async_trait::async_trait;
use quoting_application::{
    AdapterError, DocumentFetcher, InsurerAdapter, RetryPolicy, fetch_with_retry,
};
use quoting_domain::{
    AdapterTask, CanonicalStatus, QuoteArtifact, QuoteOutcome, QuoteRequestContext,
    SupportedLimits,
};
use rust_decimal::Decimal;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// How one carrier answers for one policy type
#[derive(Debug, Clone, PartialEq)]
pub struct CarrierScript {
    pub status: CanonicalStatus,
    pub amount: Option<Decimal>,
    pub indication: Option<Decimal>,
    pub decline_reasons: Vec<String>,
    pub failure: Option<String>,
    pub notify_partner: bool,
    pub document_url: Option<String>,
    pub supported: SupportedLimits,
    pub latency: Duration,
}

impl CarrierScript {
    pub fn answering(status: CanonicalStatus, amount: Option<Decimal>) -> Self {
        Self {
            status,
            amount,
            indication: None,
            decline_reasons: Vec::new(),
            failure: None,
            notify_partner: false,
            document_url: None,
            supported: SupportedLimits::default(),
            latency: Duration::ZERO,
        }
    }
}

/// Adapter answering from a [`CarrierScript`]
pub struct ScriptedCarrierAdapter {
    carrier: String,
    script: CarrierScript,
    documents: Option<Arc<dyn DocumentFetcher>>,
    retry: RetryPolicy,
}

impl ScriptedCarrierAdapter {
    pub fn new(carrier: impl Into<String>, script: CarrierScript) -> Self {
        Self {
            carrier: carrier.into(),
            script,
            documents: None,
            retry: RetryPolicy::default(),
        }
    }

    pub fn with_documents(mut self, documents: Arc<dyn DocumentFetcher>, retry: RetryPolicy) -> Self {
        self.documents = Some(documents);
        self.retry = retry;
        self
    }

    /// Shared request path of `quote` and `price`
    async fn answer(
        &self,
        task: &AdapterTask,
        context: &QuoteRequestContext,
        amount: Option<Decimal>,
    ) -> Result<QuoteOutcome, AdapterError> {
        if !self.script.latency.is_zero() {
            tokio::time::sleep(self.script.latency).await;
        }
        if let Some(reason) = &self.script.failure {
            return Err(AdapterError::ConnectionError(reason.clone()));
        }

        let policy = context.policy(&task.policy_type).ok_or_else(|| {
            AdapterError::MissingData(format!("no {} policy on the application", task.policy_type))
        })?;

        let limits = self
            .script
            .supported
            .select_limits(&policy.limits)
            .map_err(|e| AdapterError::Other(format!("{} limit table: {}", self.carrier, e)))?;
        let deductible = match policy.deductible {
            Some(requested) => self
                .script
                .supported
                .select_deductible(requested)
                .map_err(|e| AdapterError::Other(format!("{} deductible table: {}", self.carrier, e)))?
                .or(Some(requested)),
            None => None,
        };

        let mut outcome = QuoteOutcome::new(self.script.status).with_carrier_reference(format!(
            "{}-{}-{}",
            self.carrier, context.application.id, task.policy_type
        ));
        outcome.decline_reasons = self.script.decline_reasons.clone();
        if let Some(amount) = amount {
            outcome = outcome.with_amount(amount);
        }
        if !limits.is_empty() {
            outcome = outcome.with_limits(limits);
        }
        if let Some(deductible) = deductible {
            outcome = outcome.with_deductible(deductible);
        }
        if self.script.notify_partner {
            outcome = outcome.notifying_partner();
        }
        Ok(outcome)
    }

    /// Attach the quote letter when the carrier produced one in time
    async fn attach_letter(&self, outcome: QuoteOutcome, context: &QuoteRequestContext) -> QuoteOutcome {
        let (Some(documents), Some(template)) = (&self.documents, &self.script.document_url) else {
            return outcome;
        };
        if outcome.status < CanonicalStatus::Referred {
            return outcome;
        }

        let location = template.replace("{application}", context.application.id.as_str());
        let label = format!("{} quote letter", self.carrier);
        let fetched = fetch_with_retry(&label, &self.retry, |attempt| {
            debug!("Fetching {} (attempt {})", location, attempt);
            documents.fetch(&location)
        })
        .await;

        match fetched {
            Some(document) => outcome.with_artifact(QuoteArtifact {
                name: format!("{}-quote-letter", self.carrier),
                location: document.location,
                content_type: document.content_type,
                size_bytes: document.bytes.len(),
            }),
            None => outcome,
        }
    }
}

#[async_trait]
impl InsurerAdapter for ScriptedCarrierAdapter {
    async fn quote(
        &self,
        task: &AdapterTask,
        context: &QuoteRequestContext,
    ) -> Result<QuoteOutcome, AdapterError> {
        let outcome = self.answer(task, context, self.script.amount).await?;
        Ok(self.attach_letter(outcome, context).await)
    }

    async fn price(
        &self,
        task: &AdapterTask,
        context: &QuoteRequestContext,
    ) -> Result<QuoteOutcome, AdapterError> {
        let amount = self.script.indication.or(self.script.amount);
        self.answer(task, context, amount).await
    }
}
