//! Wiring scripted carriers into an [`AdapterRegistry`].

use super::scripted::ScriptedCarrierAdapter;
use crate::config::CarrierScripts;
use quoting_application::{
    AdapterFactory, AdapterRegistry, DocumentFetcher, InsurerAdapter, RegistryError, RetryPolicy,
};
use quoting_domain::AdapterKey;
use std::sync::Arc;
use tracing::debug;

/// Register one factory per scripted (carrier, policy type).
///
/// Every factory call builds a fresh adapter so no state leaks between
/// tasks.
pub fn build_registry(
    scripts: &CarrierScripts,
    documents: Option<Arc<dyn DocumentFetcher>>,
    retry: &RetryPolicy,
) -> Result<AdapterRegistry, RegistryError> {
    let mut registry = AdapterRegistry::new();

    for (slug, by_type) in scripts {
        for (policy_type, script) in by_type {
            let adapter_slug = slug.clone();
            let script = script.clone();
            let documents = documents.clone();
            let retry = retry.clone();
            let factory: AdapterFactory = Arc::new(move || {
                let adapter = ScriptedCarrierAdapter::new(adapter_slug.clone(), script.clone());
                let adapter = match &documents {
                    Some(documents) => adapter.with_documents(Arc::clone(documents), retry.clone()),
                    None => adapter,
                };
                Box::new(adapter) as Box<dyn InsurerAdapter>
            });

            let key = AdapterKey::new(slug.clone(), policy_type.clone());
            debug!("Registering scripted adapter {}", key);
            registry = registry.register(key, factory)?;
        }
    }

    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carriers::CarrierScript;
    use crate::logging::InMemoryQuoteRecorder;
    use chrono::NaiveDate;
    use quoting_application::RunQuotingUseCase;
    use quoting_domain::{
        AdapterTask, Application, ApplicationStatus, CanonicalStatus, DispatchMode, Insurer,
        InsurerPolicyConfig, Policy, PolicyType, QuoteRequestContext, Tier,
    };
    use rust_decimal::Decimal;
    use std::collections::BTreeMap;

    fn scripts() -> CarrierScripts {
        let mut hartwell = BTreeMap::new();
        hartwell.insert(
            PolicyType::Gl,
            CarrierScript::answering(CanonicalStatus::Quoted, Some(Decimal::from(900))),
        );
        hartwell.insert(
            PolicyType::Wc,
            CarrierScript::answering(CanonicalStatus::Declined, None),
        );
        let mut scripts = BTreeMap::new();
        scripts.insert("hartwell".to_string(), hartwell);
        scripts
    }

    #[test]
    fn test_registers_every_pair() {
        let registry = build_registry(&scripts(), None, &RetryPolicy::default()).unwrap();
        assert_eq!(
            registry.keys(),
            vec![
                AdapterKey::new("hartwell", PolicyType::Gl),
                AdapterKey::new("hartwell", PolicyType::Wc),
            ]
        );
    }

    #[test]
    fn test_validate_against_insurers() {
        let registry = build_registry(&scripts(), None, &RetryPolicy::default()).unwrap();
        let insurers = vec![
            Insurer::new("hartwell", "Hartwell", "hartwell")
                .supporting(PolicyType::Gl, InsurerPolicyConfig::default()),
            Insurer::new("ridge", "Ridge", "ridge")
                .supporting(PolicyType::Gl, InsurerPolicyConfig::default()),
        ];
        let err = registry.validate(&insurers).unwrap_err();
        assert_eq!(
            err,
            RegistryError::Unregistered(vec![AdapterKey::new("ridge", PolicyType::Gl)])
        );
    }

    #[tokio::test]
    async fn test_created_adapter_answers_from_script() {
        let registry = build_registry(&scripts(), None, &RetryPolicy::default()).unwrap();
        let task = AdapterTask::new("hartwell", "hartwell", PolicyType::Gl, Tier::FIRST);
        let context = QuoteRequestContext::new(
            Application::new("app-1", "Acme", "agency-1"),
            vec![Policy::new(
                PolicyType::Gl,
                NaiveDate::from_ymd_opt(2026, 11, 1).unwrap(),
            )],
            vec![],
        );

        let adapter = registry.create(&task.adapter_key()).unwrap();
        let outcome = adapter.quote(&task, &context).await.unwrap();
        assert_eq!(outcome.amount, Some(Decimal::from(900)));
    }

    #[tokio::test]
    async fn test_scripted_quoting_run_is_recorded() {
        let registry = Arc::new(build_registry(&scripts(), None, &RetryPolicy::default()).unwrap());
        let effective = NaiveDate::from_ymd_opt(2026, 11, 1).unwrap();
        let context = QuoteRequestContext::new(
            Application::new("app-9", "Corner Deli", "agency-1"),
            vec![
                Policy::new(PolicyType::Gl, effective),
                Policy::new(PolicyType::Wc, effective),
            ],
            vec![Insurer::new("hartwell", "Hartwell", "hartwell")
                .supporting(PolicyType::Gl, InsurerPolicyConfig::default())
                .supporting(PolicyType::Wc, InsurerPolicyConfig::default())],
        );
        registry.validate_dispatch(&context, DispatchMode::Quote).unwrap();

        let recorder = Arc::new(InMemoryQuoteRecorder::new());
        let report = RunQuotingUseCase::new(registry)
            .with_recorder(recorder.clone())
            .execute(&context)
            .await
            .unwrap();

        assert_eq!(report.status, ApplicationStatus::Quoted);
        assert_eq!(recorder.results().len(), 2);
        assert_eq!(
            recorder.statuses().into_iter().map(|(_, s)| s).collect::<Vec<_>>(),
            vec![ApplicationStatus::Quoting, ApplicationStatus::Quoted]
        );
        assert_eq!(
            recorder.current_status(&context.application.id),
            Some(ApplicationStatus::Quoted)
        );
    }
}
