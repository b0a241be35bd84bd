//! Building the task set of a run.

use super::task::AdapterTask;
use crate::quote::entities::{QuoteRequestContext, Transport};
use serde::{Deserialize, Serialize};

/// What the run is for; pricing-only carriers never produce bindable quotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DispatchMode {
    Quote,
    Price,
}

/// Build one task per eligible (policy, insurer) pair.
///
/// An insurer is eligible for a policy type when it supports the type, the
/// agency enabled it over the API transport, the carrier has API support,
/// it passes the allow-list, and (for quoting) it is not pricing-only.
/// Tasks come out in request order: policies first, then insurers.
pub fn build_task_set(context: &QuoteRequestContext, mode: DispatchMode) -> Vec<AdapterTask> {
    let mut tasks = Vec::new();

    for policy_type in context.policy_types() {
        for insurer in &context.insurers {
            let Some(config) = insurer.config_for(&policy_type) else {
                continue;
            };
            if !config.enabled
                || config.transport != Transport::Api
                || !config.capabilities.api_support
                || !context.is_allowed(&insurer.id)
            {
                continue;
            }
            if mode == DispatchMode::Quote && config.capabilities.pricing_only {
                continue;
            }
            tasks.push(AdapterTask::new(
                insurer.id.clone(),
                insurer.slug.clone(),
                policy_type.clone(),
                config.tier,
            ));
        }
    }

    tasks
}
