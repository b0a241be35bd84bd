//! Shared utilities for use cases.
//!
//! Contains the task boundary used by both quoting and pricing runs: every
//! adapter call is isolated so its failure becomes an `error` outcome for
//! that task alone.

use crate::registry::AdapterRegistry;
use futures::stream::FuturesUnordered;
use futures::{FutureExt, StreamExt};
use quoting_domain::{AdapterTask, QuoteOutcome, QuoteRequestContext, TaskResult};
use std::any::Any;
use std::panic::AssertUnwindSafe;
use tracing::{debug, warn};

/// Which adapter entry point a batch calls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AdapterCall {
    Quote,
    Price,
}

/// Run a batch of tasks concurrently and wait for every one to settle.
///
/// The futures are polled together on the calling task, so siblings
/// interleave at their await points without shared mutable state.
/// `on_settled` sees each result as soon as its task finishes; the returned
/// results are back in the order of `tasks`.
pub(crate) async fn run_batch<F>(
    registry: &AdapterRegistry,
    context: &QuoteRequestContext,
    tasks: Vec<AdapterTask>,
    call: AdapterCall,
    mut on_settled: F,
) -> Vec<TaskResult>
where
    F: FnMut(&TaskResult),
{
    let mut pending: FuturesUnordered<_> = tasks
        .into_iter()
        .enumerate()
        .map(|(index, task)| run_task(registry, context, task, call).map(move |r| (index, r)))
        .collect();

    let mut settled = Vec::with_capacity(pending.len());
    while let Some((index, result)) = pending.next().await {
        on_settled(&result);
        settled.push((index, result));
    }

    settled.sort_by_key(|(index, _)| *index);
    settled.into_iter().map(|(_, result)| result).collect()
}

/// Task boundary: adapter errors and panics become `error` outcomes.
async fn run_task(
    registry: &AdapterRegistry,
    context: &QuoteRequestContext,
    task: AdapterTask,
    call: AdapterCall,
) -> TaskResult {
    let adapter = match registry.create(&task.adapter_key()) {
        Ok(adapter) => adapter,
        Err(e) => {
            warn!("Task {} has no adapter: {}", task.id(), e);
            return TaskResult::new(task, QuoteOutcome::error(e.to_string()));
        }
    };

    debug!("Starting {:?} for task {}", call, task.id());
    let invocation = async {
        match call {
            AdapterCall::Quote => adapter.quote(&task, context).await,
            AdapterCall::Price => adapter.price(&task, context).await,
        }
    };
    let settled = AssertUnwindSafe(invocation).catch_unwind().await;

    let outcome = match settled {
        Ok(Ok(outcome)) => {
            debug!("Task {} settled as {}", task.id(), outcome.status);
            outcome
        }
        Ok(Err(e)) => {
            warn!("Task {} failed: {}", task.id(), e);
            QuoteOutcome::error(e.to_string())
        }
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            warn!("Task {} panicked: {}", task.id(), message);
            QuoteOutcome::error(format!("adapter panicked: {}", message))
        }
    };

    TaskResult::new(task, outcome)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
