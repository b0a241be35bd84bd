//! Adapter Registry
//!
//! The [`AdapterRegistry`] maps `(carrier slug, policy type)` to an
//! [`AdapterFactory`]. It is populated once at startup and validated
//! against the configured insurers, so a missing integration fails fast
//! instead of surfacing mid-run.
//!
//! # Usage
//!
//! ```ignore
//! let registry = AdapterRegistry::new()
//!     .register(AdapterKey::new("hartwell", PolicyType::Gl), hartwell_gl_factory)?
//!     .register(AdapterKey::new("hartwell", PolicyType::Wc), hartwell_wc_factory)?;
//!
//! registry.validate(&insurers)?;
//! registry.validate_dispatch(&context, DispatchMode::Quote)?;
//! let adapter = registry.create(&task.adapter_key())?;
//! ```

use crate::ports::insurer_adapter::{AdapterFactory, InsurerAdapter};
use quoting_domain::{
    AdapterKey, DispatchMode, Insurer, QuoteRequestContext, Transport, build_task_set,
};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Adapter already registered for {0}")]
    Duplicate(AdapterKey),

    #[error("No adapter registered for {0}")]
    Missing(AdapterKey),

    #[error("Insurers reference unregistered adapters: {}", format_keys(.0))]
    Unregistered(Vec<AdapterKey>),
}

fn format_keys(keys: &[AdapterKey]) -> String {
    keys.iter()
        .map(|k| k.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Registry of adapter factories keyed by carrier and policy type
#[derive(Default, Clone)]
pub struct AdapterRegistry {
    factories: HashMap<AdapterKey, AdapterFactory>,
}

impl AdapterRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory; registering the same key twice is an error
    pub fn register(mut self, key: AdapterKey, factory: AdapterFactory) -> Result<Self, RegistryError> {
        if self.factories.contains_key(&key) {
            return Err(RegistryError::Duplicate(key));
        }
        self.factories.insert(key, factory);
        Ok(self)
    }

    pub fn contains(&self, key: &AdapterKey) -> bool {
        self.factories.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// Registered keys in sorted order
    pub fn keys(&self) -> Vec<AdapterKey> {
        let mut keys: Vec<_> = self.factories.keys().cloned().collect();
        keys.sort();
        keys
    }

    /// Build a fresh adapter for one task
    pub fn create(&self, key: &AdapterKey) -> Result<Box<dyn InsurerAdapter>, RegistryError> {
        self.factories
            .get(key)
            .map(|factory| factory())
            .ok_or_else(|| RegistryError::Missing(key.clone()))
    }

    /// Check that every dispatchable pairing of the given insurers resolves.
    ///
    /// A pairing is dispatchable when it is enabled over the API transport and
    /// the carrier has API support. All missing keys are reported at once.
    pub fn validate(&self, insurers: &[Insurer]) -> Result<(), RegistryError> {
        self.ensure_registered(insurers.iter().flat_map(|insurer| {
            insurer
                .policies
                .iter()
                .filter(|(_, config)| {
                    config.enabled
                        && config.transport == Transport::Api
                        && config.capabilities.api_support
                })
                .map(|(policy_type, _)| AdapterKey::new(insurer.slug.clone(), policy_type.clone()))
        }))
    }

    /// Check exactly the tasks a run of `mode` would dispatch for `context`,
    /// so insurers outside the request's allow-list are never required.
    pub fn validate_dispatch(
        &self,
        context: &QuoteRequestContext,
        mode: DispatchMode,
    ) -> Result<(), RegistryError> {
        self.ensure_registered(
            build_task_set(context, mode)
                .iter()
                .map(|task| task.adapter_key()),
        )
    }

    fn ensure_registered(
        &self,
        keys: impl IntoIterator<Item = AdapterKey>,
    ) -> Result<(), RegistryError> {
        let mut missing: Vec<AdapterKey> = keys
            .into_iter()
            .filter(|key| !self.factories.contains_key(key))
            .collect();

        if missing.is_empty() {
            return Ok(());
        }
        missing.sort();
        missing.dedup();
        Err(RegistryError::Unregistered(missing))
    }
}

impl std::fmt::Debug for AdapterRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdapterRegistry")
            .field("keys", &self.keys())
            .finish()
    }
}
