//! Common test utilities for integration tests
//!
//! Provides resolver fixtures wired to in-memory collaborators.

#![allow(dead_code)]

use std::sync::Arc;

use pwmanager::adapters::{CollectingAdvisorySink, InMemorySecretStore, MapEnvironment};
use pwmanager::{CredentialResolver, EnvironmentReader};

/// Resolver plus handles on its collaborators
pub struct Harness {
    pub store: Arc<InMemorySecretStore>,
    pub advisories: Arc<CollectingAdvisorySink>,
    pub resolver: CredentialResolver,
}

/// Build a resolver over the given store entries and environment variables
pub fn harness(store: &[(&str, &str)], env: &[(&str, &str)]) -> Harness {
    harness_with_env(store, MapEnvironment::from_pairs(env.iter().copied()))
}

pub fn harness_with_env(store: &[(&str, &str)], env: impl EnvironmentReader + 'static) -> Harness {
    let store = Arc::new(InMemorySecretStore::with_entries(store.iter().copied()));
    let advisories = Arc::new(CollectingAdvisorySink::new());
    let resolver = CredentialResolver::new(store.clone(), Arc::new(env), advisories.clone());
    Harness {
        store,
        advisories,
        resolver,
    }
}

/// Environment that fails the test if it is ever consulted
pub struct UntouchableEnvironment;

impl EnvironmentReader for UntouchableEnvironment {
    fn get(&self, name: &str) -> Option<String> {
        panic!("environment consulted for {name}");
    }
}
