//! Credential resolution with an environment-variable fallback.

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::domain::error::{CredentialError, CredentialResult, StoreError};
use crate::domain::models::{
    Advisory, CredentialSource, DeleteErrorPolicy, Resolved, SecretValue, ServiceName,
};
use crate::domain::ports::{AdvisorySink, EnvironmentReader, SecretStore};

/// Resolves service names to secrets.
///
/// Lookup order is fixed: the secret store first, then the environment
/// variable named by the uppercased service name. Writes and deletes only
/// ever touch the secret store.
pub struct CredentialResolver {
    store: Arc<dyn SecretStore>,
    environment: Arc<dyn EnvironmentReader>,
    advisories: Arc<dyn AdvisorySink>,
    delete_errors: DeleteErrorPolicy,
}

impl CredentialResolver {
    /// Build a resolver over the given collaborators with the default delete policy.
    pub fn new(
        store: Arc<dyn SecretStore>,
        environment: Arc<dyn EnvironmentReader>,
        advisories: Arc<dyn AdvisorySink>,
    ) -> Self {
        Self {
            store,
            environment,
            advisories,
            delete_errors: DeleteErrorPolicy::default(),
        }
    }

    /// Choose how non-absent store failures on delete are reported.
    pub fn with_delete_errors(mut self, policy: DeleteErrorPolicy) -> Self {
        self.delete_errors = policy;
        self
    }

    /// Resolve `service` and report which tier produced the value.
    ///
    /// Emits exactly one [`Advisory::EnvironmentFallback`] when the value
    /// comes from the environment.
    #[instrument(skip(self))]
    pub fn resolve(&self, service: &str) -> CredentialResult<Resolved> {
        let service = ServiceName::parse(service)?;

        match self.store.get(service.as_str()) {
            Ok(Some(value)) => {
                debug!(service = %service, "credential found in secret store");
                return Ok(Resolved {
                    service,
                    value: SecretValue::from(value),
                    source: CredentialSource::Store,
                });
            }
            Ok(None) | Err(StoreError::NoEntry) => {}
            Err(err) => return Err(CredentialError::Store(err)),
        }

        let variable = service.fallback_key();
        let Some(value) = self.environment.get(&variable) else {
            debug!(service = %service, variable = %variable, "credential not found");
            return Err(CredentialError::NotFound(service.into()));
        };

        self.advisories.emit(&Advisory::EnvironmentFallback {
            service: service.clone(),
            variable: variable.clone(),
        });

        Ok(Resolved {
            service,
            value: SecretValue::from(value),
            source: CredentialSource::Environment { variable },
        })
    }

    /// Look up the secret for `service`.
    pub fn get(&self, service: &str) -> CredentialResult<SecretValue> {
        self.resolve(service).map(|resolved| resolved.value)
    }

    /// Store `value` for `service` in the secret store (create or overwrite).
    #[instrument(skip(self, value))]
    pub fn set(&self, service: &str, value: &str) -> CredentialResult<()> {
        let service = ServiceName::parse(service)?;
        self.store
            .set(service.as_str(), value)
            .map_err(CredentialError::Store)?;
        debug!(service = %service, "credential stored");
        Ok(())
    }

    /// Remove `service` from the secret store.
    ///
    /// A missing entry fails with [`CredentialError::NotFound`]. Other store
    /// failures follow the configured [`DeleteErrorPolicy`].
    #[instrument(skip(self))]
    pub fn delete(&self, service: &str) -> CredentialResult<()> {
        let service = ServiceName::parse(service)?;

        match self.store.delete(service.as_str()) {
            Ok(()) => {
                debug!(service = %service, "credential deleted");
                Ok(())
            }
            Err(StoreError::NoEntry) => Err(CredentialError::NotFound(service.into())),
            Err(err) => match self.delete_errors {
                DeleteErrorPolicy::Distinct => Err(CredentialError::Store(err)),
                DeleteErrorPolicy::Collapse => {
                    debug!(service = %service, error = %err, "delete failure reported as not found");
                    Err(CredentialError::NotFound(service.into()))
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{CollectingAdvisorySink, InMemorySecretStore, MapEnvironment};

    struct Fixture {
        store: Arc<InMemorySecretStore>,
        advisories: Arc<CollectingAdvisorySink>,
        resolver: CredentialResolver,
    }

    fn fixture(store: &[(&str, &str)], env: &[(&str, &str)]) -> Fixture {
        let store = Arc::new(InMemorySecretStore::with_entries(store.iter().copied()));
        let advisories = Arc::new(CollectingAdvisorySink::new());
        let resolver = CredentialResolver::new(
            store.clone(),
            Arc::new(MapEnvironment::from_pairs(env.iter().copied())),
            advisories.clone(),
        );
        Fixture {
            store,
            advisories,
            resolver,
        }
    }

    /// Environment that must never be read.
    struct UntouchableEnvironment;

    impl EnvironmentReader for UntouchableEnvironment {
        fn get(&self, name: &str) -> Option<String> {
            panic!("environment consulted for {name}");
        }
    }

    /// Store whose every operation fails with the given error.
    struct BrokenStore(StoreError);

    impl SecretStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(self.0.clone())
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(self.0.clone())
        }

        fn delete(&self, _key: &str) -> Result<(), StoreError> {
            Err(self.0.clone())
        }
    }

    fn broken(err: StoreError) -> CredentialResolver {
        CredentialResolver::new(
            Arc::new(BrokenStore(err)),
            Arc::new(MapEnvironment::from_pairs([("GITHUB", "envtok")])),
            Arc::new(CollectingAdvisorySink::new()),
        )
    }

    #[test]
    fn test_store_hit_skips_environment() {
        let advisories = Arc::new(CollectingAdvisorySink::new());
        let resolver = CredentialResolver::new(
            Arc::new(InMemorySecretStore::with_entries([("github", "tok123")])),
            Arc::new(UntouchableEnvironment),
            advisories.clone(),
        );

        let resolved = resolver.resolve("github").unwrap();
        assert_eq!(resolved.value.expose(), "tok123");
        assert_eq!(resolved.source, CredentialSource::Store);
        assert!(advisories.is_empty());
    }

    #[test]
    fn test_environment_fallback_emits_one_advisory() {
        let f = fixture(&[], &[("GITLAB", "envtok")]);

        let resolved = f.resolver.resolve("gitlab").unwrap();
        assert_eq!(resolved.value.expose(), "envtok");
        assert_eq!(
            resolved.source,
            CredentialSource::Environment {
                variable: "GITLAB".to_string()
            }
        );
        assert_eq!(
            f.advisories.advisories(),
            vec![Advisory::EnvironmentFallback {
                service: ServiceName::parse("gitlab").unwrap(),
                variable: "GITLAB".to_string(),
            }]
        );
    }

    #[test]
    fn test_fallback_is_case_sensitive_on_variable() {
        let f = fixture(&[], &[("gitlab", "lowercase-only")]);
        assert_eq!(
            f.resolver.get("gitlab").unwrap_err(),
            CredentialError::NotFound("gitlab".to_string())
        );
        assert!(f.advisories.is_empty());
    }

    #[test]
    fn test_missing_everywhere_is_not_found() {
        let f = fixture(&[("github", "tok123")], &[("GITLAB", "envtok")]);
        assert_eq!(
            f.resolver.get("bitbucket").unwrap_err(),
            CredentialError::NotFound("bitbucket".to_string())
        );
        assert!(f.advisories.is_empty());
    }

    #[test]
    fn test_empty_service_name_rejected() {
        let f = fixture(&[], &[]);
        assert!(matches!(
            f.resolver.get(""),
            Err(CredentialError::InvalidServiceName(_))
        ));
        assert!(matches!(
            f.resolver.set("", "v"),
            Err(CredentialError::InvalidServiceName(_))
        ));
        assert!(matches!(
            f.resolver.delete(""),
            Err(CredentialError::InvalidServiceName(_))
        ));
    }

    #[test]
    fn test_set_overwrites_and_wins_over_environment() {
        let f = fixture(&[("npm", "old")], &[("NPM", "from-env")]);

        f.resolver.set("npm", "new").unwrap();
        let resolved = f.resolver.resolve("npm").unwrap();
        assert_eq!(resolved.value.expose(), "new");
        assert!(!resolved.from_environment());
        assert!(f.advisories.is_empty());
    }

    #[test]
    fn test_delete_removes_store_entry_only() {
        let f = fixture(&[("npm", "stored")], &[("NPM", "from-env")]);

        f.resolver.delete("npm").unwrap();
        assert!(!f.store.contains("npm"));

        let resolved = f.resolver.resolve("npm").unwrap();
        assert_eq!(resolved.value.expose(), "from-env");
        assert_eq!(f.advisories.len(), 1);
    }

    #[test]
    fn test_delete_missing_is_not_found() {
        let f = fixture(&[], &[]);
        assert_eq!(
            f.resolver.delete("ghost").unwrap_err(),
            CredentialError::NotFound("ghost".to_string())
        );
    }

    #[test]
    fn test_get_propagates_store_failure() {
        let resolver = broken(StoreError::Unavailable("locked".to_string()));
        assert_eq!(
            resolver.get("github").unwrap_err(),
            CredentialError::Store(StoreError::Unavailable("locked".to_string()))
        );
    }

    #[test]
    fn test_get_treats_no_entry_error_as_absent() {
        let resolver = broken(StoreError::NoEntry);
        assert_eq!(resolver.get("github").unwrap().expose(), "envtok");
    }

    #[test]
    fn test_set_propagates_store_failure_unmodified() {
        let resolver = broken(StoreError::Backend("permission denied".to_string()));
        assert_eq!(
            resolver.set("github", "tok").unwrap_err(),
            CredentialError::Store(StoreError::Backend("permission denied".to_string()))
        );
    }

    #[test]
    fn test_delete_distinct_policy_keeps_store_failure() {
        let resolver = broken(StoreError::Backend("dbus gone".to_string()))
            .with_delete_errors(DeleteErrorPolicy::Distinct);
        assert_eq!(
            resolver.delete("github").unwrap_err(),
            CredentialError::Store(StoreError::Backend("dbus gone".to_string()))
        );
    }

    #[test]
    fn test_delete_collapses_store_failure_by_default() {
        let resolver = broken(StoreError::Backend("permission denied".to_string()));
        assert_eq!(
            resolver.delete("github").unwrap_err(),
            CredentialError::NotFound("github".to_string())
        );
    }

    #[test]
    fn test_whitespace_service_name_round_trips() {
        let f = fixture(&[], &[]);
        f.resolver.set(" ", "v").unwrap();
        assert_eq!(f.resolver.get(" ").unwrap().expose(), "v");
        f.resolver.delete(" ").unwrap();
        assert!(f.store.is_empty());
    }

    #[test]
    fn test_delete_collapse_policy_reports_not_found() {
        let resolver = broken(StoreError::Backend("dbus gone".to_string()))
            .with_delete_errors(DeleteErrorPolicy::Collapse);
        assert_eq!(
            resolver.delete("github").unwrap_err(),
            CredentialError::NotFound("github".to_string())
        );
    }
}
