//! Resolution against the real process environment.

mod common;

use common::harness_with_env;
use pwmanager::adapters::ProcessEnvironment;
use pwmanager::CredentialError;

#[test]
fn test_fallback_reads_process_environment() {
    temp_env::with_var("PWMANAGER_IT_GITLAB", Some("envtok"), || {
        let h = harness_with_env(&[], ProcessEnvironment);
        assert_eq!(h.resolver.get("pwmanager_it_gitlab").unwrap().expose(), "envtok");
        assert_eq!(h.advisories.len(), 1);
    });
}

// Windows environment names are case-insensitive.
#[cfg(unix)]
#[test]
fn test_lowercase_variable_is_not_a_fallback() {
    temp_env::with_vars(
        [
            ("pwmanager_it_lower", Some("lower")),
            ("PWMANAGER_IT_LOWER", None),
        ],
        || {
            let h = harness_with_env(&[], ProcessEnvironment);
            assert_eq!(
                h.resolver.get("pwmanager_it_lower").unwrap_err(),
                CredentialError::NotFound("pwmanager_it_lower".to_string())
            );
        },
    );
}

#[test]
fn test_store_wins_over_process_environment() {
    temp_env::with_var("PWMANAGER_IT_SHADOWED", Some("from-env"), || {
        let h = harness_with_env(&[("pwmanager_it_shadowed", "from-store")], ProcessEnvironment);
        assert_eq!(
            h.resolver.get("pwmanager_it_shadowed").unwrap().expose(),
            "from-store"
        );
        assert!(h.advisories.is_empty());
    });
}
