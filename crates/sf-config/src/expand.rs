//! Environment variable expansion for configuration strings.

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references in `value`.
///
/// `field` names the configuration key for error messages.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    shellexpand::env(value)
        .map(std::borrow::Cow::into_owned)
        .map_err(|e| ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}} not set ({})", e.var_name, e.cause),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_literal_unchanged() {
        assert_eq!(expand_env("catalog.json", "catalog.snapshot").unwrap(), "catalog.json");
    }

    #[test]
    fn test_expand_default_used_when_unset() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("SF_EXPAND_TEST_UNSET");
        }

        let value = expand_env("${SF_EXPAND_TEST_UNSET:-white}", "sidebar.header_color").unwrap();

        assert_eq!(value, "white");
    }

    #[test]
    fn test_expand_set_variable() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("SF_EXPAND_TEST_DIR", "/srv/catalog");
        }

        let value = expand_env("${SF_EXPAND_TEST_DIR}/snapshot.json", "catalog.snapshot").unwrap();

        assert_eq!(value, "/srv/catalog/snapshot.json");

        unsafe {
            std::env::remove_var("SF_EXPAND_TEST_DIR");
        }
    }

    #[test]
    fn test_expand_missing_variable_names_field() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("SF_EXPAND_TEST_MISSING");
        }

        let err = expand_env("${SF_EXPAND_TEST_MISSING}", "catalog.snapshot").unwrap_err();

        assert!(err.to_string().contains("SF_EXPAND_TEST_MISSING"));
        assert!(err.to_string().contains("catalog.snapshot"));
    }
}
