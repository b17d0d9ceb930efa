//! Configuration value interpolation
//!
//! Supports environment variable interpolation in config values via
//! `$VAR` or `${VAR}`, so a checked-in config file can reference the API
//! token without embedding it:
//!
//! ```toml
//! [api]
//! token = "${MAKE_API_TOKEN}"
//! ```

/// Interpolate environment variables in a string: `$VAR` or `${VAR}`
///
/// Unset variables are replaced with an empty string; the adapter still
/// attaches the (empty) credential and lets the remote service reject it.
pub fn interpolate_string(s: &str) -> String {
    shellexpand::env_with_context_no_errors(s, |var| {
        Some(std::env::var(var).unwrap_or_else(|_| {
            tracing::debug!("Environment variable '{}' not set", var);
            String::new()
        }))
    })
    .to_string()
}

/// Interpolate all string values in a Config
pub fn interpolate_config(config: &mut super::model::Config) {
    config.api.token = interpolate_string(&config.api.token);
    config.api.base_url = interpolate_string(&config.api.base_url);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpolate_simple_env_var() {
        std::env::set_var("MAKEHUB_TEST_SIMPLE", "hello");

        let result = interpolate_string("Value: $MAKEHUB_TEST_SIMPLE");
        assert_eq!(result, "Value: hello");

        std::env::remove_var("MAKEHUB_TEST_SIMPLE");
    }

    #[test]
    fn test_interpolate_bracketed_env_var() {
        std::env::set_var("MAKEHUB_TEST_BRACKET", "world");

        let result = interpolate_string("Value: ${MAKEHUB_TEST_BRACKET}!");
        assert_eq!(result, "Value: world!");

        std::env::remove_var("MAKEHUB_TEST_BRACKET");
    }

    #[test]
    fn test_interpolate_missing_var() {
        let result = interpolate_string("Value: $MAKEHUB_NONEXISTENT_12345");
        assert_eq!(result, "Value: ");
    }

    #[test]
    fn test_interpolate_no_vars() {
        let result = interpolate_string("No variables here");
        assert_eq!(result, "No variables here");
    }

    #[test]
    fn test_interpolate_config_token() {
        std::env::set_var("MAKEHUB_TEST_TOKEN", "secret-token");

        let mut config = super::super::model::Config::default();
        config.api.token = "${MAKEHUB_TEST_TOKEN}".to_string();

        interpolate_config(&mut config);
        assert_eq!(config.api.token, "secret-token");

        std::env::remove_var("MAKEHUB_TEST_TOKEN");
    }

    #[test]
    fn test_interpolate_config_base_url_untouched() {
        let mut config = super::super::model::Config::default();
        interpolate_config(&mut config);
        assert_eq!(config.api.base_url, "https://eu1.make.com/api/v2");
    }
}
