use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use tracing::{debug, error};

use crate::config::credentials::Credentials;
use crate::config::settings::{LogFormat, LoggingConfig, SettingsConfig};
use crate::error::{RadeError, Result};

static ENV_PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{(\w+)(?::([^\}]+))?\}").expect("placeholder pattern"));

/// ================================
/// Full client configuration
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct ServiceConfig {
    pub credentials: Credentials,
    #[serde(default)]
    pub settings: SettingsConfig,
}

impl ServiceConfig {
    pub fn from_env() -> Self {
        Self {
            credentials: Credentials::from_env(),
            settings: SettingsConfig::from_env(),
        }
    }
}

/// Load config from a YAML file, expanding `${VAR}` / `${VAR:default}` first.
pub async fn file_to_config(path: &Path) -> Result<ServiceConfig> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| RadeError::Config(format!("cannot read {}: {}", path.display(), e)))?;

    parse_config(&expand_env_vars(&content))
}

pub fn parse_config(content: &str) -> Result<ServiceConfig> {
    let mut service_config: ServiceConfig = serde_yaml::from_str(content)
        .inspect_err(|e| error!("parse config error: {}", e))
        .map_err(|e| RadeError::Config(format!("Invalid config format: {}", e)))?;

    // Apply defaults
    if service_config.settings.logging.is_none() {
        service_config.settings.logging = Some(LoggingConfig::new("info".to_owned(), LogFormat::Compact));
    }
    debug!("validating credentials ...");
    service_config.credentials.validate()?;

    Ok(service_config)
}

pub fn expand_env_vars(input: &str) -> String {
    ENV_PLACEHOLDER
        .replace_all(input, |caps: &regex::Captures| {
            let var = &caps[1];
            let default = caps.get(2).map(|m| m.as_str()).unwrap_or("");
            std::env::var(var).unwrap_or_else(|_| default.to_string())
        })
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::constants::DEFAULT_HTTP_TIMEOUT_MS;
    use serial_test::serial;
    use std::io::Write;

    const CONFIG: &str = r#"
credentials:
  username: "${RADE_TEST_USER}"
  password: "${RADE_TEST_PASSWORD:fallback}"
  scopes: [cardToIban, shahkar]
  base_url: "https://gw.example/api"
settings:
  token_cache_path: /tmp/rade/token.json
  logging:
    level: debug
    format: json
"#;

    #[test]
    #[serial]
    fn expands_variables_with_defaults() {
        std::env::set_var("RADE_TEST_USER", "09120000000");
        std::env::remove_var("RADE_TEST_PASSWORD");

        let expanded = expand_env_vars("u=${RADE_TEST_USER} p=${RADE_TEST_PASSWORD:fallback} q=${RADE_TEST_PASSWORD}");
        assert_eq!(expanded, "u=09120000000 p=fallback q=");

        std::env::remove_var("RADE_TEST_USER");
    }

    #[tokio::test]
    #[serial]
    async fn loads_yaml_file() {
        std::env::set_var("RADE_TEST_USER", "09120000000");
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CONFIG.as_bytes()).unwrap();

        let config = file_to_config(file.path()).await.unwrap();
        assert_eq!(config.credentials.username, "09120000000");
        assert_eq!(config.credentials.password, "fallback");
        assert_eq!(config.credentials.scopes, vec!["cardToIban", "shahkar"]);
        assert_eq!(config.settings.token_cache_path.to_str(), Some("/tmp/rade/token.json"));
        assert_eq!(config.settings.timeout_ms, DEFAULT_HTTP_TIMEOUT_MS);
        assert_eq!(config.settings.logging.unwrap().format, LogFormat::Json);

        std::env::remove_var("RADE_TEST_USER");
    }

    #[test]
    fn settings_are_optional() {
        let config = parse_config("credentials: {username: u, password: p, scopes: [a], base_url: x}").unwrap();
        assert_eq!(config.settings.logging.unwrap().level, "info");
    }

    #[test]
    fn incomplete_credentials_fail() {
        let err = parse_config("credentials: {username: u, scopes: [a], base_url: x}").unwrap_err();
        assert!(matches!(err, RadeError::Config(_)));
        assert!(err.to_string().contains("password"), "{err}");

        let err = parse_config("credentials: {username: u, password: p, scopes: a, base_url: x}").unwrap_err();
        assert!(err.to_string().contains("must be an array"), "{err}");
    }

    #[tokio::test]
    async fn missing_file_is_a_config_error() {
        let err = file_to_config(Path::new("/definitely/not/here.yaml")).await.unwrap_err();
        assert!(matches!(err, RadeError::Config(_)));
    }
}
