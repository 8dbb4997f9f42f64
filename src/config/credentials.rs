use std::fmt;

use serde::de::{self, Deserializer};
use serde::Deserialize;

use crate::error::{RadeError, Result};
use crate::utils::constants::{DEFAULT_BASE_URL, ENV_BASE_URL, ENV_PASSWORD, ENV_SCOPES, ENV_USERNAME};

pub const SCOPES_NOT_A_LIST: &str = "Parameter 'scopes' must be an array";

/// Identity used against the token endpoint. Read once, never mutated.
#[derive(Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Credentials {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default, deserialize_with = "deserialize_scopes")]
    pub scopes: Vec<String>,
    #[serde(default)]
    pub base_url: String,
}

impl Credentials {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        scopes: Vec<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            scopes,
            base_url: base_url.into(),
        }
    }

    /// `RADE_USERNAME`, `RADE_PASSWORD`, comma separated `RADE_SCOPES` and
    /// `RADE_BASE_URL` (defaults to the public gateway).
    pub fn from_env() -> Self {
        let var = |key: &str| std::env::var(key).unwrap_or_default();
        let scopes = var(ENV_SCOPES)
            .split(',')
            .map(str::trim)
            .filter(|scope| !scope.is_empty())
            .map(str::to_owned)
            .collect();
        let base_url = std::env::var(ENV_BASE_URL)
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());

        Self::new(var(ENV_USERNAME), var(ENV_PASSWORD), scopes, base_url)
    }

    /// Every field must carry a value; the error lists all that do not.
    pub fn validate(&self) -> Result<()> {
        let missing: Vec<&str> = [
            ("username", self.username.trim().is_empty()),
            ("password", self.password.is_empty()),
            ("scopes", self.scopes.is_empty()),
            ("base_url", self.base_url.trim().is_empty()),
        ]
        .into_iter()
        .filter_map(|(name, is_missing)| is_missing.then_some(name))
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(RadeError::Config(format!(
                "Missing required configuration parameters: {}",
                missing.join(", ")
            )))
        }
    }

    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .field("scopes", &self.scopes)
            .field("base_url", &self.base_url)
            .finish()
    }
}

fn deserialize_scopes<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scopes {
        List(Vec<String>),
        Other(serde_json::Value),
    }

    match Scopes::deserialize(deserializer)? {
        Scopes::List(scopes) => Ok(scopes),
        Scopes::Other(serde_json::Value::Null) => Ok(Vec::new()),
        Scopes::Other(_) => Err(de::Error::custom(SCOPES_NOT_A_LIST)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn full() -> Credentials {
        Credentials::new("09120000000", "secret", vec!["cardToIban".into()], "https://gw.example/api/")
    }

    #[test]
    fn complete_credentials_pass() {
        let credentials = full();
        assert!(credentials.validate().is_ok());
        assert_eq!(credentials.base_url(), "https://gw.example/api");
    }

    #[test]
    fn missing_fields_are_listed() {
        let err = Credentials { password: String::new(), scopes: vec![], ..full() }
            .validate()
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Configuration error: Missing required configuration parameters: password, scopes"
        );

        let err = Credentials::default().validate().unwrap_err();
        assert!(err.to_string().ends_with("username, password, scopes, base_url"), "{err}");
    }

    #[test]
    fn scalar_scopes_are_rejected() {
        let err = serde_yaml::from_str::<Credentials>("username: u\npassword: p\nscopes: cardToIban\nbase_url: x")
            .unwrap_err();
        assert!(err.to_string().contains(SCOPES_NOT_A_LIST), "{err}");

        let err = serde_json::from_str::<Credentials>(r#"{"scopes": {"a": 1}}"#).unwrap_err();
        assert!(err.to_string().contains(SCOPES_NOT_A_LIST), "{err}");
    }

    #[test]
    fn list_scopes_are_accepted() {
        let credentials: Credentials =
            serde_yaml::from_str("username: u\npassword: p\nscopes: [a, b]\nbase_url: x").unwrap();
        assert_eq!(credentials.scopes, vec!["a", "b"]);
        assert!(credentials.validate().is_ok());
    }

    #[test]
    fn debug_hides_password() {
        let rendered = format!("{:?}", full());
        assert!(!rendered.contains("secret"));
    }

    #[test]
    #[serial]
    fn reads_environment() {
        std::env::set_var(ENV_USERNAME, "09121111111");
        std::env::set_var(ENV_PASSWORD, "pw");
        std::env::set_var(ENV_SCOPES, "cardToIban, shahkar,,");
        std::env::remove_var(ENV_BASE_URL);

        let credentials = Credentials::from_env();
        assert_eq!(credentials.username, "09121111111");
        assert_eq!(credentials.scopes, vec!["cardToIban", "shahkar"]);
        assert_eq!(credentials.base_url, DEFAULT_BASE_URL);

        std::env::remove_var(ENV_USERNAME);
        std::env::remove_var(ENV_PASSWORD);
        std::env::remove_var(ENV_SCOPES);
    }
}
