//! API key loading.

use std::fmt;

use crate::error::TranslateError;

/// Default environment variable holding the API key.
pub const DEFAULT_API_KEY_ENV: &str = "OPENROUTER_API_KEY";

/// A non-empty bearer secret.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// Where credentials are looked up by variable name.
pub trait CredentialSource {
    fn lookup(&self, name: &str) -> Option<String>;
}

/// Reads from the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl CredentialSource for ProcessEnv {
    fn lookup(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// Loads the API key, preferring the environment variable over the
/// config file value. Blank values count as missing.
pub fn load_credential(
    source: &impl CredentialSource,
    env_var: &str,
    config_key: Option<&str>,
) -> Result<Credential, TranslateError> {
    source
        .lookup(env_var)
        .filter(|key| !key.trim().is_empty())
        .or_else(|| {
            config_key
                .filter(|key| !key.trim().is_empty())
                .map(str::to_string)
        })
        .map(|key| Credential(key.trim().to_string()))
        .ok_or_else(|| TranslateError::MissingCredential {
            env_var: env_var.to_string(),
        })
}
