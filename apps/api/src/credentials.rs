//! API credential resolution.
//!
//! The orchestrator never looks up the key itself; callers resolve it through a
//! `CredentialSource` at call time and pass it in explicitly.

use std::fmt;

/// Environment variables consulted for the Gemini key, in priority order.
pub const CREDENTIAL_ENV_VARS: &[&str] = &["GEMINI_API_KEY", "API_KEY"];

/// A Gemini API key. `Debug` is redacted so the key never reaches logs.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Returns `None` for blank input.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// Resolves the current credential. Implementations are consulted once per
/// generation request.
pub trait CredentialSource: Send + Sync {
    fn current(&self) -> Option<ApiKey>;
}

/// Reads the key from the process environment on every call.
#[derive(Debug, Clone, Default)]
pub struct EnvCredentialSource;

impl CredentialSource for EnvCredentialSource {
    fn current(&self) -> Option<ApiKey> {
        CREDENTIAL_ENV_VARS
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .find_map(ApiKey::new)
    }
}

/// A fixed credential (or none).
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct StaticCredentialSource(pub Option<ApiKey>);

#[cfg(test)]
impl CredentialSource for StaticCredentialSource {
    fn current(&self) -> Option<ApiKey> {
        self.0.clone()
    }
}
