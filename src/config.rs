//! Runtime configuration parsed from environment variables.

use std::time::Duration;

/// Upload size limit carried over from the upload service: 10 MiB.
pub const DEFAULT_MAX_BYTES: u64 = 10 * 1024 * 1024;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_CONCURRENCY: usize = 4;

/// Errors produced while reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A variable is set but is not a positive integer.
    #[error("invalid value for {var}: {value:?} (expected a positive integer)")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditConfig {
    /// Largest document accepted, in bytes.
    pub max_bytes: u64,
    /// Wall-clock limit for analyzing one document.
    pub timeout: Duration,
    /// Documents analyzed at once.
    pub concurrency: usize,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_BYTES,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            concurrency: DEFAULT_CONCURRENCY,
        }
    }
}

impl AuditConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `AUDIT_MAX_BYTES`: default 10485760
    /// - `AUDIT_TIMEOUT_SECS`: default 10
    /// - `AUDIT_CONCURRENCY`: default 4
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if a variable is set to anything other
    /// than a positive integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AuditConfig::from_env`] with an injectable variable source.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for non-positive or non-numeric values.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let max_bytes = positive(&lookup, "AUDIT_MAX_BYTES")?.unwrap_or(DEFAULT_MAX_BYTES);
        let timeout_secs = positive(&lookup, "AUDIT_TIMEOUT_SECS")?.unwrap_or(DEFAULT_TIMEOUT_SECS);
        let concurrency = match positive(&lookup, "AUDIT_CONCURRENCY")? {
            Some(n) => usize::try_from(n).map_err(|_| ConfigError::Invalid {
                var: "AUDIT_CONCURRENCY",
                value: n.to_string(),
            })?,
            None => DEFAULT_CONCURRENCY,
        };

        Ok(Self { max_bytes, timeout: Duration::from_secs(timeout_secs), concurrency })
    }
}

fn positive(lookup: &impl Fn(&str) -> Option<String>, var: &'static str) -> Result<Option<u64>, ConfigError> {
    let Some(raw) = lookup(var) else {
        return Ok(None);
    };
    match raw.trim().parse::<u64>() {
        Ok(n) if n > 0 => Ok(Some(n)),
        _ => Err(ConfigError::Invalid { var, value: raw }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
