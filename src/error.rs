use thiserror::Error;

use crate::env::TOKEN_ENV_VAR;

/// Reasons a changelog configuration is rejected.
///
/// Every variant is fatal to the current invocation; the display string is
/// the single line shown to the user.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("no ${var} defined")]
    MissingCredential { var: &'static str },

    #[error("no --{flag} given")]
    MissingField { flag: &'static str },

    #[error("no --for-version or --from-hash given")]
    MissingModeSelector,

    #[error("you can not use --from-hash without --single-release-branch option")]
    InvalidModeCombination,

    #[error("--for-version {version:?} is not a valid semver: {source}")]
    InvalidVersionFormat {
        version: String,
        #[source]
        source: semver::Error,
    },
}

/// Convenience type alias for Results in gchl
pub type Result<T> = std::result::Result<T, ConfigError>;

impl ConfigError {
    /// Missing token for the default environment variable
    pub fn missing_credential() -> Self {
        ConfigError::MissingCredential { var: TOKEN_ENV_VAR }
    }

    /// Required flag left empty
    pub fn missing_field(flag: &'static str) -> Self {
        ConfigError::MissingField { flag }
    }
}
