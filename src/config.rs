use std::fmt;

use crate::cli::Args;
use crate::env::{EnvSource, TOKEN_ENV_VAR};
use crate::error::{ConfigError, Result};
use crate::version::TargetVersion;

/// GitHub token read from the environment.
///
/// `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(token: impl Into<String>) -> Self {
        AuthToken(token.into())
    }

    /// The raw token, for the API client
    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            f.write_str("AuthToken(<empty>)")
        } else {
            f.write_str("AuthToken(***)")
        }
    }
}

/// Parameters exactly as supplied, before any consistency checks.
///
/// Empty strings mean "not given".
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawConfig {
    pub organization: String,
    pub repository: String,
    pub for_version: String,
    pub end: String,
    pub single_release_branch: String,
    pub from_hash: String,
    pub token: AuthToken,
    pub verbose: bool,
}

impl RawConfig {
    /// Collects flags and the token into a raw configuration.
    ///
    /// The token comes from `GCHL_GITHUB_TOKEN` only; an unset variable
    /// yields an empty token, which [`RawConfig::validate`] rejects.
    pub fn acquire(args: Args, env: &impl EnvSource) -> Self {
        RawConfig {
            organization: args.organization,
            repository: args.repository,
            for_version: args.for_version,
            end: args.end,
            single_release_branch: args.single_release_branch,
            from_hash: args.from_hash,
            token: AuthToken::new(env.var(TOKEN_ENV_VAR).unwrap_or_default()),
            verbose: args.verbose,
        }
    }

    /// Checks the parameters in a fixed order and resolves the mode.
    ///
    /// The first violated rule is returned:
    /// 1. token present
    /// 2. `--organization` present
    /// 3. `--repository` present
    /// 4. `--for-version` or `--from-hash` present
    /// 5. `--from-hash` requires `--single-release-branch`
    /// 6. with `--from-hash`, commit mode is chosen and nothing else is checked
    /// 7. otherwise `--for-version` must be a semantic version
    ///
    /// `--end` is carried along without any checks.
    pub fn validate(&self) -> Result<ChangelogConfig> {
        if self.token.is_empty() {
            return Err(ConfigError::missing_credential());
        }

        if self.organization.is_empty() {
            return Err(ConfigError::missing_field("organization"));
        }

        if self.repository.is_empty() {
            return Err(ConfigError::missing_field("repository"));
        }

        if self.for_version.is_empty() && self.from_hash.is_empty() {
            return Err(ConfigError::MissingModeSelector);
        }

        let mode = self.resolve_mode()?;

        Ok(ChangelogConfig {
            organization: self.organization.clone(),
            repository: self.repository.clone(),
            token: self.token.clone(),
            verbose: self.verbose,
            mode,
        })
    }

    fn resolve_mode(&self) -> Result<Mode> {
        if !self.from_hash.is_empty() {
            if self.single_release_branch.is_empty() {
                return Err(ConfigError::InvalidModeCombination);
            }

            return Ok(Mode::Commit {
                from: self.from_hash.clone(),
                branch: self.single_release_branch.clone(),
            });
        }

        let version = TargetVersion::parse(&self.for_version).map_err(|source| {
            ConfigError::InvalidVersionFormat {
                version: self.for_version.clone(),
                source,
            }
        })?;

        Ok(Mode::Version {
            version,
            end: non_empty(&self.end),
            single_release_branch: non_empty(&self.single_release_branch),
        })
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// How the changelog range is selected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Changelog for a named release
    Version {
        version: TargetVersion,
        /// Commit to stop at instead of the previous release
        end: Option<String>,
        /// Main branch when releases are cut from a single branch
        single_release_branch: Option<String>,
    },
    /// Changelog from a commit up to the next tag on a single branch
    Commit { from: String, branch: String },
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Version { version, end, .. } => {
                write!(f, "release {}", version)?;
                if let Some(end) = end {
                    write!(f, " (stopping at {})", end)?;
                }
                Ok(())
            }
            Mode::Commit { from, branch } => {
                write!(f, "commits from {} on branch '{}'", from, branch)
            }
        }
    }
}

/// Validated configuration handed to the changelog generator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogConfig {
    organization: String,
    repository: String,
    token: AuthToken,
    verbose: bool,
    mode: Mode,
}

impl ChangelogConfig {
    pub fn organization(&self) -> &str {
        &self.organization
    }

    pub fn repository(&self) -> &str {
        &self.repository
    }

    pub fn token(&self) -> &AuthToken {
        &self.token
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// `organization/repository`
    pub fn slug(&self) -> String {
        format!("{}/{}", self.organization, self.repository)
    }
}
