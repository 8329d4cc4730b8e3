//! Environment lookup abstraction
//!
//! The token is the only value read from the process environment. Reading
//! it through the [EnvSource] trait keeps acquisition testable: the binary
//! passes [ProcessEnv], tests pass a [MockEnv] populated by hand.

pub mod mock;
pub mod process;

pub use mock::MockEnv;
pub use process::ProcessEnv;

/// Environment variable holding the GitHub token
pub const TOKEN_ENV_VAR: &str = "GCHL_GITHUB_TOKEN";

/// Read-only access to environment variables
pub trait EnvSource {
    /// Look up a variable by name
    ///
    /// Returns `None` when the variable is unset or not valid unicode.
    fn var(&self, key: &str) -> Option<String>;
}
