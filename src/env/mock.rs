use crate::env::{EnvSource, TOKEN_ENV_VAR};
use std::collections::HashMap;

/// Map-backed environment for tests
#[derive(Debug, Clone, Default)]
pub struct MockEnv {
    vars: HashMap<String, String>,
}

impl MockEnv {
    /// Create an empty environment
    pub fn new() -> Self {
        MockEnv {
            vars: HashMap::new(),
        }
    }

    /// Environment holding only the GitHub token
    pub fn with_token(token: impl Into<String>) -> Self {
        let mut env = Self::new();
        env.set(TOKEN_ENV_VAR, token);
        env
    }

    /// Set a variable
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }
}

impl EnvSource for MockEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}
