/// Trait for accessing environment variables in a testable way
///
/// Author resolution reads `COMMENT_AUTHOR` and `USER`; going through this
/// trait lets tests inject values without touching the process environment.

#[cfg(test)]
use std::collections::HashMap;
pub trait EnvProvider {
    /// Get the value of an environment variable
    fn get_var(&self, key: &str) -> Option<String>;
}

/// Production implementation that uses the system environment
pub struct SystemEnvProvider;

impl EnvProvider for SystemEnvProvider {
    fn get_var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Test-only mock implementation for environment variables
#[cfg(test)]
pub struct MockEnvProvider {
    vars: HashMap<String, String>,
}

#[cfg(test)]
impl MockEnvProvider {
    /// Create a new empty mock environment provider
    pub fn new() -> Self {
        Self {
            vars: HashMap::new(),
        }
    }

    /// Set an environment variable in the mock
    pub fn set_var(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    /// Create a mock with the comment author variable set
    pub fn with_author(name: impl Into<String>) -> Self {
        let mut mock = Self::new();
        mock.set_var("COMMENT_AUTHOR", name);
        mock
    }
}

#[cfg(test)]
impl EnvProvider for MockEnvProvider {
    fn get_var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}
