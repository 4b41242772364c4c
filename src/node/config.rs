use std::{collections::HashMap, env};

/// Key/value settings consulted when building a node command.
pub trait Configuration: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
}

impl Configuration for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

/// Reads settings from environment variables.
///
/// `sonar.nodejs.executable` is looked up as `JSKINDS_SONAR_NODEJS_EXECUTABLE`
/// with the default prefix.
#[derive(Debug, Clone)]
pub struct EnvConfiguration {
    prefix: String,
}

impl EnvConfiguration {
    pub fn new() -> Self {
        EnvConfiguration::with_prefix("JSKINDS")
    }

    pub fn with_prefix(prefix: &str) -> Self {
        EnvConfiguration {
            prefix: prefix.to_string(),
        }
    }

    pub fn variable_name(&self, key: &str) -> String {
        let key: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_uppercase() } else { '_' })
            .collect();
        format!("{}_{}", self.prefix, key)
    }
}

impl Default for EnvConfiguration {
    fn default() -> Self {
        EnvConfiguration::new()
    }
}

impl Configuration for EnvConfiguration {
    fn get(&self, key: &str) -> Option<String> {
        env::var(self.variable_name(key)).ok().filter(|value| !value.is_empty())
    }
}
