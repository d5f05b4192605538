use std::path::PathBuf;

use crate::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    pub home_country: String,
    pub default_radius: u32,
    pub taxonomy_path: Option<PathBuf>,
    pub generator_url: Option<String>,
    pub generator_api_key: Option<String>,
    pub generator_timeout_secs: u64,
    pub user_agent: String,
}

impl AppConfig {
    /// Returns the generator base URL, which only the expansion path needs.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] if `PROSPECTOR_GENERATOR_URL` was not set.
    pub fn require_generator_url(&self) -> Result<&str, ConfigError> {
        self.generator_url
            .as_deref()
            .ok_or_else(|| ConfigError::MissingEnvVar("PROSPECTOR_GENERATOR_URL".to_string()))
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field("home_country", &self.home_country)
            .field("default_radius", &self.default_radius)
            .field("taxonomy_path", &self.taxonomy_path)
            .field("generator_url", &self.generator_url)
            .field(
                "generator_api_key",
                &self.generator_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("generator_timeout_secs", &self.generator_timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
