//! Client behaviour configuration

use serde::Deserialize;

/// Client configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Environment name
    #[serde(default)]
    pub environment: Environment,

    /// Log filter directive used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Where the student is sent after a successful submission
    #[serde(default = "default_redirect_to")]
    pub redirect_to: String,

    /// Where the student is sent when the session is missing or expired
    #[serde(default = "default_login_path")]
    pub login_path: String,
}

/// Application environment
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl ClientConfig {
    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            log_level: default_log_level(),
            redirect_to: default_redirect_to(),
            login_path: default_login_path(),
        }
    }
}

fn default_log_level() -> String {
    "info,uaem_survey=debug".to_string()
}

fn default_redirect_to() -> String {
    "index.html".to_string()
}

fn default_login_path() -> String {
    "/login.html".to_string()
}
