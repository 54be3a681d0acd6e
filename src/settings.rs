use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use dotenv::dotenv;
use std::{env, fmt, path::PathBuf, str::FromStr, time::Duration};

use crate::constants::{CONTACT_SUCCESS_RESET_SECS, SEARCH_RESULT_LIMIT};

const MAX_SEARCH_RESULT_LIMIT: usize = 50;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum AppEnvironment {
    Development,
    Production,
    Testing,
}

impl FromStr for AppEnvironment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" => Ok(AppEnvironment::Development),
            "production" => Ok(AppEnvironment::Production),
            "testing" => Ok(AppEnvironment::Testing),
            _ => Err(ConfigError::Message(format!("Invalid environment: {}", s))),
        }
    }
}

#[derive(Deserialize, Clone)]
#[serde(rename_all = "snake_case")]
pub struct AppConfig {
    #[serde(default = "default_env")]
    pub env: AppEnvironment,

    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_worker_count")]
    pub worker_count: usize,

    #[serde(default = "default_content_dir")]
    pub content_dir: PathBuf,

    #[serde(default)]
    pub content_url: Option<String>,

    #[serde(default)]
    pub content_access_token: Option<String>,

    #[serde(default = "default_cors_origins")]
    pub cors_allowed_origins: String,

    #[serde(default = "default_search_result_limit")]
    pub search_result_limit: usize,

    #[serde(default = "default_contact_endpoint")]
    pub contact_endpoint: String,

    #[serde(default = "default_contact_success_reset_secs")]
    pub contact_success_reset_secs: u64,
}

fn default_env() -> AppEnvironment {
    AppEnvironment::Development
}
fn default_name() -> String {
    "Portfolio-Showcase".to_string()
}
fn default_port() -> u16 {
    8080
}
fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_worker_count() -> usize {
    num_cpus::get()
}
fn default_content_dir() -> PathBuf {
    PathBuf::from("content")
}
fn default_cors_origins() -> String {
    "*".to_string()
}
fn default_search_result_limit() -> usize {
    SEARCH_RESULT_LIMIT
}
fn default_contact_endpoint() -> String {
    "http://127.0.0.1:8080/api/contact".to_string()
}
fn default_contact_success_reset_secs() -> u64 {
    CONTACT_SUCCESS_RESET_SECS
}

impl AppConfig {
    pub fn new() -> Result<Self, ConfigError> {
        dotenv().ok();

        let raw_env = env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let env_name = AppEnvironment::from_str(&raw_env)
            .map_err(|_| ConfigError::Message(format!("Invalid APP_ENV value: {}", raw_env)))?;

        let builder = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env_name)).required(false))
            .add_source(
                Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .ignore_empty(true)
            );

        let mut config: Self = builder.build()?.try_deserialize()?;

        config.env = env_name;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if self.content_dir.as_os_str().is_empty() {
            errors.push("CONTENT_DIR cannot be empty".to_string());
        }
        if let Some(content_url) = &self.content_url {
            if !is_http_url(content_url) {
                errors.push(format!("CONTENT_URL must be an http(s) URL, got {}", content_url));
            }
        }
        if !is_http_url(&self.contact_endpoint) {
            errors.push(format!("CONTACT_ENDPOINT must be an http(s) URL, got {}", self.contact_endpoint));
        }
        if self.search_result_limit == 0 || self.search_result_limit > MAX_SEARCH_RESULT_LIMIT {
            errors.push(format!("SEARCH_RESULT_LIMIT must be between 1 and {}", MAX_SEARCH_RESULT_LIMIT));
        }
        if self.worker_count == 0 {
            errors.push("WORKER_COUNT must be at least 1".to_string());
        }
        if self.is_production() && self.cors_origins().iter().any(|o| o == "*") {
            errors.push("Wildcard CORS (*) is not allowed in production".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Message(errors.join(", ")))
        }
    }

    pub fn is_production(&self) -> bool {
        self.env == AppEnvironment::Production
    }

    pub fn cors_origins(&self) -> Vec<String> {
        self.cors_allowed_origins
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }

    pub fn contact_success_reset(&self) -> Duration {
        Duration::from_secs(self.contact_success_reset_secs)
    }
}

fn is_http_url(value: &str) -> bool {
    url::Url::parse(value)
        .map(|parsed| parsed.scheme() == "http" || parsed.scheme() == "https")
        .unwrap_or(false)
}

impl fmt::Display for AppEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AppEnvironment::Development => "development",
            AppEnvironment::Production => "production",
            AppEnvironment::Testing => "testing",
        };
        write!(f, "{s}")
    }
}

trait Redact {
    fn redact(&self) -> &str;
}

impl Redact for str {
    fn redact(&self) -> &str {
        if self.is_empty() {
            "[MISSING]"
        } else {
            "[REDACTED]"
        }
    }
}

impl Redact for Option<String> {
    fn redact(&self) -> &str {
        match self {
            Some(value) => value.as_str().redact(),
            None => "[NOT SET]",
        }
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("name", &self.name)
            .field("port", &self.port)
            .field("host", &self.host)
            .field("worker_count", &self.worker_count)
            .field("content_dir", &self.content_dir)
            .field("content_url", &self.content_url)
            .field("content_access_token", &self.content_access_token.redact())
            .field("cors_allowed_origins", &self.cors_allowed_origins)
            .field("search_result_limit", &self.search_result_limit)
            .field("contact_endpoint", &self.contact_endpoint)
            .field("contact_success_reset_secs", &self.contact_success_reset_secs)
            .finish()
    }
}
