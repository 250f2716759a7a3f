use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::{env, time::Duration};
use validator::ValidateEmail;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub site: SiteConfig,
    pub relay: RelayConfig,
    #[serde(default)]
    pub contact: ContactConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Brand identity and organization facts rendered into the page and its
/// structured data.
#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    pub name: String,
    pub legal_name: String,
    pub url: String,
    pub contact_email: String,
    pub title: String,
    pub description: String,
    pub founder: String,
    pub founded: u16,
    pub locality: String,
    pub region: String,
    pub country: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub same_as: Vec<String>,
}

impl SiteConfig {
    pub fn location(&self) -> String {
        format!("{}, {}", self.locality, self.region)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct RelayConfig {
    /// Base of the relay's AJAX endpoint; the contact address is appended.
    pub endpoint: String,
    /// Full relay URL, used as-is when set.
    #[serde(default)]
    pub url: Option<String>,
    pub timeout_secs: u64,
}

impl RelayConfig {
    pub fn target_url(&self, contact_email: &str) -> String {
        match &self.url {
            Some(url) => url.to_owned(),
            None => format!("{}/{contact_email}", self.endpoint.trim_end_matches('/')),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ContactConfig {
    #[serde(default = "default_form_ttl_secs")]
    pub form_ttl_secs: u64,
    #[serde(default = "default_max_forms")]
    pub max_forms: usize,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            form_ttl_secs: default_form_ttl_secs(),
            max_forms: default_max_forms(),
        }
    }
}

impl ContactConfig {
    pub fn form_ttl(&self) -> Duration {
        Duration::from_secs(self.form_ttl_secs)
    }
}

fn default_form_ttl_secs() -> u64 {
    30 * 60
}

fn default_max_forms() -> usize {
    xustudio_contact::DEFAULT_MAX_FORMS
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (XUSTUDIO__SITE__NAME, etc.)
    /// 2. Config file specified by path, CONFIG_PATH or config/default.toml
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("site.name", "Xu Studio")?
            .set_default("site.legal_name", "Xu Studio LLC")?
            .set_default("site.url", "https://thexustudio.com")?
            .set_default("site.contact_email", "contact@thexustudio.com")?
            .set_default(
                "site.title",
                "Xu Studio | AI Integration & Software Development",
            )?
            .set_default(
                "site.description",
                "Transform your business with AI. We specialize in AI integration, custom LLM solutions, and intelligent software development.",
            )?
            .set_default("site.founder", "Ethan Pan")?
            .set_default("site.founded", 2020)?
            .set_default("site.locality", "San Francisco")?
            .set_default("site.region", "CA")?
            .set_default("site.country", "US")?
            .set_default("relay.endpoint", "https://formsubmit.co/ajax")?
            .set_default("relay.timeout_secs", 15)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("XUSTUDIO")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("site.keywords")
                .with_list_parse_key("site.same_as")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.site.name.trim().is_empty() {
            return Err("Site name must not be empty".to_string());
        }
        if !self.site.contact_email.validate_email() {
            return Err(format!(
                "Site contact email is invalid: {}",
                self.site.contact_email
            ));
        }
        if self.contact.max_forms == 0 {
            return Err("Contact max_forms must be greater than 0".to_string());
        }
        if self.relay.timeout_secs == 0 {
            return Err("Relay timeout must be greater than 0".to_string());
        }

        let relay_url = self.relay.target_url(&self.site.contact_email);
        url::Url::parse(&relay_url).map_err(|e| format!("Relay url {relay_url} is invalid: {e}"))?;

        Ok(())
    }
}
