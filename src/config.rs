use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub email: EmailConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum EmailProvider {
    #[default]
    Resend,
    Smtp,
    /// Log messages instead of sending them (local development)
    Log,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EmailConfig {
    #[serde(default)]
    pub provider: EmailProvider,
    #[serde(default = "default_from_address")]
    pub from_address: String,
    /// Business inbox receiving every enquiry
    #[serde(default = "default_recipients")]
    pub recipients: Vec<String>,
    #[serde(default)]
    pub resend: ResendConfig,
    #[serde(default)]
    pub smtp: SmtpConfig,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            provider: EmailProvider::default(),
            from_address: default_from_address(),
            recipients: default_recipients(),
            resend: ResendConfig::default(),
            smtp: SmtpConfig::default(),
        }
    }
}

fn default_from_address() -> String {
    "Weagle International <onboarding@resend.dev>".to_string()
}

fn default_recipients() -> Vec<String> {
    vec!["info@weagleinternational.com".to_string()]
}

#[derive(Debug, Deserialize, Clone)]
pub struct ResendConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_resend_api_url")]
    pub api_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ResendConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_url: default_resend_api_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_resend_api_url() -> String {
    "https://api.resend.com".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Deserialize, Clone)]
pub struct SmtpConfig {
    #[serde(default = "default_smtp_host")]
    pub host: String,
    #[serde(default = "default_smtp_port")]
    pub port: u16,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            host: default_smtp_host(),
            port: default_smtp_port(),
            username: String::new(),
            password: String::new(),
        }
    }
}

fn default_smtp_host() -> String {
    "localhost".to_string()
}

fn default_smtp_port() -> u16 {
    1025
}

/// Business details shown on every page
#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    #[serde(default = "default_site_name")]
    pub name: String,
    #[serde(default = "default_contact_email")]
    pub contact_email: String,
    #[serde(default = "default_phone")]
    pub phone: String,
    #[serde(default = "default_whatsapp_url")]
    pub whatsapp_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: default_site_name(),
            contact_email: default_contact_email(),
            phone: default_phone(),
            whatsapp_url: default_whatsapp_url(),
        }
    }
}

fn default_site_name() -> String {
    "Weagle International".to_string()
}

fn default_contact_email() -> String {
    "export@weagleinternational.com".to_string()
}

fn default_phone() -> String {
    "+91 98765 43210".to_string()
}

fn default_whatsapp_url() -> String {
    "https://wa.me/919876543210".to_string()
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
    /// 1. Environment variables (WEAGLE__EMAIL__PROVIDER, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Config file is optional
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("WEAGLE")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("email.recipients")
                .try_parsing(true),
        );

        // Hosting platforms usually hand the provider key over as-is
        if let Ok(api_key) = env::var("RESEND_API_KEY") {
            builder = builder.set_override("email.resend.api_key", api_key)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.email.recipients.is_empty() {
            return Err("At least one email recipient is required".to_string());
        }
        if self.email.from_address.trim().is_empty() {
            return Err("Email from_address must not be empty".to_string());
        }
        if self.email.provider == EmailProvider::Resend && self.email.resend.api_key.is_empty() {
            return Err("Resend API key is required when email.provider is \"resend\"".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            email: EmailConfig {
                provider: EmailProvider::Log,
                ..Default::default()
            },
            site: SiteConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }

    #[test]
    fn test_validation_valid_config() {
        assert!(config().validate().is_ok());
    }

    #[test]
    fn test_validation_zero_port() {
        let mut config = config();
        config.server.port = 0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_no_recipients() {
        let mut config = config();
        config.email.recipients.clear();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_resend_requires_api_key() {
        let mut config = config();
        config.email.provider = EmailProvider::Resend;

        assert!(config.validate().is_err());

        config.email.resend.api_key = "re_test_key".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_email_defaults() {
        let email = EmailConfig::default();

        assert_eq!(email.provider, EmailProvider::Resend);
        assert_eq!(email.recipients, vec!["info@weagleinternational.com"]);
        assert_eq!(email.resend.api_url, "https://api.resend.com");
    }
}
