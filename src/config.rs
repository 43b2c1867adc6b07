//! Configuration for the document comparison service
//!
//! Built once at startup and injected into the comparison engine and the
//! notifier at construction; nothing mutates it afterwards. Secrets (LLM API
//! key, SMTP credentials) are read from the environment during [`AppConfig::load`]
//! and never logged.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Environment variable holding the LLM API key
pub const ENV_LLM_API_KEY: &str = "OPENAI_API_KEY";
/// Environment variable holding the sending mail account address
pub const ENV_SMTP_ADDRESS: &str = "SMTP_ADDRESS";
/// Environment variable holding the sending mail account password
pub const ENV_SMTP_PASSWORD: &str = "SMTP_PASSWORD";

/// Main service configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// LLM (chat completion) configuration
    #[serde(default)]
    pub llm: LlmConfig,
    /// SMTP transport configuration
    #[serde(default)]
    pub smtp: SmtpConfig,
    /// Audit trail configuration
    #[serde(default)]
    pub audit: AuditConfig,
}

impl AppConfig {
    /// Load configuration from an optional TOML file, then apply env secrets.
    ///
    /// A missing path means defaults; a present but unreadable or invalid
    /// file is a startup error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path).map_err(|e| {
                    Error::Config(format!("failed to read {}: {}", path.display(), e))
                })?;
                toml::from_str(&raw).map_err(|e| {
                    Error::Config(format!("failed to parse {}: {}", path.display(), e))
                })?
            }
            None => Self::default(),
        };

        config.apply_env_secrets();
        Ok(config)
    }

    /// Overlay secrets from the environment, if set.
    fn apply_env_secrets(&mut self) {
        if let Ok(key) = std::env::var(ENV_LLM_API_KEY) {
            self.llm.api_key = key;
        }
        if let Ok(address) = std::env::var(ENV_SMTP_ADDRESS) {
            self.smtp.address = address;
        }
        if let Ok(password) = std::env::var(ENV_SMTP_PASSWORD) {
            self.smtp.password = password;
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host address
    pub host: String,
    /// Port number
    pub port: u16,
    /// Enable CORS
    pub enable_cors: bool,
    /// Maximum upload size in bytes (default: 25MB)
    pub max_upload_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            enable_cors: true,
            max_upload_size: 25 * 1024 * 1024, // 25MB
        }
    }
}

/// LLM (chat completion) configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Chat completion API base URL
    pub base_url: String,
    /// API key (populated from OPENAI_API_KEY, never displayed)
    #[serde(default, skip_serializing)]
    pub api_key: String,
    /// Generation model name
    pub model: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Request timeout in seconds (client default, no per-call override)
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            api_key: String::new(),
            model: "gpt-4".to_string(),
            temperature: 0.8,
            timeout_secs: 120,
        }
    }
}

/// SMTP transport configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmtpConfig {
    /// Mail relay host
    pub host: String,
    /// Submission port (STARTTLS)
    pub port: u16,
    /// Sending account address (populated from SMTP_ADDRESS)
    #[serde(default)]
    pub address: String,
    /// Sending account password (populated from SMTP_PASSWORD, never displayed)
    #[serde(default, skip_serializing)]
    pub password: String,
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            host: "smtp.gmail.com".to_string(),
            port: 587,
            address: String::new(),
            password: String::new(),
        }
    }
}

/// Audit trail configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Fixed recipient for audit emails
    pub recipient: String,
    /// Directory for the transient attachment files
    pub work_dir: PathBuf,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            recipient: "info@eastridge-analytics.com".to_string(),
            work_dir: PathBuf::from("."),
        }
    }
}
