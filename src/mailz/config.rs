use crate::error::{MailzError, Result};
use crate::generator::GeneratorKind;
use crate::inbox::{Inbox, DEFAULT_DOMAIN, DEFAULT_INBOX_URL};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_WORD_API_URL: &str = "https://random-word-api.herokuapp.com/word";
const DEFAULT_WORD_COUNT: usize = 4;
const MAX_WORD_COUNT: usize = 10;

/// Keys accepted by `mailz config`, in display order.
pub const CONFIG_KEYS: &[&str] = &[
    "domain",
    "inbox-url",
    "generator",
    "word-count",
    "word-api-url",
    "copy-on-create",
    "open-on-create",
];

/// Configuration for mailz, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MailzConfig {
    /// Domain appended to generated local parts
    #[serde(default = "default_domain")]
    pub domain: String,

    /// Base URL of the inbox viewer; the local part is appended as a path segment
    #[serde(default = "default_inbox_url")]
    pub inbox_url: String,

    #[serde(default = "default_generator")]
    pub generator: GeneratorKind,

    /// Number of words drawn by the `words` generator
    #[serde(default = "default_word_count")]
    pub word_count: usize,

    #[serde(default = "default_word_api_url")]
    pub word_api_url: String,

    #[serde(default = "default_true")]
    pub copy_on_create: bool,

    #[serde(default = "default_true")]
    pub open_on_create: bool,
}

fn default_domain() -> String {
    DEFAULT_DOMAIN.to_string()
}

fn default_inbox_url() -> String {
    DEFAULT_INBOX_URL.to_string()
}

fn default_generator() -> GeneratorKind {
    GeneratorKind::Prefix
}

fn default_word_count() -> usize {
    DEFAULT_WORD_COUNT
}

fn default_word_api_url() -> String {
    DEFAULT_WORD_API_URL.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for MailzConfig {
    fn default() -> Self {
        Self {
            domain: default_domain(),
            inbox_url: default_inbox_url(),
            generator: default_generator(),
            word_count: default_word_count(),
            word_api_url: default_word_api_url(),
            copy_on_create: true,
            open_on_create: true,
        }
    }
}

impl MailzConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(MailzError::Io)?;
        let config: MailzConfig =
            serde_json::from_str(&content).map_err(MailzError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(MailzError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(MailzError::Serialization)?;
        fs::write(config_path, content).map_err(MailzError::Io)?;
        Ok(())
    }

    pub fn inbox(&self) -> Inbox {
        Inbox::new(&self.domain, &self.inbox_url)
    }

    /// Current value of a `mailz config` key.
    pub fn get(&self, key: &str) -> Result<String> {
        let value = match key {
            "domain" => self.domain.clone(),
            "inbox-url" => self.inbox_url.clone(),
            "generator" => self.generator.to_string(),
            "word-count" => self.word_count.to_string(),
            "word-api-url" => self.word_api_url.clone(),
            "copy-on-create" => self.copy_on_create.to_string(),
            "open-on-create" => self.open_on_create.to_string(),
            other => return Err(unknown_key(other)),
        };
        Ok(value)
    }

    /// Validates and sets a `mailz config` key.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        match key {
            "domain" => {
                let domain = value.trim_start_matches('@');
                if domain.is_empty() || domain.contains(char::is_whitespace) {
                    return Err(invalid_value(key, value));
                }
                self.domain = domain.to_string();
            }
            "inbox-url" => self.inbox_url = parse_url(key, value)?,
            "generator" => self.generator = value.parse()?,
            "word-count" => {
                self.word_count = value
                    .parse::<usize>()
                    .ok()
                    .filter(|n| (1..=MAX_WORD_COUNT).contains(n))
                    .ok_or_else(|| invalid_value(key, value))?;
            }
            "word-api-url" => self.word_api_url = parse_url(key, value)?,
            "copy-on-create" => self.copy_on_create = parse_bool(key, value)?,
            "open-on-create" => self.open_on_create = parse_bool(key, value)?,
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }
}

fn unknown_key(key: &str) -> MailzError {
    MailzError::Config(format!(
        "Unknown config key: {} (known keys: {})",
        key,
        CONFIG_KEYS.join(", ")
    ))
}

fn invalid_value(key: &str, value: &str) -> MailzError {
    MailzError::Config(format!("Invalid value for {}: '{}'", key, value))
}

fn parse_url(key: &str, value: &str) -> Result<String> {
    if value.starts_with("http://") || value.starts_with("https://") {
        Ok(value.to_string())
    } else {
        Err(invalid_value(key, value))
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(invalid_value(key, value)),
    }
}
