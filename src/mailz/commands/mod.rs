use crate::index::DisplayRecord;
use crate::model::EmailRecord;
use std::path::{Path, PathBuf};

pub mod clear;
pub mod config;
pub mod copy;
pub mod delete;
pub mod generate;
pub mod helpers;
pub mod list;
pub mod open;
pub mod paths;

/// Where mailz keeps its files.
#[derive(Debug, Clone)]
pub struct MailzPaths {
    pub data_dir: PathBuf,
}

impl MailzPaths {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Config sits next to the data it configures.
    pub fn config_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_records: Vec<EmailRecord>,
    pub listed_records: Vec<DisplayRecord>,
    /// `(key, value)` pairs for config output.
    pub config_entries: Vec<(String, String)>,
    /// `(label, path)` pairs for path output.
    pub paths: Vec<(String, PathBuf)>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_records(mut self, records: Vec<EmailRecord>) -> Self {
        self.affected_records = records;
        self
    }

    pub fn with_listed_records(mut self, records: Vec<DisplayRecord>) -> Self {
        self.listed_records = records;
        self
    }

    pub fn with_config_entries(mut self, entries: Vec<(String, String)>) -> Self {
        self.config_entries = entries;
        self
    }

    pub fn with_paths(mut self, paths: Vec<(String, PathBuf)>) -> Self {
        self.paths = paths;
        self
    }

    /// True when any message is a warning or error.
    pub fn has_problems(&self) -> bool {
        self.messages
            .iter()
            .any(|m| matches!(m.level, MessageLevel::Warning | MessageLevel::Error))
    }
}
