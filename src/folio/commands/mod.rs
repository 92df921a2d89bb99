use crate::config::FolioConfig;
use crate::model::Post;
use std::path::PathBuf;

pub mod config;
pub mod create;
pub mod delete;
pub mod list;
pub mod reset;
pub mod update;
pub mod view;

#[derive(Debug, Clone)]
pub struct FolioPaths {
    /// Holds `config.json` and the file-backed storage slot.
    pub data_dir: PathBuf,
}

/// Values stamped onto posts built from drafts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDefaults {
    pub author: String,
    pub fallback_image: String,
}

impl From<&FolioConfig> for PostDefaults {
    fn from(config: &FolioConfig) -> Self {
        Self {
            author: config.author.clone(),
            fallback_image: config.fallback_image.clone(),
        }
    }
}

impl Default for PostDefaults {
    fn default() -> Self {
        Self::from(&FolioConfig::default())
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
    pub affected_posts: Vec<Post>,
    pub listed_posts: Vec<Post>,
    pub config: Option<FolioConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_posts(mut self, posts: Vec<Post>) -> Self {
        self.listed_posts = posts;
        self
    }

    pub fn with_config(mut self, config: FolioConfig) -> Self {
        self.config = Some(config);
        self
    }
}
