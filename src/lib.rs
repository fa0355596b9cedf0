//! devops-feed: serves an RSS feed built from a directory of Markdown posts
//!
//! Every request rescans the content directory, parses each post's YAML
//! front-matter, renders the Markdown body and serializes an RSS 2.0 document.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod generator;
pub mod server;

use anyhow::Result;
use std::path::{Path, PathBuf};

pub use error::FeedError;

/// The feed application
#[derive(Debug, Clone)]
pub struct FeedSite {
    /// Feed configuration
    pub config: config::FeedConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Content directory holding the Markdown posts
    pub content_dir: PathBuf,
}

impl FeedSite {
    /// Create a new instance from a directory, reading `_config.yml` when present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let config_path = base_dir.as_ref().join("_config.yml");

        let config = if config_path.exists() {
            tracing::debug!("Loading config from {:?}", config_path);
            config::FeedConfig::load(&config_path)?
        } else {
            config::FeedConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Create an instance with an explicit configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::FeedConfig) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        let content_dir = base_dir.join(&config.content_dir);

        Self {
            config,
            base_dir,
            content_dir,
        }
    }

    /// Generate the RSS document
    pub fn generate(&self) -> Result<String, FeedError> {
        generator::FeedGenerator::new(self).generate()
    }
}
