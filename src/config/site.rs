//! Feed configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main feed configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    // Channel
    pub title: String,
    pub description: String,
    pub url: String,
    pub language: Option<String>,
    pub generator: String,
    pub author: String,

    // Directory
    pub content_dir: String,

    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub highlight: HighlightConfig,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            title: "DevOps Weekly Updates".to_string(),
            description: "An RSS Feed of Elliott's DevOps team updates".to_string(),
            url: "http://devops.elliottmgmt.com".to_string(),
            language: None,
            generator: format!("devops-feed {}", env!("CARGO_PKG_VERSION")),
            author: String::new(),

            content_dir: "content".to_string(),

            server: ServerConfig::default(),
            highlight: HighlightConfig::default(),
        }
    }
}

impl FeedConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: FeedConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Link of a feed item: the site URL followed by the file name, unescaped
    pub fn item_link(&self, file_name: &str) -> String {
        format!("{}/{}", self.url.trim_end_matches('/'), file_name)
    }
}

/// HTTP listener configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            ip: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

/// Code block highlighting in rendered descriptions
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    pub enable: bool,
    pub theme: String,
    pub line_number: bool,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            enable: false,
            theme: "base16-ocean.dark".to_string(),
            line_number: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FeedConfig::default();
        assert_eq!(config.title, "DevOps Weekly Updates");
        assert_eq!(config.url, "http://devops.elliottmgmt.com");
        assert_eq!(config.content_dir, "content");
        assert_eq!(config.server.port, 8080);
        assert!(!config.highlight.enable);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: Platform Notes
url: https://example.com/
content_dir: posts
server:
  port: 9000
"#;
        let config: FeedConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "Platform Notes");
        assert_eq!(config.content_dir, "posts");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.ip, "0.0.0.0");
        // Untouched fields keep their defaults
        assert_eq!(
            config.description,
            "An RSS Feed of Elliott's DevOps team updates"
        );
    }

    #[test]
    fn test_item_link() {
        let mut config = FeedConfig::default();
        assert_eq!(
            config.item_link("week-1.md"),
            "http://devops.elliottmgmt.com/week-1.md"
        );

        config.url = "https://example.com/".to_string();
        assert_eq!(
            config.item_link("notes & news.md"),
            "https://example.com/notes & news.md"
        );
    }
}
