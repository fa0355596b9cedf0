//! Feed generation errors

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while scanning, parsing and serializing the feed
#[derive(Error, Debug)]
pub enum FeedError {
    #[error("Error reading content directory {path:?}: {source}")]
    ContentDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error processing file {path:?}: {source}")]
    ReadDocument {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Missing front-matter delimiters in {path:?}: expected 3 segments, found {found}")]
    MissingSegments { path: PathBuf, found: usize },

    #[error("Failed to parse front-matter in {path:?}: {source}")]
    FrontMatter {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Error generating feed: {0}")]
    Serialize(#[from] rss::Error),

    #[error("Generated feed is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

impl FeedError {
    /// Whether this error aborts the whole generation cycle.
    ///
    /// Per-document errors only cause that document to be skipped.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            FeedError::ContentDir { .. } | FeedError::Serialize(_) | FeedError::Encoding(_)
        )
    }
}
