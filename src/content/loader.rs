//! Content loader - loads documents from the content directory

use super::{scanner, Document};
use crate::error::FeedError;
use crate::FeedSite;

/// Loads documents from the content directory
pub struct ContentLoader<'a> {
    site: &'a FeedSite,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(site: &'a FeedSite) -> Self {
        Self { site }
    }

    /// Load every parsable document, in directory listing order.
    ///
    /// Files that cannot be read or parsed are logged and skipped. Only an
    /// unreadable content directory is returned as an error.
    pub fn load_documents(&self) -> Result<Vec<Document>, FeedError> {
        let files = scanner::scan(&self.site.content_dir)?;

        let mut documents = Vec::with_capacity(files.len());
        for path in files {
            match Document::load(&path) {
                Ok(document) => documents.push(document),
                Err(e) => {
                    tracing::warn!("Skipping {:?}: {}", path, e);
                }
            }
        }

        tracing::debug!(
            "Loaded {} documents from {:?}",
            documents.len(),
            self.site.content_dir
        );
        Ok(documents)
    }
}
