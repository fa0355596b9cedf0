//! Source documents: a front-matter block followed by a Markdown body

use std::fs;
use std::path::{Path, PathBuf};

use super::FrontMatter;
use crate::error::FeedError;

/// Separator around the front-matter block
pub const FRONT_MATTER_DELIMITER: &str = "---";

/// A parsed content file
#[derive(Debug, Clone)]
pub struct Document {
    /// File name, used to build the item link
    pub file_name: String,
    /// Full source path
    pub path: PathBuf,
    pub front_matter: FrontMatter,
    /// Raw Markdown body
    pub body: String,
}

impl Document {
    /// Read and parse a content file.
    ///
    /// Invalid UTF-8 sequences are replaced with U+FFFD rather than rejected.
    pub fn load(path: &Path) -> Result<Self, FeedError> {
        let bytes = fs::read(path).map_err(|source| FeedError::ReadDocument {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(path, &String::from_utf8_lossy(&bytes))
    }

    /// Parse already-read file contents
    pub fn parse(path: &Path, content: &str) -> Result<Self, FeedError> {
        let parts = split_parts(content);

        // The preamble before the first delimiter is discarded
        let [_, meta, body] = parts.as_slice() else {
            return Err(FeedError::MissingSegments {
                path: path.to_path_buf(),
                found: parts.len(),
            });
        };

        let front_matter = FrontMatter::parse(meta).map_err(|source| FeedError::FrontMatter {
            path: path.to_path_buf(),
            source,
        })?;

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(Self {
            file_name,
            path: path.to_path_buf(),
            front_matter,
            body: body.to_string(),
        })
    }
}

/// Split into at most three segments; later delimiters stay in the body
pub fn split_parts(content: &str) -> Vec<&str> {
    content.splitn(3, FRONT_MATTER_DELIMITER).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_parts() {
        let parts = split_parts("---\ntitle: A\n---\nbody");
        assert_eq!(parts, vec!["", "\ntitle: A\n", "\nbody"]);
    }

    #[test]
    fn test_split_keeps_extra_delimiters_in_body() {
        let parts = split_parts("---\ntitle: A\n---\nabove\n\n---\n\nbelow");
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[2], "\nabove\n\n---\n\nbelow");
    }

    #[test]
    fn test_parse_document() {
        let content = r#"---
title: "Week 3"
PubDate: "2024-01-15"
tags: ["ci", "k8s"]
author: "Ops"
---
# Hello
"#;
        let doc = Document::parse(Path::new("content/week-3.md"), content).unwrap();
        assert_eq!(doc.file_name, "week-3.md");
        assert_eq!(doc.front_matter.title, "Week 3");
        assert_eq!(doc.front_matter.tags, vec!["ci", "k8s"]);
        assert_eq!(doc.body, "\n# Hello\n");
    }

    #[test]
    fn test_preamble_is_discarded() {
        let content = "ignored preamble\n---\ntitle: T\n---\nbody";
        let doc = Document::parse(Path::new("a.md"), content).unwrap();
        assert_eq!(doc.front_matter.title, "T");
        assert_eq!(doc.body, "\nbody");
    }

    #[test]
    fn test_missing_second_delimiter() {
        let content = "---\ntitle: Unterminated\n# Body without closing delimiter\n";
        let err = Document::parse(Path::new("broken.md"), content).unwrap_err();
        assert!(matches!(err, FeedError::MissingSegments { found: 2, .. }));
    }

    #[test]
    fn test_no_delimiter_at_all() {
        let err = Document::parse(Path::new("plain.md"), "# Just markdown").unwrap_err();
        assert!(matches!(err, FeedError::MissingSegments { found: 1, .. }));
    }

    #[test]
    fn test_malformed_front_matter() {
        let content = "---\ntitle: [oops\n---\nbody";
        let err = Document::parse(Path::new("bad.md"), content).unwrap_err();
        assert!(matches!(err, FeedError::FrontMatter { .. }));
    }

    #[test]
    fn test_load_latin1_body() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cafe.md");
        let mut content = b"---\ntitle: Cafe\nPubDate: 2024-01-15\n---\nCaf".to_vec();
        content.push(0xe9);
        fs::write(&path, content).unwrap();

        let doc = Document::load(&path).unwrap();
        assert_eq!(doc.front_matter.title, "Cafe");
        assert_eq!(doc.body, "\nCaf\u{FFFD}");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Document::load(&dir.path().join("gone.md")).unwrap_err();
        assert!(matches!(err, FeedError::ReadDocument { .. }));
    }
}
