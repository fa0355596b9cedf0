//! Content module - scans, parses and renders the Markdown documents

mod document;
mod frontmatter;
pub mod loader;
mod markdown;
pub mod scanner;

pub use document::{split_parts, Document, FRONT_MATTER_DELIMITER};
pub use frontmatter::{parse_pub_date, FrontMatter, PUB_DATE_FORMAT};
pub use markdown::MarkdownRenderer;
