//! List feed content

use anyhow::Result;
use std::collections::HashMap;

use crate::content::loader::ContentLoader;
use crate::FeedSite;

/// List documents or tags
pub fn run(site: &FeedSite, content_type: &str) -> Result<()> {
    let documents = ContentLoader::new(site).load_documents()?;

    match content_type {
        "post" | "posts" => {
            println!("Posts ({}):", documents.len());
            for doc in documents {
                let date = doc
                    .front_matter
                    .parse_date()
                    .map(|d| d.format("%Y-%m-%d").to_string())
                    .unwrap_or_else(|| "----------".to_string());
                println!("  {} - {} [{}]", date, doc.front_matter.title, doc.file_name);
            }
        }
        "tag" | "tags" => {
            let mut tags: HashMap<String, usize> = HashMap::new();
            for doc in &documents {
                for tag in &doc.front_matter.tags {
                    *tags.entry(tag.clone()).or_insert(0) += 1;
                }
            }
            println!("Tags ({}):", tags.len());
            let mut tags: Vec<_> = tags.into_iter().collect();
            tags.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
            for (tag, count) in tags {
                println!("  {} ({})", tag, count);
            }
        }
        "author" | "authors" => {
            let mut authors: HashMap<String, usize> = HashMap::new();
            for doc in &documents {
                let author = doc.front_matter.author.trim();
                if !author.is_empty() {
                    *authors.entry(author.to_string()).or_insert(0) += 1;
                }
            }
            println!("Authors ({}):", authors.len());
            let mut authors: Vec<_> = authors.into_iter().collect();
            authors.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
            for (author, count) in authors {
                println!("  {} ({})", author, count);
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: post, tag, author",
                content_type
            );
        }
    }

    Ok(())
}
