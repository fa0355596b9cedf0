//! Create a new post

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

use crate::content::{FrontMatter, FRONT_MATTER_DELIMITER, PUB_DATE_FORMAT};
use crate::FeedSite;

/// Create a post in the content directory dated today.
///
/// The file name defaults to the slugified title.
pub fn create_post(site: &FeedSite, title: &str, name: Option<&str>) -> Result<PathBuf> {
    let now = chrono::Local::now();

    // The delimiter inside a value would end the front-matter block early
    for (field, value) in [("title", title), ("author", site.config.author.as_str())] {
        if value.contains(FRONT_MATTER_DELIMITER) {
            anyhow::bail!(
                "The {} must not contain {:?}: {:?}",
                field,
                FRONT_MATTER_DELIMITER,
                value
            );
        }
    }

    let filename = match name {
        Some(name) => {
            let candidate = Path::new(name);
            if candidate.file_name() != Some(candidate.as_os_str()) {
                anyhow::bail!("Post name must be a plain file name: {:?}", name);
            }
            format!("{}.md", name.trim_end_matches(".md"))
        }
        None => format!("{}.md", slug::slugify(title)),
    };

    fs::create_dir_all(&site.content_dir)?;
    let file_path = site.content_dir.join(filename);

    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let front_matter = FrontMatter {
        title: title.to_string(),
        pub_date: now.format(PUB_DATE_FORMAT).to_string(),
        tags: Vec::new(),
        author: site.config.author.clone(),
    };
    let yaml = serde_yaml::to_string(&front_matter)?;
    let content = format!(
        "{delim}\n{yaml}{delim}\n\n",
        delim = FRONT_MATTER_DELIMITER,
        yaml = yaml
    );

    fs::write(&file_path, content)?;

    println!("Created: {:?}", file_path);

    Ok(file_path)
}
