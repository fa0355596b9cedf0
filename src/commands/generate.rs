//! Generate the feed once, without serving it

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::FeedSite;

/// Generate the feed and write it to `output`, or to stdout
pub fn run(site: &FeedSite, output: Option<&Path>) -> Result<()> {
    let xml = site.generate()?;

    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, &xml)?;
            tracing::info!("Wrote feed to {:?}", path);
        }
        None => println!("{}", xml),
    }

    Ok(())
}
