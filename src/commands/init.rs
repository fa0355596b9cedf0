//! Initialize a new feed directory

use anyhow::Result;
use std::fs;
use std::path::Path;

const CONFIG_TEMPLATE: &str = r#"# Feed
title: DevOps Weekly Updates
description: An RSS Feed of Elliott's DevOps team updates
url: http://devops.elliottmgmt.com
author: ''

# Directory
content_dir: content

# Server
server:
  ip: 0.0.0.0
  port: 8080

# Code blocks in item descriptions
highlight:
  enable: false
  theme: base16-ocean.dark
  line_number: false
"#;

/// Initialize a feed directory: `_config.yml` plus a content directory with a sample post
pub fn init_site(target_dir: &Path) -> Result<()> {
    fs::create_dir_all(target_dir.join("content"))?;

    let config_path = target_dir.join("_config.yml");
    if config_path.exists() {
        tracing::info!("Keeping existing {:?}", config_path);
    } else {
        fs::write(&config_path, CONFIG_TEMPLATE)?;
    }

    let sample_path = target_dir.join("content/hello-world.md");
    if !sample_path.exists() {
        let today = chrono::Local::now().format("%Y-%m-%d");
        let sample_post = format!(
            r#"---
title: Hello World
PubDate: "{}"
tags: [welcome]
author: ''
---

This is the first weekly update. Every `.md` file in `content/` becomes an
item of the feed served at `/rss`.

## Writing an update

```bash
$ devops-feed new "Week 1"
```

## Serving the feed

```bash
$ devops-feed server
```
"#,
            today
        );
        fs::write(&sample_path, sample_post)?;
    }

    Ok(())
}
