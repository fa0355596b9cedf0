//! Generator module - assembles documents into an RSS 2.0 feed

mod item;

pub use item::FeedItem;

use chrono::{DateTime, Utc};
use rss::{Channel, ChannelBuilder};

use crate::content::loader::ContentLoader;
use crate::content::{Document, MarkdownRenderer};
use crate::error::FeedError;
use crate::FeedSite;

/// Builds the feed from the content directory
pub struct FeedGenerator<'a> {
    site: &'a FeedSite,
    renderer: MarkdownRenderer,
}

impl<'a> FeedGenerator<'a> {
    /// Create a new generator
    pub fn new(site: &'a FeedSite) -> Self {
        let renderer = MarkdownRenderer::from_config(&site.config.highlight);
        Self { site, renderer }
    }

    /// Scan, parse and render every document and serialize the feed
    pub fn generate(&self) -> Result<String, FeedError> {
        let start = std::time::Instant::now();

        let channel = self.build_channel(Utc::now())?;
        let bytes = channel.write_to(Vec::new())?;
        let xml = String::from_utf8(bytes)?;

        tracing::info!(
            "Generated feed with {} items in {:.2}ms",
            channel.items().len(),
            start.elapsed().as_secs_f64() * 1000.0
        );
        Ok(xml)
    }

    /// Build the channel; `created` is the generation time
    pub fn build_channel(&self, created: DateTime<Utc>) -> Result<Channel, FeedError> {
        let items = self
            .build_items()?
            .iter()
            .map(FeedItem::to_rss)
            .collect::<Vec<_>>();

        let config = &self.site.config;
        Ok(ChannelBuilder::default()
            .title(config.title.clone())
            .link(config.url.clone())
            .description(config.description.clone())
            .language(config.language.clone())
            .generator(Some(config.generator.clone()))
            .pub_date(Some(created.to_rfc2822()))
            .items(items)
            .build())
    }

    /// Feed items in directory listing order
    pub fn build_items(&self) -> Result<Vec<FeedItem>, FeedError> {
        let documents = ContentLoader::new(self.site).load_documents()?;
        Ok(documents.iter().map(|doc| self.build_item(doc)).collect())
    }

    fn build_item(&self, doc: &Document) -> FeedItem {
        let fm = &doc.front_matter;
        let description = self.renderer.render(&doc.body);

        let created = fm.parse_date();
        if created.is_none() {
            tracing::warn!(
                "Invalid PubDate {:?} in {:?}, publishing without a date",
                fm.pub_date,
                doc.path
            );
        }

        tracing::debug!(
            "Rendered {:?} ({} bytes of HTML)",
            doc.file_name,
            description.len()
        );

        FeedItem {
            title: fm.title.clone(),
            link: self.site.config.item_link(&doc.file_name),
            description,
            created,
            categories: fm.tags.clone(),
        }
    }
}
