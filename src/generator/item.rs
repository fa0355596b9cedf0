//! Feed items

use chrono::{DateTime, Utc};
use rss::{CategoryBuilder, ItemBuilder};

/// One entry of the feed, derived from a parsed document
#[derive(Debug, Clone, PartialEq)]
pub struct FeedItem {
    pub title: String,
    pub link: String,
    /// Rendered HTML of the document body
    pub description: String,
    /// `None` when the document's `PubDate` could not be parsed
    pub created: Option<DateTime<Utc>>,
    pub categories: Vec<String>,
}

impl FeedItem {
    /// Convert to an RSS item. A missing date omits `<pubDate>`.
    pub fn to_rss(&self) -> rss::Item {
        let categories = self
            .categories
            .iter()
            .map(|tag| CategoryBuilder::default().name(tag.clone()).build())
            .collect::<Vec<_>>();

        ItemBuilder::default()
            .title(Some(self.title.clone()))
            .link(Some(self.link.clone()))
            .description(Some(self.description.clone()))
            .pub_date(self.created.map(|dt| dt.to_rfc2822()))
            .categories(categories)
            .build()
    }
}
