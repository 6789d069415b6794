use rss::{Channel, Item};

use super::error::FeedError;
use super::types::FeedItem;
use super::window::Window;

/// Parse an RSS document and keep `window` of its items, in document order.
pub fn adapt(xml: &[u8], window: Window) -> Result<Vec<FeedItem>, FeedError> {
    let channel = parse_channel(xml)?;
    Ok(select(channel.items(), window))
}

fn parse_channel(xml: &[u8]) -> Result<Channel, FeedError> {
    let ch = Channel::read_from(xml)?;
    Ok(ch)
}

fn select(items: &[Item], window: Window) -> Vec<FeedItem> {
    items[window.select(items)].iter().map(to_feed_item).collect()
}

fn to_feed_item(item: &Item) -> FeedItem {
    FeedItem {
        title: item.title().unwrap_or_default().to_string(),
        link: item.link().unwrap_or_default().to_string(),
        published_at: item.pub_date().unwrap_or_default().to_string(),
        tags: item
            .categories()
            .iter()
            .map(|c| c.name().trim())
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect(),
    }
}

#[cfg(test)]
pub(crate) fn rss_doc(items: &[&str]) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<rss version=\"2.0\"><channel><title>Blog</title><link>https://timpepper.dev/blog</link><description>posts</description>{}</channel></rss>",
        items.concat()
    )
}
