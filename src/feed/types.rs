use serde::Serialize;

/// One blog post, ready for display.
///
/// Fields missing from the feed are empty, never absent, so renderers do not
/// branch on them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedItem {
    pub title: String,
    pub link: String,
    pub published_at: String,
    pub tags: Vec<String>,
}

// Result payload for `portfolio posts`; feed url and window travel in the envelope meta
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostList<'a> {
    pub items: &'a [FeedItem],
}
