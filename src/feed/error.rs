use reqwest::StatusCode;

/// Why the blog feed could not be turned into posts.
///
/// Callers outside the pipeline never see this: `load_posts` logs it and
/// falls back to an empty list.
#[derive(Debug)]
pub enum FeedError {
    Http(reqwest::Error),
    Timeout,
    Status(StatusCode),
    Parse(rss::Error),
}

impl FeedError {
    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FeedError::Timeout
        } else {
            FeedError::Http(err)
        }
    }

    /// Short label for structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            FeedError::Http(_) => "http",
            FeedError::Timeout => "timeout",
            FeedError::Status(_) => "status",
            FeedError::Parse(_) => "parse",
        }
    }
}

impl std::fmt::Display for FeedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedError::Http(err) => write!(f, "http error: {err}"),
            FeedError::Timeout => write!(f, "feed request timed out"),
            FeedError::Status(status) => write!(f, "feed responded with {status}"),
            FeedError::Parse(err) => write!(f, "feed is not valid RSS: {err}"),
        }
    }
}

impl std::error::Error for FeedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FeedError::Http(err) => Some(err),
            FeedError::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<rss::Error> for FeedError {
    fn from(err: rss::Error) -> Self { FeedError::Parse(err) }
}
