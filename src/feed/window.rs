use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, bail};
use serde::Serialize;

/// Which slice of the feed's items ends up on the page.
///
/// Positions are by order of appearance in the document; the feed's own
/// ordering is trusted and nothing is re-sorted by date.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "from", content = "n", rename_all = "lowercase")]
pub enum Window {
    First(usize),
    Last(usize),
}

impl Default for Window {
    fn default() -> Self { Window::Last(5) }
}

impl Window {
    /// Select the window from `items`, keeping document order.
    pub fn select<T>(&self, items: &[T]) -> std::ops::Range<usize> {
        match *self {
            Window::First(n) => 0..n.min(items.len()),
            Window::Last(n) => items.len().saturating_sub(n)..items.len(),
        }
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Window::First(n) => write!(f, "first:{n}"),
            Window::Last(n) => write!(f, "last:{n}"),
        }
    }
}

impl FromStr for Window {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (from, n) = s.trim().split_once(':').ok_or_else(|| anyhow!("window must look like first:N or last:N, got {:?}", s))?;
        let n: usize = n.trim().parse().map_err(|_| anyhow!("window size must be a number, got {:?}", n))?;
        if n == 0 { bail!("window size must be at least 1"); }
        match from.trim().to_ascii_lowercase().as_str() {
            "first" => Ok(Window::First(n)),
            "last" => Ok(Window::Last(n)),
            other => bail!("window must start with first or last, got {:?}", other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_takes_tail() {
        let items = [1, 2, 3, 4, 5, 6, 7];
        assert_eq!(&items[Window::Last(5).select(&items)], &[3, 4, 5, 6, 7]);
    }

    #[test]
    fn first_takes_head() {
        let items = [1, 2, 3, 4, 5];
        assert_eq!(&items[Window::First(3).select(&items)], &[1, 2, 3]);
    }

    #[test]
    fn short_input_is_kept_whole() {
        let items = ["a", "b"];
        assert_eq!(&items[Window::Last(5).select(&items)], &["a", "b"]);
        assert_eq!(&items[Window::First(3).select(&items)], &["a", "b"]);
        let none: [u8; 0] = [];
        assert!(Window::Last(5).select(&none).is_empty());
    }

    #[test]
    fn parses_and_displays() {
        assert_eq!("last:5".parse::<Window>().unwrap(), Window::Last(5));
        assert_eq!(" First:3 ".parse::<Window>().unwrap(), Window::First(3));
        assert_eq!(Window::First(3).to_string(), "first:3");
        assert_eq!(Window::default().to_string(), "last:5");
    }

    #[test]
    fn rejects_malformed() {
        assert!("5".parse::<Window>().is_err());
        assert!("last:0".parse::<Window>().is_err());
        assert!("middle:2".parse::<Window>().is_err());
        assert!("last:many".parse::<Window>().is_err());
    }
}
