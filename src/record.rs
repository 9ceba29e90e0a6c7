//! Search result types.

use serde::{Deserialize, Serialize};

/// Maximum length of a result snippet, in characters.
pub const CONTENT_MAX_LEN: usize = 300;

/// A single normalized search result.
///
/// Every backend produces this shape regardless of where the data came
/// from. A record is only considered valid when both `title` and `link`
/// are non-empty; backends drop invalid records instead of returning them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRecord {
    /// Result title.
    pub title: String,
    /// Description/snippet, truncated to [`CONTENT_MAX_LEN`] characters.
    pub content: String,
    /// Result URL.
    pub link: String,
}

impl ResultRecord {
    /// Creates a new record, truncating the snippet to [`CONTENT_MAX_LEN`].
    pub fn new(
        title: impl Into<String>,
        link: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        let content: String = content.into();
        let content = if content.chars().count() > CONTENT_MAX_LEN {
            content.chars().take(CONTENT_MAX_LEN).collect()
        } else {
            content
        };
        Self {
            title: title.into(),
            content,
            link: link.into(),
        }
    }

    /// Returns whether the record satisfies the non-empty title/link rule.
    pub fn is_valid(&self) -> bool {
        !self.title.is_empty() && !self.link.is_empty()
    }
}

/// One parsed results page: its records plus the next-page URL, if any.
///
/// Produced by the page parser and consumed immediately by the pagination
/// driver; not part of the public result contract.
#[derive(Debug, Clone, Default)]
pub struct PageResult {
    /// Records extracted from the page, in document order.
    pub records: Vec<ResultRecord>,
    /// Absolute URL of the next results page, or `None` on the last page.
    pub next_page: Option<String>,
}

impl PageResult {
    /// Creates an empty page with no next-page URL.
    pub fn empty() -> Self {
        Self::default()
    }
}
