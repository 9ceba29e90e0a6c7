//! Data-driven descriptions of scraped engine markup.
//!
//! Everything an engine's live HTML dictates — container ids, result-block
//! class markers, template attributes, pagination anchors — lives here as
//! plain data. When a provider shuffles its markup, the fix is a profile
//! edit; the parser and pagination driver never change.

/// How a result block announces which template variant it uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockMarker {
    /// Block carries this CSS class.
    Class(&'static str),
    /// Block carries this attribute with this exact value.
    Attr(&'static str, &'static str),
    /// Matches any block; used for the lowest-priority fallback.
    Any,
}

/// One structural extraction strategy for a result block.
///
/// Strategies are tried in declaration order; the first one whose marker
/// matches and whose required sub-elements are present wins.
#[derive(Debug, Clone)]
pub struct StrategySpec {
    /// Name used in debug logs when the strategy is chosen or skipped.
    pub name: &'static str,
    /// Which blocks this strategy applies to.
    pub marker: BlockMarker,
    /// CSS selector for the title element, relative to the block.
    pub title: &'static str,
    /// CSS selector for the anchor carrying the result URL.
    pub link: &'static str,
    /// CSS selectors for the snippet, tried in order.
    pub snippet: &'static [&'static str],
}

/// Complete markup description of one scraped search engine.
#[derive(Debug, Clone)]
pub struct ScrapeProfile {
    /// Display name of the engine.
    pub name: &'static str,
    /// Short identifier used for registry lookup.
    pub shortcut: &'static str,
    /// Engine host; relative pagination hrefs resolve against this, and it
    /// doubles as the Referer the client presents.
    pub host: &'static str,
    /// URL prefix the encoded keyword is appended to.
    pub search_url: &'static str,
    /// Accept-Language the engine expects.
    pub accept_language: &'static str,
    /// CSS selector for the results container.
    pub container: &'static str,
    /// Class marking a direct container child as a result block.
    pub block_class: &'static str,
    /// Extraction strategies in priority order.
    pub strategies: &'static [StrategySpec],
    /// CSS selector for pagination-control anchors.
    pub next_page: &'static str,
    /// Anchor texts meaning "previous page"; if the last pagination anchor
    /// contains one of these, the current page is the last.
    pub prev_markers: &'static [&'static str],
}

impl ScrapeProfile {
    /// Builds the results-page URL for a keyword.
    pub fn search_url_for(&self, keyword: &str) -> String {
        format!("{}{}", self.search_url, urlencoding::encode(keyword))
    }
}
