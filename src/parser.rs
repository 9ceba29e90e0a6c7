//! Page parser: one HTML document in, one `PageResult` out.

use scraper::{ElementRef, Html, Selector};
use tracing::debug;
use url::Url;

use crate::profile::{BlockMarker, ScrapeProfile, StrategySpec};
use crate::record::{PageResult, ResultRecord};
use crate::{Result, SearchError};

/// Why a result block was skipped.
///
/// Skips are part of normal operation: engines interleave ads, spacers and
/// experimental templates with organic results. A skip never aborts the
/// page; it is logged at debug level and the next block is tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseSkip {
    /// Container child without the result-block class marker.
    NotAResultBlock,
    /// No extraction strategy matched the block's structure.
    NoStrategy,
}

/// An extraction strategy compiled from a [`StrategySpec`].
struct Strategy {
    name: &'static str,
    marker: BlockMarker,
    title: Selector,
    link: Selector,
    snippet: Vec<Selector>,
}

impl Strategy {
    fn compile(spec: &StrategySpec) -> Result<Self> {
        Ok(Self {
            name: spec.name,
            marker: spec.marker,
            title: parse_selector(spec.title)?,
            link: parse_selector(spec.link)?,
            snippet: spec
                .snippet
                .iter()
                .map(|css| parse_selector(css))
                .collect::<Result<_>>()?,
        })
    }

    fn matches(&self, block: &ElementRef) -> bool {
        match self.marker {
            BlockMarker::Class(class) => block.value().classes().any(|c| c == class),
            BlockMarker::Attr(name, value) => block.value().attr(name) == Some(value),
            BlockMarker::Any => true,
        }
    }

    /// Extracts a record from the block, or `None` when a required
    /// sub-element is missing so a lower-priority strategy can be tried.
    fn extract(&self, block: &ElementRef) -> Option<ResultRecord> {
        let title = block
            .select(&self.title)
            .next()
            .map(|el| collect_text(&el))?;
        let link = block
            .select(&self.link)
            .next()
            .and_then(|el| el.value().attr("href"))
            .map(|href| href.trim().to_string())?;
        let content = self
            .snippet
            .iter()
            .find_map(|sel| block.select(sel).next())
            .map(|el| collect_text(&el))
            .unwrap_or_default();

        let record = ResultRecord::new(title, link, content);
        record.is_valid().then_some(record)
    }
}

/// Parses result pages for one engine, as described by its profile.
///
/// All CSS selectors are compiled once at construction; a malformed
/// profile fails here, before any query runs.
pub struct PageParser {
    container: Selector,
    block_class: &'static str,
    strategies: Vec<Strategy>,
    next_page: Selector,
    prev_markers: &'static [&'static str],
    host: Url,
}

impl PageParser {
    /// Compiles a profile into a parser.
    pub fn new(profile: &ScrapeProfile) -> Result<Self> {
        Ok(Self {
            container: parse_selector(profile.container)?,
            block_class: profile.block_class,
            strategies: profile
                .strategies
                .iter()
                .map(Strategy::compile)
                .collect::<Result<_>>()?,
            next_page: parse_selector(profile.next_page)?,
            prev_markers: profile.prev_markers,
            host: Url::parse(profile.host)?,
        })
    }

    /// Parses one results page.
    ///
    /// A missing results container (blocked or CAPTCHA interstitials
    /// usually lack it) yields an empty page with no next URL.
    pub fn parse(&self, html: &str) -> PageResult {
        let document = Html::parse_document(html);

        let container = match document.select(&self.container).next() {
            Some(el) => el,
            None => {
                debug!("results container not found, treating page as empty");
                return PageResult::empty();
            }
        };

        let mut records = Vec::new();
        for block in container.children().filter_map(ElementRef::wrap) {
            match self.extract_block(&block) {
                Ok(record) => records.push(record),
                Err(ParseSkip::NotAResultBlock) => {}
                Err(skip) => debug!(reason = ?skip, "skipping result block"),
            }
        }

        PageResult {
            records,
            next_page: self.next_page_url(&document),
        }
    }

    /// Runs the strategies against one container child, first match wins.
    fn extract_block(&self, block: &ElementRef) -> std::result::Result<ResultRecord, ParseSkip> {
        if !block.value().classes().any(|c| c == self.block_class) {
            return Err(ParseSkip::NotAResultBlock);
        }

        for strategy in &self.strategies {
            if !strategy.matches(block) {
                continue;
            }
            if let Some(record) = strategy.extract(block) {
                debug!(strategy = strategy.name, title = %record.title, "extracted result");
                return Ok(record);
            }
        }

        Err(ParseSkip::NoStrategy)
    }

    /// Resolves the next-page URL from the pagination controls.
    ///
    /// The last pagination anchor is the "next" control unless its text is
    /// a "previous" marker, which means this page is the final one.
    fn next_page_url(&self, document: &Html) -> Option<String> {
        let anchor = document.select(&self.next_page).last()?;
        let text = collect_text(&anchor);
        if self.prev_markers.iter().any(|marker| text.contains(marker)) {
            return None;
        }
        let href = anchor.value().attr("href")?;
        self.host.join(href).ok().map(|url| url.to_string())
    }
}

fn parse_selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| SearchError::Parse(format!("invalid selector '{css}': {e}")))
}

fn collect_text(element: &ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}
