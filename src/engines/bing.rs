//! Bing scraping profile (必应).

use crate::profile::{BlockMarker, ScrapeProfile, StrategySpec};

const STRATEGIES: &[StrategySpec] = &[StrategySpec {
    name: "algo",
    marker: BlockMarker::Any,
    title: "h2",
    link: "h2 a",
    snippet: &[".b_caption p", ".b_algoSlug", "p"],
}];

/// Markup profile for Bing web search.
///
/// Bing keeps its result list flatter than Baidu: one `li.b_algo` block
/// shape, with the snippet either in the caption paragraph or an
/// `.b_algoSlug` line. The "next" control has its own class, so a missing
/// anchor alone marks the last page.
pub fn profile() -> ScrapeProfile {
    ScrapeProfile {
        name: "Bing",
        shortcut: "bing",
        host: "https://www.bing.com",
        search_url: "https://www.bing.com/search?q=",
        accept_language: "en-US,en;q=0.9",
        container: "#b_results",
        block_class: "b_algo",
        strategies: STRATEGIES,
        next_page: "a.sb_pagN",
        prev_markers: &[],
    }
}
