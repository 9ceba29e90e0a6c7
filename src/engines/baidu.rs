//! Baidu scraping profile (百度).
//!
//! Baidu serves several result-block templates on one page and moves
//! fields between them; the strategy list mirrors the variants observed
//! in live markup, most specific first.

use crate::profile::{BlockMarker, ScrapeProfile, StrategySpec};

const STRATEGIES: &[StrategySpec] = &[
    StrategySpec {
        name: "xpath-log",
        marker: BlockMarker::Class("xpath-log"),
        title: "h3",
        link: "h3 a",
        snippet: &[".c-abstract", "div"],
    },
    StrategySpec {
        name: "result-op",
        marker: BlockMarker::Class("result-op"),
        title: "h3",
        link: "h3 a",
        snippet: &[".c-abstract", "div"],
    },
    StrategySpec {
        name: "se_com_default",
        marker: BlockMarker::Attr("tpl", "se_com_default"),
        title: "h3",
        link: "h3 a",
        snippet: &[".c-abstract", "div"],
    },
    StrategySpec {
        name: "se_st_com_abstract",
        marker: BlockMarker::Attr("tpl", "se_st_com_abstract"),
        title: "h3",
        link: "h3 a",
        snippet: &[".c-abstract", "div"],
    },
    // Unrecognized templates still usually carry a heading with an anchor.
    StrategySpec {
        name: "generic",
        marker: BlockMarker::Any,
        title: "h3",
        link: "a[href]",
        snippet: &[".c-abstract", "div"],
    },
];

/// Markup profile for Baidu web search.
pub fn profile() -> ScrapeProfile {
    ScrapeProfile {
        name: "Baidu",
        shortcut: "baidu",
        host: "https://www.baidu.com",
        search_url: "https://www.baidu.com/s?ie=utf-8&tn=baidu&wd=",
        accept_language: "zh-CN,zh;q=0.9",
        container: "#content_left",
        block_class: "c-container",
        strategies: STRATEGIES,
        next_page: "a.n",
        prev_markers: &["上一页", "Previous"],
    }
}
