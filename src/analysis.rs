use scraper::{Html, Selector};
use serde::Serialize;

/// What a quick structural look at a captured page tells us.
#[derive(Debug, Clone, Serialize)]
pub struct PageAnalysis {
    pub title: Option<String>,
    pub body_text_len: usize,
}

impl PageAnalysis {
    /// True when the capture has neither a title nor any visible text,
    /// which usually means an empty or error page was snapshotted.
    pub fn looks_blank(&self) -> bool {
        self.title.is_none() && self.body_text_len == 0
    }
}

/// Check whether a captured document looks like a real page. The parser
/// synthesizes `html`/`head`/`body` elements, so the probes look at content
/// rather than document structure.
pub fn analyze_page(html: &str) -> PageAnalysis {
    let document = Html::parse_document(html);

    let title_selector = Selector::parse("title").unwrap();
    let body_selector = Selector::parse("body").unwrap();

    let title = document
        .select(&title_selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|title| !title.is_empty());

    let body_text_len = document
        .select(&body_selector)
        .next()
        .map(|body| body.text().map(|text| text.trim().len()).sum::<usize>())
        .unwrap_or(0);

    PageAnalysis {
        title,
        body_text_len,
    }
}
