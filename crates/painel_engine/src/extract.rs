use painel_core::{tabulate, JobRecord, JobTable, NOT_INFORMED};
use painel_logging::{painel_debug, painel_info};
use scraper::{ElementRef, Html, Node, Selector};

/// CSS selectors describing one listing page's markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectorSpec {
    /// Root of one job block.
    pub anchor: &'static str,
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub requirement: &'static str,
}

/// Markup of vagas.com.br listing pages. When the site changes its markup
/// every field silently falls back to [`NOT_INFORMED`].
pub const VAGAS_MARKUP: SelectorSpec = SelectorSpec {
    anchor: "h2",
    title: "h3.chakra-heading",
    company: "span.emprVaga",
    location: "span.vaga-local",
    requirement: "p",
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid selector {selector:?}: {message}")]
pub struct SelectorError {
    pub selector: String,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct JobSelectors {
    anchor: Selector,
    title: Selector,
    company: Selector,
    location: Selector,
    requirement: Selector,
}

impl JobSelectors {
    pub fn compile(markup: &SelectorSpec) -> Result<Self, SelectorError> {
        Ok(Self {
            anchor: parse_selector(markup.anchor)?,
            title: parse_selector(markup.title)?,
            company: parse_selector(markup.company)?,
            location: parse_selector(markup.location)?,
            requirement: parse_selector(markup.requirement)?,
        })
    }
}

fn parse_selector(css: &str) -> Result<Selector, SelectorError> {
    Selector::parse(css).map_err(|err| SelectorError {
        selector: css.to_string(),
        message: err.to_string(),
    })
}

pub trait Extractor: Send + Sync {
    fn extract(&self, html: &str) -> JobTable;
}

/// Reads one [`JobRecord`] per anchor element, in document order.
#[derive(Debug, Clone)]
pub struct ListingExtractor {
    selectors: JobSelectors,
}

impl ListingExtractor {
    pub fn new(selectors: JobSelectors) -> Self {
        Self { selectors }
    }

    /// Extractor for the vagas.com.br markup.
    pub fn vagas() -> Result<Self, SelectorError> {
        JobSelectors::compile(&VAGAS_MARKUP).map(Self::new)
    }

    fn record_for(&self, anchor: ElementRef<'_>) -> JobRecord {
        let scope = self.block_scope(anchor);
        let field = |selector: &Selector| {
            let matches = scope
                .iter()
                .flat_map(|&node| matches_in(node, selector))
                .collect();
            first_or_default(matches, NOT_INFORMED)
        };
        JobRecord {
            title: field(&self.selectors.title),
            company: field(&self.selectors.company),
            location: field(&self.selectors.location),
            requirement: field(&self.selectors.requirement),
        }
    }
}

impl ListingExtractor {
    /// Elements a block's fields are read from.
    ///
    /// The HTML tree builder closes an `h2` as soon as an `h3` opens directly
    /// inside it, leaving the anchor empty and its content as following
    /// siblings. An empty anchor therefore owns the siblings after it, up to
    /// the next sibling that is or contains another anchor.
    fn block_scope<'a>(&self, anchor: ElementRef<'a>) -> Vec<ElementRef<'a>> {
        if !is_blank(anchor) {
            return vec![anchor];
        }
        let anchor_selector = &self.selectors.anchor;
        anchor
            .next_siblings()
            .filter_map(ElementRef::wrap)
            .take_while(|sibling| {
                !anchor_selector.matches(sibling)
                    && sibling.select(anchor_selector).next().is_none()
            })
            .collect()
    }
}

fn is_blank(element: ElementRef<'_>) -> bool {
    element.children().all(|child| match child.value() {
        Node::Text(text) => text.trim().is_empty(),
        Node::Comment(_) => true,
        _ => false,
    })
}

/// `node` itself when it matches, then its matching descendants.
fn matches_in<'a>(node: ElementRef<'a>, selector: &Selector) -> Vec<ElementRef<'a>> {
    if selector.matches(&node) {
        return vec![node];
    }
    find_all(node, selector)
}

impl Extractor for ListingExtractor {
    fn extract(&self, html: &str) -> JobTable {
        let doc = Html::parse_document(html);
        let blocks = find_all(doc.root_element(), &self.selectors.anchor);
        painel_debug!("Found {} job block anchor(s)", blocks.len());

        let table = tabulate(blocks.into_iter().map(|block| self.record_for(block)));
        painel_info!("Extracted {} job record(s)", table.len());
        table
    }
}

/// All descendants of `root` matching `selector`, in document order.
pub fn find_all<'a>(root: ElementRef<'a>, selector: &Selector) -> Vec<ElementRef<'a>> {
    root.select(selector).collect()
}

/// Concatenated, whitespace-trimmed text of a node and its descendants.
pub fn text_of(node: ElementRef<'_>) -> String {
    node.text().collect::<String>().trim().to_string()
}

/// Text of the first match, or `default` when nothing matched.
pub fn first_or_default(matches: Vec<ElementRef<'_>>, default: &str) -> String {
    matches
        .into_iter()
        .next()
        .map(text_of)
        .unwrap_or_else(|| default.to_string())
}
