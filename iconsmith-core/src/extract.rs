//! Attribute-level surgery on SVG documents.
//!
//! This is not an XML parser. Icon sets are heterogeneous (minified exports,
//! editor leftovers, stray prologs), so every step falls back instead of
//! failing.

use std::sync::LazyLock;

use regex::Regex;

/// View box used when the document does not declare one.
pub const DEFAULT_VIEW_BOX: &str = "0 0 24 24";

static VIEW_BOX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"viewBox=(?:"([^"]*)"|'([^']*)')"#).unwrap());

static XML_PROLOG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<\?xml.*?\?>").unwrap());

/// Opening, closing and self-closing `svg` tags. Group 1 is the closing
/// slash, group 2 the self-closing one.
static SVG_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<(/?)svg\b[^>]*?(/?)>").unwrap());

static REDUNDANT_ATTRS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\s+(?:xmlns(?::xlink)?|xml:space)\s*=\s*(?:"[^"]*"|'[^']*')"#).unwrap()
});

/// A fallback taken while extracting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    /// No `viewBox` attribute; [`DEFAULT_VIEW_BOX`] was used.
    DefaultViewBox,
    /// No complete `<svg>` element; the whole document became the markup.
    WholeDocument,
}

impl Fallback {
    pub fn describe(&self) -> &'static str {
        match self {
            Fallback::DefaultViewBox => "no viewBox attribute, using default",
            Fallback::WholeDocument => "no <svg> element, using whole document",
        }
    }
}

/// The parts of an SVG document a component template needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgContent {
    pub view_box: String,
    pub inner_markup: String,
    fallbacks: Vec<Fallback>,
}

impl SvgContent {
    /// Fallbacks taken during extraction, in the order they happened.
    pub fn fallbacks(&self) -> &[Fallback] {
        &self.fallbacks
    }
}

/// Extract the view box and the markup inside the root `<svg>` element.
///
/// The prolog is dropped, and `xmlns`, `xmlns:xlink` and `xml:space`
/// attributes are stripped from the markup since the component supplies its
/// own `<svg>` wrapper.
pub fn extract(raw: &str) -> SvgContent {
    let mut fallbacks = Vec::new();

    let view_box = match VIEW_BOX.captures(raw) {
        Some(caps) => caps
            .get(1)
            .or_else(|| caps.get(2))
            .map_or("", |m| m.as_str())
            .to_string(),
        None => {
            fallbacks.push(Fallback::DefaultViewBox);
            DEFAULT_VIEW_BOX.to_string()
        }
    };

    let document = XML_PROLOG.replace_all(raw, "");

    let inner = match svg_inner(&document) {
        Some(inner) => inner,
        None => {
            fallbacks.push(Fallback::WholeDocument);
            document.as_ref()
        }
    };

    let inner_markup = REDUNDANT_ATTRS.replace_all(inner.trim(), "").into_owned();

    SvgContent {
        view_box,
        inner_markup,
        fallbacks,
    }
}

/// Text between the first `<svg>` opening tag and its matching close.
fn svg_inner(document: &str) -> Option<&str> {
    let mut tags = SVG_TAG.captures_iter(document);

    let open = tags.find(|caps| caps[1].is_empty())?;
    let whole = open.get(0)?;
    if !open[2].is_empty() {
        return Some("");
    }

    let start = whole.end();
    let mut depth = 1usize;
    for caps in tags {
        let tag = caps.get(0)?;
        if !caps[1].is_empty() {
            depth -= 1;
            if depth == 0 {
                return Some(&document[start..tag.start()]);
            }
        } else if caps[2].is_empty() {
            depth += 1;
        }
    }

    None
}
