//! DOM Operations Adapter
//!
//! Thin helpers over the `dom_query` crate for the handful of operations the
//! field extractor needs: parsing, first-match queries, attribute and text
//! reads.

// Re-export core types for external use
pub use dom_query::{Document, Selection};

pub use tendril::StrTendril;

// === Attribute Operations ===

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

// === Text Content ===

/// Get all text content of node and descendants
///
/// Returns `StrTendril` for zero-copy passing. Use `.to_string()` only when
/// you need owned storage.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

// === Querying ===

/// First element in document order matching `selector`, if any.
///
/// The equivalent of `document.querySelector(selector)`.
#[must_use]
pub fn query_first<'a>(doc: &'a Document, selector: &str) -> Option<Selection<'a>> {
    doc.select(selector)
        .nodes()
        .first()
        .map(|node| Selection::from(*node))
}

/// Quote `value` as a CSS string for use inside an attribute selector.
///
/// ```
/// use rs_linkmeta::dom::css_string;
///
/// assert_eq!(css_string("og:title"), r#""og:title""#);
/// assert_eq!(css_string(r#"a"b"#), r#""a\"b""#);
/// ```
#[must_use]
pub fn css_string(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        if matches!(c, '"' | '\\') {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}

// === Parsing ===

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}
