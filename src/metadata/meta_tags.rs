//! HTML Meta Tag Lookup
//!
//! Reads field candidates out of a parsed document: `<meta>` content by
//! `name` or `property`, the `<title>` element, and the icon `<link>`.

use dom_query::Document;

use super::chains::{strip_handle, Probe};
use crate::dom;

/// Read the `content` of the first `<meta>` carrying `key`.
///
/// The `name` attribute is tried first. Only when no `meta[name=key]`
/// element exists at all is `meta[property=key]` consulted, so a
/// name-keyed tag without `content` hides a property-keyed one.
///
/// Keys are matched exactly and case-sensitively.
///
/// ```
/// use rs_linkmeta::dom::parse;
/// use rs_linkmeta::metadata::get_meta;
///
/// let doc = parse(r#"<meta property="og:title" content="Hello">"#);
/// assert_eq!(get_meta(&doc, "og:title"), Some("Hello".to_string()));
/// assert_eq!(get_meta(&doc, "og:description"), None);
/// ```
#[must_use]
pub fn get_meta(doc: &Document, key: &str) -> Option<String> {
    let quoted = dom::css_string(key);

    for attribute in ["name", "property"] {
        let selector = format!("meta[{attribute}={quoted}]");
        if let Some(meta) = dom::query_first(doc, &selector) {
            return dom::get_attribute(&meta, "content");
        }
    }

    None
}

/// Text content of the document's first `<title>` element.
#[must_use]
pub fn title_element_text(doc: &Document) -> Option<String> {
    dom::query_first(doc, "title").map(|title| dom::text_content(&title).to_string())
}

/// `href` of the first `<link rel="icon">`.
#[must_use]
pub fn icon_link_href(doc: &Document) -> Option<String> {
    dom::query_first(doc, "link[rel='icon']").and_then(|link| dom::get_attribute(&link, "href"))
}

/// Evaluate a single probe against `doc`.
#[must_use]
pub fn probe(doc: &Document, probe: Probe) -> Option<String> {
    match probe {
        Probe::Meta(key) => get_meta(doc, key),
        Probe::Handle(key) => get_meta(doc, key).map(|value| strip_handle(&value).to_string()),
        Probe::TitleElement => title_element_text(doc),
        Probe::IconLink => icon_link_href(doc),
    }
}
