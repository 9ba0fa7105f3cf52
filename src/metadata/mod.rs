//! Metadata extraction module.
//!
//! Resolves every output field of an HTML document through its priority
//! chain and assembles the [`MetadataRecord`].

pub mod chains;
pub mod meta_tags;

use dom_query::Document;

use crate::result::{Field, MetadataRecord, ResourceType};

pub use chains::{resolve_chain, spec_for, FieldSpec, Probe, FIELD_SPECS};
pub use meta_tags::{get_meta, icon_link_href, title_element_text};

/// Extract all metadata fields from a parsed HTML document.
///
/// The returned record has type `html` and carries only the fields for
/// which some probe produced a non-empty value.
#[must_use]
pub fn extract_metadata(doc: &Document) -> MetadataRecord {
    let mut record = MetadataRecord::new(ResourceType::Html);

    for spec in &FIELD_SPECS {
        if let Some(value) = extract_field(doc, spec) {
            tracing::trace!(field = %spec.field, value = %value, "field resolved");
            record.insert(spec.field, value);
        }
    }

    record
}

/// Resolve one field of `doc` through its chain.
#[must_use]
pub fn extract_field(doc: &Document, spec: &FieldSpec) -> Option<String> {
    resolve_chain(spec.probes, |probe| meta_tags::probe(doc, probe))
}

/// Resolve `field` of `doc`.
///
/// ```
/// use rs_linkmeta::dom::parse;
/// use rs_linkmeta::metadata::field_value;
/// use rs_linkmeta::Field;
///
/// let doc = parse(r#"<meta name="twitter:site" content="@example">"#);
/// assert_eq!(field_value(&doc, Field::SiteName), Some("example".to_string()));
/// ```
#[must_use]
pub fn field_value(doc: &Document, field: Field) -> Option<String> {
    extract_field(doc, spec_for(field))
}
