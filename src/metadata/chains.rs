//! Field priority chains.
//!
//! Each output field is resolved from an ordered list of probes. The first
//! probe yielding a non-empty string wins and the rest are never evaluated.
//! Meta keys are matched exactly, including the trailing spaces some of the
//! date keys carry.

use crate::result::Field;

use self::Probe::{Handle, IconLink, Meta, TitleElement};

/// One candidate source for a field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Probe {
    /// `content` of `meta[name=key]`, else of `meta[property=key]`.
    Meta(&'static str),
    /// Like [`Probe::Meta`], with a leading `@` removed from the value.
    Handle(&'static str),
    /// Text of the document's `<title>` element.
    TitleElement,
    /// `href` of `link[rel="icon"]`.
    IconLink,
}

/// The ordered probes for one output field.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub field: Field,
    pub probes: &'static [Probe],
}

/// Priority chains for every field, in output order.
pub static FIELD_SPECS: [FieldSpec; 17] = [
    FieldSpec {
        field: Field::Title,
        probes: &[
            Meta("twitter:title"),
            Meta("og:title"),
            TitleElement,
            Meta("title"),
            Meta("dc.title"),
            Meta("dcterms.title"),
            Meta("application-name"),
            Meta("citation.title"),
        ],
    },
    FieldSpec {
        field: Field::SiteName,
        probes: &[
            Meta("og:site_name"),
            Meta("application-name"),
            Meta("citation.title"),
            Handle("twitter:site"),
        ],
    },
    FieldSpec {
        field: Field::Description,
        probes: &[
            Meta("twitter:description"),
            Meta("og:description"),
            Meta("description"),
            Meta("dc:description"),
            Meta("dcterms.description"),
            Meta("fdse-description"),
            Meta("FSPageDescription"),
            Meta("citation_issue"),
            Meta("dcterms.subject"),
        ],
    },
    FieldSpec {
        field: Field::Author,
        probes: &[
            Meta("twitter:creator"),
            Meta("author"),
            Meta("dc.creator"),
            Meta("dcterms.creator"),
            Meta("citation_author"),
            Meta("creator"),
            Meta("dc.publisher"),
            Meta("dcterms.publisher"),
            Meta("citation_publisher"),
        ],
    },
    FieldSpec {
        field: Field::Image,
        probes: &[
            Meta("twitter:image"),
            Meta("twitter:image:src"),
            Meta("og:image:secure_url"),
            Meta("og:image"),
            Meta("og:image:url"),
        ],
    },
    FieldSpec {
        field: Field::ImageWidth,
        probes: &[Meta("twitter:image:width"), Meta("og:image:width")],
    },
    FieldSpec {
        field: Field::ImageHeight,
        probes: &[Meta("twitter:image:height"), Meta("og:image:height")],
    },
    FieldSpec {
        field: Field::ImageAlt,
        probes: &[Meta("twitter:image:alt"), Meta("og:image:alt")],
    },
    FieldSpec {
        field: Field::Video,
        probes: &[
            Meta("twitter:player"),
            Meta("og:video:secure_url"),
            Meta("og:video"),
            Meta("og:video:url"),
        ],
    },
    FieldSpec {
        field: Field::VideoWidth,
        probes: &[Meta("twitter:player:width"), Meta("og:video:width")],
    },
    FieldSpec {
        field: Field::VideoHeight,
        probes: &[Meta("twitter:player:height"), Meta("og:video:height")],
    },
    FieldSpec {
        field: Field::Audio,
        probes: &[
            Meta("og:audio:secure_url"),
            Meta("og:audio"),
            Meta("og:audio:url"),
        ],
    },
    FieldSpec {
        field: Field::ThemeColor,
        probes: &[Meta("theme-color"), Meta("msapplication-TileColor")],
    },
    FieldSpec {
        field: Field::Favicon,
        probes: &[
            IconLink,
            Meta("msapplication-TileImage"),
            Meta("msapplication-square70x70logo"),
            Meta("msapplication-square150x150logo"),
            Meta("msapplication-wide310x150logo"),
            Meta("msapplication-square310x310logo"),
        ],
    },
    FieldSpec {
        field: Field::Url,
        probes: &[
            Meta("twitter:url"),
            Meta("og:url"),
            Meta("url"),
            Meta("dc.identifier"),
            Meta("dcterms.identifier"),
            Meta("citation_identifier"),
            Meta("identifier"),
            Meta("dc.source"),
            Meta("dcterms.source"),
            Meta("citation_source"),
        ],
    },
    FieldSpec {
        field: Field::CreationDate,
        probes: &[
            Meta("date"),
            Meta("dc.date.issued "),
            Meta("dcterms.date "),
            Meta("FSDateCreation "),
            Meta("FSDatePublish"),
            Meta("citation_date"),
        ],
    },
    FieldSpec {
        field: Field::UpdateDate,
        probes: &[Meta("dc.modified")],
    },
];

/// Look up the chain for `field`.
#[must_use]
pub fn spec_for(field: Field) -> &'static FieldSpec {
    // FIELD_SPECS is laid out in Field::ALL order
    &FIELD_SPECS[field as usize]
}

/// Evaluate `probes` in order and return the first non-empty value.
///
/// `lookup` is called lazily; probes after the winning one are never
/// passed to it. Empty strings count as misses.
pub fn resolve_chain<F>(probes: &[Probe], mut lookup: F) -> Option<String>
where
    F: FnMut(Probe) -> Option<String>,
{
    probes
        .iter()
        .filter_map(|probe| lookup(*probe))
        .find(|value| !value.is_empty())
}

/// Remove a single leading `@` from a social handle.
#[must_use]
pub fn strip_handle(value: &str) -> &str {
    value.strip_prefix('@').unwrap_or(value)
}
