//! Result types for resolve output.
//!
//! A [`MetadataRecord`] always carries the resource type and, for HTML
//! documents, whichever metadata fields were found.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::error::Result;

/// Coarse classification of a fetched resource, from its `Content-Type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    /// `text/html` document; metadata fields were extracted.
    Html,
    /// Any content type mentioning `image`.
    Image,
    /// Any content type mentioning `video`.
    Video,
    /// Any content type mentioning `audio`.
    Audio,
    /// Missing or unrecognized content type.
    Unknown,
}

impl ResourceType {
    /// The serialized name (`html`, `image`, ...).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Image => "image",
            Self::Video => "video",
            Self::Audio => "audio",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A metadata field extracted from an HTML document.
///
/// Declaration order is the order fields appear in serialized output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Title,
    SiteName,
    Description,
    Author,
    Image,
    ImageWidth,
    ImageHeight,
    ImageAlt,
    Video,
    VideoWidth,
    VideoHeight,
    Audio,
    ThemeColor,
    Favicon,
    Url,
    CreationDate,
    UpdateDate,
}

impl Field {
    /// Every field, in output order.
    pub const ALL: [Self; 17] = [
        Self::Title,
        Self::SiteName,
        Self::Description,
        Self::Author,
        Self::Image,
        Self::ImageWidth,
        Self::ImageHeight,
        Self::ImageAlt,
        Self::Video,
        Self::VideoWidth,
        Self::VideoHeight,
        Self::Audio,
        Self::ThemeColor,
        Self::Favicon,
        Self::Url,
        Self::CreationDate,
        Self::UpdateDate,
    ];

    /// The output key for this field (`siteName`, `imageWidth`, ...).
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::SiteName => "siteName",
            Self::Description => "description",
            Self::Author => "author",
            Self::Image => "image",
            Self::ImageWidth => "imageWidth",
            Self::ImageHeight => "imageHeight",
            Self::ImageAlt => "imageAlt",
            Self::Video => "video",
            Self::VideoWidth => "videoWidth",
            Self::VideoHeight => "videoHeight",
            Self::Audio => "audio",
            Self::ThemeColor => "themeColor",
            Self::Favicon => "favicon",
            Self::Url => "url",
            Self::CreationDate => "creationDate",
            Self::UpdateDate => "updateDate",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Metadata resolved for one URL.
///
/// Only fields that were found are present, and every present value is a
/// non-empty string copied verbatim from the document. Width and height
/// fields are not coerced to numbers.
///
/// Serializes to a flat object:
///
/// ```rust
/// use rs_linkmeta::extract;
///
/// let record = extract(r#"<meta property="og:title" content="Hello">"#);
/// assert_eq!(record.to_json()?, r#"{"type":"html","title":"Hello"}"#);
/// # Ok::<(), rs_linkmeta::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetadataRecord {
    #[serde(rename = "type")]
    resource_type: ResourceType,

    #[serde(flatten)]
    fields: BTreeMap<Field, String>,
}

impl MetadataRecord {
    /// Create a record with no metadata fields.
    #[must_use]
    pub fn new(resource_type: ResourceType) -> Self {
        Self {
            resource_type,
            fields: BTreeMap::new(),
        }
    }

    /// The classified resource type.
    #[must_use]
    pub fn resource_type(&self) -> ResourceType {
        self.resource_type
    }

    /// Value of `field`, if it was found.
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }

    /// Whether `field` was found.
    #[must_use]
    pub fn contains(&self, field: Field) -> bool {
        self.fields.contains_key(&field)
    }

    /// Number of metadata fields found, not counting `type`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when no metadata field was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate found fields in output order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.fields.iter().map(|(field, value)| (*field, value.as_str()))
    }

    /// Store a field value. Empty values are dropped so they never appear
    /// in the record.
    pub(crate) fn insert(&mut self, field: Field, value: String) {
        if !value.is_empty() {
            self.fields.insert(field, value);
        }
    }

    /// Flatten into a key/value map, `type` included.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<&'static str, String> {
        let mut map: BTreeMap<&'static str, String> = self
            .fields
            .iter()
            .map(|(field, value)| (field.key(), value.clone()))
            .collect();
        map.insert("type", self.resource_type.as_str().to_string());
        map
    }

    /// Serialize to a compact JSON object.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
