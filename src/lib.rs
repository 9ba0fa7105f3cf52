//! # rs-linkmeta
//!
//! Fetch a URL and normalize the metadata its HTML declares into one record.
//!
//! Pages describe themselves through several competing vocabularies: Open
//! Graph, Twitter Cards, Dublin Core, citation metadata and Microsoft tile
//! tags. This library resolves each output field (title, description,
//! author, image, dates, ...) through a fixed priority chain across those
//! vocabularies, so callers get one uniform set of keys.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rs_linkmeta::{resolve, Field};
//!
//! # async fn example() {
//! if let Some(record) = resolve("https://www.rust-lang.org").await {
//!     println!("type: {}", record.resource_type());
//!     println!("title: {:?}", record.get(Field::Title));
//! }
//! # }
//! ```
//!
//! Extraction also works on HTML already in memory:
//!
//! ```rust
//! use rs_linkmeta::{extract, Field};
//!
//! let html = r#"<html><head>
//!     <meta property="og:title" content="My Article">
//!     <meta name="twitter:site" content="@example">
//! </head></html>"#;
//!
//! let record = extract(html);
//! assert_eq!(record.get(Field::Title), Some("My Article"));
//! assert_eq!(record.get(Field::SiteName), Some("example"));
//! ```
//!
//! ## Failure Model
//!
//! An empty or invalid URL, a transport error or a non-2xx response makes
//! [`resolve`] return `None`. A field that cannot be found is simply absent
//! from the record; it is never an error.

mod error;
mod options;
mod result;

/// DOM helpers over `dom_query`.
pub mod dom;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Field priority chains and metadata extraction.
pub mod metadata;

/// HTTP fetching and content-type classification.
pub mod resolver;

// Public API - re-exports
pub use error::{Error, Result};
pub use options::{Options, DEFAULT_USER_AGENT};
pub use resolver::Resolver;
pub use result::{Field, MetadataRecord, ResourceType};

/// Resolves a URL into a metadata record using default options.
///
/// The URL is trimmed first; an empty URL returns `None` without any
/// request being made. Transport failures and non-2xx responses also return
/// `None`.
///
/// Build a [`Resolver`] once and reuse it when resolving many URLs.
pub async fn resolve(url: &str) -> Option<MetadataRecord> {
    match Resolver::new() {
        Ok(resolver) => resolver.resolve(url).await,
        Err(err) => {
            tracing::warn!(error = %err, "failed to build HTTP client");
            None
        }
    }
}

/// Resolves a URL with custom options, reporting why a call failed.
pub async fn try_resolve_with_options(url: &str, options: &Options) -> Result<MetadataRecord> {
    Resolver::with_options(options.clone())?.try_resolve(url).await
}

/// Extracts metadata from an HTML document.
///
/// The record always has type `html`.
///
/// # Example
///
/// ```rust
/// use rs_linkmeta::{extract, Field, ResourceType};
///
/// let record = extract("<html><head><title>Hello</title></head></html>");
/// assert_eq!(record.resource_type(), ResourceType::Html);
/// assert_eq!(record.get(Field::Title), Some("Hello"));
/// ```
#[must_use]
pub fn extract(html: &str) -> MetadataRecord {
    metadata::extract_metadata(&dom::parse(html))
}

/// Extracts metadata from HTML bytes with automatic encoding detection.
///
/// The charset is detected from `<meta charset>` or
/// `<meta http-equiv="Content-Type">`, defaulting to UTF-8.
///
/// # Example
///
/// ```rust
/// use rs_linkmeta::{extract_bytes, Field};
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"><title>Caf\xE9</title></head></html>";
/// assert_eq!(extract_bytes(html).get(Field::Title), Some("Café"));
/// ```
#[must_use]
pub fn extract_bytes(html: &[u8]) -> MetadataRecord {
    extract(&encoding::transcode_to_utf8(html))
}
