//! URL resolution.
//!
//! Fetches a URL with a single GET, classifies the response by its
//! `Content-Type`, and hands HTML bodies to the field extractor. There are
//! no retries and nothing is cached; every call is independent.

use reqwest::header::CONTENT_TYPE;
use reqwest::redirect::Policy;
use url::Url;

use crate::error::{Error, Result};
use crate::metadata::extract_metadata;
use crate::result::{MetadataRecord, ResourceType};
use crate::{dom, encoding, Options};

/// Fetches URLs and builds [`MetadataRecord`]s from the responses.
///
/// A `Resolver` holds a configured HTTP client and can be reused for any
/// number of calls. It never sends a `Referer` header and keeps no cookies.
///
/// # Example
///
/// ```rust,no_run
/// use rs_linkmeta::{Field, Resolver};
///
/// # async fn example() -> Result<(), rs_linkmeta::Error> {
/// let resolver = Resolver::new()?;
/// if let Some(record) = resolver.resolve("https://www.rust-lang.org").await {
///     println!("{}: {:?}", record.resource_type(), record.get(Field::Title));
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Resolver {
    client: reqwest::Client,
    options: Options,
}

impl Resolver {
    /// Create a resolver with default options.
    pub fn new() -> Result<Self> {
        Self::with_options(Options::default())
    }

    /// Create a resolver with custom options.
    pub fn with_options(options: Options) -> Result<Self> {
        let redirect = if options.max_redirects == 0 {
            Policy::none()
        } else {
            Policy::limited(options.max_redirects)
        };

        let mut builder = reqwest::Client::builder()
            .redirect(redirect)
            .referer(false)
            .user_agent(options.user_agent.as_str());

        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            options,
        })
    }

    /// The options this resolver was built with.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Resolve `url` into a record, or `None` on any hard failure.
    ///
    /// Hard failures are an empty or invalid URL, a non-HTTP scheme, a
    /// transport error and a non-2xx status. Use [`Resolver::try_resolve`]
    /// to learn which one occurred.
    pub async fn resolve(&self, url: &str) -> Option<MetadataRecord> {
        match self.try_resolve(url).await {
            Ok(record) => Some(record),
            Err(Error::EmptyUrl) => {
                tracing::info!("URL is empty");
                None
            }
            Err(err) => {
                tracing::debug!(url = url.trim(), error = %err, "resolve failed");
                None
            }
        }
    }

    /// Resolve `url` into a record, reporting why a call failed.
    pub async fn try_resolve(&self, url: &str) -> Result<MetadataRecord> {
        let target = parse_target(url)?;

        tracing::debug!(url = %target, "fetching");
        let response = self.client.get(target).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status(status.as_u16()));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);

        let resource_type = classify_content_type(content_type.as_deref());
        tracing::debug!(
            final_url = %response.url(),
            content_type = content_type.as_deref().unwrap_or(""),
            %resource_type,
            "classified response"
        );

        if resource_type != ResourceType::Html {
            return Ok(MetadataRecord::new(resource_type));
        }

        let body = response.bytes().await?;
        let html = if self.options.decode_charset {
            encoding::decode_body(&body, content_type.as_deref())
        } else {
            String::from_utf8_lossy(&body).into_owned()
        };

        Ok(extract_metadata(&dom::parse(&html)))
    }
}

/// Trim and validate a URL before any request is made.
///
/// ```
/// use rs_linkmeta::resolver::parse_target;
///
/// assert_eq!(parse_target("  https://example.com ")?.as_str(), "https://example.com/");
/// assert!(parse_target("   ").is_err());
/// assert!(parse_target("ftp://example.com/file").is_err());
/// # Ok::<(), rs_linkmeta::Error>(())
/// ```
pub fn parse_target(url: &str) -> Result<Url> {
    let url = url.trim();
    if url.is_empty() {
        return Err(Error::EmptyUrl);
    }

    let parsed = Url::parse(url).map_err(|err| Error::InvalidUrl(format!("{url}: {err}")))?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(Error::UnsupportedScheme(other.to_string())),
    }
}

/// Classify a `Content-Type` header value.
///
/// Case-insensitive substring checks, in order: `text/html`, `image`,
/// `video`, `audio`. Anything else, or a missing header, is
/// [`ResourceType::Unknown`].
#[must_use]
pub fn classify_content_type(content_type: Option<&str>) -> ResourceType {
    let Some(content_type) = content_type else {
        return ResourceType::Unknown;
    };
    let content_type = content_type.to_ascii_lowercase();

    if content_type.contains("text/html") {
        ResourceType::Html
    } else if content_type.contains("image") {
        ResourceType::Image
    } else if content_type.contains("video") {
        ResourceType::Video
    } else if content_type.contains("audio") {
        ResourceType::Audio
    } else {
        ResourceType::Unknown
    }
}
