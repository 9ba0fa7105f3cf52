//! Configuration options for resolving URLs.
//!
//! The `Options` struct controls how the HTTP request is made and how
//! response bodies are decoded. Field extraction itself has no knobs.

use std::time::Duration;

/// Default `User-Agent` sent with every request.
pub const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Configuration options for a [`Resolver`](crate::Resolver).
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use rs_linkmeta::Options;
/// use std::time::Duration;
///
/// let options = Options {
///     timeout: Some(Duration::from_secs(5)),
///     max_redirects: 5,
///     ..Options::default()
/// };
/// assert!(options.decode_charset);
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Value of the `User-Agent` request header.
    ///
    /// Default: `rs-linkmeta/<version>`
    pub user_agent: String,

    /// Total time allowed for the request, including reading the body.
    ///
    /// `None` waits indefinitely.
    ///
    /// Default: `Some(30s)`
    pub timeout: Option<Duration>,

    /// Maximum number of redirects followed before the request fails.
    ///
    /// `0` disables redirect following; a 3xx response is then treated as
    /// an unsuccessful status.
    ///
    /// Default: `20`
    pub max_redirects: usize,

    /// Decode HTML bodies using the declared charset.
    ///
    /// When enabled, the charset is taken from the `Content-Type` header,
    /// then from `<meta charset>` in the document head. When disabled, the
    /// body is always decoded as UTF-8.
    ///
    /// Default: `true`
    pub decode_charset: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Some(Duration::from_secs(30)),
            max_redirects: 20,
            decode_charset: true,
        }
    }
}
