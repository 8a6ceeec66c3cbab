//! Registered media types.
//!
//! A response may only carry a Content-Type drawn from this table. The
//! table is keyed by a short name that doubles as the file extension the
//! static file handler recognises; a few extra common extensions alias
//! the same entries.

use crate::http::response::ResponseError;

/// A `type/subtype` pair from the registered set.
///
/// There is no way to build a `MediaType` outside the registry, so holding
/// one is proof that the pair is allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MediaType {
    type_: &'static str,
    subtype: &'static str,
}

impl MediaType {
    pub const TEXT_PLAIN: MediaType = MediaType::registered("text", "plain");
    pub const TEXT_HTML: MediaType = MediaType::registered("text", "html");
    pub const TEXT_CSS: MediaType = MediaType::registered("text", "css");
    pub const APPLICATION_JAVASCRIPT: MediaType =
        MediaType::registered("application", "javascript");
    pub const IMAGE_PNG: MediaType = MediaType::registered("image", "png");

    const fn registered(type_: &'static str, subtype: &'static str) -> Self {
        Self { type_, subtype }
    }

    /// Looks up a `(type, subtype)` pair in the registry.
    ///
    /// # Example
    ///
    /// ```
    /// # use mini_http::http::mime::MediaType;
    /// assert_eq!(MediaType::new("text", "html").unwrap(), MediaType::TEXT_HTML);
    /// assert!(MediaType::new("html", "text").is_err());
    /// ```
    pub fn new(type_: &str, subtype: &str) -> Result<Self, ResponseError> {
        REGISTRY
            .iter()
            .map(|(_, media)| *media)
            .find(|media| media.type_ == type_ && media.subtype == subtype)
            .ok_or_else(|| ResponseError::UnregisteredMediaType(format!("{type_}/{subtype}")))
    }

    /// Maps a file extension (without the dot, case-insensitive) to its
    /// registered media type.
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.to_ascii_lowercase();
        REGISTRY
            .iter()
            .chain(EXTENSION_ALIASES)
            .find(|(name, _)| *name == ext)
            .map(|(_, media)| *media)
    }

    pub fn type_(&self) -> &'static str {
        self.type_
    }

    pub fn subtype(&self) -> &'static str {
        self.subtype
    }

    /// Every registered media type, in table order.
    pub fn all() -> impl Iterator<Item = MediaType> {
        REGISTRY.iter().map(|(_, media)| *media)
    }
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.type_, self.subtype)
    }
}

impl TryFrom<(&str, &str)> for MediaType {
    type Error = ResponseError;

    fn try_from((type_, subtype): (&str, &str)) -> Result<Self, Self::Error> {
        MediaType::new(type_, subtype)
    }
}

const REGISTRY: &[(&str, MediaType)] = &[
    ("plain", MediaType::TEXT_PLAIN),
    ("html", MediaType::TEXT_HTML),
    ("css", MediaType::TEXT_CSS),
    ("javascript", MediaType::APPLICATION_JAVASCRIPT),
    ("png", MediaType::IMAGE_PNG),
];

const EXTENSION_ALIASES: &[(&str, MediaType)] = &[
    ("txt", MediaType::TEXT_PLAIN),
    ("htm", MediaType::TEXT_HTML),
    ("js", MediaType::APPLICATION_JAVASCRIPT),
];
