/// HTTP request methods.
///
/// Only GET is understood. Any other method token fails the request-line
/// grammar and is answered with 400 Bad Request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    Get,
}

/// HTTP protocol versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Version {
    /// HTTP/1.1
    Http11,
}

impl Method {
    /// The method token exactly as it appears on the wire.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
        }
    }

    /// Looks up a method by its wire token.
    ///
    /// The match is case-sensitive.
    ///
    /// # Example
    ///
    /// ```
    /// # use mini_http::http::request::Method;
    /// assert_eq!(Method::from_bytes(b"GET"), Some(Method::Get));
    /// assert_eq!(Method::from_bytes(b"get"), None);
    /// ```
    pub fn from_bytes(token: &[u8]) -> Option<Self> {
        match token {
            b"GET" => Some(Method::Get),
            _ => None,
        }
    }
}

impl Version {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Version::Http11 => "HTTP/1.1",
        }
    }

    pub fn from_bytes(token: &[u8]) -> Option<Self> {
        match token {
            b"HTTP/1.1" => Some(Version::Http11),
            _ => None,
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed HTTP request line.
///
/// A `Request` can only be produced by
/// [`parse_request`](crate::http::parser::parse_request), so every value
/// of this type corresponds to a request line that matched the grammar in
/// full. Headers and bodies are never read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    method: Method,
    uri: Vec<String>,
    version: Version,
}

impl Request {
    pub(crate) fn new(method: Method, uri: Vec<String>, version: Version) -> Self {
        debug_assert!(!uri.is_empty(), "a request URI has at least one segment");
        Self { method, uri, version }
    }

    pub fn method(&self) -> Method {
        self.method
    }

    /// The URI path segments in order.
    ///
    /// Runs of `/` are collapsed, so `//a///b` yields `["a", "b"]`. A
    /// trailing `/` yields a final empty segment, and the URI `/` alone
    /// yields `[""]`.
    pub fn uri(&self) -> &[String] {
        &self.uri
    }

    pub fn version(&self) -> Version {
        self.version
    }

    /// Rebuilds a normalized path from the segments, e.g. `/foo/bar/`.
    pub fn path(&self) -> String {
        let mut path = String::new();
        for segment in &self.uri {
            path.push('/');
            path.push_str(segment);
        }
        path
    }
}
