use bytes::Bytes;
use thiserror::Error;

use crate::http::mime::MediaType;

/// Raised when a response is built from values outside the supported set.
///
/// Validation happens when the response is constructed, never when it is
/// serialized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResponseError {
    #[error("unsupported status code {0}")]
    UnsupportedStatus(u16),
    #[error("unregistered media type {0}")]
    UnregisteredMediaType(String),
}

/// HTTP status codes supported by the server.
///
/// - `Ok` (200): Request successful
/// - `BadRequest` (400): Malformed request line
/// - `NotFound` (404): Resource not found
/// - `InternalServerError` (500): Handler failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 400 Bad Request
    BadRequest,
    /// 404 Not Found
    NotFound,
    /// 500 Internal Server Error
    InternalServerError,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use mini_http::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::BadRequest => 400,
            StatusCode::NotFound => 404,
            StatusCode::InternalServerError => 500,
        }
    }

    /// Returns the reason phrase sent on the status line.
    ///
    /// # Example
    ///
    /// ```
    /// # use mini_http::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    /// assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    /// ```
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::NotFound => "Not Found",
            StatusCode::InternalServerError => "Internal Server Error",
        }
    }
}

impl TryFrom<u16> for StatusCode {
    type Error = ResponseError;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        match code {
            200 => Ok(StatusCode::Ok),
            400 => Ok(StatusCode::BadRequest),
            404 => Ok(StatusCode::NotFound),
            500 => Ok(StatusCode::InternalServerError),
            other => Err(ResponseError::UnsupportedStatus(other)),
        }
    }
}

/// A complete HTTP response ready to be serialized.
///
/// `content_type` of `None` means no Content-Type header is sent;
/// `body` of `None` means neither a Content-Length header nor any body
/// bytes are sent. An empty body (`Some("")`) still sends
/// `Content-Length: 0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    status: StatusCode,
    content_type: Option<MediaType>,
    body: Option<Bytes>,
}

/// Builder for constructing HTTP responses in a fluent style.
///
/// # Example
///
/// ```
/// # use mini_http::http::mime::MediaType;
/// # use mini_http::http::response::{ResponseBuilder, StatusCode};
/// let response = ResponseBuilder::new(StatusCode::Ok)
///     .content_type(MediaType::TEXT_PLAIN)
///     .body("hello")
///     .build();
/// assert_eq!(response.body().map(|b| b.len()), Some(5));
/// ```
pub struct ResponseBuilder {
    status: StatusCode,
    content_type: Option<MediaType>,
    body: Option<Bytes>,
}

impl ResponseBuilder {
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            content_type: None,
            body: None,
        }
    }

    pub fn content_type(mut self, media: MediaType) -> Self {
        self.content_type = Some(media);
        self
    }

    /// Sets the response body. Strings are stored as their UTF-8 bytes.
    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn build(self) -> Response {
        Response {
            status: self.status,
            content_type: self.content_type,
            body: self.body,
        }
    }
}

impl Response {
    /// Builds a response from raw values, validating both the status code
    /// and the media type.
    ///
    /// # Example
    ///
    /// ```
    /// # use mini_http::http::response::Response;
    /// assert!(Response::new(200, Some(("text", "plain")), Some("hi")).is_ok());
    /// assert!(Response::new(201, None, None::<&str>).is_err());
    /// assert!(Response::new(200, Some(("html", "text")), None::<&str>).is_err());
    /// ```
    pub fn new<B: Into<Bytes>>(
        status_code: u16,
        content_type: Option<(&str, &str)>,
        message_body: Option<B>,
    ) -> Result<Self, ResponseError> {
        let status = StatusCode::try_from(status_code)?;
        let content_type = content_type.map(MediaType::try_from).transpose()?;

        Ok(Response {
            status,
            content_type,
            body: message_body.map(Into::into),
        })
    }

    /// 200 OK with the given media type and body.
    pub fn ok(media: MediaType, body: impl Into<Bytes>) -> Self {
        ResponseBuilder::new(StatusCode::Ok)
            .content_type(media)
            .body(body)
            .build()
    }

    /// A response with only a status line: no Content-Type, no body.
    pub fn status_only(status: StatusCode) -> Self {
        ResponseBuilder::new(status).build()
    }

    pub fn bad_request() -> Self {
        Self::status_only(StatusCode::BadRequest)
    }

    pub fn not_found() -> Self {
        Self::status_only(StatusCode::NotFound)
    }

    pub fn internal_error() -> Self {
        Self::status_only(StatusCode::InternalServerError)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn content_type(&self) -> Option<MediaType> {
        self.content_type
    }

    pub fn body(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }
}
