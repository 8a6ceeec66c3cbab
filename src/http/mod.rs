//! HTTP protocol implementation.
//!
//! A deliberately small HTTP/1.1 subset: one request per connection, GET
//! only, and nothing but the request line is read. Headers and bodies sent
//! by the client are ignored.
//!
//! # Architecture
//!
//! - **`parser`**: Parses the request line from raw bytes
//! - **`request`**: The parsed request (method, URI segments, version)
//! - **`response`**: HTTP response representation with builder pattern
//! - **`mime`**: The registered media types a response may declare
//! - **`writer`**: Serializes and writes HTTP responses to the client
//! - **`handler`**: The `Request -> Response` contract for applications
//! - **`connection`**: The per-connection state machine and error boundary
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │  Received   │ ← Raw bytes read from the socket
//!        └──────┬──────┘
//!        match  │  no match
//!        ┌──────┴───────────────┐
//!        ▼                      ▼
//!  ┌───────────┐        ┌──────────────┐
//!  │  Parsed   │        │ ParseFailed  │ → 400
//!  └─────┬─────┘        └──────┬───────┘
//!   ok   │  err / panic        │
//!   ┌────┴─────────────┐       │
//!   ▼                  ▼       │
//! ┌────────────┐ ┌──────────────────┐
//! │ Dispatched │ │ DispatchFailed   │ → 500
//! └─────┬──────┘ └────────┬─────────┘
//!       └────────┬────────┴────────┘
//!                ▼
//!        ┌─────────────┐
//!        │  Responded  │ ← Serialized, written, connection closed
//!        └─────────────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use mini_http::config::Config;
//! use mini_http::http::mime::MediaType;
//! use mini_http::http::request::Request;
//! use mini_http::http::response::Response;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let cfg = Config::default();
//!     let handler = |req: &Request| -> anyhow::Result<Response> {
//!         Ok(Response::ok(MediaType::TEXT_PLAIN, req.path()))
//!     };
//!     mini_http::server::listener::run(&cfg, handler).await
//! }
//! ```

pub mod connection;
pub mod handler;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
