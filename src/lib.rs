//! mini-http - a minimal HTTP/1.1 file server
//!
//! Core library: the request-line parser, the response serializer, the
//! per-connection error boundary and the accept loop, plus a static file
//! handler built on the same `Request -> Response` contract.

pub mod config;
pub mod http;
pub mod server;
pub mod static_files;
