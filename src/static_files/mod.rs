//! Static file serving
//!
//! Resolves request URI segments against a root directory. Files are
//! returned with a media type picked from their extension, directories
//! are rendered as an HTML listing, and everything else is 404.

pub mod listing;

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::debug;

use crate::http::handler::Handler;
use crate::http::mime::MediaType;
use crate::http::request::Request;
use crate::http::response::{Response, ResponseBuilder, StatusCode};

/// Serves files below `root`.
#[derive(Debug, Clone)]
pub struct StaticFiles {
    root: PathBuf,
}

impl StaticFiles {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Maps URI segments to a path under the root.
    ///
    /// Returns `None` for segments that could climb out of the root.
    pub fn resolve(&self, segments: &[String]) -> Option<PathBuf> {
        let mut path = self.root.clone();
        for segment in segments.iter().filter(|s| !s.is_empty()) {
            if segment == "." || segment == ".." || segment.contains('\\') {
                return None;
            }
            path.push(segment);
        }
        Some(path)
    }

    fn serve_file(&self, path: &Path) -> anyhow::Result<Response> {
        let contents =
            std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;

        let media = path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(MediaType::from_extension);

        let mut builder = ResponseBuilder::new(StatusCode::Ok);
        if let Some(media) = media {
            builder = builder.content_type(media);
        }
        Ok(builder.body(contents).build())
    }

    fn serve_directory(&self, path: &Path, segments: &[String]) -> anyhow::Result<Response> {
        let entries = listing::read_entries(path)
            .with_context(|| format!("listing {}", path.display()))?;
        let page = listing::render(segments, &entries);
        Ok(Response::ok(MediaType::TEXT_HTML, page))
    }
}

impl Handler for StaticFiles {
    fn handle(&self, request: &Request) -> anyhow::Result<Response> {
        let Some(path) = self.resolve(request.uri()) else {
            debug!(path = %request.path(), "Rejected path outside root");
            return Ok(Response::not_found());
        };

        let metadata = match std::fs::metadata(&path) {
            Ok(metadata) => metadata,
            Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) => {
                return Ok(Response::not_found());
            }
            Err(e) => {
                return Err(e).with_context(|| format!("inspecting {}", path.display()));
            }
        };

        if metadata.is_file() {
            self.serve_file(&path)
        } else if metadata.is_dir() {
            self.serve_directory(&path, request.uri())
        } else {
            Ok(Response::not_found())
        }
    }
}
