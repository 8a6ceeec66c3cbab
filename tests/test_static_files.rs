//! Tests for the static file handler

use std::fs;
use std::path::PathBuf;

use mini_http::http::handler::Handler;
use mini_http::http::mime::MediaType;
use mini_http::http::parser::parse_request;
use mini_http::http::response::{Response, StatusCode};
use mini_http::static_files::StaticFiles;

/// A scratch directory removed when dropped.
struct Site {
    root: PathBuf,
}

impl Site {
    fn new(name: &str) -> Self {
        let root = std::env::temp_dir().join(format!(
            "mini-http-{}-{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&root);
        fs::create_dir_all(root.join("docs/nested")).unwrap();
        fs::write(root.join("index.html"), "<h1>home</h1>").unwrap();
        fs::write(root.join("style.css"), "body {}").unwrap();
        fs::write(root.join("notes.md"), "# notes").unwrap();
        fs::write(root.join("docs/readme.txt"), "read me").unwrap();
        Self { root }
    }

    fn get(&self, uri: &str) -> Response {
        let line = format!("GET {} HTTP/1.1\r\n", uri);
        let request = parse_request(line.as_bytes()).unwrap();
        StaticFiles::new(&self.root).handle(&request).unwrap()
    }
}

impl Drop for Site {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.root);
    }
}

#[test]
fn test_serves_file_with_media_type() {
    let site = Site::new("file");

    let response = site.get("/index.html");

    assert_eq!(response, Response::ok(MediaType::TEXT_HTML, "<h1>home</h1>"));
}

#[test]
fn test_serves_nested_file_with_collapsed_slashes() {
    let site = Site::new("nested");

    let response = site.get("//docs///readme.txt");

    assert_eq!(response.status(), StatusCode::Ok);
    assert_eq!(response.content_type(), Some(MediaType::TEXT_PLAIN));
    assert_eq!(response.body().unwrap().as_ref(), b"read me");
}

#[test]
fn test_unregistered_extension_has_no_content_type() {
    let site = Site::new("unregistered");

    let response = site.get("/notes.md");

    assert_eq!(response.status(), StatusCode::Ok);
    assert_eq!(response.content_type(), None);
    assert_eq!(response.body().unwrap().as_ref(), b"# notes");
}

#[test]
fn test_missing_file_is_not_found() {
    let site = Site::new("missing");

    assert_eq!(site.get("/nope.html"), Response::not_found());
    assert_eq!(site.get("/index.html/child"), Response::not_found());
}

#[test]
fn test_parent_segments_are_rejected() {
    let site = Site::new("parent");

    assert_eq!(site.get("/docs/../index.html"), Response::not_found());
    assert_eq!(site.get("/./index.html"), Response::not_found());
}

#[test]
fn test_root_directory_listing() {
    let site = Site::new("listing");

    let response = site.get("/");
    assert_eq!(response.status(), StatusCode::Ok);
    assert_eq!(response.content_type(), Some(MediaType::TEXT_HTML));

    let page = String::from_utf8(response.body().unwrap().to_vec()).unwrap();
    assert!(page.contains("<a href=\"/docs/\">docs/</a>"));
    assert!(page.contains("<a href=\"/index.html\">index.html</a>"));

    let docs = page.find("docs/").unwrap();
    let style = page.find("style.css").unwrap();
    assert!(docs < style);
}

#[test]
fn test_subdirectory_listing_with_and_without_trailing_slash() {
    let site = Site::new("subdir");

    let with_slash = site.get("/docs/");
    let without_slash = site.get("/docs");
    assert_eq!(with_slash, without_slash);

    let page = String::from_utf8(with_slash.body().unwrap().to_vec()).unwrap();
    assert!(page.contains("Index of /docs/"));
    assert!(page.contains("<a href=\"/docs/nested/\">nested/</a>"));
    assert!(page.contains("<a href=\"/docs/readme.txt\">readme.txt</a>"));
    assert!(page.contains("<a href=\"/\">../</a>"));
}

#[test]
fn test_resolve_stays_under_root() {
    let files = StaticFiles::new("/srv/www");
    let segments = |parts: &[&str]| parts.iter().map(|s| s.to_string()).collect::<Vec<_>>();

    assert_eq!(
        files.resolve(&segments(&["a", "b.txt"])),
        Some(PathBuf::from("/srv/www/a/b.txt"))
    );
    assert_eq!(files.resolve(&segments(&[""])), Some(PathBuf::from("/srv/www")));
    assert_eq!(files.resolve(&segments(&["..", "etc"])), None);
}
