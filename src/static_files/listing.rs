//! HTML directory listings

use std::fmt::Write as _;
use std::path::Path;

/// A directory entry shown in a listing.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Entry {
    pub name: String,
    pub is_dir: bool,
}

/// Reads the entries of `dir`, sorted by name.
pub fn read_entries(dir: &Path) -> std::io::Result<Vec<Entry>> {
    let mut entries = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        entries.push(Entry {
            name: entry.file_name().to_string_lossy().into_owned(),
            is_dir: entry.file_type()?.is_dir(),
        });
    }
    entries.sort();
    Ok(entries)
}

/// Renders a listing page for the directory at URI `segments`.
///
/// Links are absolute so they resolve the same whether or not the request
/// URI ended in `/`.
pub fn render(segments: &[String], entries: &[Entry]) -> String {
    let parts: Vec<&str> = segments
        .iter()
        .map(String::as_str)
        .filter(|s| !s.is_empty())
        .collect();

    let mut base = String::from("/");
    for part in &parts {
        base.push_str(part);
        base.push('/');
    }
    let title = escape_html(&base);

    let mut page = String::new();
    page.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    let _ = writeln!(page, "<meta charset=\"utf-8\">\n<title>Index of {title}</title>");
    page.push_str("</head>\n<body>\n");
    let _ = writeln!(page, "<h1>Index of {title}</h1>\n<ul>");

    if let Some((_, parent)) = parts.split_last() {
        let mut href = String::from("/");
        for part in parent {
            href.push_str(part);
            href.push('/');
        }
        let _ = writeln!(page, "<li><a href=\"{}\">../</a></li>", escape_html(&href));
    }

    for entry in entries {
        let suffix = if entry.is_dir { "/" } else { "" };
        let href = format!("{base}{}{suffix}", entry.name);
        let _ = writeln!(
            page,
            "<li><a href=\"{}\">{}{suffix}</a></li>",
            escape_html(&href),
            escape_html(&entry.name)
        );
    }

    page.push_str("</ul>\n</body>\n</html>\n");
    page
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
