//! Static export: one HTML file per route.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use milaknight_context::AppContext;
use thiserror::Error;

use crate::markup::{El, Text, View};
use crate::{landing, login};

pub const TITLE: &str = "Milaknight - Task Manager";
pub const DESCRIPTION: &str =
    "A lightweight task manager for individuals and teams. Plan, assign, and track progress in minutes.";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Routes and the file each one lands in, relative to the output directory.
pub const ROUTES: [(&str, &str); 2] = [("/", "index.html"), ("/login", "login/index.html")];

/// Wrap a page body in a full document. Root `lang`, `dir` and theme class
/// come from the document model as the contexts left it.
pub fn render_document(ctx: &AppContext, body: &View) -> String {
    let doc = &ctx.document;
    let mut root = El("html");
    for name in ["lang", "dir"] {
        if let Some(value) = doc.attribute(name) {
            root = root.attr(name, value);
        }
    }
    let classes = doc.class_list();
    if !classes.is_empty() {
        root = root.class(classes);
    }

    let mut html = String::from("<!DOCTYPE html>\n");
    root.write_open_tag(&mut html);
    html.push_str("<head><meta charset=\"utf-8\">");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">");
    El("title").child(Text(TITLE)).write_html(&mut html);
    El("meta")
        .attr("name", "description")
        .attr("content", DESCRIPTION)
        .write_html(&mut html);
    html.push_str("<link rel=\"icon\" href=\"/favicon.png\" type=\"image/png\">");
    html.push_str("</head><body>");
    body.write_html(&mut html);
    html.push_str("</body></html>\n");
    html
}

/// Render the page behind `route`, or `None` for an unknown route.
pub fn render_route(ctx: &AppContext, route: &str) -> Option<String> {
    let html = match route {
        "/" => {
            let page = landing::Factory::mount(ctx);
            let html = render_document(ctx, &page.view());
            page.unmount();
            html
        }
        "/login" => {
            let page = login::Factory::mount(ctx);
            let html = render_document(ctx, &page.view());
            page.unmount();
            html
        }
        _ => return None,
    };
    Some(html)
}

/// Write every route under `out_dir`. Returns the files written.
pub fn export_site(ctx: &AppContext, out_dir: &Path) -> Result<Vec<PathBuf>, ExportError> {
    let mut written = Vec::with_capacity(ROUTES.len());
    for (route, file) in ROUTES {
        let Some(html) = render_route(ctx, route) else {
            continue;
        };
        let path = out_dir.join(file);
        write_file(&path, &html)?;
        log::info!("exported {route} -> {}", path.display());
        written.push(path);
    }
    Ok(written)
}

fn write_file(path: &Path, contents: &str) -> Result<(), ExportError> {
    let io_err = |source: io::Error| ExportError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(io_err)?;
    }
    fs::write(path, contents).map_err(io_err)
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use milaknight_context::{LOCALE_KEY, MemoryPreferences};

    use super::*;

    #[test]
    fn document_carries_direction_and_theme() {
        let ctx = AppContext::new(Rc::new(MemoryPreferences::with(&[(LOCALE_KEY, "ar")])));
        let html = render_route(&ctx, "/").unwrap();

        assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"ar\" dir=\"rtl\" class=\"dark\"><head>"));
        assert!(html.contains("<title>Milaknight - Task Manager</title>"));
        assert!(html.contains("id=\"features\""));
        assert!(html.contains("الميزات"));
        assert!(html.ends_with("</body></html>\n"));
    }

    #[test]
    fn unknown_route_renders_nothing() {
        assert!(render_route(&AppContext::ephemeral(), "/pricing").is_none());
    }

    #[test]
    fn exports_every_route() {
        let out = std::env::temp_dir().join(format!("milaknight-export-{}", std::process::id()));
        let _ = fs::remove_dir_all(&out);

        let files = export_site(&AppContext::ephemeral(), &out).unwrap();
        assert_eq!(files, vec![out.join("index.html"), out.join("login/index.html")]);

        let login = fs::read_to_string(out.join("login/index.html")).unwrap();
        assert!(login.contains("Coming Soon"));
        assert!(login.contains("placeholder=\"you@example.com\""));
        assert!(login.contains("lang=\"en\""));

        let _ = fs::remove_dir_all(&out);
    }
}
