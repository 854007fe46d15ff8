//! Page view models and HTML rendering.
//!
//! - [`pages`] -- the per-request view model structs and their markup.
//! - [`compose`] -- pure functions building view models from catalog
//!   rows and static content.
//!
//! Rendering is thin: every view model implements [`View`],
//! and [`render_page`] wraps its body in the shared site layout. All text
//! that reaches the markup goes through [`escape`].

pub mod compose;
pub mod pages;

use std::borrow::Cow;

use axum::response::Html;

/// Identifier of the layout a view model is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    Index,
    Todo,
    Lesson,
    TrainingList,
    Admin,
    BasicContent,
    Die,
    NotFound,
    Issue,
}

impl Template {
    pub fn as_str(self) -> &'static str {
        match self {
            Template::Index => "index",
            Template::Todo => "todo",
            Template::Lesson => "lesson",
            Template::TrainingList => "trainingList",
            Template::Admin => "admin",
            Template::BasicContent => "basicContent",
            Template::Die => "die",
            Template::NotFound => "404",
            Template::Issue => "issue",
        }
    }
}

/// A value that can be rendered as a full page.
pub trait View {
    fn template(&self) -> Template;

    /// Text for `<title>` and the page heading. Unescaped.
    fn title(&self) -> &str;

    /// Inner markup of `<main>`. Implementations escape their own text.
    fn body(&self) -> String;
}

/// Render `view` inside the site header and footer.
pub fn render_page<V: View>(view: &V) -> Html<String> {
    let title = escape(view.title());
    let body = view.body();
    let template = view.template().as_str();
    tracing::trace!(template, "Rendering page");

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<link rel="stylesheet" href="/static/css/main.css">
</head>
<body data-template="{template}">
<header>
<nav>
<a href="/">Home</a>
<a href="/basic/">Basic Training</a>
<a href="/todo/">TODO</a>
<a href="/admin">Admin</a>
</nav>
</header>
<main>
<h1>{title}</h1>
{body}
</main>
<footer>
<p>Made for practice, one short hop at a time.</p>
</footer>
</body>
</html>
"#,
    ))
}

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 16);
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    Cow::Owned(out)
}

/// Percent-encode `segment` for use as one URL path segment.
pub fn path_segment(segment: &str) -> Cow<'_, str> {
    urlencoding::encode(segment)
}
