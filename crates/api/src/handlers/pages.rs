//! Handlers for the fixed-content pages.

use axum::response::Html;

use crate::views::{compose, render_page};

/// GET /
pub async fn home() -> Html<String> {
    render_page(&compose::home())
}

/// GET /todo, /todo/
pub async fn todo() -> Html<String> {
    render_page(&compose::todo_list())
}

/// GET /lesson, /lesson/lesson1
pub async fn lesson() -> Html<String> {
    render_page(&compose::static_lesson())
}

/// GET /admin
pub async fn admin() -> Html<String> {
    render_page(&compose::admin())
}
