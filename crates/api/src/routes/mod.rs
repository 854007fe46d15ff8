pub mod health;

use axum::routing::{get, post};
use axum::Router;
use tower_http::services::ServeDir;

use crate::handlers::{admin, fallback, pages, training};
use crate::state::AppState;

/// Build the site route tree.
///
/// Exact routes win over the fallback, so the effective priority is:
///
/// ```text
/// /                                  home
/// /lesson, /lesson/lesson1           fixed lesson
/// /basic/, /todo/, /db, /admin,      registered pages
/// /signin, /addchar, /static/*
/// /training/{name}                   training list for any character
/// /lesson/{character}/{number}       catalog lesson
/// *.html                             static html passthrough   (fallback)
/// /{sides}                           die roll                  (fallback)
/// anything else                      404 page                  (fallback)
/// ```
///
/// `/basic/` and `/todo/` also match any deeper path, the way a
/// trailing-slash pattern does.
pub fn site_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(pages::home))
        .route("/lesson", get(pages::lesson))
        .route("/lesson/lesson1", get(pages::lesson))
        .route("/lesson/{character}/{number}", get(training::lesson))
        .route("/basic/", get(training::basic))
        .route("/basic/{*rest}", get(training::basic))
        .route("/training/{name}", get(training::by_character))
        .route("/todo", get(pages::todo))
        .route("/todo/", get(pages::todo))
        .route("/todo/{*rest}", get(pages::todo))
        .route("/admin", get(pages::admin))
        .route("/db", get(admin::dump))
        .route("/signin", post(admin::sign_in))
        .route("/addchar", post(admin::add_character))
        .nest_service("/static", ServeDir::new(&state.config.static_dir))
        .fallback(fallback::fallback)
}
