//! Catch-all for paths no registered route claims.
//!
//! Checked in order:
//!
//! 1. Path ends in `.html` -> file from the static `html/` directory.
//! 2. Path is a positive integer `n` -> roll an `n`-sided die.
//! 3. Anything else -> 404 page.

use std::convert::Infallible;

use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tower::ServiceExt;
use tower_http::services::ServeDir;
use trainer_core::dice::Dice;
use trainer_core::error::CoreError;

use crate::error::AppError;
use crate::state::AppState;
use crate::views::{compose, render_page};

/// What the catch-all should do with a request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    StaticHtml,
    Die(u32),
    NotFound,
}

impl Fallback {
    pub fn classify(path: &str) -> Self {
        let rest = path.strip_prefix('/').unwrap_or(path);
        if rest.ends_with(".html") {
            return Fallback::StaticHtml;
        }
        match rest.parse::<u32>() {
            Ok(sides) if sides > 0 && !rest.starts_with('+') => Fallback::Die(sides),
            _ => Fallback::NotFound,
        }
    }
}

pub async fn fallback(State(state): State<AppState>, request: Request) -> Response {
    match Fallback::classify(request.uri().path()) {
        Fallback::StaticHtml => serve_html(&state, request).await,
        Fallback::Die(sides) => match Dice::roll(sides) {
            Ok(dice) => render_page(&compose::die(dice)).into_response(),
            Err(e) => AppError::from(e).into_response(),
        },
        Fallback::NotFound => not_found(request.uri().path()),
    }
}

async fn serve_html(state: &AppState, request: Request) -> Response {
    let path = request.uri().path().to_string();
    let result: Result<_, Infallible> = ServeDir::new(state.config.html_dir())
        .oneshot(request)
        .await;
    let response = match result {
        Ok(response) => response,
        Err(never) => match never {},
    };

    if response.status() == StatusCode::NOT_FOUND {
        return not_found(&path);
    }
    response.map(Body::new)
}

fn not_found(path: &str) -> Response {
    tracing::debug!(path, "No page for path");
    AppError::Core(CoreError::not_found("Page", path)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn html_suffix_is_static() {
        assert_eq!(Fallback::classify("/report.html"), Fallback::StaticHtml);
        assert_eq!(Fallback::classify("/docs/guide.html"), Fallback::StaticHtml);
    }

    #[test]
    fn htm_suffix_is_not_static() {
        assert_eq!(Fallback::classify("/report.htm"), Fallback::NotFound);
    }

    #[test]
    fn positive_number_is_a_die() {
        assert_eq!(Fallback::classify("/20"), Fallback::Die(20));
        assert_eq!(Fallback::classify("/1"), Fallback::Die(1));
    }

    #[test]
    fn zero_and_signed_numbers_are_not_dice() {
        assert_eq!(Fallback::classify("/0"), Fallback::NotFound);
        assert_eq!(Fallback::classify("/-4"), Fallback::NotFound);
        assert_eq!(Fallback::classify("/+4"), Fallback::NotFound);
    }

    #[test]
    fn anything_else_is_not_found() {
        assert_eq!(Fallback::classify("/nosuchpath"), Fallback::NotFound);
        assert_eq!(Fallback::classify("/20/extra"), Fallback::NotFound);
    }
}
