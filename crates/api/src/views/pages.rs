//! Per-request view models.
//!
//! Each struct carries only what its page displays and is built fresh for
//! every request (see [`super::compose`]).

use std::fmt::Write;

use axum::http::StatusCode;
use trainer_core::dice::Dice;
use trainer_db::models::character::Character;
use trainer_db::models::lesson::Lesson;

use super::{escape, path_segment, Template, View};

/// A page that shows nothing beyond its title and fixed copy.
#[derive(Debug, Clone)]
pub struct Page {
    pub page_title: String,
    pub template: Template,
}

/// A titled list of plain text lines.
#[derive(Debug, Clone)]
pub struct PageContent {
    pub page_title: String,
    pub page_content: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    pub title: String,
    pub done: bool,
}

#[derive(Debug, Clone)]
pub struct TodoPageData {
    pub page_title: String,
    pub list_title: String,
    pub todos: Vec<Todo>,
}

#[derive(Debug, Clone)]
pub struct LessonPage {
    pub page_title: String,
    pub lesson: Lesson,
}

#[derive(Debug, Clone)]
pub struct CharacterTrainingPage {
    pub page_title: String,
    pub character: Character,
    pub lessons: Vec<Lesson>,
}

#[derive(Debug, Clone)]
pub struct DiePage {
    pub page_title: String,
    pub dice: Dice,
}

#[derive(Debug, Clone)]
pub struct NotFoundPage {
    pub page_title: String,
}

impl NotFoundPage {
    pub fn new() -> Self {
        Self {
            page_title: "404".to_string(),
        }
    }
}

impl Default for NotFoundPage {
    fn default() -> Self {
        Self::new()
    }
}

/// Shown for every error other than 404.
#[derive(Debug, Clone)]
pub struct IssuePage {
    pub page_title: String,
    pub status: u16,
    pub message: String,
}

impl IssuePage {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            page_title: "Something went wrong".to_string(),
            status: status.as_u16(),
            message: message.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Markup
// ---------------------------------------------------------------------------

impl View for Page {
    fn template(&self) -> Template {
        self.template
    }

    fn title(&self) -> &str {
        &self.page_title
    }

    fn body(&self) -> String {
        match self.template {
            Template::Admin => ADMIN_BODY.to_string(),
            _ => HOME_BODY.to_string(),
        }
    }
}

const HOME_BODY: &str = r#"<p>Learn the fundamentals one lesson at a time.</p>
<p><a href="/basic/">Start basic training</a></p>"#;

const ADMIN_BODY: &str = r#"<section>
<h2>Add a character</h2>
<form method="post" action="/addchar">
<label>Name <input name="name" required></label>
<label>Display name <input name="display_name"></label>
<label>Icon <input name="icon"></label>
<label>Password <input name="password" type="password" required></label>
<button type="submit">Add</button>
</form>
</section>
<p><a href="/db">View database</a></p>"#;

impl View for PageContent {
    fn template(&self) -> Template {
        Template::BasicContent
    }

    fn title(&self) -> &str {
        &self.page_title
    }

    fn body(&self) -> String {
        let mut out = String::from("<ul class=\"content\">\n");
        for line in &self.page_content {
            let _ = writeln!(out, "<li>{}</li>", escape(line));
        }
        out.push_str("</ul>");
        out
    }
}

impl View for TodoPageData {
    fn template(&self) -> Template {
        Template::Todo
    }

    fn title(&self) -> &str {
        &self.page_title
    }

    fn body(&self) -> String {
        let mut out = format!("<h2>{}</h2>\n<ul class=\"todos\">\n", escape(&self.list_title));
        for todo in &self.todos {
            let class = if todo.done { "done" } else { "open" };
            let _ = writeln!(out, "<li class=\"{class}\">{}</li>", escape(&todo.title));
        }
        out.push_str("</ul>");
        out
    }
}

impl View for LessonPage {
    fn template(&self) -> Template {
        Template::Lesson
    }

    fn title(&self) -> &str {
        &self.page_title
    }

    fn body(&self) -> String {
        let l = &self.lesson;
        let mut out = format!(
            "<article class=\"lesson\">\n<h2>Lesson {}: {}</h2>\n<img src=\"{}\" alt=\"{}\">\n<p>{}</p>\n",
            l.number,
            escape(&l.name),
            escape(&l.gif),
            escape(&l.name),
            escape(&l.description),
        );
        let times = [
            l.learning_time_seconds,
            l.training_time_seconds,
            l.test_time_seconds,
        ];
        if times.iter().any(|&t| t > 0) {
            let _ = writeln!(
                out,
                "<dl>\n<dt>Learning</dt><dd>{}s</dd>\n<dt>Training</dt><dd>{}s</dd>\n<dt>Test</dt><dd>{}s</dd>\n</dl>",
                l.learning_time_seconds, l.training_time_seconds, l.test_time_seconds
            );
        }
        out.push_str("</article>");
        out
    }
}

impl View for CharacterTrainingPage {
    fn template(&self) -> Template {
        Template::TrainingList
    }

    fn title(&self) -> &str {
        &self.page_title
    }

    fn body(&self) -> String {
        let c = &self.character;
        let mut out = String::new();
        if !c.icon.is_empty() {
            let _ = writeln!(
                out,
                "<img class=\"icon\" src=\"{}\" alt=\"{}\">",
                escape(&c.icon),
                escape(&c.display_name)
            );
        }
        let _ = writeln!(out, "<h2>{}</h2>", escape(&c.display_name));

        if self.lessons.is_empty() {
            out.push_str("<p>No lessons yet.</p>");
            return out;
        }

        out.push_str("<ol class=\"lessons\">\n");
        let character_segment = path_segment(&c.name);
        for lesson in &self.lessons {
            let _ = writeln!(
                out,
                "<li><a href=\"/lesson/{character_segment}/{}\">{}</a></li>",
                lesson.number,
                escape(&lesson.name)
            );
        }
        out.push_str("</ol>");
        out
    }
}

impl View for DiePage {
    fn template(&self) -> Template {
        Template::Die
    }

    fn title(&self) -> &str {
        &self.page_title
    }

    fn body(&self) -> String {
        format!(
            "<p class=\"die\">You rolled a <strong>{}</strong> on a d{}.</p>\n<p><a href=\"/{}\">Roll again</a></p>",
            self.dice.value, self.dice.sides, self.dice.sides
        )
    }
}

impl View for NotFoundPage {
    fn template(&self) -> Template {
        Template::NotFound
    }

    fn title(&self) -> &str {
        &self.page_title
    }

    fn body(&self) -> String {
        "<p>Sorry, but it seems this page does not exist.</p>\n<p><a href=\"/\">Back home</a></p>"
            .to_string()
    }
}

impl View for IssuePage {
    fn template(&self) -> Template {
        Template::Issue
    }

    fn title(&self) -> &str {
        &self.page_title
    }

    fn body(&self) -> String {
        format!(
            "<p class=\"status\">{}</p>\n<p>{}</p>",
            self.status,
            escape(&self.message)
        )
    }
}
