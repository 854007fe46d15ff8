//! View model composition.
//!
//! Pure functions: catalog rows and static copy in, view models out.

use trainer_core::dice::Dice;
use trainer_core::error::CoreError;
use trainer_db::models::character::Character;
use trainer_db::models::lesson::Lesson;

use super::pages::{CharacterTrainingPage, DiePage, LessonPage, Page, PageContent, Todo, TodoPageData};
use super::Template;

/// Name of the character whose lessons make up basic training.
pub const BASIC_CHARACTER: &str = "basic";

pub const CHARACTER_SAVED_MESSAGE: &str = "Successfully Saved the new character to the database!";

pub fn home() -> Page {
    Page {
        page_title: "Home".to_string(),
        template: Template::Index,
    }
}

pub fn admin() -> Page {
    Page {
        page_title: "Admin".to_string(),
        template: Template::Admin,
    }
}

pub fn todo_list() -> TodoPageData {
    let todos = [
        ("Project Setup", true),
        ("Setup CI", false),
        ("Setup CD", true),
        ("Make Test Cases", false),
        ("Flushout Navbar", false),
        ("Create 404", true),
        ("Add How to Use Page", false),
        ("Make a logo", false),
    ]
    .into_iter()
    .map(|(title, done)| Todo {
        title: title.to_string(),
        done,
    })
    .collect();

    TodoPageData {
        page_title: "TODO List".to_string(),
        list_title: "My TODO List".to_string(),
        todos,
    }
}

/// The fixed lesson served at `/lesson` and `/lesson/lesson1`.
pub fn static_lesson() -> LessonPage {
    LessonPage {
        page_title: "Lesson".to_string(),
        lesson: Lesson {
            id: 0,
            character_id: 0,
            name: "The Short Hop".to_string(),
            number: 1,
            gif: "https://ftp.crabbymonkey.org/smash/smash_gifs/smash_examples/example_short_hop.gif"
                .to_string(),
            description: "Tap jump instead of holding it to leave the ground for only a few \
                          frames. A short hop keeps aerials low, lands sooner, and is the \
                          building block for almost every approach."
                .to_string(),
            learning_time_seconds: 0,
            training_time_seconds: 0,
            test_time_seconds: 0,
        },
    }
}

/// Training list for basic training.
pub fn basic_training(character: Character, lessons: Vec<Lesson>) -> CharacterTrainingPage {
    CharacterTrainingPage {
        page_title: "Basic Training".to_string(),
        character,
        lessons,
    }
}

/// Training list for any character.
pub fn training_list(character: Character, lessons: Vec<Lesson>) -> CharacterTrainingPage {
    let page_title = format!("{} Training", heading_name(&character));
    CharacterTrainingPage {
        page_title,
        character,
        lessons,
    }
}

/// Pick lesson `number` out of `character`'s lessons.
pub fn lesson_detail(
    character: &Character,
    lessons: Vec<Lesson>,
    number: i32,
) -> Result<LessonPage, CoreError> {
    let lesson = lessons
        .into_iter()
        .find(|l| l.number == number)
        .ok_or_else(|| CoreError::not_found("Lesson", format!("{}/{number}", character.name)))?;

    Ok(LessonPage {
        page_title: format!("{} - {}", heading_name(character), lesson.name),
        lesson,
    })
}

pub fn database_dump(lines: Vec<String>) -> PageContent {
    PageContent {
        page_title: "Database".to_string(),
        page_content: lines,
    }
}

pub fn character_added() -> PageContent {
    PageContent {
        page_title: "Database".to_string(),
        page_content: vec![CHARACTER_SAVED_MESSAGE.to_string()],
    }
}

pub fn die(dice: Dice) -> DiePage {
    DiePage {
        page_title: format!("d{}", dice.sides),
        dice,
    }
}

fn heading_name(character: &Character) -> &str {
    if character.display_name.is_empty() {
        &character.name
    } else {
        &character.display_name
    }
}
