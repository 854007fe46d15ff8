use sqlx::PgPool;
use trainer_db::repositories::{CharacterRepo, LessonRepo};

/// Schema creation from an empty database, applied twice.
#[sqlx::test(migrations = false)]
async fn ensure_schema_is_idempotent(pool: PgPool) {
    trainer_db::health_check(&pool).await.unwrap();

    trainer_db::ensure_schema(&pool).await.unwrap();
    trainer_db::ensure_schema(&pool).await.unwrap();

    for table in ["character", "lesson"] {
        let exists: (bool,) = sqlx::query_as(
            "SELECT EXISTS (
                 SELECT 1 FROM information_schema.tables
                 WHERE table_schema = 'public' AND table_name = $1
             )",
        )
        .bind(table)
        .fetch_one(&pool)
        .await
        .unwrap();
        assert!(exists.0, "{table} table should exist");
    }
}

/// `lesson.character_id` must reference `character`.
#[sqlx::test(migrations = "./migrations")]
async fn lesson_references_character(pool: PgPool) {
    let referenced: (String,) = sqlx::query_as(
        "SELECT ccu.table_name::text
         FROM information_schema.table_constraints tc
         JOIN information_schema.constraint_column_usage ccu
           ON tc.constraint_name = ccu.constraint_name
         WHERE tc.table_name = 'lesson' AND tc.constraint_type = 'FOREIGN KEY'",
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(referenced.0, "character");
}

/// A database laid out before display names and icons existed is upgraded
/// in place, keeping its rows.
#[sqlx::test(migrations = false)]
async fn ensure_schema_upgrades_two_column_character_table(pool: PgPool) {
    sqlx::query(
        "CREATE TABLE character (
             character_id SERIAL PRIMARY KEY,
             name VARCHAR UNIQUE NOT NULL
         )",
    )
    .execute(&pool)
    .await
    .unwrap();
    sqlx::query("INSERT INTO character (name) VALUES ('basic')")
        .execute(&pool)
        .await
        .unwrap();

    trainer_db::ensure_schema(&pool).await.unwrap();

    let basic = CharacterRepo::find_by_name(&pool, "basic").await.unwrap();
    assert_eq!(basic.name, "basic");
    assert_eq!(basic.display_name, "");
    assert_eq!(basic.icon, "");

    let lessons = LessonRepo::list_by_character(&pool, basic.id).await.unwrap();
    assert!(lessons.is_empty());
}
