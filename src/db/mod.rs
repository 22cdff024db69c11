//! Database module for SQLite persistence.
//!
//! Every child table references its parent with `ON DELETE CASCADE`, so removing a
//! root row removes its whole fan-out.

mod repository;

pub use repository::*;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;

/// Initialize the database connection pool and create the schema.
pub async fn init_database(db_path: &Path) -> Result<SqlitePool, sqlx::Error> {
    if let Some(parent) = db_path.parent() {
        tokio::fs::create_dir_all(parent).await.ok();
    }

    let db_url = format!("sqlite:{}?mode=rwc", db_path.display());

    let options = SqliteConnectOptions::from_str(&db_url)?
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
        .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    run_migrations(&pool).await?;

    Ok(pool)
}

async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS pokemon (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            base_experience INTEGER NOT NULL,
            height INTEGER NOT NULL,
            weight INTEGER NOT NULL,
            "order" INTEGER NOT NULL,
            is_default INTEGER NOT NULL,
            location_area_encounters TEXT NOT NULL,
            form_name TEXT NOT NULL,
            form_url TEXT NOT NULL,
            species_name TEXT NOT NULL,
            species_url TEXT NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS abilities (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            "pokemonId" INTEGER NOT NULL REFERENCES pokemon(id) ON DELETE CASCADE,
            name TEXT NOT NULL,
            url TEXT NOT NULL,
            is_hidden INTEGER NOT NULL,
            slot INTEGER NOT NULL
        );

        CREATE TABLE IF NOT EXISTS game_indices (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            "pokemonId" INTEGER NOT NULL REFERENCES pokemon(id) ON DELETE CASCADE,
            name TEXT NOT NULL,
            url TEXT NOT NULL,
            value INTEGER NOT NULL
        );

        CREATE TABLE IF NOT EXISTS held_items (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            "pokemonId" INTEGER NOT NULL REFERENCES pokemon(id) ON DELETE CASCADE,
            name TEXT NOT NULL,
            url TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS version_details (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            "itemId" INTEGER NOT NULL REFERENCES held_items(id) ON DELETE CASCADE,
            name TEXT NOT NULL,
            url TEXT NOT NULL,
            rarity INTEGER NOT NULL
        );

        CREATE TABLE IF NOT EXISTS moves (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            "pokemonId" INTEGER NOT NULL REFERENCES pokemon(id) ON DELETE CASCADE,
            name TEXT NOT NULL,
            url TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS version_group_details (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            "moveId" INTEGER NOT NULL REFERENCES moves(id) ON DELETE CASCADE,
            level_learned_at INTEGER NOT NULL,
            move_learn_method_name TEXT NOT NULL,
            move_learn_method_url TEXT NOT NULL,
            version_group_name TEXT NOT NULL,
            version_group_url TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS sprites (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            "pokemonId" INTEGER NOT NULL REFERENCES pokemon(id) ON DELETE CASCADE,
            front_default TEXT,
            front_female TEXT,
            front_shiny TEXT,
            front_shiny_female TEXT,
            back_default TEXT,
            back_female TEXT,
            back_shiny TEXT,
            back_shiny_female TEXT,
            title TEXT,
            is_other INTEGER NOT NULL DEFAULT 0,
            is_animated INTEGER NOT NULL DEFAULT 0,
            is_icons INTEGER NOT NULL DEFAULT 0
        );

        CREATE TABLE IF NOT EXISTS stats (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            "pokemonId" INTEGER NOT NULL REFERENCES pokemon(id) ON DELETE CASCADE,
            name TEXT NOT NULL,
            url TEXT NOT NULL,
            base_stat INTEGER NOT NULL,
            effort INTEGER NOT NULL
        );

        CREATE TABLE IF NOT EXISTS types (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            "pokemonId" INTEGER NOT NULL REFERENCES pokemon(id) ON DELETE CASCADE,
            name TEXT NOT NULL,
            url TEXT NOT NULL,
            slot INTEGER NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE,
            email TEXT NOT NULL UNIQUE,
            password TEXT NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS teams (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            pokemons TEXT NOT NULL DEFAULT '[]',
            "userId" INTEGER REFERENCES users(id) ON DELETE SET NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_pokemon_form_name ON pokemon(form_name);
        CREATE INDEX IF NOT EXISTS idx_abilities_pokemon ON abilities("pokemonId");
        CREATE INDEX IF NOT EXISTS idx_game_indices_pokemon ON game_indices("pokemonId");
        CREATE INDEX IF NOT EXISTS idx_held_items_pokemon ON held_items("pokemonId");
        CREATE INDEX IF NOT EXISTS idx_version_details_item ON version_details("itemId");
        CREATE INDEX IF NOT EXISTS idx_moves_pokemon ON moves("pokemonId");
        CREATE INDEX IF NOT EXISTS idx_version_group_details_move
            ON version_group_details("moveId");
        CREATE INDEX IF NOT EXISTS idx_sprites_pokemon ON sprites("pokemonId");
        CREATE INDEX IF NOT EXISTS idx_stats_pokemon ON stats("pokemonId");
        CREATE INDEX IF NOT EXISTS idx_types_pokemon ON types("pokemonId");
        CREATE INDEX IF NOT EXISTS idx_teams_user ON teams("userId");
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
