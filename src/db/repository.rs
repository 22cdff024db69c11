//! Database repository for CRUD operations.
//!
//! A Pokémon document is written in three phases (root, children, grandchildren)
//! inside one transaction; dropping the transaction on any error rolls all of it back.

use chrono::Utc;
use sqlx::sqlite::{SqliteConnection, SqliteRow};
use sqlx::{Row, SqlitePool};

use crate::config::SpriteTitlePolicy;
use crate::errors::AppError;
use crate::mapping::{
    extract_details, extract_relations, group_held_items, group_moves, root_from_document,
};
use crate::models::{
    AbilityRow, CreateTeamRequest, CreateUserRequest, Details, GameIndexRow, HeldItemRow,
    ItemVersionDetailRow, MoveRow, MoveVersionDetailRow, NameAndUrl, NewPokemon,
    PokemonDocument, PokemonRecord, PokemonRow, Relations, SpriteMap, SpriteRow, StatRow, Team,
    TypeRow, User,
};
use crate::query::{ListOptions, SearchOptions};

const POKEMON_COLUMNS: &str = r#"p.id, p.base_experience, p.height, p.weight, p."order",
    p.is_default, p.location_area_encounters, p.form_name, p.form_url,
    p.species_name, p.species_url"#;

const SPRITE_COLUMNS: &str = r#""pokemonId", front_default, front_female, front_shiny,
    front_shiny_female, back_default, back_female, back_shiny, back_shiny_female,
    title, is_other, is_animated, is_icons"#;

/// Database repository for all data operations.
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // ==================== POKEMON WRITES ====================

    /// Store one document and return the identity of its root row.
    pub async fn create_pokemon(
        &self,
        doc: &PokemonDocument,
        titles: SpriteTitlePolicy,
    ) -> Result<i64, AppError> {
        let root = root_from_document(doc)?;

        let mut tx = self.pool.begin().await?;

        let id = insert_root(&mut *tx, &root).await?;
        let relations = extract_relations(doc, id, titles);
        let (item_ids, move_ids) = insert_relations(&mut *tx, &relations).await?;
        let details = extract_details(doc, &item_ids, &move_ids)?;
        insert_details(&mut *tx, &details).await?;

        tx.commit().await?;

        tracing::debug!(
            "Stored {} (source id {:?}) as pokemon {} ({} sprites, {} moves)",
            root.form.name,
            doc.id,
            id,
            relations.sprites.len(),
            move_ids.len()
        );
        Ok(id)
    }

    /// Store documents one after another, one transaction each.
    ///
    /// Every document is validated before the first write so a malformed entry
    /// rejects the whole batch.
    pub async fn create_pokemons(
        &self,
        docs: &[PokemonDocument],
        titles: SpriteTitlePolicy,
    ) -> Result<Vec<i64>, AppError> {
        for doc in docs {
            doc.validate()?;
        }

        let mut ids = Vec::with_capacity(docs.len());
        for doc in docs {
            ids.push(self.create_pokemon(doc, titles).await?);
        }
        Ok(ids)
    }

    /// Remove every Pokémon; children go with them through the cascades.
    pub async fn delete_all_pokemons(&self) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM pokemon")
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    // ==================== POKEMON READS ====================

    pub async fn count_pokemons(&self) -> Result<u64, AppError> {
        let row = sqlx::query("SELECT COUNT(*) AS total FROM pokemon")
            .fetch_one(&self.pool)
            .await?;
        let total: i64 = row.get("total");
        Ok(u64::try_from(total).unwrap_or(0))
    }

    /// Sorted window of records with sprites and types attached.
    pub async fn list_pokemons(
        &self,
        options: &ListOptions,
    ) -> Result<Vec<PokemonRecord>, AppError> {
        // Column and direction come from closed enums, never from raw input.
        let sql = format!(
            "SELECT {} FROM pokemon p ORDER BY p.{} {}, p.id {} LIMIT ? OFFSET ?",
            POKEMON_COLUMNS,
            options.sort.by.column(),
            options.sort.order.keyword(),
            options.sort.order.keyword(),
        );

        let mut tx = self.pool.begin().await?;

        let rows = sqlx::query(&sql)
            .bind(options.limit.map(i64::from).unwrap_or(-1))
            .bind(i64::from(options.offset))
            .fetch_all(&mut *tx)
            .await?;
        let records =
            with_summary_relations(&mut *tx, rows.iter().map(pokemon_from_row).collect()).await?;

        tx.commit().await?;
        Ok(records)
    }

    /// Records whose public name or any type name contains the query, by identity.
    pub async fn search_pokemons(
        &self,
        options: &SearchOptions,
    ) -> Result<Vec<PokemonRecord>, AppError> {
        if options.limit == Some(0) {
            return Ok(Vec::new());
        }

        let sql = format!(
            r#"SELECT {} FROM pokemon p
               WHERE LOWER(p.form_name) LIKE LOWER(?1) ESCAPE '\'
                  OR EXISTS (
                      SELECT 1 FROM types t
                      WHERE t."pokemonId" = p.id AND LOWER(t.name) LIKE LOWER(?1) ESCAPE '\'
                  )
               ORDER BY p.id
               LIMIT ?2"#,
            POKEMON_COLUMNS
        );

        let mut tx = self.pool.begin().await?;

        let rows = sqlx::query(&sql)
            .bind(options.like_pattern())
            .bind(options.limit.map(i64::from).unwrap_or(-1))
            .fetch_all(&mut *tx)
            .await?;
        let records =
            with_summary_relations(&mut *tx, rows.iter().map(pokemon_from_row).collect()).await?;

        tx.commit().await?;
        Ok(records)
    }

    /// Fully reassembled record, or `None` when no root row has this identity.
    ///
    /// Every query runs in one read transaction so a concurrent delete cannot
    /// leave the root without its children.
    pub async fn get_pokemon(&self, id: i64) -> Result<Option<PokemonRecord>, AppError> {
        let mut tx = self.pool.begin().await?;

        let sql = format!("SELECT {} FROM pokemon p WHERE p.id = ?", POKEMON_COLUMNS);
        let Some(row) = sqlx::query(&sql).bind(id).fetch_optional(&mut *tx).await? else {
            return Ok(None);
        };

        let mut record = PokemonRecord::new(pokemon_from_row(&row));

        record.abilities = sqlx::query(
            r#"SELECT "pokemonId", name, url, is_hidden, slot FROM abilities
               WHERE "pokemonId" = ? ORDER BY id"#,
        )
        .bind(id)
        .fetch_all(&mut *tx)
        .await?
        .iter()
        .map(ability_from_row)
        .collect();

        record.game_indices = sqlx::query(
            r#"SELECT "pokemonId", name, url, value FROM game_indices
               WHERE "pokemonId" = ? ORDER BY id"#,
        )
        .bind(id)
        .fetch_all(&mut *tx)
        .await?
        .iter()
        .map(game_index_from_row)
        .collect();

        let items: Vec<(i64, HeldItemRow)> = sqlx::query(
            r#"SELECT id, "pokemonId", name, url FROM held_items
               WHERE "pokemonId" = ? ORDER BY id"#,
        )
        .bind(id)
        .fetch_all(&mut *tx)
        .await?
        .iter()
        .map(|row| (row.get("id"), held_item_from_row(row)))
        .collect();
        let item_details: Vec<ItemVersionDetailRow> = sqlx::query(
            r#"SELECT d."itemId", d.name, d.url, d.rarity FROM version_details d
               JOIN held_items h ON h.id = d."itemId"
               WHERE h."pokemonId" = ? ORDER BY d.id"#,
        )
        .bind(id)
        .fetch_all(&mut *tx)
        .await?
        .iter()
        .map(item_detail_from_row)
        .collect();
        record.held_items = group_held_items(items, item_details);

        let moves: Vec<(i64, MoveRow)> = sqlx::query(
            r#"SELECT id, "pokemonId", name, url FROM moves
               WHERE "pokemonId" = ? ORDER BY id"#,
        )
        .bind(id)
        .fetch_all(&mut *tx)
        .await?
        .iter()
        .map(|row| (row.get("id"), move_from_row(row)))
        .collect();
        let move_details: Vec<MoveVersionDetailRow> = sqlx::query(
            r#"SELECT d."moveId", d.level_learned_at,
                      d.move_learn_method_name, d.move_learn_method_url,
                      d.version_group_name, d.version_group_url
               FROM version_group_details d
               JOIN moves m ON m.id = d."moveId"
               WHERE m."pokemonId" = ? ORDER BY d.id"#,
        )
        .bind(id)
        .fetch_all(&mut *tx)
        .await?
        .iter()
        .map(move_detail_from_row)
        .collect();
        record.moves = group_moves(moves, move_details);

        record.sprites = sprites_for(&mut *tx, id).await?;
        record.stats = sqlx::query(
            r#"SELECT "pokemonId", name, url, base_stat, effort FROM stats
               WHERE "pokemonId" = ? ORDER BY id"#,
        )
        .bind(id)
        .fetch_all(&mut *tx)
        .await?
        .iter()
        .map(stat_from_row)
        .collect();
        record.types = types_for(&mut *tx, id).await?;

        tx.commit().await?;
        Ok(Some(record))
    }

    // ==================== TEAM OPERATIONS ====================

    pub async fn list_teams(&self) -> Result<Vec<Team>, AppError> {
        let rows = sqlx::query(r#"SELECT id, name, pokemons, "userId" FROM teams ORDER BY id"#)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.iter().map(team_from_row).collect())
    }

    pub async fn get_team(&self, id: i64) -> Result<Option<Team>, AppError> {
        let row = sqlx::query(r#"SELECT id, name, pokemons, "userId" FROM teams WHERE id = ?"#)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.as_ref().map(team_from_row))
    }

    pub async fn create_team(&self, request: &CreateTeamRequest) -> Result<Team, AppError> {
        if let Some(user_id) = request.user_id {
            if self.get_user(user_id).await?.is_none() {
                return Err(AppError::Validation(format!("User {} not found", user_id)));
            }
        }

        let result =
            sqlx::query(r#"INSERT INTO teams (name, pokemons, "userId") VALUES (?, '[]', ?)"#)
                .bind(&request.name)
                .bind(request.user_id)
                .execute(&self.pool)
                .await?;

        Ok(Team {
            id: result.last_insert_rowid(),
            name: request.name.clone(),
            pokemons: Vec::new(),
            user_id: request.user_id,
        })
    }

    /// Replace a team's member list.
    pub async fn set_team_pokemons(&self, id: i64, pokemons: &[i64]) -> Result<Team, AppError> {
        let pokemons_json = serde_json::to_string(pokemons)?;

        let result = sqlx::query("UPDATE teams SET pokemons = ? WHERE id = ?")
            .bind(&pokemons_json)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Team {} not found", id)));
        }

        self.get_team(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Team {} not found", id)))
    }

    pub async fn delete_team(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM teams WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Team {} not found", id)));
        }
        Ok(())
    }

    // ==================== USER OPERATIONS ====================

    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        let rows =
            sqlx::query("SELECT id, name, email, created_at, updated_at FROM users ORDER BY id")
                .fetch_all(&self.pool)
                .await?;
        Ok(rows.iter().map(user_from_row).collect())
    }

    pub async fn get_user(&self, id: i64) -> Result<Option<User>, AppError> {
        let row = sqlx::query(
            "SELECT id, name, email, created_at, updated_at FROM users WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.as_ref().map(user_from_row))
    }

    /// Insert a user with an already hashed password.
    pub async fn create_user(
        &self,
        request: &CreateUserRequest,
        password_hash: &str,
    ) -> Result<User, AppError> {
        let now = Utc::now().to_rfc3339();
        let inserted = sqlx::query(
            "INSERT INTO users (name, email, password, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&request.name)
        .bind(&request.email)
        .bind(password_hash)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await;

        // The UNIQUE constraints on name and email are the only uniqueness check.
        let result = match inserted {
            Ok(result) => result,
            Err(sqlx::Error::Database(err)) if err.is_unique_violation() => {
                return Err(AppError::Validation(
                    "name or email is already registered".to_string(),
                ));
            }
            Err(err) => return Err(err.into()),
        };

        Ok(User {
            id: result.last_insert_rowid(),
            name: request.name.clone(),
            email: request.email.clone(),
            created_at: now.clone(),
            updated_at: now,
        })
    }

    /// Look a user up by name or email together with the stored password hash.
    pub async fn find_credentials(
        &self,
        identifier: &str,
    ) -> Result<Option<(User, String)>, AppError> {
        let row = sqlx::query(
            "SELECT id, name, email, password, created_at, updated_at FROM users
             WHERE name = ? OR email = ? ORDER BY id LIMIT 1",
        )
        .bind(identifier)
        .bind(identifier)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|row| (user_from_row(&row), row.get("password"))))
    }

    pub async fn delete_user(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("User {} not found", id)));
        }
        Ok(())
    }
}

// ==================== READ HELPERS ====================

/// Attach the sprites and types a summary needs.
async fn with_summary_relations(
    conn: &mut SqliteConnection,
    pokemons: Vec<PokemonRow>,
) -> Result<Vec<PokemonRecord>, AppError> {
    let mut records = Vec::with_capacity(pokemons.len());
    for pokemon in pokemons {
        let id = pokemon.id;
        let mut record = PokemonRecord::new(pokemon);
        record.sprites = sprites_for(&mut *conn, id).await?;
        record.types = types_for(&mut *conn, id).await?;
        records.push(record);
    }
    Ok(records)
}

async fn sprites_for(
    conn: &mut SqliteConnection,
    pokemon_id: i64,
) -> Result<Vec<SpriteRow>, AppError> {
    let sql = format!(
        r#"SELECT {} FROM sprites WHERE "pokemonId" = ? ORDER BY id"#,
        SPRITE_COLUMNS
    );
    let rows = sqlx::query(&sql).bind(pokemon_id).fetch_all(conn).await?;
    Ok(rows.iter().map(sprite_from_row).collect())
}

async fn types_for(
    conn: &mut SqliteConnection,
    pokemon_id: i64,
) -> Result<Vec<TypeRow>, AppError> {
    let rows = sqlx::query(
        r#"SELECT "pokemonId", name, url, slot FROM types
           WHERE "pokemonId" = ? ORDER BY id"#,
    )
    .bind(pokemon_id)
    .fetch_all(conn)
    .await?;
    Ok(rows.iter().map(type_from_row).collect())
}

// ==================== WRITE PHASES ====================

async fn insert_root(conn: &mut SqliteConnection, root: &NewPokemon) -> Result<i64, AppError> {
    let result = sqlx::query(
        r#"INSERT INTO pokemon (
            base_experience, height, weight, "order", is_default, location_area_encounters,
            form_name, form_url, species_name, species_url
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)"#,
    )
    .bind(root.base_experience)
    .bind(root.height)
    .bind(root.weight)
    .bind(root.order)
    .bind(root.is_default as i32)
    .bind(&root.location_area_encounters)
    .bind(&root.form.name)
    .bind(&root.form.url)
    .bind(&root.species.name)
    .bind(&root.species.url)
    .execute(&mut *conn)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Insert first-level children. Returns the identities given to held items and moves,
/// in the order the rows were supplied.
async fn insert_relations(
    conn: &mut SqliteConnection,
    relations: &Relations,
) -> Result<(Vec<i64>, Vec<i64>), AppError> {
    for a in &relations.abilities {
        sqlx::query(
            r#"INSERT INTO abilities ("pokemonId", name, url, is_hidden, slot)
               VALUES (?, ?, ?, ?, ?)"#,
        )
        .bind(a.pokemon_id)
        .bind(&a.ability.name)
        .bind(&a.ability.url)
        .bind(a.is_hidden as i32)
        .bind(a.slot)
        .execute(&mut *conn)
        .await?;
    }

    for g in &relations.game_indices {
        sqlx::query(
            r#"INSERT INTO game_indices ("pokemonId", name, url, value) VALUES (?, ?, ?, ?)"#,
        )
        .bind(g.pokemon_id)
        .bind(&g.version.name)
        .bind(&g.version.url)
        .bind(g.value)
        .execute(&mut *conn)
        .await?;
    }

    let mut item_ids = Vec::with_capacity(relations.held_items.len());
    for h in &relations.held_items {
        let result =
            sqlx::query(r#"INSERT INTO held_items ("pokemonId", name, url) VALUES (?, ?, ?)"#)
                .bind(h.pokemon_id)
                .bind(&h.item.name)
                .bind(&h.item.url)
                .execute(&mut *conn)
                .await?;
        item_ids.push(result.last_insert_rowid());
    }

    let mut move_ids = Vec::with_capacity(relations.moves.len());
    for m in &relations.moves {
        let result = sqlx::query(r#"INSERT INTO moves ("pokemonId", name, url) VALUES (?, ?, ?)"#)
            .bind(m.pokemon_id)
            .bind(&m.move_.name)
            .bind(&m.move_.url)
            .execute(&mut *conn)
            .await?;
        move_ids.push(result.last_insert_rowid());
    }

    for s in &relations.sprites {
        let sql = format!(
            "INSERT INTO sprites ({}) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
            SPRITE_COLUMNS
        );
        sqlx::query(&sql)
            .bind(s.pokemon_id)
            .bind(&s.sprites.front_default)
            .bind(&s.sprites.front_female)
            .bind(&s.sprites.front_shiny)
            .bind(&s.sprites.front_shiny_female)
            .bind(&s.sprites.back_default)
            .bind(&s.sprites.back_female)
            .bind(&s.sprites.back_shiny)
            .bind(&s.sprites.back_shiny_female)
            .bind(&s.title)
            .bind(s.is_other as i32)
            .bind(s.is_animated as i32)
            .bind(s.is_icons as i32)
            .execute(&mut *conn)
            .await?;
    }

    for s in &relations.stats {
        sqlx::query(
            r#"INSERT INTO stats ("pokemonId", name, url, base_stat, effort)
               VALUES (?, ?, ?, ?, ?)"#,
        )
        .bind(s.pokemon_id)
        .bind(&s.stat.name)
        .bind(&s.stat.url)
        .bind(s.base_stat)
        .bind(s.effort)
        .execute(&mut *conn)
        .await?;
    }

    for t in &relations.types {
        sqlx::query(r#"INSERT INTO types ("pokemonId", name, url, slot) VALUES (?, ?, ?, ?)"#)
            .bind(t.pokemon_id)
            .bind(&t.kind.name)
            .bind(&t.kind.url)
            .bind(t.slot)
            .execute(&mut *conn)
            .await?;
    }

    Ok((item_ids, move_ids))
}

async fn insert_details(conn: &mut SqliteConnection, details: &Details) -> Result<(), AppError> {
    for d in &details.item_version_details {
        sqlx::query(
            r#"INSERT INTO version_details ("itemId", name, url, rarity) VALUES (?, ?, ?, ?)"#,
        )
        .bind(d.item_id)
        .bind(&d.version.name)
        .bind(&d.version.url)
        .bind(d.rarity)
        .execute(&mut *conn)
        .await?;
    }

    for d in &details.move_version_details {
        sqlx::query(
            r#"INSERT INTO version_group_details (
                "moveId", level_learned_at, move_learn_method_name, move_learn_method_url,
                version_group_name, version_group_url
            ) VALUES (?, ?, ?, ?, ?, ?)"#,
        )
        .bind(d.move_id)
        .bind(d.level_learned_at)
        .bind(&d.move_learn_method.name)
        .bind(&d.move_learn_method.url)
        .bind(&d.version_group.name)
        .bind(&d.version_group.url)
        .execute(&mut *conn)
        .await?;
    }

    Ok(())
}

// Helper functions for row conversion

fn name_and_url(row: &SqliteRow, name: &str, url: &str) -> NameAndUrl {
    NameAndUrl {
        name: row.get(name),
        url: row.get(url),
    }
}

fn flag(row: &SqliteRow, column: &str) -> bool {
    let value: i32 = row.get(column);
    value != 0
}

fn pokemon_from_row(row: &SqliteRow) -> PokemonRow {
    PokemonRow {
        id: row.get("id"),
        base_experience: row.get("base_experience"),
        height: row.get("height"),
        weight: row.get("weight"),
        order: row.get("order"),
        is_default: flag(row, "is_default"),
        location_area_encounters: row.get("location_area_encounters"),
        form: name_and_url(row, "form_name", "form_url"),
        species: name_and_url(row, "species_name", "species_url"),
    }
}

fn ability_from_row(row: &SqliteRow) -> AbilityRow {
    AbilityRow {
        pokemon_id: row.get("pokemonId"),
        ability: name_and_url(row, "name", "url"),
        is_hidden: flag(row, "is_hidden"),
        slot: row.get("slot"),
    }
}

fn game_index_from_row(row: &SqliteRow) -> GameIndexRow {
    GameIndexRow {
        pokemon_id: row.get("pokemonId"),
        version: name_and_url(row, "name", "url"),
        value: row.get("value"),
    }
}

fn held_item_from_row(row: &SqliteRow) -> HeldItemRow {
    HeldItemRow {
        pokemon_id: row.get("pokemonId"),
        item: name_and_url(row, "name", "url"),
    }
}

fn item_detail_from_row(row: &SqliteRow) -> ItemVersionDetailRow {
    ItemVersionDetailRow {
        item_id: row.get("itemId"),
        version: name_and_url(row, "name", "url"),
        rarity: row.get("rarity"),
    }
}

fn move_from_row(row: &SqliteRow) -> MoveRow {
    MoveRow {
        pokemon_id: row.get("pokemonId"),
        move_: name_and_url(row, "name", "url"),
    }
}

fn move_detail_from_row(row: &SqliteRow) -> MoveVersionDetailRow {
    MoveVersionDetailRow {
        move_id: row.get("moveId"),
        level_learned_at: row.get("level_learned_at"),
        move_learn_method: name_and_url(row, "move_learn_method_name", "move_learn_method_url"),
        version_group: name_and_url(row, "version_group_name", "version_group_url"),
    }
}

fn sprite_from_row(row: &SqliteRow) -> SpriteRow {
    SpriteRow {
        pokemon_id: row.get("pokemonId"),
        sprites: SpriteMap {
            front_default: row.get("front_default"),
            front_female: row.get("front_female"),
            front_shiny: row.get("front_shiny"),
            front_shiny_female: row.get("front_shiny_female"),
            back_default: row.get("back_default"),
            back_female: row.get("back_female"),
            back_shiny: row.get("back_shiny"),
            back_shiny_female: row.get("back_shiny_female"),
        },
        title: row.get("title"),
        is_other: flag(row, "is_other"),
        is_animated: flag(row, "is_animated"),
        is_icons: flag(row, "is_icons"),
    }
}

fn stat_from_row(row: &SqliteRow) -> StatRow {
    StatRow {
        pokemon_id: row.get("pokemonId"),
        stat: name_and_url(row, "name", "url"),
        base_stat: row.get("base_stat"),
        effort: row.get("effort"),
    }
}

fn type_from_row(row: &SqliteRow) -> TypeRow {
    TypeRow {
        pokemon_id: row.get("pokemonId"),
        kind: name_and_url(row, "name", "url"),
        slot: row.get("slot"),
    }
}

fn team_from_row(row: &SqliteRow) -> Team {
    let pokemons: String = row.get("pokemons");
    Team {
        id: row.get("id"),
        name: row.get("name"),
        pokemons: parse_id_array(&pokemons),
        user_id: row.get("userId"),
    }
}

fn user_from_row(row: &SqliteRow) -> User {
    User {
        id: row.get("id"),
        name: row.get("name"),
        email: row.get("email"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

fn parse_id_array(s: &str) -> Vec<i64> {
    serde_json::from_str(s).unwrap_or_default()
}
