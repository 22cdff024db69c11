//! Pokémon API endpoints.

use std::collections::HashMap;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};

use super::{body, created, success, ApiResult};
use crate::errors::{parse_id, AppError};
use crate::mapping::{to_details, to_summary};
use crate::models::{
    ImportPayload, ImportSummary, PokemonDetails, PokemonPage, PokemonSummary,
};
use crate::query::{paginate, ListOptions};
use crate::AppState;

const V2_POKEMONS_PATH: &str = "/api/v2/pokemons";

/// GET /api/v1/pokemons - Sorted listing, unbounded unless `limit` is given.
pub async fn list_pokemons(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<Vec<PokemonSummary>> {
    let options = ListOptions::from_params(&params)?;
    let records = state.repo.list_pokemons(&options).await?;

    let summaries = records
        .iter()
        .map(to_summary)
        .collect::<Result<Vec<_>, _>>()?;
    success(summaries)
}

/// GET /api/v2/pokemons - Paginated listing with page metadata.
pub async fn list_pokemons_page(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<PokemonPage> {
    let options = ListOptions::from_params(&params)?;
    let page_size = options.limit.unwrap_or(state.config.page_size);
    let window = ListOptions {
        limit: Some(page_size),
        ..options
    };

    let total = state.repo.count_pokemons().await?;
    let records = state.repo.list_pokemons(&window).await?;

    let data = records
        .iter()
        .map(to_summary)
        .collect::<Result<Vec<_>, _>>()?;
    let metadata = paginate(total, &window, page_size, V2_POKEMONS_PATH);

    success(PokemonPage { data, metadata })
}

/// GET /api/v1/pokemons/:id - Full detail shape.
pub async fn get_pokemon(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<PokemonDetails> {
    let id = parse_id(&id)?;

    let record = state
        .repo
        .get_pokemon(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Pokemon {} not found", id)))?;

    success(to_details(&record)?)
}

/// POST /api/v1/pokemons - Import one document or an array of them.
pub async fn create_pokemons(
    State(state): State<AppState>,
    payload: Result<Json<ImportPayload>, JsonRejection>,
) -> ApiResult<ImportSummary> {
    let docs = body(payload)?.into_documents();

    let ids = state
        .repo
        .create_pokemons(&docs, state.config.sprite_titles)
        .await?;

    tracing::info!("Imported {} pokemons: {:?}", ids.len(), ids);
    created(ImportSummary {
        count: ids.len(),
        ids,
    })
}

/// DELETE /api/v1/pokemons - Remove every Pokémon.
pub async fn delete_pokemons(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    let removed = state.repo.delete_all_pokemons().await?;
    tracing::info!("Deleted {} pokemons", removed);
    Ok(StatusCode::NO_CONTENT)
}
