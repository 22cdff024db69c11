//! Search API endpoint.

use std::collections::HashMap;

use axum::extract::{Query, State};

use super::{success, ApiResult};
use crate::mapping::to_summary;
use crate::models::PokemonSummary;
use crate::query::SearchOptions;
use crate::AppState;

/// GET /api/v1/search - Case-insensitive substring match on names and types.
pub async fn search_pokemons(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<Vec<PokemonSummary>> {
    let options = SearchOptions::from_params(&params)?;
    let records = state.repo.search_pokemons(&options).await?;

    tracing::debug!("Search '{}' matched {} pokemons", options.query, records.len());

    let summaries = records
        .iter()
        .map(to_summary)
        .collect::<Result<Vec<_>, _>>()?;
    success(summaries)
}
