//! Team API endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use super::{body, created, success, ApiResult};
use crate::errors::{parse_id, AppError};
use crate::models::{CreateTeamRequest, Team, UpdateTeamRequest};
use crate::AppState;

/// GET /api/v1/teams - List all teams.
pub async fn list_teams(State(state): State<AppState>) -> ApiResult<Vec<Team>> {
    success(state.repo.list_teams().await?)
}

/// GET /api/v1/teams/:id - Get a single team.
pub async fn get_team(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Team> {
    let id = parse_id(&id)?;

    match state.repo.get_team(id).await? {
        Some(team) => success(team),
        None => Err(AppError::NotFound(format!("Team {} not found", id))),
    }
}

/// POST /api/v1/teams - Create an empty team.
pub async fn create_team(
    State(state): State<AppState>,
    payload: Result<Json<CreateTeamRequest>, JsonRejection>,
) -> ApiResult<Team> {
    let request = body(payload)?;
    request.validate()?;

    let team = state.repo.create_team(&request).await?;
    tracing::info!("Created team {} ({})", team.id, team.name);
    created(team)
}

/// POST /api/v1/teams/:id - Replace the team's members.
pub async fn update_team(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateTeamRequest>, JsonRejection>,
) -> ApiResult<Team> {
    let id = parse_id(&id)?;
    let request = body(payload)?;
    request.validate()?;

    success(state.repo.set_team_pokemons(id, &request.pokemons).await?)
}

/// DELETE /api/v1/teams/:id - Delete a team.
pub async fn delete_team(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(&id)?;
    state.repo.delete_team(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
