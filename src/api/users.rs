//! User API endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use super::{body, created, success, ApiResult};
use crate::auth::{hash_password, verify_password};
use crate::errors::{parse_id, AppError};
use crate::models::{CreateUserRequest, LoginRequest, User};
use crate::AppState;

/// GET /api/v1/users - List all users.
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Vec<User>> {
    success(state.repo.list_users().await?)
}

/// GET /api/v1/users/:id - Get a single user.
pub async fn get_user(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<User> {
    let id = parse_id(&id)?;

    match state.repo.get_user(id).await? {
        Some(user) => success(user),
        None => Err(AppError::NotFound(format!("User {} not found", id))),
    }
}

/// POST /api/v1/users - Register a user.
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> ApiResult<User> {
    let request = body(payload)?;
    request.validate()?;

    let hash = hash_password(request.password.clone()).await?;
    let user = state.repo.create_user(&request, &hash).await?;

    tracing::info!("Registered user {} ({})", user.id, user.name);
    created(user)
}

/// POST /api/v1/users/login - Check a name or email against a password.
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<User> {
    let request = body(payload)?;
    request.validate()?;

    let Some((user, hash)) = state.repo.find_credentials(&request.identifier).await? else {
        return Err(AppError::BadRequest(format!(
            "No user named '{}'",
            request.identifier
        )));
    };

    if !verify_password(hash, request.password).await? {
        tracing::warn!("Failed login for user {}", user.id);
        return Err(AppError::Unauthorized("Wrong password".to_string()));
    }

    success(user)
}

/// DELETE /api/v1/users/:id - Delete a user. Their teams lose the owner.
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(&id)?;
    state.repo.delete_user(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
