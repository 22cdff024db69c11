//! Team model.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Maximum number of Pokémon a team may hold.
pub const MAX_TEAM_SIZE: usize = 6;

/// A named group of up to six Pokémon identities.
///
/// Member ids are plain integers; they are not checked against stored Pokémon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: i64,
    pub name: String,
    pub pokemons: Vec<i64>,
    pub user_id: Option<i64>,
}

/// Request body for creating a new team.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTeamRequest {
    pub name: String,
    #[serde(default)]
    pub user_id: Option<i64>,
}

impl CreateTeamRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::Validation("Team name is required".to_string()));
        }
        Ok(())
    }
}

/// Request body replacing a team's members.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTeamRequest {
    pub pokemons: Vec<i64>,
}

impl UpdateTeamRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.pokemons.len() > MAX_TEAM_SIZE {
            return Err(AppError::Validation(format!(
                "A team holds at most {} pokemons, got {}",
                MAX_TEAM_SIZE,
                self.pokemons.len()
            )));
        }
        Ok(())
    }
}
