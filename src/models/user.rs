//! User model.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

const NAME_MIN: usize = 4;
const NAME_MAX: usize = 12;
const PASSWORD_MIN: usize = 8;

/// A registered user. The password hash is never part of this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Request body for registering a user.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl CreateUserRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        let name_len = self.name.chars().count();
        if !(NAME_MIN..=NAME_MAX).contains(&name_len) {
            return Err(AppError::Validation(format!(
                "name must be between {} and {} characters",
                NAME_MIN, NAME_MAX
            )));
        }
        if !is_email(&self.email) {
            return Err(AppError::Validation("email must be an email".to_string()));
        }
        if !is_strong_password(&self.password) {
            return Err(AppError::Validation(format!(
                "password must have at least {} characters with a lowercase letter, \
                 an uppercase letter, a number and a symbol",
                PASSWORD_MIN
            )));
        }
        Ok(())
    }
}

/// Request body for checking credentials. `identifier` is a name or an email.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub identifier: String,
    pub password: String,
}

impl LoginRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.identifier.trim().is_empty() || self.password.is_empty() {
            return Err(AppError::Validation(
                "identifier and password are required".to_string(),
            ));
        }
        Ok(())
    }
}

fn is_email(s: &str) -> bool {
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !s.chars().any(char::is_whitespace)
        && domain.split('.').count() >= 2
        && domain.split('.').all(|label| !label.is_empty())
}

fn is_strong_password(s: &str) -> bool {
    s.chars().count() >= PASSWORD_MIN
        && s.chars().any(|c| c.is_lowercase())
        && s.chars().any(|c| c.is_uppercase())
        && s.chars().any(|c| c.is_ascii_digit())
        && s.chars().any(|c| !c.is_alphanumeric() && !c.is_whitespace())
}
