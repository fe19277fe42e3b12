//! DTOs for user endpoints.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::entities::{User, UserFields};

/// Request body for creating or updating a user.
///
/// Any `id` sent by the client is ignored. `nom` is accepted as an alias of
/// `name` for older clients.
#[derive(Debug, Deserialize, Validate)]
pub struct UserPayload {
    #[serde(alias = "nom")]
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    #[validate(custom(function = "not_blank", message = "Name must not be blank"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(range(min = 0, max = 150, message = "Age must be between 0 and 150"))]
    pub age: i32,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

impl From<UserPayload> for UserFields {
    fn from(p: UserPayload) -> Self {
        UserFields {
            name: p.name,
            email: p.email,
            age: p.age,
        }
    }
}

/// JSON representation of a stored user.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub age: i32,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        UserResponse {
            id: u.id,
            name: u.name,
            email: u.email,
            age: u.age,
        }
    }
}
