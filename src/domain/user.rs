//! The user entity and the shapes it takes at the boundaries.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// User domain entity.
///
/// The identifier is assigned by the persistence layer on insert and is
/// immutable afterwards. The password travels in plaintext end to end;
/// no hashing stage exists anywhere in this service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password: String,
    pub name: String,
}

/// A user that has not been persisted yet, so no identifier exists.
///
/// Insertion input for the repository, which assigns the identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub name: String,
}

impl NewUser {
    pub fn new(email: String, password: String, name: String) -> Self {
        Self {
            email,
            password,
            name,
        }
    }
}

/// User response returned to clients.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserResponse {
    /// Unique user identifier
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,
    /// User email address
    #[schema(example = "user@example.com")]
    pub email: String,
    /// User password (plaintext; this service performs no hashing)
    #[schema(example = "123456")]
    pub password: String,
    /// User display name
    #[schema(example = "John Doe")]
    pub name: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            password: user.password,
            name: user.name,
        }
    }
}
