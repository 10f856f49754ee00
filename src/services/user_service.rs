//! User service - business rules for user accounts.
//!
//! SOLID (SRP): user use cases only. The single non-trivial rule in
//! this system lives here: registration is first-come-first-served on
//! the email address.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{NewUser, User};
use crate::errors::{AppError, AppResult};
use crate::infra::UserRepository;

/// Service operations consumed by the HTTP layer.
#[async_trait]
pub trait UserService: Send + Sync {
    /// List all users, in no particular order
    async fn find_all_users(&self) -> AppResult<Vec<User>>;

    /// Find user by ID; absence is a valid outcome, not an error
    async fn find_user_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Register a new user, enforcing email uniqueness
    async fn create_user(&self, user: NewUser) -> AppResult<User>;

    /// Replace all fields of an existing user.
    ///
    /// Performs no existence check; the caller is responsible for that
    /// and for pinning the identifier before delegating here.
    async fn update_user(&self, user: User) -> AppResult<User>;

    /// Delete user by ID; deleting an absent ID is a no-op
    async fn delete_user_by_id(&self, id: Uuid) -> AppResult<()>;
}

/// [`UserService`] over an injected repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn find_all_users(&self) -> AppResult<Vec<User>> {
        self.repo.find_all().await
    }

    async fn find_user_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        self.repo.find_by_id(id).await
    }

    async fn create_user(&self, user: NewUser) -> AppResult<User> {
        // Lookup-then-insert is not atomic against a concurrent create
        // for the same email; the schema carries no unique index.
        if let Some(existing) = self.repo.find_by_email(&user.email).await? {
            return Err(AppError::DuplicateEmail(existing.email));
        }

        self.repo.insert(user).await
    }

    async fn update_user(&self, user: User) -> AppResult<User> {
        self.repo.update(&user).await
    }

    async fn delete_user_by_id(&self, id: Uuid) -> AppResult<()> {
        self.repo.delete_by_id(id).await
    }
}
