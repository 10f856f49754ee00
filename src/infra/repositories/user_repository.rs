//! Storage access for user records.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::domain::{NewUser, User};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Persistence gateway consumed by the service layer.
///
/// Insertion and replacement are separate operations: `insert` takes a
/// [`NewUser`] and assigns the identifier, `update` takes a full
/// [`User`] and replaces the matching row.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All users, in no particular order
    async fn find_all(&self) -> AppResult<Vec<User>>;

    /// Find user by primary key
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Find user by email address
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Raw credential lookup: exact email and plaintext password match.
    /// No session or token machinery sits on top of this query.
    async fn find_by_credentials(&self, email: &str, password: &str)
        -> AppResult<Option<User>>;

    /// Insert a new user, assigning its identifier
    async fn insert(&self, user: NewUser) -> AppResult<User>;

    /// Full replace of the row matching `user.id`
    async fn update(&self, user: &User) -> AppResult<User>;

    /// Delete by primary key; an absent row is not an error
    async fn delete_by_id(&self, id: Uuid) -> AppResult<()>;
}

/// [`UserRepository`] over a live SeaORM connection.
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_all(&self) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(User::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn find_by_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> AppResult<Option<User>> {
        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .filter(user::Column::Password.eq(password))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn insert(&self, user: NewUser) -> AppResult<User> {
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(user.email),
            password: Set(user.password),
            name: Set(user.name),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(User::from(model))
    }

    async fn update(&self, user: &User) -> AppResult<User> {
        let active_model = ActiveModel {
            id: Set(user.id),
            email: Set(user.email.clone()),
            password: Set(user.password.clone()),
            name: Set(user.name.clone()),
        };

        let model = active_model.update(&self.db).await.map_err(AppError::from)?;
        Ok(User::from(model))
    }

    async fn delete_by_id(&self, id: Uuid) -> AppResult<()> {
        // rows_affected is not inspected: deleting an absent id is a
        // no-op here, and 404 translation happens in the handler.
        UserEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(())
    }
}
