//! Shared application state handed to every handler.

use std::sync::Arc;

use crate::infra::{Database, UserStore};
use crate::services::{UserManager, UserService};

/// Handler-visible state: the user service behind its trait, plus the
/// database handle for health reporting.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserService>,
    pub database: Arc<Database>,
}

impl AppState {
    /// Wire the real repository and service on top of a connected
    /// database. The production construction path.
    pub fn from_database(database: Arc<Database>) -> Self {
        let repo = Arc::new(UserStore::new(database.connection().clone()));

        Self {
            user_service: Arc::new(UserManager::new(repo)),
            database,
        }
    }

    /// Accept a caller-built service, so tests can drop in an
    /// in-memory implementation.
    pub fn new(user_service: Arc<dyn UserService>, database: Arc<Database>) -> Self {
        Self {
            user_service,
            database,
        }
    }
}
