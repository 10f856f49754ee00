//! Infrastructure: the database handle and the repository over it.

pub mod db;
pub mod repositories;

pub use db::{Database, Migrator};
pub use repositories::{UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockUserRepository;
