//! Persistence gateway: the storage trait and its SeaORM-backed
//! implementation.

pub(crate) mod entities;
mod user_repository;

pub use user_repository::{UserRepository, UserStore};

// The generated mock is part of the testing surface, for unit and
// integration tests alike.
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
