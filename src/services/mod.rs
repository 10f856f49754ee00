//! Service layer: the business rules between handlers and storage.

mod user_service;

pub use user_service::{UserManager, UserService};
