//! user-api: a minimal user-management backend.
//!
//! CRUD over a single `user` entity, served by Axum and persisted
//! through SeaORM. The one business rule (an email may be registered
//! only once) lives in [`services::user_service`]; handlers and the
//! repository are translation layers on either side of it.
//!
//! Run it with `cargo run -- serve`; manage the schema with
//! `cargo run -- migrate up` (also `down`, `status`, `fresh`).

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

pub use api::AppState;
pub use config::Config;
pub use domain::{NewUser, User};
pub use errors::{AppError, AppResult};
