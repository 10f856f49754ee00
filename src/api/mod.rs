//! HTTP layer: handlers, extractors, routes, and shared state.

pub mod extractors;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;

pub use openapi::ApiDoc;
pub use routes::create_router;
pub use state::AppState;
