//! SeaORM row types, kept apart from the domain entities they map to.

pub mod user;
