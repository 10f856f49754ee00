//! Settings from the environment, plus their fallback defaults.

mod constants;
mod settings;

pub use constants::*;
pub use settings::Config;
