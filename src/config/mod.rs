//! Configuration management for Keygate

pub mod loader;
mod schema;

pub use loader::{default_config_content, load_config, load_config_from_path, write_default_config};
pub use schema::*;
