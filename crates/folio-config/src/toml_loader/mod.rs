//! TOML config loading.

mod loader;
mod paths;
mod template;

pub use loader::{load_default, load_from_path};
pub use paths::{create_default_config, default_config_path};
pub(crate) use template::default_config_toml;

#[cfg(test)]
mod tests;
