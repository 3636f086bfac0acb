/* src/cli/core/src/config/mod.rs */

mod loader;
mod types;

#[cfg(test)]
mod tests;

pub use loader::{config_base_dir, find_vellum_config, load_vellum_config, parse_vellum_config};
pub use types::VellumConfig;
