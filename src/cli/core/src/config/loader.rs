/* src/cli/core/src/config/loader.rs */

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use super::VellumConfig;

pub const CONFIG_FILE: &str = "vellum.toml";

/// Walk upward from `start` to find `vellum.toml`, like Cargo.toml discovery
pub fn find_vellum_config(start: &Path) -> Result<PathBuf> {
  let mut dir =
    start.canonicalize().with_context(|| format!("failed to canonicalize {}", start.display()))?;
  loop {
    let candidate = dir.join(CONFIG_FILE);
    if candidate.is_file() {
      return Ok(candidate);
    }
    if !dir.pop() {
      bail!("{CONFIG_FILE} not found (searched upward from {})", start.display());
    }
  }
}

pub fn parse_vellum_config(content: &str) -> Result<VellumConfig> {
  let config: VellumConfig = toml::from_str(content)?;
  config.validate()?;
  Ok(config)
}

pub fn load_vellum_config(path: &Path) -> Result<VellumConfig> {
  let content =
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
  let config =
    parse_vellum_config(&content).with_context(|| format!("failed to load {}", path.display()))?;
  tracing::debug!(path = %path.display(), pages = config.pages.len(), "loaded config");
  Ok(config)
}

/// Directory that relative paths in the config are resolved against.
pub fn config_base_dir(path: &Path) -> PathBuf {
  match path.parent() {
    Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
    _ => PathBuf::from("."),
  }
}
