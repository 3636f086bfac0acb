/* src/cli/core/src/check.rs */

use std::path::Path;

use anyhow::{Result, bail};
use vellum_engine::Region;

use crate::config::VellumConfig;
use crate::ui;

/// Problems found while checking partials and page content files.
pub(crate) fn collect_problems(config: &VellumConfig, base_dir: &Path) -> Vec<String> {
  let mut problems = Vec::new();

  for region in Region::ALL {
    let path = config.partials.path(base_dir, region);
    // Read, not stat: the renderer will read it the same way.
    match std::fs::read_to_string(&path) {
      Ok(_) => ui::ok(&format!("{region}: {}", path.display())),
      Err(e) => {
        ui::fail(&format!("{region}: {} not readable: {e}", path.display()));
        problems
          .push(format!("partial for region '{region}' not readable at {}: {e}", path.display()));
      }
    }
  }

  for page in &config.pages {
    for file in &page.content {
      let path = base_dir.join(file);
      if let Err(e) = std::fs::read_to_string(&path) {
        ui::fail(&format!("{}: {} not readable: {e}", page.route, path.display()));
        problems.push(format!(
          "content for page '{}' not readable at {}: {e}",
          page.route,
          path.display()
        ));
      }
    }
  }

  problems
}

pub(crate) fn run_check(config: &VellumConfig, base_dir: &Path) -> Result<()> {
  ui::banner("check");
  let problems = collect_problems(config, base_dir);
  ui::blank();
  if !problems.is_empty() {
    bail!("{} problem(s) found:\n  {}", problems.len(), problems.join("\n  "));
  }
  ui::arrow(&format!("{} regions and {} pages ready", Region::ALL.len(), config.pages.len()));
  Ok(())
}
