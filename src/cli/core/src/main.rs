/* src/cli/core/src/main.rs */

mod check;
mod config;
mod partials;
mod render;
mod serve;
mod ui;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use config::{VellumConfig, config_base_dir, find_vellum_config, load_vellum_config};

#[derive(Parser)]
#[command(name = "vellum", about = "Vellum admin dashboard page shell", version)]
struct Cli {
  /// Path to vellum.toml (auto-detected if omitted)
  #[arg(short, long, global = true)]
  config: Option<PathBuf>,
  /// Increase log verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = clap::ArgAction::Count, global = true)]
  verbose: u8,
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Render one page to stdout or a file
  Render {
    /// Locale for the <html lang> attribute (underscores allowed, e.g. en_US)
    #[arg(short, long)]
    locale: Option<String>,
    /// Content fragment files, rendered in the order given
    #[arg(long = "content", value_name = "FILE")]
    content: Vec<PathBuf>,
    /// Output file path (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,
  },
  /// Verify that every partial and page content file exists
  Check,
  /// Serve configured pages over HTTP
  Serve {
    /// Port to listen on (overrides PORT and [server].port)
    #[arg(short, long)]
    port: Option<u16>,
  },
}

fn init_tracing(verbose: u8) {
  let level = match verbose {
    0 => "warn",
    1 => "info",
    2 => "debug",
    _ => "trace",
  };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
  tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

/// Resolve config path (explicit or auto-detected) and parse it
fn resolve_config(explicit: Option<PathBuf>) -> Result<(PathBuf, VellumConfig)> {
  let path = match explicit {
    Some(p) => p,
    None => {
      let cwd = std::env::current_dir().context("failed to get cwd")?;
      find_vellum_config(&cwd)?
    }
  };
  let config = load_vellum_config(&path)?;
  Ok((path, config))
}

#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();
  init_tracing(cli.verbose);

  let (path, config) = resolve_config(cli.config)?;
  let base_dir = config_base_dir(&path);

  match cli.command {
    Command::Render { locale, content, out } => {
      render::run_render(&config, &base_dir, locale.as_deref(), &content, out.as_deref())?;
    }
    Command::Check => {
      check::run_check(&config, &base_dir)?;
    }
    Command::Serve { port } => {
      let env_port = std::env::var("PORT").ok();
      let port = serve::resolve_port(port, env_port.as_deref(), &config);
      serve::run_serve(&config, &base_dir, port).await?;
    }
  }

  Ok(())
}
