//! `asset-fixers` - normalise logos and metadata across an asset repository.

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use asset_fixers::{
  ChainSelection, FixerConfig, RepoLayout, Service, TracingNotifier, discover_chains, run_fixers,
};

/// Apply every fixer to the chains and assets of a repository.
#[derive(Debug, Parser)]
#[command(name = "asset-fixers", version, about, long_about = None)]
struct Cli {
  /// Repository root containing the blockchains directory.
  #[arg(long, default_value = ".")]
  repo: PathBuf,

  /// Only fix these chain handles (repeatable).
  #[arg(long = "chain")]
  chains: Vec<String>,

  /// Skip these chain handles (repeatable).
  #[arg(long = "skip-chain")]
  skip_chains: Vec<String>,

  /// Configuration file; defaults to `asset-fixers.config.json` in the repository root.
  #[arg(long)]
  config: Option<PathBuf>,

  /// Increase log verbosity (-v info, -vv debug).
  #[arg(short, long, action = clap::ArgAction::Count)]
  verbose: u8,
}

impl Cli {
  fn load_config(&self) -> Result<FixerConfig> {
    match &self.config {
      Some(path) => FixerConfig::from_path(path)
        .ok_or_else(|| anyhow!("failed to load config {}", path.display())),
      None => Ok(FixerConfig::discover(&self.repo)),
    }
  }

  fn default_filter(&self) -> &'static str {
    match self.verbose {
      0 => "warn",
      1 => "info",
      _ => "debug",
    }
  }
}

fn main() -> Result<()> {
  let cli = Cli::parse();

  tracing_subscriber::registry()
    .with(tracing_subscriber::fmt::layer().with_target(false))
    .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.default_filter())))
    .init();

  let config = cli.load_config()?;
  let layout = RepoLayout::new(&cli.repo, &config);
  let selection = ChainSelection::from_lists(cli.chains.clone(), cli.skip_chains.clone());

  let chains = discover_chains(&layout, &selection)
    .with_context(|| format!("failed to scan repository {}", cli.repo.display()))?;
  let asset_count: usize = chains.iter().map(|chain| chain.assets.len()).sum();
  info!(chains = chains.len(), assets = asset_count, "Discovered repository");

  let service = Service::new(layout, config, TracingNotifier);
  let summary = run_fixers(&service, chains);

  info!(
    rewritten = summary.rewritten,
    unchanged = summary.unchanged,
    failed = summary.failures.len(),
    "Finished fixing"
  );

  if !summary.failures.is_empty() {
    for failure in &summary.failures {
      eprintln!("{} {}: {}", failure.fixer, failure.path.display(), failure.error);
    }
    bail!("{} fixer call(s) failed", summary.failures.len());
  }

  Ok(())
}
