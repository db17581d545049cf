//! CLI command implementations.

pub(crate) mod browse;
pub(crate) mod categories;
pub(crate) mod layout;
pub(crate) mod resolve;

use std::path::PathBuf;

use clap::Args;
use sf_catalog::{CategoryTree, load_snapshot};
use sf_config::{CliSettings, Config};

use crate::error::CliError;

pub(crate) use browse::BrowseArgs;
pub(crate) use categories::CategoriesArgs;
pub(crate) use layout::LayoutArgs;
pub(crate) use resolve::ResolveArgs;

/// Arguments shared by every command.
#[derive(Args)]
pub(crate) struct GlobalArgs {
    /// Path to configuration file (default: auto-discover storefront.toml).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Category snapshot file, JSON or YAML (overrides config).
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Enable verbose output (show catalog anomalies and transitions).
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl GlobalArgs {
    /// Load configuration with the global overrides applied.
    fn load_config(&self, overflow_control_width: Option<f64>) -> Result<Config, CliError> {
        let cli_settings = CliSettings {
            catalog: self.catalog.clone(),
            overflow_control_width,
        };
        Ok(Config::load(self.config.as_deref(), Some(&cli_settings))?)
    }

    /// Load configuration and the category snapshot it points to.
    fn load_catalog(&self) -> Result<(Config, CategoryTree), CliError> {
        let config = self.load_config(None)?;
        let snapshot = &config.catalog_resolved.snapshot;
        tracing::info!(path = %snapshot.display(), "Loading category snapshot");

        let tree = load_snapshot(snapshot)?;
        if tree.is_truncated() {
            tracing::warn!(
                count = tree.truncated_depth_count(),
                "Snapshot nests categories deeper than two levels"
            );
        }
        Ok((config, tree))
    }
}
